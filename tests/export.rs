use bench_log_parser::tools::csv_path_for;
use bench_log_parser::{CsvOptions, ExportError, parse_runs_from_file, write_csv_file};
use std::fs;
use tempfile::TempDir;

const LOG: &str = r#">>>>>
> Method: FM-Index
> Query File: "data/queries_10.txt"
> Query Limit: "100"
> Total Count: 42
> Search duration: 5000000 ns
Maximum resident set size (kbytes): 2048
>>>>>
> Method: Naive Search
> Query File: "data/queries_10.txt"
> Query Limit: "100"
> Total Count: 42
> Search duration: 250 ms
Maximum resident set size (bytes): 512
"#;

#[test]
fn writes_csv_next_to_log() {
    let temp_dir = TempDir::new().unwrap();
    let log_path = temp_dir.path().join("experiment_results_assignment1.txt");
    fs::write(&log_path, LOG).unwrap();

    let runs = parse_runs_from_file(&log_path).unwrap();
    let csv_path = csv_path_for(&log_path);
    write_csv_file(&csv_path, &runs, CsvOptions::default()).unwrap();

    assert_eq!(
        csv_path,
        temp_dir.path().join("experiment_results_assignment1.csv")
    );
    let content = fs::read_to_string(&csv_path).unwrap();
    assert_eq!(
        content,
        "method,query_file,query_limit,hits,query_time_ms,mem_peak_kbytes\n\
         FM-Index,data/queries_10.txt,100,42,5000.0,2048.0\n\
         Naive Search,data/queries_10.txt,100,42,250.0,0.5\n"
    );
}

#[test]
fn empty_log_does_not_create_csv() {
    let temp_dir = TempDir::new().unwrap();
    let log_path = temp_dir.path().join("empty.txt");
    fs::write(&log_path, "no runs here\n").unwrap();

    let runs = parse_runs_from_file(&log_path).unwrap();
    let csv_path = csv_path_for(&log_path);
    let err = write_csv_file(&csv_path, &runs, CsvOptions::default()).unwrap_err();

    assert_eq!(err, ExportError::NoRecords);
    assert!(!csv_path.exists());
}

#[test]
fn unwritable_output_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let log_path = temp_dir.path().join("run.txt");
    fs::write(&log_path, LOG).unwrap();
    let runs = parse_runs_from_file(&log_path).unwrap();

    let csv_path = temp_dir.path().join("missing_dir").join("run.csv");
    let err = write_csv_file(&csv_path, &runs, CsvOptions::default()).unwrap_err();
    assert!(matches!(err, ExportError::Io(_)));
}

#[test]
fn derived_columns_in_file() {
    let temp_dir = TempDir::new().unwrap();
    let log_path = temp_dir.path().join("run.txt");
    fs::write(&log_path, LOG).unwrap();
    let runs = parse_runs_from_file(&log_path).unwrap();

    let csv_path = csv_path_for(&log_path);
    write_csv_file(&csv_path, &runs, CsvOptions { with_derived: true }).unwrap();

    let content = fs::read_to_string(&csv_path).unwrap();
    let mut lines = content.lines();
    assert!(lines.next().unwrap().ends_with(",mem_peak_mbytes,query_length,method_id"));
    assert!(lines.next().unwrap().ends_with(",2048.0,2.0,10,0"));
    assert!(lines.next().unwrap().ends_with(",0.5,0.00048828125,10,1"));
}
