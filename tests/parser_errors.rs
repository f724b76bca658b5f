use bench_log_parser::{ParseError, RunParser, parse_runs_from_file, parse_runs_from_string};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn unknown_memory_unit_is_fatal() {
    let input = ">>>>>\n> Method: FM-Index\nMaximum resident set size (xbytes): 500\n";
    let err = parse_runs_from_string(input).unwrap_err();
    assert_eq!(
        err,
        ParseError::UnknownMemUnit {
            unit: "(xbytes)".to_string(),
            line: 3
        }
    );
    assert_eq!(err.to_string(), "unknown memory unit '(xbytes)' at line 3");
}

#[test]
fn unknown_time_unit_is_fatal() {
    let input = ">>>>>\n> Method: FM-Index\n> Search duration: 5 us\n";
    let err = parse_runs_from_string(input).unwrap_err();
    assert!(matches!(err, ParseError::UnknownTimeUnit { ref unit, line: 3 } if unit == "us"));
}

#[test]
fn invalid_count_is_fatal() {
    let input = ">>>>>\n> Total Count: many\n";
    let err = parse_runs_from_string(input).unwrap_err();
    assert_eq!(
        err,
        ParseError::InvalidNumber {
            field: "hits",
            value: "many".to_string(),
            line: 2
        }
    );
}

#[test]
fn iterator_yields_records_before_error_then_stops() {
    let mut file = NamedTempFile::new().unwrap();
    let good = ">>>>>\n> Method: A\n> Total Count: 1\n";
    let bad = ">>>>>\n> Method: B\nMaximum resident set size (tbytes): 1\n";
    let after = ">>>>>\n> Method: C\n";
    write!(file, "{}{}{}", good, bad, after).unwrap();

    let reader = std::fs::File::open(file.path()).unwrap();
    let results: Vec<_> = RunParser::new(reader).collect();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].as_ref().unwrap().method.as_deref(), Some("A"));
    assert!(matches!(results[1], Err(ParseError::UnknownMemUnit { line: 6, .. })));

    // 批量接口直接返回第一个错误
    assert!(parse_runs_from_file(file.path()).is_err());
}

#[test]
fn invalid_utf8_is_reported_as_io_error() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b">>>>>\n> Method: \xff\xfe\n").unwrap();

    let err = parse_runs_from_file(file.path()).unwrap_err();
    assert!(matches!(err, ParseError::Io(_)));
}
