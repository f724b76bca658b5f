use crate::experiment::ExperimentRecord;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

const CSV_EXTENSION: &str = "csv";

/// 输入日志对应的 CSV 路径：同目录，扩展名替换为 `.csv`
///
/// ```
/// use bench_log_parser::tools::csv_path_for;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(
///     csv_path_for(Path::new("results/experiment_results.txt")),
///     PathBuf::from("results/experiment_results.csv")
/// );
/// ```
pub fn csv_path_for(input: &Path) -> PathBuf {
    input.with_extension(CSV_EXTENSION)
}

/// 为每个出现过的算法名分配编号
///
/// 编号是算法名按字典序排序后的下标，与下游图表脚本的 `method_id` 列一致。
pub fn method_ids(records: &[ExperimentRecord]) -> BTreeMap<&str, usize> {
    let mut ids: BTreeMap<&str, usize> = records
        .iter()
        .filter_map(|r| r.method.as_deref())
        .map(|m| (m, 0))
        .collect();
    for (index, id) in ids.values_mut().enumerate() {
        *id = index;
    }
    ids
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::experiment::{Field, FieldValue};

    fn run(method: &str) -> ExperimentRecord {
        let mut record = ExperimentRecord::new();
        record
            .set(Field::Method, FieldValue::Text(method.to_string()))
            .unwrap();
        record
    }

    #[test]
    fn csv_path_replaces_extension() {
        assert_eq!(csv_path_for(Path::new("log")), PathBuf::from("log.csv"));
        assert_eq!(csv_path_for(Path::new("a/b.out.txt")), PathBuf::from("a/b.out.csv"));
    }

    #[test]
    fn method_ids_are_sorted_indices() {
        let records = vec![
            run("Suffix-Array"),
            run("FM-Index"),
            ExperimentRecord::default(),
            run("Naive Search"),
            run("FM-Index"),
        ];
        let ids = method_ids(&records);
        assert_eq!(ids.len(), 3);
        assert_eq!(ids["FM-Index"], 0);
        assert_eq!(ids["Naive Search"], 1);
        assert_eq!(ids["Suffix-Array"], 2);
    }

    #[test]
    fn method_ids_empty() {
        assert!(method_ids(&[]).is_empty());
    }
}
