//! 便捷 API 函数
//!
//! 提供了一组方便使用的高层 API，用于快速解析基准测试日志。

use crate::error::ParseError;
use crate::experiment::ExperimentRecord;
use crate::parser::run_parser::RunParser;
use crate::parser_config::ParserConfig;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// 从任意 Reader 解析全部运行记录
///
/// 遇到第一个错误即停止并返回该错误。
pub fn parse_runs<R: Read>(reader: R) -> Result<Vec<ExperimentRecord>, ParseError> {
    RunParser::new(reader).collect()
}

/// 使用自定义配置从 Reader 解析全部运行记录
pub fn parse_runs_with_config<R: Read>(
    reader: R,
    config: ParserConfig,
) -> Result<Vec<ExperimentRecord>, ParseError> {
    RunParser::with_config(reader, config).collect()
}

/// 从字符串解析全部运行记录
///
/// # 示例
///
/// ```
/// use bench_log_parser::parse_runs_from_string;
///
/// let log = r#">>>>> run 1
/// > Method: FM-Index
/// > Total Count: 42
/// > Query File: "queries_10.txt"
/// > Query Limit: "100"
/// > Search duration: 5000000 ns
/// Maximum resident set size (kbytes): 2048
/// "#;
///
/// let runs = parse_runs_from_string(log).unwrap();
/// assert_eq!(runs.len(), 1);
/// assert_eq!(runs[0].method.as_deref(), Some("FM-Index"));
/// assert_eq!(runs[0].query_time_ms, Some(5000.0));
/// assert_eq!(runs[0].mem_peak_kbytes, Some(2048.0));
/// ```
pub fn parse_runs_from_string(content: &str) -> Result<Vec<ExperimentRecord>, ParseError> {
    parse_runs(content.as_bytes())
}

/// 从文件读取并返回运行记录迭代器（流式处理）
///
/// # 参数
///
/// * `path` - 日志文件路径
///
/// # 返回
///
/// * `Ok(RunParser)` - 迭代项是 `Result<ExperimentRecord, ParseError>`
/// * `Err(ParseError)` - 文件打开错误
///
/// # 示例
///
/// ```no_run
/// use bench_log_parser::iter_runs_from_file;
///
/// for run in iter_runs_from_file("experiment_results.txt")? {
///     let run = run?;
///     println!("{:?}: {:?} ms", run.method, run.query_time_ms);
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn iter_runs_from_file<P>(path: P) -> Result<RunParser<File>, ParseError>
where
    P: AsRef<Path>,
{
    Ok(RunParser::new(open(path.as_ref())?))
}

/// 从文件读取全部运行记录
pub fn parse_runs_from_file<P>(path: P) -> Result<Vec<ExperimentRecord>, ParseError>
where
    P: AsRef<Path>,
{
    iter_runs_from_file(path)?.collect()
}

/// 使用自定义配置从文件读取全部运行记录
pub fn parse_runs_from_file_with_config<P>(
    path: P,
    config: ParserConfig,
) -> Result<Vec<ExperimentRecord>, ParseError>
where
    P: AsRef<Path>,
{
    parse_runs_with_config(open(path.as_ref())?, config)
}

fn open(path: &Path) -> Result<File, ParseError> {
    File::open(path).map_err(|e| ParseError::FileNotFound(format!("{}: {}", path.display(), e)))
}
