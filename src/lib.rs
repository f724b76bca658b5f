//! # Bench Log Parser
//!
//! 解析字符串检索基准测试（FM-Index、Suffix-Array、Naive Search 等）输出的日志，
//! 提取每次运行的结构化性能记录，并导出为 CSV 供下游图表脚本使用。
//!
//! ## 功能特性
//!
//! - **单位归一化**: 耗时统一为毫秒，峰值内存统一为 KB
//! - **流式解析**: 逐行读取，不需要一次性加载整个文件
//! - **可配置规则**: 行前缀、字段和归一化方式由 `ParserConfig` 描述
//! - **明确的错误**: 无法识别的单位立即报错，不会静默产生错误数据
//!
//! ## 快速开始
//!
//! ```rust
//! use bench_log_parser::parse_runs_from_string;
//!
//! let log = r#">>>>> run 1
//! > Method: FM-Index
//! > Total Count: 42
//! > Query File: "queries_10.txt"
//! > Query Limit: "100"
//! > Search duration: 5000000 ns
//! Maximum resident set size (kbytes): 2048
//! "#;
//!
//! let runs = parse_runs_from_string(log).unwrap();
//! assert_eq!(runs[0].hits, Some(42));
//! assert_eq!(runs[0].query_time_ms, Some(5000.0));
//! ```
//!
//! ### 从文件流式读取
//!
//! ```rust,no_run
//! use bench_log_parser::iter_runs_from_file;
//!
//! for run in iter_runs_from_file("experiment_results.txt")? {
//!     let run = run?;
//!     println!("{:?} {:?} ms", run.method, run.query_time_ms);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## 日志格式
//!
//! ```text
//! >>>>>
//! > Method: FM-Index-PEX
//! > Query File: "data/illumina_reads_40.fasta.gz"
//! > Query Limit: 1000
//! > Excepted Errors: 2
//! > Total Count: 871
//! > Search duration: 5000000 ns
//! <<<<
//!     Maximum resident set size (kbytes): 2048
//! ```

pub mod error;
pub mod experiment;
pub mod export;
pub mod parser;
pub mod parser_config;
pub mod tools;

pub use error::{ExportError, ParseError};
pub use experiment::{ExperimentRecord, Field, FieldValue};
pub use export::{CsvOptions, csv_header, write_csv, write_csv_file};
pub use parser::{
    LineKind, RunParser, iter_runs_from_file, parse_duration_ms, parse_line, parse_mem_kbytes,
    parse_runs, parse_runs_from_file, parse_runs_from_file_with_config, parse_runs_from_string,
    parse_runs_with_config, strip_wrapping_quotes,
};
pub use parser_config::{FieldRule, MatchMode, ParserConfig, ValueKind};
