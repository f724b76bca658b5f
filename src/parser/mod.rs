//! Parser 模块 - 解析字符串检索基准测试日志
//!
//! 此模块提供了完整的日志解析功能,包括:
//! - 单行分类和字段归一化
//! - 流式读取和记录组装
//! - 便捷 API 函数

mod api;
mod constants;
pub(crate) mod parse_functions;
pub mod run_parser;

pub use api::{
    iter_runs_from_file, parse_runs, parse_runs_from_file, parse_runs_from_file_with_config,
    parse_runs_from_string, parse_runs_with_config,
};
pub use parse_functions::{
    LineKind, parse_duration_ms, parse_line, parse_mem_kbytes, strip_wrapping_quotes,
};
pub use run_parser::RunParser;
