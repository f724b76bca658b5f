//! 错误类型定义
//!
//! 定义了日志解析与 CSV 导出过程中可能出现的所有错误类型。

use thiserror::Error;

/// 解析错误类型
///
/// 单位无法识别、数值无法解析等错误都是致命的：格式已经变化，
/// 继续解析只会产生错误的数据。
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// 文件未找到或无法访问
    #[error("file not found or inaccessible: {0}")]
    FileNotFound(String),

    /// 读取过程中的 I/O 错误
    #[error("I/O error: {0}")]
    Io(String),

    /// 无法识别的时间单位
    #[error("unknown time unit '{unit}' at line {line}")]
    UnknownTimeUnit {
        /// 原始单位字符串
        unit: String,
        /// 行号（从 1 开始）
        line: usize,
    },

    /// 无法识别的内存单位
    #[error("unknown memory unit '{unit}' at line {line}")]
    UnknownMemUnit {
        /// 原始单位字符串，如 "(xbytes)"
        unit: String,
        /// 行号（从 1 开始）
        line: usize,
    },

    /// 数值解析失败
    #[error("failed to parse {field} as number: '{value}' at line {line}")]
    InvalidNumber {
        /// 字段名
        field: &'static str,
        /// 字段值
        value: String,
        /// 行号（从 1 开始）
        line: usize,
    },

    /// 规则产出的值与目标字段类型不符（配置错误）
    #[error("rule for field '{field}' produced a value of another type at line {line}")]
    FieldTypeMismatch {
        /// 字段名
        field: &'static str,
        /// 行号（从 1 开始）
        line: usize,
    },

    /// 严格模式下记录缺少字段
    #[error("incomplete record ending at line {line}: missing {}", .missing.join(", "))]
    IncompleteRecord {
        /// 缺失的字段名
        missing: Vec<&'static str>,
        /// 记录结束的行号
        line: usize,
    },
}

impl ParseError {
    /// 附加行号
    ///
    /// 字段归一化函数不知道行号，由调用方在出错后补上。
    pub(crate) fn at_line(self, line: usize) -> Self {
        match self {
            ParseError::UnknownTimeUnit { unit, .. } => ParseError::UnknownTimeUnit { unit, line },
            ParseError::UnknownMemUnit { unit, .. } => ParseError::UnknownMemUnit { unit, line },
            ParseError::InvalidNumber { field, value, .. } => {
                ParseError::InvalidNumber { field, value, line }
            }
            other => other,
        }
    }
}

/// CSV 导出错误类型
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExportError {
    /// 没有任何记录，无法确定表头
    #[error("no records to export: cannot derive CSV header")]
    NoRecords,

    /// 记录中出现了表头里没有的字段
    #[error("record {row} has field '{field}' which is not in the CSV header")]
    UnexpectedField {
        /// 字段名
        field: &'static str,
        /// 记录序号（从 0 开始）
        row: usize,
    },

    /// 输出文件 I/O 错误
    #[error("I/O error: {0}")]
    Io(String),

    /// CSV 写入错误
    #[error("CSV write error: {0}")]
    Csv(String),
}

impl From<csv::Error> for ExportError {
    fn from(e: csv::Error) -> Self {
        ExportError::Csv(e.to_string())
    }
}

impl From<std::io::Error> for ExportError {
    fn from(e: std::io::Error) -> Self {
        ExportError::Io(e.to_string())
    }
}
