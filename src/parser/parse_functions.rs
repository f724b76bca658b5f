//! 核心解析函数
//!
//! 单行分类以及各类字段值的归一化（单位换算、去引号、整数解析）。

use crate::error::ParseError;
use crate::experiment::{Field, FieldValue};
use crate::parser::constants::*;
use crate::parser_config::{ParserConfig, ValueKind};
use memchr::memchr;
use std::path::PathBuf;

/// 单行的分类结果
#[derive(Debug, Clone, PartialEq)]
pub enum LineKind {
    /// 记录起始标记行
    Marker,
    /// 可识别的字段行
    Field(Field, FieldValue),
    /// 无法识别的行，忽略
    Ignored,
}

/// 对单行进行分类并解析字段值
///
/// 返回的错误不含行号，由调用方补上。
///
/// # 示例
///
/// ```
/// use bench_log_parser::{parse_line, LineKind, ParserConfig};
/// use bench_log_parser::experiment::{Field, FieldValue};
///
/// let config = ParserConfig::default();
/// let kind = parse_line(&config, "> Total Count: 42").unwrap();
/// assert_eq!(kind, LineKind::Field(Field::Hits, FieldValue::Count(42)));
/// assert_eq!(parse_line(&config, ">>>>> run 1").unwrap(), LineKind::Marker);
/// ```
pub fn parse_line(config: &ParserConfig, line: &str) -> Result<LineKind, ParseError> {
    if config.is_marker(line) {
        return Ok(LineKind::Marker);
    }

    match config.match_rule(line) {
        Some((rule, rest)) => {
            let value = parse_value(rule.value_kind, rule.field, rest)?;
            Ok(LineKind::Field(rule.field, value))
        }
        None => Ok(LineKind::Ignored),
    }
}

/// 按值类型归一化前缀之后的剩余部分
pub(crate) fn parse_value(
    kind: ValueKind,
    field: Field,
    rest: &str,
) -> Result<FieldValue, ParseError> {
    let value = match kind {
        ValueKind::Text => FieldValue::Text(rest.trim().to_string()),
        ValueKind::QuotedPath => {
            FieldValue::Path(PathBuf::from(strip_wrapping_quotes(rest.trim())))
        }
        ValueKind::Count => FieldValue::Count(parse_count(field, rest)?),
        ValueKind::QuotedCount => {
            FieldValue::Count(parse_count(field, strip_wrapping_quotes(rest.trim()))?)
        }
        ValueKind::Duration => FieldValue::Float(parse_duration_ms(rest)?),
        ValueKind::Memory => FieldValue::Float(parse_mem_kbytes(rest)?),
    };
    Ok(value)
}

/// 去掉包裹的双引号
///
/// ```
/// use bench_log_parser::strip_wrapping_quotes;
///
/// assert_eq!(strip_wrapping_quotes("\"data/queries_10.txt\""), "data/queries_10.txt");
/// assert_eq!(strip_wrapping_quotes("plain"), "plain");
/// ```
#[inline]
pub fn strip_wrapping_quotes(s: &str) -> &str {
    s.trim_start_matches(QUOTE_CHAR).trim_end_matches(QUOTE_CHAR)
}

/// 解析非负整数
#[inline]
pub(crate) fn parse_count(field: Field, s: &str) -> Result<u64, ParseError> {
    let trimmed = s.trim();
    trimmed.parse::<u64>().map_err(|_| ParseError::InvalidNumber {
        field: field.name(),
        value: trimmed.to_string(),
        line: 0,
    })
}

/// 解析非负有限浮点数
#[inline]
fn parse_magnitude(field: Field, s: &str) -> Result<f64, ParseError> {
    let trimmed = s.trim();
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
        _ => Err(ParseError::InvalidNumber {
            field: field.name(),
            value: trimmed.to_string(),
            line: 0,
        }),
    }
}

/// 解析耗时字符串并换算为毫秒
///
/// 格式为 `<数值> <单位>`，单位只支持 `ns` 和 `ms`，其他单位直接报错。
///
/// ```
/// use bench_log_parser::parse_duration_ms;
///
/// assert_eq!(parse_duration_ms("5000000 ns").unwrap(), 5000.0);
/// assert_eq!(parse_duration_ms("12.5 ms").unwrap(), 12.5);
/// assert!(parse_duration_ms("3 s").is_err());
/// ```
pub fn parse_duration_ms(s: &str) -> Result<f64, ParseError> {
    let s = s.trim();
    let (value, unit) = s.split_once(DURATION_SEPARATOR).unwrap_or((s, ""));
    let unit = unit.trim();

    let factor = TIME_UNITS
        .iter()
        .find(|(name, _)| *name == unit)
        .map(|(_, factor)| *factor)
        .ok_or_else(|| ParseError::UnknownTimeUnit {
            unit: unit.to_string(),
            line: 0,
        })?;

    Ok(parse_magnitude(Field::QueryTimeMs, value)? * factor)
}

/// 解析内存字符串并换算为 KB
///
/// 格式为 `(<单位>):<数值>`，单位只支持 `(bytes)`、`(kbytes)`、`(mbytes)`、`(gbytes)`。
///
/// ```
/// use bench_log_parser::parse_mem_kbytes;
///
/// assert_eq!(parse_mem_kbytes("(kbytes): 2048").unwrap(), 2048.0);
/// assert_eq!(parse_mem_kbytes("(mbytes): 2").unwrap(), 2048.0);
/// assert!(parse_mem_kbytes("(xbytes): 500").is_err());
/// ```
pub fn parse_mem_kbytes(s: &str) -> Result<f64, ParseError> {
    let s = s.trim();
    let unit = match memchr(b')', s.as_bytes()) {
        Some(close) if s.starts_with('(') => &s[..=close],
        _ => s,
    };

    let factor = MEM_UNITS
        .iter()
        .find(|(name, _)| *name == unit)
        .map(|(_, factor)| *factor)
        .ok_or_else(|| ParseError::UnknownMemUnit {
            unit: unit.to_string(),
            line: 0,
        })?;

    let value = s.rsplit(MEM_VALUE_SEPARATOR).next().unwrap_or(s);
    Ok(parse_magnitude(Field::MemPeakKbytes, value)? * factor)
}
