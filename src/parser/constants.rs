//! 解析器使用的常量定义
//!
//! 单位换算表及字段值中的分隔符。

/// 时间单位到毫秒的换算系数
pub const TIME_UNITS: [(&str, f64); 2] = [("ns", 0.001), ("ms", 1.0)];

/// 内存单位到 KB 的换算系数（单位带括号，与 `/usr/bin/time -v` 输出一致）
pub const MEM_UNITS: [(&str, f64); 4] = [
    ("(bytes)", 1.0 / 1024.0),
    ("(kbytes)", 1.0),
    ("(mbytes)", 1024.0),
    ("(gbytes)", 1024.0 * 1024.0),
];

/// 耗时字段中数值与单位之间的分隔符
pub const DURATION_SEPARATOR: char = ' ';

/// 内存字段中单位与数值之间的分隔符
pub const MEM_VALUE_SEPARATOR: &str = "):";

/// 包裹查询文件与查询上限的引号
pub const QUOTE_CHAR: char = '"';
