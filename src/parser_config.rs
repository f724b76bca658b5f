//! Parser 配置模块
//!
//! 提供可扩展的字段规则定义，使得基准测试日志格式变化时只需更新配置，
//! 而不需要修改核心解析逻辑。

use crate::experiment::Field;
use once_cell::sync::Lazy;

/// 前缀匹配方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// 行首精确匹配（大小写、空白敏感）
    Exact,
    /// 去掉行首空白后再匹配（`/usr/bin/time -v` 的输出带缩进）
    TrimStart,
}

/// 字段值的归一化方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// 去掉首尾空白的文本
    Text,
    /// 去掉首尾空白和包裹的双引号，作为路径
    QuotedPath,
    /// 非负整数
    Count,
    /// 可能带双引号的非负整数
    QuotedCount,
    /// `<数值> <ns|ms>`，换算为毫秒
    Duration,
    /// `(<单位>):<数值>`，换算为 KB
    Memory,
}

/// 字段规则
///
/// 一行以 `prefix` 开头时，剩余部分按 `value_kind` 归一化后写入 `field`。
#[derive(Debug, Clone)]
pub struct FieldRule {
    /// 行前缀，如 "> Method: "
    pub prefix: &'static str,

    /// 目标字段
    pub field: Field,

    /// 前缀匹配方式
    pub match_mode: MatchMode,

    /// 值类型
    pub value_kind: ValueKind,
}

impl FieldRule {
    pub const fn new(prefix: &'static str, field: Field, value_kind: ValueKind) -> Self {
        Self {
            prefix,
            field,
            match_mode: MatchMode::Exact,
            value_kind,
        }
    }

    /// 匹配成功时返回前缀之后的剩余部分
    #[inline]
    pub fn strip<'a>(&self, line: &'a str) -> Option<&'a str> {
        match self.match_mode {
            MatchMode::Exact => line.strip_prefix(self.prefix),
            MatchMode::TrimStart => line.trim_start().strip_prefix(self.prefix),
        }
    }
}

/// Parser 配置
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// 记录起始标记前缀
    pub marker: &'static str,

    /// 字段规则，按顺序匹配，先匹配者生效
    pub rules: Vec<FieldRule>,

    /// 严格模式：记录缺少任一核心字段时报错
    pub require_complete: bool,
}

impl ParserConfig {
    /// 字符串检索基准测试日志的默认配置
    pub fn search_bench_default() -> Self {
        Self {
            marker: ">>>>>",
            rules: vec![
                FieldRule::new("> Method: ", Field::Method, ValueKind::Text),
                FieldRule::new("> Total Count: ", Field::Hits, ValueKind::Count),
                FieldRule::new("> Query File: ", Field::QueryFile, ValueKind::QuotedPath),
                FieldRule::new("> Query Limit: ", Field::QueryLimit, ValueKind::QuotedCount),
                FieldRule::new("> Search duration: ", Field::QueryTimeMs, ValueKind::Duration),
                FieldRule {
                    prefix: "Maximum resident set size ",
                    field: Field::MemPeakKbytes,
                    match_mode: MatchMode::TrimStart,
                    value_kind: ValueKind::Memory,
                },
                FieldRule::new("> Excepted Errors: ", Field::ErrorTotal, ValueKind::Count),
            ],
            require_complete: false,
        }
    }

    /// 开启或关闭严格模式
    pub fn strict(mut self, require_complete: bool) -> Self {
        self.require_complete = require_complete;
        self
    }

    /// 判断是否为记录起始行
    #[inline]
    pub fn is_marker(&self, line: &str) -> bool {
        line.starts_with(self.marker)
    }

    /// 查找第一条匹配的规则
    pub fn match_rule<'a, 'l>(&'a self, line: &'l str) -> Option<(&'a FieldRule, &'l str)> {
        self.rules
            .iter()
            .find_map(|rule| rule.strip(line).map(|rest| (rule, rest)))
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self::search_bench_default()
    }
}

/// 共享的默认配置，避免每次解析都重建规则表
pub(crate) static DEFAULT_CONFIG: Lazy<ParserConfig> = Lazy::new(ParserConfig::default);
