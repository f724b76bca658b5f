use std::fmt;
use std::path::{Path, PathBuf};

/// 记录中可识别的字段
///
/// 字段名即 CSV 列名，下游图表脚本按这些名字取列。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Field {
    /// 检索算法名称
    Method,
    /// 命中数
    Hits,
    /// 查询文件
    QueryFile,
    /// 查询数量上限
    QueryLimit,
    /// 检索耗时（毫秒）
    QueryTimeMs,
    /// 峰值常驻内存（KB）
    MemPeakKbytes,
    /// 近似检索允许的编辑距离错误数
    ErrorTotal,
}

impl Field {
    /// 一条完整记录必须具备的六个字段
    pub const CORE: [Field; 6] = [
        Field::Method,
        Field::Hits,
        Field::QueryFile,
        Field::QueryLimit,
        Field::QueryTimeMs,
        Field::MemPeakKbytes,
    ];

    /// 全部字段，按列的默认顺序
    pub const ALL: [Field; 7] = [
        Field::Method,
        Field::Hits,
        Field::QueryFile,
        Field::QueryLimit,
        Field::QueryTimeMs,
        Field::MemPeakKbytes,
        Field::ErrorTotal,
    ];

    /// 字段名（CSV 列名）
    pub const fn name(self) -> &'static str {
        match self {
            Field::Method => "method",
            Field::Hits => "hits",
            Field::QueryFile => "query_file",
            Field::QueryLimit => "query_limit",
            Field::QueryTimeMs => "query_time_ms",
            Field::MemPeakKbytes => "mem_peak_kbytes",
            Field::ErrorTotal => "error_total",
        }
    }

    /// 按字段名查找
    pub fn from_name(name: &str) -> Option<Field> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 归一化后的字段值
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// 文本
    Text(String),
    /// 路径
    Path(PathBuf),
    /// 非负整数
    Count(u64),
    /// 浮点数（已换算到毫秒或 KB）
    Float(f64),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Path(p) => write!(f, "{}", p.display()),
            FieldValue::Count(n) => write!(f, "{}", n),
            // Debug 格式保留小数点：5000.0 而不是 5000
            FieldValue::Float(v) => write!(f, "{:?}", v),
        }
    }
}

/// 一次基准测试运行的结果
///
/// 所有字段都是可选的：日志可能被截断，或某些运行不输出部分字段。
/// 通过 `set` 设置的字段会记住第一次设置的顺序，CSV 表头据此生成；
/// 直接赋值的公有字段排在其后，按 `Field::ALL` 的顺序。
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ExperimentRecord {
    /// 检索算法名称，如 "FM-Index"
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub method: Option<String>,

    /// 命中总数
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub hits: Option<u64>,

    /// 查询文件路径（已去掉引号）
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub query_file: Option<PathBuf>,

    /// 查询数量上限
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub query_limit: Option<u64>,

    /// 检索耗时（毫秒）
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub query_time_ms: Option<f64>,

    /// 峰值常驻内存（KB）
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub mem_peak_kbytes: Option<f64>,

    /// 允许的错误数（仅近似检索）
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub error_total: Option<u64>,

    #[cfg_attr(feature = "serde", serde(skip))]
    order: Vec<Field>,
}

impl ExperimentRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置字段值
    ///
    /// 字段首次设置时记入插入顺序，重复设置只覆盖值。
    /// 值的类型与字段不符时原样返回该值。
    pub fn set(&mut self, field: Field, value: FieldValue) -> Result<(), FieldValue> {
        match (field, value) {
            (Field::Method, FieldValue::Text(s)) => self.method = Some(s),
            (Field::QueryFile, FieldValue::Path(p)) => self.query_file = Some(p),
            (Field::QueryFile, FieldValue::Text(s)) => self.query_file = Some(PathBuf::from(s)),
            (Field::Hits, FieldValue::Count(n)) => self.hits = Some(n),
            (Field::QueryLimit, FieldValue::Count(n)) => self.query_limit = Some(n),
            (Field::ErrorTotal, FieldValue::Count(n)) => self.error_total = Some(n),
            (Field::QueryTimeMs, FieldValue::Float(v)) => self.query_time_ms = Some(v),
            (Field::MemPeakKbytes, FieldValue::Float(v)) => self.mem_peak_kbytes = Some(v),
            (_, other) => return Err(other),
        }
        if !self.order.contains(&field) {
            self.order.push(field);
        }
        Ok(())
    }

    /// 读取字段值
    pub fn get(&self, field: Field) -> Option<FieldValue> {
        match field {
            Field::Method => self.method.clone().map(FieldValue::Text),
            Field::Hits => self.hits.map(FieldValue::Count),
            Field::QueryFile => self.query_file.clone().map(FieldValue::Path),
            Field::QueryLimit => self.query_limit.map(FieldValue::Count),
            Field::QueryTimeMs => self.query_time_ms.map(FieldValue::Float),
            Field::MemPeakKbytes => self.mem_peak_kbytes.map(FieldValue::Float),
            Field::ErrorTotal => self.error_total.map(FieldValue::Count),
        }
    }

    /// 字段是否有值
    pub fn has(&self, field: Field) -> bool {
        match field {
            Field::Method => self.method.is_some(),
            Field::Hits => self.hits.is_some(),
            Field::QueryFile => self.query_file.is_some(),
            Field::QueryLimit => self.query_limit.is_some(),
            Field::QueryTimeMs => self.query_time_ms.is_some(),
            Field::MemPeakKbytes => self.mem_peak_kbytes.is_some(),
            Field::ErrorTotal => self.error_total.is_some(),
        }
    }

    /// 列出有值的字段
    ///
    /// 先按 `set` 的插入顺序，再补上直接赋值、未经 `set` 的字段。
    /// 被置回 `None` 的字段不会出现。
    pub fn fields(&self) -> Vec<Field> {
        let mut fields: Vec<Field> = self
            .order
            .iter()
            .copied()
            .filter(|&f| self.has(f))
            .collect();
        for field in Field::ALL {
            if self.has(field) && !fields.contains(&field) {
                fields.push(field);
            }
        }
        fields
    }

    /// 按字段名读取
    pub fn get_by_name(&self, name: &str) -> Option<FieldValue> {
        Field::from_name(name).and_then(|f| self.get(f))
    }

    pub fn len(&self) -> usize {
        Field::ALL.iter().filter(|&&f| self.has(f)).count()
    }

    pub fn is_empty(&self) -> bool {
        !Field::ALL.iter().any(|&f| self.has(f))
    }

    /// 缺失的核心字段名
    pub fn missing_core_fields(&self) -> Vec<&'static str> {
        Field::CORE
            .iter()
            .filter(|&&f| !self.has(f))
            .map(|f| f.name())
            .collect()
    }

    /// 六个核心字段是否齐全
    pub fn is_complete(&self) -> bool {
        Field::CORE.iter().all(|&f| self.has(f))
    }

    /// 峰值内存（MB）
    pub fn mem_peak_mbytes(&self) -> Option<f64> {
        self.mem_peak_kbytes.map(|kb| kb / 1024.0)
    }

    /// 从查询文件名中提取查询长度
    ///
    /// `queries_10.txt` -> 10。取文件名最后一个 `_` 之后、第一个 `.` 之前的部分。
    pub fn query_length(&self) -> Option<u64> {
        self.query_file.as_deref().and_then(query_length_from_path)
    }
}

fn query_length_from_path(path: &Path) -> Option<u64> {
    let name = path.file_name()?.to_str()?;
    let tail = name.rsplit('_').next()?;
    let digits = tail.split('.').next()?;
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insertion_order_is_kept_and_not_duplicated() {
        let mut record = ExperimentRecord::new();
        record.set(Field::QueryFile, FieldValue::Text("q_1.txt".into())).unwrap();
        record.set(Field::Method, FieldValue::Text("Naive Search".into())).unwrap();
        record.set(Field::QueryFile, FieldValue::Text("q_2.txt".into())).unwrap();

        assert_eq!(record.fields(), &[Field::QueryFile, Field::Method]);
        assert_eq!(record.query_file, Some(PathBuf::from("q_2.txt")));
    }

    #[test]
    fn directly_assigned_fields_are_listed() {
        let mut record = ExperimentRecord::new();
        record.set(Field::Hits, FieldValue::Count(42)).unwrap();
        record.method = Some("FM-Index".to_string());
        record.mem_peak_kbytes = Some(2048.0);

        assert!(!record.is_empty());
        assert_eq!(record.len(), 3);
        assert_eq!(
            record.fields(),
            [Field::Hits, Field::Method, Field::MemPeakKbytes]
        );
        assert!(record.has(Field::Method));
    }

    #[test]
    fn cleared_field_is_not_listed() {
        let mut record = ExperimentRecord::new();
        record.set(Field::Method, FieldValue::Text("A".into())).unwrap();
        record.set(Field::Hits, FieldValue::Count(1)).unwrap();
        record.method = None;

        assert_eq!(record.fields(), [Field::Hits]);
        assert_eq!(record.missing_core_fields()[0], "method");
    }

    #[test]
    fn mismatched_value_is_returned() {
        let mut record = ExperimentRecord::new();
        let err = record.set(Field::Hits, FieldValue::Text("x".into())).unwrap_err();
        assert_eq!(err, FieldValue::Text("x".into()));
        assert!(record.is_empty());
    }

    #[test]
    fn query_length_from_file_name() {
        let mut record = ExperimentRecord::new();
        assert_eq!(record.query_length(), None);

        record.query_file = Some(PathBuf::from("data/illumina_reads_100.fasta.gz"));
        assert_eq!(record.query_length(), Some(100));

        record.query_file = Some(PathBuf::from("data_dir/reads.fasta"));
        assert_eq!(record.query_length(), None);
    }

    #[test]
    fn float_display_keeps_decimal_point() {
        assert_eq!(FieldValue::Float(5000.0).to_string(), "5000.0");
        assert_eq!(FieldValue::Float(0.5).to_string(), "0.5");
        assert_eq!(FieldValue::Count(42).to_string(), "42");
    }

    #[test]
    fn field_names_round_trip() {
        for f in Field::CORE {
            assert_eq!(Field::from_name(f.name()), Some(f));
        }
        assert_eq!(Field::from_name("error_total"), Some(Field::ErrorTotal));
        assert_eq!(Field::from_name("body"), None);
    }
}
