//! CSV 导出
//!
//! 表头取第一条记录的字段插入顺序；其余记录按表头顺序输出，缺失字段留空。

use crate::error::ExportError;
use crate::experiment::{ExperimentRecord, Field, FieldValue};
use crate::tools::method_ids;
use log::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// 附加的派生列名（下游图表脚本使用）
pub const DERIVED_COLUMNS: [&str; 3] = ["mem_peak_mbytes", "query_length", "method_id"];

/// CSV 导出选项
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CsvOptions {
    /// 是否追加派生列
    pub with_derived: bool,
}

/// 由第一条记录确定表头
pub fn csv_header(records: &[ExperimentRecord]) -> Result<Vec<Field>, ExportError> {
    records
        .first()
        .map(|first| first.fields())
        .ok_or(ExportError::NoRecords)
}

/// 将记录写为 CSV
///
/// # 错误
///
/// - `NoRecords` - 记录为空，无法确定表头
/// - `UnexpectedField` - 后续记录含有表头中没有的字段
///
/// # 示例
///
/// ```
/// use bench_log_parser::{parse_runs_from_string, write_csv, CsvOptions};
///
/// let runs = parse_runs_from_string(">>>>>\n> Method: FM-Index\n> Total Count: 42\n").unwrap();
/// let mut out = Vec::new();
/// write_csv(&mut out, &runs, CsvOptions::default()).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "method,hits\nFM-Index,42\n");
/// ```
pub fn write_csv<W: Write>(
    writer: W,
    records: &[ExperimentRecord],
    options: CsvOptions,
) -> Result<(), ExportError> {
    let header = csv_header(records)?;
    let ids = method_ids(records);

    let mut csv_writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    let mut names: Vec<&str> = header.iter().map(|f| f.name()).collect();
    if options.with_derived {
        names.extend(DERIVED_COLUMNS);
    }
    csv_writer.write_record(&names)?;

    for (row, record) in records.iter().enumerate() {
        if let Some(field) = record.fields().iter().find(|f| !header.contains(*f)) {
            return Err(ExportError::UnexpectedField {
                field: field.name(),
                row,
            });
        }

        let mut cells: Vec<String> = header
            .iter()
            .map(|&f| record.get(f).map(|v| v.to_string()).unwrap_or_default())
            .collect();

        if options.with_derived {
            cells.push(
                record
                    .mem_peak_mbytes()
                    .map(|mb| FieldValue::Float(mb).to_string())
                    .unwrap_or_default(),
            );
            cells.push(record.query_length().map(|l| l.to_string()).unwrap_or_default());
            cells.push(
                record
                    .method
                    .as_deref()
                    .and_then(|m| ids.get(m))
                    .map(|id| id.to_string())
                    .unwrap_or_default(),
            );
        }

        csv_writer.write_record(&cells)?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// 将记录写入 CSV 文件
pub fn write_csv_file<P: AsRef<Path>>(
    path: P,
    records: &[ExperimentRecord],
    options: CsvOptions,
) -> Result<(), ExportError> {
    // 先确认表头，避免为空结果创建文件
    csv_header(records)?;

    let path = path.as_ref();
    let file = File::create(path)
        .map_err(|e| ExportError::Io(format!("{}: {}", path.display(), e)))?;
    write_csv(file, records, options)?;

    info!("wrote {} run(s) to {}", records.len(), path.display());
    Ok(())
}
