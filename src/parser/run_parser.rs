//! RunParser - 从 Reader 流式读取并解析运行记录
//!
//! 提供了一个迭代器，可以从任何实现了 `Read` trait 的源中逐条读取基准测试运行记录。

use crate::error::ParseError;
use crate::experiment::ExperimentRecord;
use crate::parser::parse_functions::{LineKind, parse_line};
use crate::parser_config::{DEFAULT_CONFIG, ParserConfig};
use log::{debug, trace, warn};
use std::{
    borrow::Cow,
    io::{self, BufRead, BufReader, Read},
    mem,
};

/// 从 Reader 中按行读取并组装 `ExperimentRecord` 的迭代器
///
/// 遇到标记行时结束上一条记录，输入结束时输出最后一条非空记录。
/// 出现致命错误后迭代器不再产出任何内容。
///
/// # 类型参数
///
/// * `R` - 实现了 `Read` trait 的类型
///
/// # 示例
///
/// ```
/// use bench_log_parser::RunParser;
///
/// let log = ">>>>>\n> Method: FM-Index\n> Total Count: 42\n";
/// let records: Vec<_> = RunParser::new(log.as_bytes())
///     .collect::<Result<_, _>>()
///     .unwrap();
///
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].hits, Some(42));
/// ```
pub struct RunParser<R: Read> {
    reader: BufReader<R>,
    buffer: String,
    config: Cow<'static, ParserConfig>,
    current: Option<ExperimentRecord>,
    line_no: usize,
    finished: bool,
}

impl<R: Read> RunParser<R> {
    /// 使用默认配置创建
    pub fn new(reader: R) -> Self {
        Self::from_parts(reader, Cow::Borrowed(&*DEFAULT_CONFIG))
    }

    /// 使用自定义配置创建
    pub fn with_config(reader: R, config: ParserConfig) -> Self {
        Self::from_parts(reader, Cow::Owned(config))
    }

    fn from_parts(reader: R, config: Cow<'static, ParserConfig>) -> Self {
        Self {
            reader: BufReader::new(reader),
            buffer: String::new(),
            config,
            current: None,
            line_no: 0,
            finished: false,
        }
    }

    /// 已读取的行数
    pub fn lines_read(&self) -> usize {
        self.line_no
    }

    /// 读取下一行，去掉行尾的 `\n` / `\r\n`
    fn read_line(&mut self) -> io::Result<Option<String>> {
        self.buffer.clear();
        let bytes_read = self.reader.read_line(&mut self.buffer)?;

        if bytes_read == 0 {
            return Ok(None);
        }

        self.line_no += 1;
        let len = self.buffer.trim_end_matches(['\n', '\r']).len();
        self.buffer.truncate(len);

        Ok(Some(mem::take(&mut self.buffer)))
    }

    /// 结束一条记录；严格模式下检查字段是否齐全
    fn finalize(&mut self, record: ExperimentRecord) -> Result<ExperimentRecord, ParseError> {
        if self.config.require_complete && !record.is_complete() {
            self.finished = true;
            return Err(ParseError::IncompleteRecord {
                missing: record.missing_core_fields(),
                line: self.line_no,
            });
        }
        debug!(
            "run finished at line {}: {} field(s), method={:?}",
            self.line_no,
            record.len(),
            record.method
        );
        Ok(record)
    }

    fn fail(&mut self, err: ParseError) -> Option<Result<ExperimentRecord, ParseError>> {
        self.finished = true;
        self.current = None;
        Some(Err(err))
    }
}

impl<R: Read> Iterator for RunParser<R> {
    type Item = Result<ExperimentRecord, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            let line = match self.read_line() {
                Ok(Some(line)) => line,
                Ok(None) => {
                    // 输入结束，输出最后一条非空记录
                    self.finished = true;
                    let record = self.current.take().filter(|r| !r.is_empty())?;
                    return Some(self.finalize(record));
                }
                Err(e) => return self.fail(ParseError::Io(e.to_string())),
            };

            let kind = match parse_line(&self.config, &line) {
                Ok(kind) => kind,
                Err(e) => {
                    let line_no = self.line_no;
                    return self.fail(e.at_line(line_no));
                }
            };

            match kind {
                LineKind::Marker => {
                    let previous = self.current.replace(ExperimentRecord::new());
                    if let Some(record) = previous.filter(|r| !r.is_empty()) {
                        return Some(self.finalize(record));
                    }
                }
                LineKind::Field(field, value) => match self.current.as_mut() {
                    Some(record) => {
                        if record.set(field, value).is_err() {
                            let line_no = self.line_no;
                            return self.fail(ParseError::FieldTypeMismatch {
                                field: field.name(),
                                line: line_no,
                            });
                        }
                    }
                    None => {
                        warn!(
                            "line {}: '{}' appears before the first run marker, ignored",
                            self.line_no, field
                        );
                    }
                },
                LineKind::Ignored => {
                    trace!("line {}: ignored", self.line_no);
                }
            }
        }
    }
}
