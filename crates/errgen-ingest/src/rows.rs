//! Row parsing for `|`-delimited input.
//!
//! Fields are split on every `|` with no trimming, quoting or escaping. Blank
//! lines are skipped and `\n`, `\r\n` and `\r` all end a line.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

use crate::error::{IngestError, Result};

/// Field delimiter of the input format.
pub const FIELD_DELIMITER: u8 = b'|';

/// Source name reported for input that does not come from a file.
pub const INLINE_SOURCE: &str = "<input>";

/// One input line split into fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    /// 1-based line number in the source.
    pub line: u64,
    pub fields: Vec<String>,
}

/// All rows of one input source, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowSet {
    /// Display name of the source, used in errors and logs.
    pub source_name: String,
    pub rows: Vec<RawRow>,
}

impl RowSet {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn reader_builder() -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder
        .delimiter(FIELD_DELIMITER)
        .has_headers(false)
        .flexible(true)
        .quoting(false);
    builder
}

/// Parse rows from any reader.
pub fn parse_rows<R: Read>(input: R, source_name: &str) -> Result<RowSet> {
    let mut text = String::new();
    BufReader::new(input)
        .read_to_string(&mut text)
        .map_err(|source| unavailable(source_name, source))?;
    collect_rows(&text, source_name)
}

/// Parse rows from an in-memory string.
pub fn parse_str(text: &str) -> Result<RowSet> {
    collect_rows(text, INLINE_SOURCE)
}

/// Open `path` and parse every row in it.
pub fn read_rows(path: &Path) -> Result<RowSet> {
    let source_name = path.display().to_string();
    let file = File::open(path).map_err(|source| unavailable(&source_name, source))?;
    parse_rows(file, &source_name)
}

fn unavailable(source_name: &str, source: io::Error) -> IngestError {
    IngestError::InputUnavailable {
        source_name: source_name.to_string(),
        source: csv::Error::from(source),
    }
}

/// Physical lines of `text`, split on `\r\n`, `\r` or `\n`.
///
/// A trailing terminator does not start another line.
fn physical_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut index = 0;
    while index < bytes.len() {
        match bytes[index] {
            b'\n' => {
                lines.push(&text[start..index]);
                index += 1;
                start = index;
            }
            b'\r' => {
                lines.push(&text[start..index]);
                index += if bytes.get(index + 1) == Some(&b'\n') { 2 } else { 1 };
                start = index;
            }
            _ => index += 1,
        }
    }
    if start < bytes.len() {
        lines.push(&text[start..]);
    }
    lines
}

/// Split one line (no terminator) into its fields.
fn split_fields(line: &str, source_name: &str) -> Result<Vec<String>> {
    let mut reader = reader_builder().from_reader(line.as_bytes());
    let mut record = StringRecord::new();
    reader
        .read_record(&mut record)
        .map_err(|source| IngestError::InputUnavailable {
            source_name: source_name.to_string(),
            source,
        })?;
    Ok(record.iter().map(str::to_string).collect())
}

fn collect_rows(text: &str, source_name: &str) -> Result<RowSet> {
    let mut rows = Vec::new();
    for (index, line) in physical_lines(text).into_iter().enumerate() {
        if line.is_empty() {
            continue;
        }
        rows.push(RawRow {
            line: index as u64 + 1,
            fields: split_fields(line, source_name)?,
        });
    }
    debug!(source = %source_name, rows = rows.len(), "parsed input rows");
    Ok(RowSet {
        source_name: source_name.to_string(),
        rows,
    })
}
