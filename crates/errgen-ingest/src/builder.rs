//! Record table construction from parsed rows.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use tracing::{debug, warn};

use errgen_model::{
    AttributeList, BuildOptions, CollisionPolicy, OverflowPolicy, RecordName, RecordTable, Row,
};

use crate::error::{IngestError, Result};
use crate::rows::{RowSet, parse_rows, read_rows};

/// Build a [`RecordTable`] from parsed rows.
///
/// The first row becomes the [`AttributeList`]; its width is the canonical
/// column count. Every later row is padded with empty strings up to that width
/// and stored under the normalized form of its first field.
///
/// # Errors
///
/// - [`IngestError::EmptyInput`] when there are no rows at all.
/// - [`IngestError::RecordNameCollision`] when two rows share a record name
///   and `options.on_collision` is [`CollisionPolicy::Reject`].
/// - [`IngestError::RowTooLong`] when a row is wider than the header and
///   `options.on_overflow` is [`OverflowPolicy::Reject`].
pub fn build_table(input: RowSet, options: BuildOptions) -> Result<RecordTable> {
    let RowSet { source_name, rows } = input;
    let mut rows = rows.into_iter();
    let header = rows.next().ok_or(IngestError::EmptyInput { source_name })?;
    let attributes = AttributeList::new(header.fields);
    let width = attributes.len();

    let mut table = RecordTable::new(attributes);
    let mut first_lines: BTreeMap<RecordName, u64> = BTreeMap::new();

    for raw in rows {
        let found = raw.fields.len();
        if found > width {
            match options.on_overflow {
                OverflowPolicy::Ignore => {
                    debug!(line = raw.line, found, expected = width, "row wider than header");
                }
                OverflowPolicy::Reject => {
                    return Err(IngestError::RowTooLong {
                        line: raw.line,
                        expected: width,
                        found,
                    });
                }
            }
        } else if found < width {
            debug!(line = raw.line, found, expected = width, "padding short row");
        }

        let row = Row::padded(raw.fields, width);
        let name = RecordName::new(row.value(0));
        if let Some(&first_line) = first_lines.get(&name) {
            match options.on_collision {
                CollisionPolicy::Overwrite => {
                    warn!(
                        record = %name,
                        line = raw.line,
                        first_line,
                        "record name collision, later row wins"
                    );
                }
                CollisionPolicy::Reject => {
                    return Err(IngestError::RecordNameCollision {
                        name: name.to_string(),
                        first_line,
                        line: raw.line,
                    });
                }
            }
        } else {
            first_lines.insert(name.clone(), raw.line);
        }
        table.insert(name, row);
    }

    debug!(
        attributes = table.attributes().len(),
        records = table.len(),
        "record table built"
    );
    Ok(table)
}

/// Read `path` and build its record table.
pub fn load_table(path: &Path, options: BuildOptions) -> Result<RecordTable> {
    build_table(read_rows(path)?, options)
}

/// Parse `input` and build its record table.
pub fn load_table_from_reader<R: Read>(
    input: R,
    source_name: &str,
    options: BuildOptions,
) -> Result<RecordTable> {
    build_table(parse_rows(input, source_name)?, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rows::parse_str;

    fn build(text: &str, options: BuildOptions) -> Result<RecordTable> {
        build_table(parse_str(text).unwrap(), options)
    }

    #[test]
    fn header_becomes_attribute_list() {
        let table = build("code|message\nX|y\n", BuildOptions::default()).unwrap();
        let attributes: Vec<&str> = table.attributes().iter().collect();
        assert_eq!(attributes, vec!["code", "message"]);
        assert_eq!(table.len(), 1);
        assert!(!table.contains("CODE"));
    }

    #[test]
    fn header_only_input_has_no_records() {
        let table = build("code|message\n", BuildOptions::default()).unwrap();
        assert_eq!(table.attributes().len(), 2);
        assert!(table.is_empty());
    }

    #[test]
    fn empty_input_is_rejected() {
        let err = build("", BuildOptions::default()).unwrap_err();
        assert!(matches!(err, IngestError::EmptyInput { .. }));
    }

    #[test]
    fn collision_rejected_under_strict_policy() {
        let options = BuildOptions::default().with_collision_policy(CollisionPolicy::Reject);
        let err = build("code|message\nNot Found|a\nnot  found|b\n", options).unwrap_err();
        match err {
            IngestError::RecordNameCollision {
                name,
                first_line,
                line,
            } => {
                assert_eq!(name, "NOT_FOUND");
                assert_eq!(first_line, 2);
                assert_eq!(line, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    fn collision_lines(text: &str) -> (u64, u64) {
        let options = BuildOptions::default().with_collision_policy(CollisionPolicy::Reject);
        match build(text, options).unwrap_err() {
            IngestError::RecordNameCollision {
                first_line, line, ..
            } => (first_line, line),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn collision_lines_ignore_line_ending_style() {
        assert_eq!(collision_lines("code|message\nnot found|a\nNOT FOUND|b\n"), (2, 3));
        assert_eq!(collision_lines("code|message\r\nnot found|a\r\nNOT FOUND|b\r\n"), (2, 3));
        assert_eq!(collision_lines("code|message\rnot found|a\rNOT FOUND|b\r"), (2, 3));
    }

    #[test]
    fn collision_lines_count_blank_lines() {
        assert_eq!(collision_lines("code|message\n\nnot found|a\n\n\nNOT FOUND|b\n"), (3, 6));
        assert_eq!(
            collision_lines("code|message\r\n\r\nnot found|a\r\n\r\nNOT FOUND|b"),
            (3, 5)
        );
        assert_eq!(collision_lines("code|message\r\rnot found|a\rNOT FOUND|b\r"), (3, 4));
    }

    #[test]
    fn overflow_line_counts_blank_lines() {
        let options = BuildOptions::default().with_overflow_policy(OverflowPolicy::Reject);
        let err = build("a|b\r\n\r\nX|1|2\r\n", options).unwrap_err();
        assert!(matches!(err, IngestError::RowTooLong { line: 3, .. }));
    }

    #[test]
    fn overflow_rejected_under_strict_policy() {
        let options = BuildOptions::default().with_overflow_policy(OverflowPolicy::Reject);
        let err = build("a|b\nX|1|2\n", options).unwrap_err();
        assert!(matches!(
            err,
            IngestError::RowTooLong {
                line: 2,
                expected: 2,
                found: 3
            }
        ));
    }
}
