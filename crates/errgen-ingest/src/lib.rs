//! errgen ingestion: turn `|`-delimited text into a [`RecordTable`].
//!
//! [`RecordTable`]: errgen_model::RecordTable

pub mod builder;
pub mod error;
pub mod rows;

pub use builder::{build_table, load_table, load_table_from_reader};
pub use error::{IngestError, Result};
pub use rows::{FIELD_DELIMITER, INLINE_SOURCE, RawRow, RowSet, parse_rows, parse_str, read_rows};
