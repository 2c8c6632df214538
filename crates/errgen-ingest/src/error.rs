//! Error types for errgen ingestion.

use thiserror::Error;

/// Errors that abort a generation run before anything is rendered.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The input could not be opened or read to completion.
    #[error("input unavailable: {source_name}: {source}")]
    InputUnavailable {
        source_name: String,
        #[source]
        source: csv::Error,
    },

    /// The input has no rows, so there is no header to take attributes from.
    #[error("input is empty: {source_name} has no header row")]
    EmptyInput { source_name: String },

    /// Two data rows normalize to the same record name.
    ///
    /// Only raised under `CollisionPolicy::Reject`.
    #[error("record name {name} on line {line} collides with line {first_line}")]
    RecordNameCollision {
        name: String,
        first_line: u64,
        line: u64,
    },

    /// A data row has more fields than the header.
    ///
    /// Only raised under `OverflowPolicy::Reject`.
    #[error("row on line {line} has {found} fields but the header has {expected}")]
    RowTooLong {
        line: u64,
        expected: usize,
        found: usize,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
