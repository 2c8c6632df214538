//! Data model for the errgen code generator.
//!
//! A generation run reads a `|`-delimited table whose first row names the
//! attributes of every record. This crate holds the in-memory form of that
//! table and the pure naming rules shared by the ingest and render crates:
//!
//! - [`AttributeList`]: ordered column headers, verbatim from the header row
//! - [`Row`]: one record's field values, padded to the header width
//! - [`RecordTable`]: rows keyed by [`RecordName`], in first-seen order
//! - [`naming`]: record-name normalization and camel-case conversion
//! - [`BuildOptions`]: policies for colliding names and over-long rows

pub mod ids;
pub mod naming;
pub mod options;
pub mod table;

pub use ids::RecordName;
pub use naming::{CaseStyle, convert_case, record_name, to_lower_camel, to_upper_camel};
pub use options::{BuildOptions, CollisionPolicy, OverflowPolicy};
pub use table::{AttributeList, RecordTable, Row};
