#![deny(unsafe_code)]

use std::borrow::Borrow;
use std::fmt;

use crate::naming::record_name;

/// Canonical identifier of a record, derived from the first field of its row.
///
/// Always holds a normalized value (see [`record_name`]), so two labels that
/// differ only in case or whitespace map to the same key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordName(String);

impl RecordName {
    pub fn new(label: &str) -> Self {
        Self(record_name(label))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for RecordName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for RecordName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
