#![deny(unsafe_code)]

use std::collections::BTreeMap;

use crate::RecordName;

/// Ordered column headers, verbatim from the first input row.
///
/// Entries need not be unique. Duplicate names produce colliding artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeList(Vec<String>);

impl AttributeList {
    pub fn new(attributes: Vec<String>) -> Self {
        Self(attributes)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// Field values of one record, positionally aligned with the [`AttributeList`].
///
/// A built row is never shorter than the header. It may be longer when the
/// source line carried extra fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row(Vec<String>);

impl Row {
    pub fn new(fields: Vec<String>) -> Self {
        Self(fields)
    }

    /// Right-pad `fields` with empty strings up to `width`. Longer input is kept whole.
    pub fn padded(mut fields: Vec<String>, width: usize) -> Self {
        if fields.len() < width {
            fields.resize(width, String::new());
        }
        Self(fields)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Value at `index`, or `""` past the end.
    pub fn value(&self, index: usize) -> &str {
        self.0.get(index).map(String::as_str).unwrap_or("")
    }

    pub fn fields(&self) -> &[String] {
        &self.0
    }
}

/// Records keyed by [`RecordName`], iterated in first-insertion order.
///
/// Re-inserting an existing name replaces its row but keeps its position, so
/// iteration order depends only on the order names first appear in the input.
#[derive(Debug, Clone)]
pub struct RecordTable {
    attributes: AttributeList,
    order: Vec<RecordName>,
    rows: BTreeMap<RecordName, Row>,
}

impl RecordTable {
    pub fn new(attributes: AttributeList) -> Self {
        Self {
            attributes,
            order: Vec::new(),
            rows: BTreeMap::new(),
        }
    }

    pub fn attributes(&self) -> &AttributeList {
        &self.attributes
    }

    /// Store `row` under `name`, returning the row it replaced.
    pub fn insert(&mut self, name: RecordName, row: Row) -> Option<Row> {
        if !self.rows.contains_key(&name) {
            self.order.push(name.clone());
        }
        self.rows.insert(name, row)
    }

    pub fn get(&self, name: &str) -> Option<&Row> {
        self.rows.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rows.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn names(&self) -> impl ExactSizeIterator<Item = &RecordName> {
        self.order.iter()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&RecordName, &Row)> {
        self.order
            .iter()
            .filter_map(|name| self.rows.get(name).map(|row| (name, row)))
    }

    /// Every record's value for the attribute at `index`, in table order.
    pub fn column(&self, index: usize) -> impl Iterator<Item = (&RecordName, &str)> {
        self.iter().map(move |(name, row)| (name, row.value(index)))
    }
}
