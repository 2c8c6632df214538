//! Policies applied while building a record table.

use serde::{Deserialize, Serialize};

/// What to do when two data rows normalize to the same record name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollisionPolicy {
    /// Keep the later row; the record stays at its first position.
    #[default]
    Overwrite,
    /// Fail the build.
    Reject,
}

/// What to do with data rows that have more fields than the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    /// Keep the extra fields; renderers never read them.
    #[default]
    Ignore,
    /// Fail the build.
    Reject,
}

/// Options for building a [`RecordTable`](crate::RecordTable).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildOptions {
    pub on_collision: CollisionPolicy,
    pub on_overflow: OverflowPolicy,
}

impl BuildOptions {
    #[must_use]
    pub fn with_collision_policy(mut self, policy: CollisionPolicy) -> Self {
        self.on_collision = policy;
        self
    }

    #[must_use]
    pub fn with_overflow_policy(mut self, policy: OverflowPolicy) -> Self {
        self.on_overflow = policy;
        self
    }
}
