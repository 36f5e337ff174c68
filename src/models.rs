//! Frontend Models
//!
//! Task entity and the aggregate counts reported to the header.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable task identifier
pub type TaskId = Uuid;

/// A single to-do entry.
///
/// Serialized as `{id, text, completed, edit, dateAdded}`. Payloads written
/// before ids existed are accepted and get a fresh id on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(default = "Uuid::new_v4")]
    pub id: TaskId,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
    /// Inline edit mode (transient UI flag)
    #[serde(default)]
    pub edit: bool,
    pub date_added: DateTime<Utc>,
}

impl Task {
    /// Create an open task stamped with `date_added`
    pub fn new(text: String, date_added: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text,
            completed: false,
            edit: false,
            date_added,
        }
    }
}

/// Total and completed task counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskCounts {
    pub total: usize,
    pub completed: usize,
}
