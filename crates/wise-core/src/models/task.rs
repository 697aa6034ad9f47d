//! Task model definition.

use jiff::civil::DateTime;
use serde::{Deserialize, Serialize};

use super::{serde_helpers::backend_datetime, serde_helpers::null_as_default, TaskStatus};

/// A backend-tracked unit of asynchronous work.
///
/// This is a read-through copy: it is replaced wholesale on every poll and
/// never mutated locally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Task {
    /// Unique task identifier
    pub tid: String,

    /// Human-readable name
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    /// Task category
    #[serde(default, deserialize_with = "null_as_default")]
    pub types: String,

    /// Lifecycle status
    #[serde(default)]
    pub status: TaskStatus,

    /// Node of the backend state machine the task is currently in
    #[serde(default, deserialize_with = "null_as_default")]
    pub current_state: String,

    /// Number of steps the task will run
    #[serde(default)]
    pub total_steps: u32,

    /// Step currently executing
    #[serde(default)]
    pub current_step: u32,

    /// How many times the backend has retried the task
    #[serde(default)]
    pub retry_count: u32,

    /// Opaque input payload, often JSON
    #[serde(default, deserialize_with = "null_as_default")]
    pub params: String,

    /// Opaque output payload, often JSON
    #[serde(default, deserialize_with = "null_as_default")]
    pub result: String,

    /// Execution time in milliseconds
    #[serde(default)]
    pub duration: u64,

    /// Error text of the last failure
    #[serde(default, deserialize_with = "null_as_default")]
    pub error: String,

    /// Free-form extension payload
    #[serde(default, deserialize_with = "null_as_default")]
    pub extend: String,

    /// Creation time (backend civil time)
    #[serde(default, with = "backend_datetime")]
    pub created_at: Option<DateTime>,

    /// Last modification time (backend civil time)
    #[serde(default, with = "backend_datetime")]
    pub updated_at: Option<DateTime>,
}

impl Task {
    /// Step progress as a `current/total` pair, `None` when the task has no
    /// declared steps.
    pub fn progress(&self) -> Option<(u32, u32)> {
        (self.total_steps > 0).then_some((self.current_step, self.total_steps))
    }
}
