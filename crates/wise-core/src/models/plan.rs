//! Plan model definition.

use jiff::civil::DateTime;
use serde::{Deserialize, Serialize};

use super::{serde_helpers::backend_datetime, serde_helpers::null_as_default, PlanStatus};

/// One execution step belonging to a task.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Plan {
    /// Identifier, unique within the parent task
    pub pid: String,

    /// Step name
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    /// Ordering index within the task
    #[serde(default)]
    pub index: i64,

    /// Execution status
    #[serde(default)]
    pub status: PlanStatus,

    /// Opaque input payload, often JSON
    #[serde(default, deserialize_with = "null_as_default")]
    pub params: String,

    /// Opaque output payload, often JSON
    #[serde(default, deserialize_with = "null_as_default")]
    pub result: String,

    /// Execution time in milliseconds
    #[serde(default)]
    pub duration: u64,

    /// Error text, empty when the step did not fail
    #[serde(default, deserialize_with = "null_as_default")]
    pub error: String,

    #[serde(default, with = "backend_datetime")]
    pub created_at: Option<DateTime>,

    #[serde(default, with = "backend_datetime")]
    pub updated_at: Option<DateTime>,
}
