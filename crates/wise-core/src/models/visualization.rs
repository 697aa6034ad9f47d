//! Task detail snapshot with its plan list.

use jiff::civil::DateTime;
use serde::{Deserialize, Serialize};

use super::{serde_helpers::backend_datetime, serde_helpers::null_as_default, Plan, TaskStatus};

/// Full detail snapshot returned by `GET /task/visualization`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TaskVisualization {
    pub tid: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub types: String,

    #[serde(default)]
    pub status: TaskStatus,

    #[serde(default, deserialize_with = "null_as_default")]
    pub current_state: String,

    #[serde(default)]
    pub total_steps: u32,

    #[serde(default)]
    pub current_step: u32,

    /// Execution steps in backend order
    #[serde(default, deserialize_with = "null_as_default")]
    pub plans: Vec<Plan>,

    #[serde(default, with = "backend_datetime")]
    pub created_at: Option<DateTime>,

    #[serde(default, with = "backend_datetime")]
    pub updated_at: Option<DateTime>,
}

impl TaskVisualization {
    /// Look up a plan by identifier.
    pub fn find_plan(&self, pid: &str) -> Option<&Plan> {
        self.plans.iter().find(|plan| plan.pid == pid)
    }

    /// First plan in the list, the default selection when a view opens.
    pub fn first_plan(&self) -> Option<&Plan> {
        self.plans.first()
    }
}
