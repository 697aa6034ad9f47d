//! Status enumerations for tasks and plans.
//!
//! Statuses are observed, never enforced: the backend owns every transition.
//! Strings this crate does not recognise are preserved in `Other` so a newer
//! backend never breaks decoding.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a task as reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum TaskStatus {
    /// Created, waiting to be picked up by the scheduler
    #[default]
    Init,

    /// Currently executing
    Running,

    /// Finished successfully
    Success,

    /// Finished with an error
    Failed,

    /// Queued for another attempt
    Retry,

    /// Cancelled by a user
    Cancelled,

    /// Paused by a user
    Paused,

    /// Any status this client does not know about
    Other(String),
}

impl From<String> for TaskStatus {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "init" | "initial" => TaskStatus::Init,
            "running" => TaskStatus::Running,
            "success" | "succeeded" | "completed" => TaskStatus::Success,
            "failed" => TaskStatus::Failed,
            "retry" | "retrying" => TaskStatus::Retry,
            "cancelled" | "canceled" => TaskStatus::Cancelled,
            "paused" => TaskStatus::Paused,
            _ => TaskStatus::Other(s),
        }
    }
}

impl From<TaskStatus> for String {
    fn from(status: TaskStatus) -> Self {
        status.as_str().to_string()
    }
}

impl TaskStatus {
    /// Wire representation used by the backend.
    pub fn as_str(&self) -> &str {
        match self {
            TaskStatus::Init => "init",
            TaskStatus::Running => "running",
            TaskStatus::Success => "success",
            TaskStatus::Failed => "failed",
            TaskStatus::Retry => "retry",
            TaskStatus::Cancelled => "cancelled",
            TaskStatus::Paused => "paused",
            TaskStatus::Other(s) => s,
        }
    }

    /// Whether the backend has stopped working on the task.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            TaskStatus::Success | TaskStatus::Failed | TaskStatus::Cancelled
        )
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wise_core::models::TaskStatus;
    ///
    /// assert_eq!(TaskStatus::Success.with_icon(), "✓ success");
    /// assert_eq!(TaskStatus::Running.with_icon(), "➤ running");
    /// assert_eq!(TaskStatus::Failed.with_icon(), "✗ failed");
    /// ```
    pub fn with_icon(&self) -> String {
        let icon = match self {
            TaskStatus::Init => "○",
            TaskStatus::Running => "➤",
            TaskStatus::Success => "✓",
            TaskStatus::Failed => "✗",
            TaskStatus::Retry => "↻",
            TaskStatus::Cancelled => "⊘",
            TaskStatus::Paused => "‖",
            TaskStatus::Other(_) => "?",
        };
        format!("{icon} {}", self.as_str())
    }
}

/// Status of a single plan (execution step) within a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum PlanStatus {
    /// Not started yet
    #[default]
    Init,

    /// Currently executing
    Running,

    /// Finished successfully
    Success,

    /// Finished with an error
    Failed,

    /// Cancelled along with its task
    Cancelled,

    /// Any status this client does not know about
    Other(String),
}

impl From<String> for PlanStatus {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "init" | "initial" => PlanStatus::Init,
            "running" => PlanStatus::Running,
            "success" | "succeeded" | "completed" => PlanStatus::Success,
            "failed" => PlanStatus::Failed,
            "cancelled" | "canceled" => PlanStatus::Cancelled,
            _ => PlanStatus::Other(s),
        }
    }
}

impl From<PlanStatus> for String {
    fn from(status: PlanStatus) -> Self {
        status.as_str().to_string()
    }
}

impl PlanStatus {
    /// Wire representation used by the backend.
    pub fn as_str(&self) -> &str {
        match self {
            PlanStatus::Init => "init",
            PlanStatus::Running => "running",
            PlanStatus::Success => "success",
            PlanStatus::Failed => "failed",
            PlanStatus::Cancelled => "cancelled",
            PlanStatus::Other(s) => s,
        }
    }

    /// Get status with consistent icon formatting for display.
    pub fn with_icon(&self) -> String {
        let icon = match self {
            PlanStatus::Init => "○",
            PlanStatus::Running => "➤",
            PlanStatus::Success => "✓",
            PlanStatus::Failed => "✗",
            PlanStatus::Cancelled => "⊘",
            PlanStatus::Other(_) => "?",
        };
        format!("{icon} {}", self.as_str())
    }
}
