//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::{
    models::{ActionOutcome, Task},
    params::TaskAction,
};

/// Wrapper type for displaying the result of create operations.
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Task> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created task with ID: {}", self.resource.tid)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of update operations, listing
/// the fields that were sent.
///
/// # Examples
///
/// ```rust
/// use wise_core::{display::UpdateResult, models::Task};
///
/// let task = Task { tid: "T1".to_string(), ..Default::default() };
/// let output = UpdateResult::with_changes(task, vec!["status".to_string()]).to_string();
/// assert!(output.contains("Updated task T1"));
/// assert!(output.contains("- status"));
/// ```
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl fmt::Display for UpdateResult<Task> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated task {}", self.resource.tid)?;
        writeln!(f)?;
        if !self.changes.is_empty() {
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
            writeln!(f)?;
        }
        write!(f, "{}", self.resource)
    }
}

/// Confirmation of a deleted task.
pub struct DeleteResult {
    pub tid: String,
}

impl fmt::Display for DeleteResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Deleted task {}", self.tid)
    }
}

/// Outcome of a lifecycle transition request.
pub struct ActionResult {
    pub action: TaskAction,
    pub tid: String,
    pub outcome: ActionOutcome,
}

impl fmt::Display for ActionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Requested {} for task {}", self.action, self.tid)?;
        if self.outcome.result.is_empty() {
            writeln!(f)
        } else {
            writeln!(f, ": {}", self.outcome.result)
        }
    }
}
