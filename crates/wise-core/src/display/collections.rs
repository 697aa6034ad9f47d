//! Collection wrapper types for displaying groups of tasks.

use std::fmt;

use super::{datetime::BackendTime, models::progress};
use crate::{
    models::{Task, TaskPage},
    params::{ListTasks, TaskAction},
};

/// Newtype wrapper for displaying a list of tasks as compact entries.
///
/// # Examples
///
/// ```rust
/// use wise_core::{display::Tasks, models::{Task, TaskStatus}};
///
/// let task = Task {
///     tid: "T1".to_string(),
///     name: "mark url".to_string(),
///     status: TaskStatus::Running,
///     total_steps: 4,
///     current_step: 1,
///     ..Default::default()
/// };
/// let output = Tasks(vec![task]).to_string();
/// assert!(output.contains("## mark url (ID: T1)"));
/// assert!(output.contains("1/4"));
/// assert_eq!(Tasks(vec![]).to_string(), "No tasks found.\n");
/// ```
pub struct Tasks(pub Vec<Task>);

impl Tasks {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a Tasks {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Lifecycle actions the console offers for a task's current status.
fn offered_actions(task: &Task) -> Vec<&'static str> {
    [
        TaskAction::Retry,
        TaskAction::Pause,
        TaskAction::Resume,
        TaskAction::Cancel,
    ]
    .into_iter()
    .filter(|action| action.offered_for(&task.status))
    .map(|action| action.as_str())
    .collect()
}

fn fmt_task_entry(f: &mut fmt::Formatter<'_>, task: &Task) -> fmt::Result {
    writeln!(f, "## {} (ID: {})", task.name, task.tid)?;
    writeln!(f)?;
    writeln!(
        f,
        "- **Status**: {} ({})",
        task.status.with_icon(),
        progress(task.current_step, task.total_steps)
    )?;
    writeln!(f, "- **Type**: {}", task.types)?;
    writeln!(f, "- **Created**: {}", BackendTime(&task.created_at))?;
    let actions = offered_actions(task);
    if !actions.is_empty() {
        writeln!(f, "- **Actions**: {}", actions.join(", "))?;
    }
    writeln!(f)
}

impl fmt::Display for Tasks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No tasks found.");
        }
        for task in &self.0 {
            fmt_task_entry(f, task)?;
        }
        Ok(())
    }
}

/// One page of the task list with its pagination header.
pub struct TaskPageView<'a> {
    pub page: &'a TaskPage,
    pub params: &'a ListTasks,
}

impl<'a> fmt::Display for TaskPageView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pages = self.page.page_count(self.params.page_size).max(1);
        writeln!(
            f,
            "# Tasks (page {}/{}, {} total)",
            self.params.page, pages, self.page.total
        )?;
        writeln!(f)?;
        if self.page.list.is_empty() {
            return writeln!(f, "No tasks found.");
        }
        for task in &self.page.list {
            fmt_task_entry(f, task)?;
        }
        Ok(())
    }
}
