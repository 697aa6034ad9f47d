//! Parameter structures for console operations.
//!
//! These are framework-free request shapes shared by the library and the
//! CLI. The CLI wraps them with clap derives and converts via `From`, which
//! keeps clap out of the core crate.

use serde::Serialize;

/// Default number of rows per page, matching the backend console.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Search filter and pagination for the task list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListTasks {
    /// 1-based page number
    pub page: u32,
    pub page_size: u32,
    /// Name filter (backend does a partial match)
    pub name: Option<String>,
    /// Category filter
    pub types: Option<String>,
    /// Status filter
    pub status: Option<String>,
}

impl Default for ListTasks {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            name: None,
            types: None,
            status: None,
        }
    }
}

impl ListTasks {
    /// Query-string pairs for `GET /tasks`. Empty filter values are omitted,
    /// as are the catch-all `all` values the console uses for "no filter".
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wise_core::params::ListTasks;
    ///
    /// let params = ListTasks {
    ///     name: Some("".to_string()),
    ///     status: Some("running".to_string()),
    ///     types: Some("all".to_string()),
    ///     ..Default::default()
    /// };
    /// let pairs = params.query_pairs();
    /// assert_eq!(
    ///     pairs,
    ///     vec![
    ///         ("page", "1".to_string()),
    ///         ("page_size", "10".to_string()),
    ///         ("status", "running".to_string()),
    ///     ]
    /// );
    /// ```
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("page_size", self.page_size.to_string()),
        ];
        let filters = [
            ("name", &self.name),
            ("types", &self.types),
            ("status", &self.status),
        ];
        for (key, value) in filters {
            if let Some(value) = value.as_deref().map(str::trim) {
                if !value.is_empty() && value != "all" {
                    pairs.push((key, value.to_string()));
                }
            }
        }
        pairs
    }
}

/// Parameters for operations requiring just a task identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TaskId {
    pub tid: String,
}

impl TaskId {
    pub fn new(tid: impl Into<String>) -> Self {
        Self { tid: tid.into() }
    }
}

/// Body of `POST /task`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateTask {
    pub name: String,
    pub types: String,
    pub params: String,
    pub total_steps: u32,
    pub current_state: String,
}

/// Body of `PUT /task`. Only the fields that are set are sent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateTask {
    pub tid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_step: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extend: Option<String>,
}

impl UpdateTask {
    /// Names of the fields this update will change.
    pub fn changed_fields(&self) -> Vec<&'static str> {
        let fields = [
            ("name", self.name.is_some()),
            ("status", self.status.is_some()),
            ("current_state", self.current_state.is_some()),
            ("current_step", self.current_step.is_some()),
            ("result", self.result.is_some()),
            ("error", self.error.is_some()),
            ("extend", self.extend.is_some()),
        ];
        fields
            .into_iter()
            .filter_map(|(name, set)| set.then_some(name))
            .collect()
    }
}

/// Parameters for deleting a task.
#[derive(Debug, Clone, Default)]
pub struct DeleteTask {
    pub tid: String,
    /// Deletion is refused unless explicitly confirmed
    pub confirmed: bool,
}

/// Lifecycle transition requests, sent as `POST /task/{action}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskAction {
    Retry,
    Pause,
    Resume,
    Cancel,
}

impl TaskAction {
    /// Path segment of the action endpoint.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskAction::Retry => "retry",
            TaskAction::Pause => "pause",
            TaskAction::Resume => "resume",
            TaskAction::Cancel => "cancel",
        }
    }

    /// Whether the console offers this action for a task in `status`.
    ///
    /// Advisory only: the backend decides whether the transition is legal.
    pub fn offered_for(&self, status: &crate::models::TaskStatus) -> bool {
        use crate::models::TaskStatus;
        match self {
            TaskAction::Retry => *status == TaskStatus::Failed,
            TaskAction::Pause | TaskAction::Cancel => *status == TaskStatus::Running,
            TaskAction::Resume => *status == TaskStatus::Paused,
        }
    }
}

impl std::fmt::Display for TaskAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
