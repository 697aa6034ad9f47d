//! Command-line argument definitions using clap.
//!
//! Each command's arguments live in a clap-derived wrapper that converts into
//! the framework-free request type from `wise_core::params`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → ConsoleClient
//! ```

use clap::{Args, Subcommand};
use wise_core::params::{
    CreateTask, DeleteTask, ListTasks, TaskId, UpdateTask, DEFAULT_PAGE_SIZE,
};

/// List tasks
///
/// Shows one page of tasks matching the filters. With `--watch` the page is
/// re-fetched periodically until Ctrl-C.
#[derive(Args)]
pub struct ListTasksArgs {
    /// 1-based page number
    #[arg(long, default_value_t = 1)]
    pub page: u32,
    /// Rows per page. Defaults to the configured page size
    #[arg(long)]
    pub page_size: Option<u32>,
    /// Only tasks whose name contains this text
    #[arg(short, long)]
    pub name: Option<String>,
    /// Only tasks of this type
    #[arg(short, long)]
    pub types: Option<String>,
    /// Only tasks in this status (init, running, success, failed, ...)
    #[arg(short, long)]
    pub status: Option<String>,
    /// Keep refreshing the page until interrupted
    #[arg(short, long)]
    pub watch: bool,
}

impl From<ListTasksArgs> for ListTasks {
    fn from(val: ListTasksArgs) -> Self {
        ListTasks {
            page: val.page.max(1),
            page_size: val.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
            name: val.name,
            types: val.types,
            status: val.status,
        }
    }
}

/// Identifies a single task
#[derive(Args)]
pub struct TaskIdArgs {
    #[arg(help = "Identifier of the task")]
    pub tid: String,
}

impl From<TaskIdArgs> for TaskId {
    fn from(val: TaskIdArgs) -> Self {
        TaskId { tid: val.tid }
    }
}

/// Follow a task's plans live
///
/// Opens the visualization view and refreshes it periodically. While
/// watching, type a plan id or its 1-based position and press enter to
/// select it; `q` or Ctrl-C closes the view. Once stdin is closed, the view
/// also closes when the task reaches a terminal status.
#[derive(Args)]
pub struct WatchTaskArgs {
    #[arg(help = "Identifier of the task to watch")]
    pub tid: String,
    /// Plan to select initially instead of the first one
    #[arg(short, long)]
    pub plan: Option<String>,
}

/// Create a new task
#[derive(Args)]
pub struct CreateTaskArgs {
    /// Name of the task
    pub name: String,
    /// Task type
    #[arg(short, long)]
    pub types: String,
    /// Input payload, usually JSON
    #[arg(short, long, default_value = "")]
    pub params: String,
    /// Number of steps the task will run
    #[arg(long, default_value_t = 0)]
    pub total_steps: u32,
    /// Initial state machine node
    #[arg(long, default_value = "")]
    pub current_state: String,
}

impl From<CreateTaskArgs> for CreateTask {
    fn from(val: CreateTaskArgs) -> Self {
        CreateTask {
            name: val.name,
            types: val.types,
            params: val.params,
            total_steps: val.total_steps,
            current_state: val.current_state,
        }
    }
}

/// Update fields of a task
///
/// Only the given fields are sent.
#[derive(Args)]
pub struct UpdateTaskArgs {
    #[arg(help = "Identifier of the task to update")]
    pub tid: String,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(short, long)]
    pub status: Option<String>,
    #[arg(long)]
    pub current_state: Option<String>,
    #[arg(long)]
    pub current_step: Option<u32>,
    #[arg(long)]
    pub result: Option<String>,
    #[arg(long)]
    pub error: Option<String>,
    #[arg(long)]
    pub extend: Option<String>,
}

impl From<UpdateTaskArgs> for UpdateTask {
    fn from(val: UpdateTaskArgs) -> Self {
        UpdateTask {
            tid: val.tid,
            name: val.name,
            status: val.status,
            current_state: val.current_state,
            current_step: val.current_step,
            result: val.result,
            error: val.error,
            extend: val.extend,
        }
    }
}

/// Delete a task permanently
#[derive(Args)]
pub struct DeleteTaskArgs {
    #[arg(help = "Identifier of the task to delete")]
    pub tid: String,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

impl From<DeleteTaskArgs> for DeleteTask {
    fn from(val: DeleteTaskArgs) -> Self {
        DeleteTask {
            tid: val.tid,
            confirmed: val.confirm,
        }
    }
}

#[derive(Subcommand)]
pub enum TaskCommands {
    /// List tasks
    #[command(aliases = ["l", "ls"])]
    List(ListTasksArgs),
    /// Show details of a task
    #[command(alias = "s")]
    Show(TaskIdArgs),
    /// Follow a task's plans live
    #[command(alias = "w")]
    Watch(WatchTaskArgs),
    /// Create a new task
    #[command(alias = "c")]
    Create(CreateTaskArgs),
    /// Update fields of a task
    #[command(alias = "u")]
    Update(UpdateTaskArgs),
    /// Delete a task permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteTaskArgs),
    /// Retry a failed task
    Retry(TaskIdArgs),
    /// Pause a running task
    Pause(TaskIdArgs),
    /// Resume a paused task
    Resume(TaskIdArgs),
    /// Cancel a running task
    Cancel(TaskIdArgs),
}
