//! Core library for the wise task console.
//!
//! This crate talks to the wise backend's task endpoints and keeps what the
//! console shows approximately fresh: a paginated task list polled every few
//! seconds, and a task visualization view whose selected plan survives polls.
//!
//! # Architecture
//!
//! - **Client** ([`client`]): REST calls wrapped in the `{code, msg, data}`
//!   envelope, with every failure surfaced as a [`ConsoleError`]
//! - **Pollers** ([`poller`]): cancellable periodic fetches publishing
//!   sequence-checked snapshots, so a slow response never overwrites a newer
//!   one
//! - **View** ([`view`]): the open/close state machine of the detail view and
//!   its plan selection
//! - **Display** ([`display`]): markdown formatting for the terminal renderer
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::{sync::Arc, time::Duration};
//!
//! use wise_core::{params::ListTasks, ClientBuilder, ListPoller, VisualizationView};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Arc::new(
//!     ClientBuilder::new()
//!         .with_base_url("http://127.0.0.1:8888/wise/api")
//!         .build()?,
//! );
//!
//! // Keep the first page of running tasks fresh
//! let params = ListTasks {
//!     status: Some("running".to_string()),
//!     ..Default::default()
//! };
//! let list = ListPoller::start(client.clone(), params, Duration::from_secs(5))?;
//!
//! // Open one task and follow its plans
//! let mut view = VisualizationView::new(client, Duration::from_secs(2));
//! view.open("T1").await?;
//! if let Some(selection) = view.selection() {
//!     println!("{}", selection.plan());
//! }
//! view.close();
//! drop(list);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod poller;
pub mod view;

// Re-export commonly used types
pub use client::{ClientBuilder, ConsoleClient, TaskApi};
pub use config::ConsoleConfig;
pub use display::{
    ActionResult, CreateResult, DeleteResult, DetailScreen, ListScreen, TaskPageView, Tasks,
    UpdateResult,
};
pub use error::{ConsoleError, Result};
pub use models::{Plan, PlanStatus, Task, TaskPage, TaskStatus, TaskVisualization};
pub use params::{CreateTask, DeleteTask, ListTasks, TaskAction, TaskId, UpdateTask};
pub use poller::{ListPoller, Snapshot};
pub use view::{DetailState, Selection, ViewPhase, VisualizationView};
