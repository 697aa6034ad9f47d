//! HTTP client for the task endpoints of the backend.
//!
//! [`ConsoleClient`] speaks the REST API directly. The pollers only need the
//! two read queries, so they depend on the narrower [`TaskApi`] trait, which
//! also lets tests drive them with an in-memory backend.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │ Pollers / View  │    │  ConsoleClient  │    │  REST backend   │
//! │  (via TaskApi)  │───▶│ (reqwest, JSON) │───▶│ {code,msg,data} │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,no_run
//! use wise_core::{params::ListTasks, ClientBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ClientBuilder::new()
//!     .with_base_url("http://127.0.0.1:8888/wise/api")
//!     .build()?;
//! let page = client.list_tasks(&ListTasks::default()).await?;
//! println!("{} tasks", page.total);
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;

use crate::{
    error::Result,
    models::{TaskPage, TaskVisualization},
    params::ListTasks,
};

pub mod builder;
pub mod task_ops;
mod transport;

pub use builder::ClientBuilder;

/// Read queries the pollers depend on.
#[async_trait]
pub trait TaskApi: Send + Sync {
    /// One page of tasks matching the filter.
    async fn list_tasks(&self, params: &ListTasks) -> Result<TaskPage>;

    /// Detail snapshot of one task including its plans.
    async fn task_visualization(&self, tid: &str) -> Result<TaskVisualization>;
}

/// REST client for the task endpoints.
#[derive(Debug, Clone)]
pub struct ConsoleClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
}

impl ConsoleClient {
    pub(crate) fn new(http: reqwest::Client, base_url: String) -> Self {
        Self { http, base_url }
    }

    /// Base URL requests are resolved against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl TaskApi for ConsoleClient {
    async fn list_tasks(&self, params: &ListTasks) -> Result<TaskPage> {
        ConsoleClient::list_tasks(self, params).await
    }

    async fn task_visualization(&self, tid: &str) -> Result<TaskVisualization> {
        ConsoleClient::task_visualization(self, tid).await
    }
}
