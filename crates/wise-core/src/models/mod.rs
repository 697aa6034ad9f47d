//! Data models for tasks and their execution plans.
//!
//! Every model here is a read-through copy of backend state. Nothing is
//! validated or mutated locally; a fresh poll replaces the previous copy
//! wholesale. Display implementations live in [`crate::display::models`].
//!
//! # Examples
//!
//! ```rust
//! use wise_core::models::{TaskStatus, TaskVisualization};
//!
//! let body = r#"{
//!     "tid": "T1",
//!     "name": "mark url",
//!     "status": "running",
//!     "total_steps": 3,
//!     "current_step": 1,
//!     "plans": [{"pid": "P1", "name": "read", "index": 0, "status": "success"}],
//!     "created_at": "2024-03-01 08:30:00"
//! }"#;
//! let detail: TaskVisualization = serde_json::from_str(body).unwrap();
//! assert_eq!(detail.status, TaskStatus::Running);
//! assert_eq!(detail.first_plan().map(|p| p.pid.as_str()), Some("P1"));
//! ```

pub mod envelope;
pub mod page;
pub mod plan;
pub mod serde_helpers;
pub mod status;
pub mod task;
pub mod visualization;

#[cfg(test)]
mod tests;

pub use envelope::{ActionOutcome, Envelope};
pub use page::TaskPage;
pub use plan::Plan;
pub use status::{PlanStatus, TaskStatus};
pub use task::Task;
pub use visualization::TaskVisualization;
