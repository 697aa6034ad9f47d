//! Display formatting functions and result types.
//!
//! Domain models implement [`std::fmt::Display`] directly; the wrappers here
//! add context (pagination headers, operation results, refresh health). All
//! output is markdown so the CLI can render it richly or print it as is.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrapper Types   │    │   Formatted     │
//! │ (Task, Plan)    │───▶│ & Live Screens  │───▶│    Markdown     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! - [`collections`]: task lists and paginated pages
//! - [`results`]: create/update/delete/action outcomes
//! - [`live`]: polled list and detail screens
//! - [`payload`]: JSON-aware payload blocks
//! - [`datetime`]: timestamp formatting
//! - [`models`]: Display implementations for domain models

pub mod collections;
pub mod datetime;
pub mod live;
pub mod models;
pub mod payload;
pub mod results;

pub use collections::{TaskPageView, Tasks};
pub use datetime::{BackendTime, LocalDateTime};
pub use live::{DetailScreen, ListScreen};
pub use payload::Payload;
pub use results::{ActionResult, CreateResult, DeleteResult, UpdateResult};
