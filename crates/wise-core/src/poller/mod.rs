//! Client-side pollers that keep cached snapshots approximately fresh.
//!
//! - [`snapshot`]: sequence-stamped store published over a `watch` channel
//! - [`periodic`]: the cancellable repeating task behind every poller
//! - [`list`]: the task list poller (5 s by default)
//!
//! The visualization poller is owned by [`crate::view::VisualizationView`].
//!
//! Failures never propagate out of a poller: they are logged, counted in the
//! snapshot, and the previous data stays displayed until the next success.
//! There is no retry or backoff; a degraded backend is polled at full rate.

pub mod list;
pub mod periodic;
pub mod snapshot;

pub use list::{ListPoller, TaskListSource};
pub use periodic::{PollStart, Poller, SnapshotSource};
pub use snapshot::{Snapshot, SnapshotStore};
