//! Paginated task list.

use serde::{Deserialize, Serialize};

use super::{serde_helpers::null_as_default, Task};

/// One page of tasks as returned by `GET /tasks`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TaskPage {
    /// Total number of tasks matching the filter, across all pages
    #[serde(default)]
    pub total: u64,

    /// Tasks on this page
    #[serde(default, deserialize_with = "null_as_default")]
    pub list: Vec<Task>,
}

impl TaskPage {
    /// Number of pages for the given page size.
    pub fn page_count(&self, page_size: u32) -> u64 {
        if page_size == 0 {
            return 0;
        }
        self.total.div_ceil(u64::from(page_size))
    }
}
