//! Screens for live, polled views.
//!
//! Both screens surface refresh health: when recent polls failed, a banner
//! says how many and since when the data has been unchanged, instead of
//! silently showing stale data.

use std::fmt;

use super::{collections::TaskPageView, datetime::LocalDateTime};
use crate::{
    models::TaskPage,
    params::ListTasks,
    poller::Snapshot,
    view::DetailState,
};

fn health_banner<T>(f: &mut fmt::Formatter<'_>, snapshot: &Snapshot<T>) -> fmt::Result {
    if !snapshot.is_degraded() {
        return Ok(());
    }
    write!(
        f,
        "> ⚠ {} refresh(es) failed",
        snapshot.consecutive_failures
    )?;
    if let Some(at) = &snapshot.refreshed_at {
        write!(f, ", showing data from {}", LocalDateTime(at))?;
    }
    if let Some(err) = &snapshot.last_error {
        write!(f, ": {err}")?;
    }
    writeln!(f)?;
    writeln!(f)
}

/// Live task list.
pub struct ListScreen<'a> {
    pub snapshot: &'a Snapshot<TaskPage>,
    pub params: &'a ListTasks,
}

impl<'a> fmt::Display for ListScreen<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        health_banner(f, self.snapshot)?;
        match &self.snapshot.data {
            Some(page) => write!(
                f,
                "{}",
                TaskPageView {
                    page,
                    params: self.params
                }
            ),
            None if self.snapshot.is_degraded() => writeln!(f, "Task list unavailable."),
            None => writeln!(f, "Loading tasks..."),
        }
    }
}

/// Live task visualization with the selected plan's detail.
pub struct DetailScreen<'a> {
    pub snapshot: &'a Snapshot<DetailState>,
}

impl<'a> fmt::Display for DetailScreen<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        health_banner(f, self.snapshot)?;
        let Some(state) = &self.snapshot.data else {
            return writeln!(f, "No task open.");
        };
        write!(f, "{}", state.detail)?;
        writeln!(f)?;

        match &state.selection {
            Some(selection) => {
                writeln!(f, "## Selected plan")?;
                writeln!(f)?;
                if selection.is_stale() {
                    writeln!(
                        f,
                        "> ⚠ Plan {} is no longer reported by the backend; showing its last known state.",
                        selection.pid()
                    )?;
                    writeln!(f)?;
                }
                write!(f, "{}", selection.plan())
            }
            None => writeln!(f, "No plan selected."),
        }
    }
}
