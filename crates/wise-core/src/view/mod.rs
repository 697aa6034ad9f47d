//! Task visualization view: one task's detail kept fresh while open.
//!
//! # State machine
//!
//! ```text
//!   Closed ──open()──▶ Opening ──first fetch ok──▶ Open ──close()──▶ Closing ──▶ Closed
//!                         │                         │ ▲
//!                         └──first fetch failed─────┼─┘ select() stays Open
//!                                  ▼                │
//!                               Closed              ▼
//! ```
//!
//! The view counts as open only once its first snapshot has arrived, so a
//! failed open never leaves an empty view behind. While open, a poller
//! refreshes the detail every period and re-resolves the selected plan; see
//! [`Selection`] for the reconciliation policy.

use std::{fmt, sync::Arc, time::Duration};

use async_trait::async_trait;
use tokio::sync::watch;

use crate::{
    client::TaskApi,
    error::{ConsoleError, Result},
    models::{Plan, TaskVisualization},
    poller::{PollStart, Poller, Snapshot, SnapshotSource, SnapshotStore},
};

pub mod selection;

pub use selection::{Reconciled, Selection};

/// Published state of an open view.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailState {
    pub detail: TaskVisualization,
    pub selection: Option<Selection>,
}

impl DetailState {
    /// Fresh state for a just-opened view, selecting the first plan.
    pub fn opened(detail: TaskVisualization) -> Self {
        let selection = detail.first_plan().cloned().map(Selection::new);
        Self { detail, selection }
    }

    /// Replace the detail wholesale and re-resolve the selection.
    pub fn refresh(&mut self, detail: TaskVisualization) {
        if let Some(selection) = self.selection.as_mut() {
            selection.reconcile(&detail.plans);
        }
        self.detail = detail;
    }
}

/// Fetches the detail snapshot of one fixed task.
pub struct TaskDetailSource {
    api: Arc<dyn TaskApi>,
    tid: String,
}

#[async_trait]
impl SnapshotSource for TaskDetailSource {
    type Fetched = TaskVisualization;
    type State = DetailState;

    async fn fetch(&self) -> Result<TaskVisualization> {
        self.api.task_visualization(&self.tid).await
    }

    fn absorb(&self, previous: Option<DetailState>, fresh: TaskVisualization) -> DetailState {
        match previous {
            Some(mut state) => {
                state.refresh(fresh);
                state
            }
            None => DetailState::opened(fresh),
        }
    }

    fn label(&self) -> String {
        format!("task {}", self.tid)
    }
}

/// Lifecycle phase of a [`VisualizationView`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewPhase {
    Closed,
    Opening,
    Open,
    Closing,
}

impl ViewPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewPhase::Closed => "closed",
            ViewPhase::Opening => "opening",
            ViewPhase::Open => "open",
            ViewPhase::Closing => "closing",
        }
    }
}

impl fmt::Display for ViewPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Detail view controller for one task at a time.
pub struct VisualizationView {
    api: Arc<dyn TaskApi>,
    period: Duration,
    phase: ViewPhase,
    tid: Option<String>,
    store: Arc<SnapshotStore<DetailState>>,
    poller: Option<Poller>,
}

impl VisualizationView {
    pub fn new(api: Arc<dyn TaskApi>, period: Duration) -> Self {
        Self {
            api,
            period,
            phase: ViewPhase::Closed,
            tid: None,
            store: Arc::new(SnapshotStore::new()),
            poller: None,
        }
    }

    pub fn phase(&self) -> ViewPhase {
        self.phase
    }

    /// Task the view is open for.
    pub fn tid(&self) -> Option<&str> {
        self.tid.as_deref()
    }

    fn require_open(&self, operation: &'static str) -> Result<()> {
        if self.phase == ViewPhase::Open {
            Ok(())
        } else {
            Err(ConsoleError::ViewState {
                state: self.phase.as_str(),
                operation,
            })
        }
    }

    /// Open the view for `tid`.
    ///
    /// Fetches the first snapshot, selects the first plan, then starts
    /// polling. Must be called from within a tokio runtime. Dropping the
    /// returned future before it settles leaves the view closed.
    ///
    /// # Errors
    ///
    /// Returns `ConsoleError::ViewState` unless the view is closed, or the
    /// fetch error, in which case the view stays closed.
    pub async fn open(&mut self, tid: &str) -> Result<()> {
        if self.phase != ViewPhase::Closed {
            return Err(ConsoleError::ViewState {
                state: self.phase.as_str(),
                operation: "open",
            });
        }
        let opening = Opening::enter(&mut self.phase);
        log::info!("Opening visualization for task {tid}");

        let detail = match self.api.task_visualization(tid).await {
            Ok(detail) => detail,
            Err(err) => {
                log::error!("Loading visualization for task {tid} failed: {err}");
                return Err(err);
            }
        };

        let source = Arc::new(TaskDetailSource {
            api: Arc::clone(&self.api),
            tid: tid.to_string(),
        });
        let poller = Poller::spawn(
            source,
            Arc::clone(&self.store),
            self.period,
            PollStart::AfterPeriod,
        )?;
        self.store.seed(DetailState::opened(detail));
        self.poller = Some(poller);
        self.tid = Some(tid.to_string());
        opening.complete();
        Ok(())
    }

    /// Select the plan with identifier `pid` from the current snapshot.
    pub fn select(&self, pid: &str) -> Result<Plan> {
        self.select_where("select", pid, |detail| detail.find_plan(pid).cloned())
    }

    /// Select the plan at a 0-based position in the current plan list.
    pub fn select_position(&self, position: usize) -> Result<Plan> {
        self.select_where("select", &position.to_string(), |detail| {
            detail.plans.get(position).cloned()
        })
    }

    fn select_where(
        &self,
        operation: &'static str,
        wanted: &str,
        pick: impl FnOnce(&TaskVisualization) -> Option<Plan>,
    ) -> Result<Plan> {
        self.require_open(operation)?;
        let picked = self
            .store
            .update(|state| {
                let plan = pick(&state.detail)?;
                state.selection = Some(Selection::new(plan.clone()));
                Some(plan)
            })
            .flatten();
        picked.ok_or_else(|| {
            ConsoleError::invalid_input("plan").with_reason(format!("no plan {wanted} in task"))
        })
    }

    /// Currently selected plan, if any.
    pub fn selection(&self) -> Option<Selection> {
        self.store.current().data.and_then(|state| state.selection)
    }

    /// Current detail snapshot, if open.
    pub fn detail(&self) -> Option<TaskVisualization> {
        self.store.current().data.map(|state| state.detail)
    }

    pub fn snapshot(&self) -> Snapshot<DetailState> {
        self.store.current()
    }

    /// Receiver notified on every applied poll and selection change.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot<DetailState>> {
        self.store.subscribe()
    }

    /// Close the view: stop polling, then discard snapshot and selection.
    ///
    /// Closing an already closed view is a no-op.
    pub fn close(&mut self) {
        if self.phase == ViewPhase::Closed {
            return;
        }
        self.phase = ViewPhase::Closing;
        if let Some(poller) = self.poller.take() {
            poller.stop();
        }
        self.store.clear();
        if let Some(tid) = self.tid.take() {
            log::info!("Closed visualization for task {tid}");
        }
        self.phase = ViewPhase::Closed;
    }
}

/// Holds the phase at `Opening` while the first fetch is in flight and
/// falls back to `Closed` unless completed.
struct Opening<'a> {
    phase: &'a mut ViewPhase,
    completed: bool,
}

impl<'a> Opening<'a> {
    fn enter(phase: &'a mut ViewPhase) -> Self {
        *phase = ViewPhase::Opening;
        Self {
            phase,
            completed: false,
        }
    }

    fn complete(mut self) {
        *self.phase = ViewPhase::Open;
        self.completed = true;
    }
}

impl Drop for Opening<'_> {
    fn drop(&mut self) {
        if !self.completed {
            *self.phase = ViewPhase::Closed;
        }
    }
}

impl Drop for VisualizationView {
    fn drop(&mut self) {
        self.close();
    }
}
