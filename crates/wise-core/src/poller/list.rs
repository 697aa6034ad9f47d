//! Task list poller.

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use super::{
    periodic::{PollStart, Poller, SnapshotSource},
    snapshot::{Snapshot, SnapshotStore},
};
use crate::{client::TaskApi, error::Result, models::TaskPage, params::ListTasks};

/// Fetches one page of the task list for a fixed filter.
pub struct TaskListSource {
    api: Arc<dyn TaskApi>,
    params: ListTasks,
}

impl TaskListSource {
    pub fn new(api: Arc<dyn TaskApi>, params: ListTasks) -> Self {
        Self { api, params }
    }
}

#[async_trait]
impl SnapshotSource for TaskListSource {
    type Fetched = TaskPage;
    type State = TaskPage;

    async fn fetch(&self) -> Result<TaskPage> {
        self.api.list_tasks(&self.params).await
    }

    fn absorb(&self, _previous: Option<TaskPage>, fresh: TaskPage) -> TaskPage {
        fresh
    }

    fn label(&self) -> String {
        format!("task list page {}", self.params.page)
    }
}

/// Keeps the visible task table fresh while it is mounted.
///
/// The list and total are replaced verbatim on every successful poll.
/// Changing the filter or page restarts polling against the new parameters
/// with an immediate fetch; the previous page stays visible until then.
pub struct ListPoller {
    api: Arc<dyn TaskApi>,
    params: ListTasks,
    period: Duration,
    store: Arc<SnapshotStore<TaskPage>>,
    poller: Option<Poller>,
}

impl ListPoller {
    /// Start polling. Must be called from within a tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns `ConsoleError::InvalidInput` for a zero `period`.
    pub fn start(api: Arc<dyn TaskApi>, params: ListTasks, period: Duration) -> Result<Self> {
        let mut list = Self {
            api,
            params,
            period,
            store: Arc::new(SnapshotStore::new()),
            poller: None,
        };
        list.restart()?;
        Ok(list)
    }

    fn restart(&mut self) -> Result<()> {
        if let Some(poller) = self.poller.take() {
            poller.stop();
        }
        log::info!(
            "Polling task list (page {}, size {})",
            self.params.page,
            self.params.page_size
        );
        let source = Arc::new(TaskListSource::new(
            Arc::clone(&self.api),
            self.params.clone(),
        ));
        self.poller = Some(Poller::spawn(
            source,
            Arc::clone(&self.store),
            self.period,
            PollStart::Immediate,
        )?);
        Ok(())
    }

    /// Current filter and pagination.
    pub fn params(&self) -> &ListTasks {
        &self.params
    }

    /// Switch filter or page. A no-op when nothing changed.
    pub fn set_params(&mut self, params: ListTasks) -> Result<()> {
        if params == self.params && self.is_running() {
            return Ok(());
        }
        self.params = params;
        self.restart()
    }

    /// Out-of-band reload, used after a user action.
    ///
    /// Unlike a tick, a failure is returned to the caller and not counted in
    /// the snapshot. A success goes through the same sequence check as the
    /// ticks.
    pub async fn refresh_now(&self) -> Result<()> {
        let sequence = self.store.next_sequence();
        let page = self.api.list_tasks(&self.params).await?;
        let token = CancellationToken::new();
        self.store
            .apply(sequence, Ok(page), &token, |_, fresh| fresh);
        Ok(())
    }

    /// Stop polling (unmount). The last snapshot stays readable.
    pub fn stop(&mut self) {
        if let Some(poller) = self.poller.take() {
            poller.stop();
        }
    }

    pub fn is_running(&self) -> bool {
        self.poller
            .as_ref()
            .is_some_and(|p| !p.is_stopped() && !p.is_finished())
    }

    pub fn snapshot(&self) -> Snapshot<TaskPage> {
        self.store.current()
    }

    pub fn subscribe(&self) -> watch::Receiver<Snapshot<TaskPage>> {
        self.store.subscribe()
    }
}

impl Drop for ListPoller {
    fn drop(&mut self) {
        self.stop();
    }
}
