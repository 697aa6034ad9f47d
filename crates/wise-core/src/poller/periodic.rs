//! Cancellable repeating fetch task.

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use tokio::{
    task::JoinHandle,
    time::{self, Instant, MissedTickBehavior},
};
use tokio_util::sync::CancellationToken;

use super::snapshot::SnapshotStore;
use crate::error::{ConsoleError, Result};

/// Something a poller can fetch and fold into its published state.
#[async_trait]
pub trait SnapshotSource: Send + Sync + 'static {
    /// Payload of one successful fetch.
    type Fetched: Send + 'static;
    /// State published to readers.
    type State: Send + Sync + 'static;

    /// Issue one read query.
    async fn fetch(&self) -> Result<Self::Fetched>;

    /// Fold a fresh payload into the state it replaces.
    fn absorb(&self, previous: Option<Self::State>, fresh: Self::Fetched) -> Self::State;

    /// Short description for log lines.
    fn label(&self) -> String;
}

/// When the first tick fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollStart {
    /// Fetch right away, then every period.
    Immediate,
    /// The state is already seeded; first fetch after one period.
    AfterPeriod,
}

/// Handle to a running poller. Dropping it stops the poller.
#[derive(Debug)]
pub struct Poller {
    token: CancellationToken,
    ticker: JoinHandle<()>,
}

impl Poller {
    /// Spawn a poller on the current tokio runtime.
    ///
    /// Each tick stamps a sequence number and spawns its fetch, so a slow
    /// response never delays the next tick. Stopping cancels the ticker and
    /// every in-flight fetch.
    ///
    /// # Errors
    ///
    /// Returns `ConsoleError::InvalidInput` for a zero `period`.
    pub fn spawn<S: SnapshotSource>(
        source: Arc<S>,
        store: Arc<SnapshotStore<S::State>>,
        period: Duration,
        start: PollStart,
    ) -> Result<Self> {
        if period.is_zero() {
            return Err(
                ConsoleError::invalid_input("period").with_reason("must be greater than zero")
            );
        }
        let token = CancellationToken::new();
        let ticker = tokio::spawn(run_ticker(source, store, period, start, token.clone()));
        Ok(Self { token, ticker })
    }

    /// Stop ticking and abort in-flight fetches. Idempotent.
    pub fn stop(&self) {
        if !self.token.is_cancelled() {
            log::debug!("Stopping poller");
            self.token.cancel();
        }
    }

    pub fn is_stopped(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Whether the ticker task has exited.
    pub fn is_finished(&self) -> bool {
        self.ticker.is_finished()
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

async fn run_ticker<S: SnapshotSource>(
    source: Arc<S>,
    store: Arc<SnapshotStore<S::State>>,
    period: Duration,
    start: PollStart,
    token: CancellationToken,
) {
    let first = match start {
        PollStart::Immediate => Instant::now(),
        PollStart::AfterPeriod => Instant::now() + period,
    };
    let mut ticker = time::interval_at(first, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    log::debug!("Polling {} every {:?}", source.label(), period);

    loop {
        tokio::select! {
            _ = token.cancelled() => break,
            _ = ticker.tick() => {
                let sequence = store.next_sequence();
                tokio::spawn(fetch_once(
                    Arc::clone(&source),
                    Arc::clone(&store),
                    sequence,
                    token.clone(),
                ));
            }
        }
    }
    log::debug!("Stopped polling {}", source.label());
}

async fn fetch_once<S: SnapshotSource>(
    source: Arc<S>,
    store: Arc<SnapshotStore<S::State>>,
    sequence: u64,
    token: CancellationToken,
) {
    let outcome = tokio::select! {
        _ = token.cancelled() => {
            log::debug!("Aborted fetch #{sequence} of {}", source.label());
            return;
        }
        outcome = source.fetch() => outcome,
    };
    if let Err(err) = &outcome {
        log::warn!("Refreshing {} failed: {err}", source.label());
    }
    store.apply(sequence, outcome, &token, |previous, fresh| {
        source.absorb(previous, fresh)
    });
}
