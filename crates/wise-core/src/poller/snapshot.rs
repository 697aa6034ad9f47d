//! Sequence-stamped snapshot store.
//!
//! Every fetch is stamped with a number from the store's counter before it
//! is sent. A settled response is applied only when its number is higher
//! than that of the last applied success, so a slow response can never
//! overwrite a newer one. The store publishes through a `watch` channel: one
//! writer, any number of readers.

use std::sync::atomic::{AtomicU64, Ordering};

use jiff::Timestamp;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use crate::error::ConsoleError;

/// What a renderer sees: the last applied state plus refresh health.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot<T> {
    /// Last applied state, `None` before the first success or after a clear
    pub data: Option<T>,
    /// Sequence number of the response `data` came from
    pub sequence: u64,
    /// Failed polls since the last applied success
    pub consecutive_failures: u32,
    /// Message of the most recent failure
    pub last_error: Option<String>,
    /// When `data` was last replaced
    pub refreshed_at: Option<Timestamp>,
}

impl<T> Default for Snapshot<T> {
    fn default() -> Self {
        Self {
            data: None,
            sequence: 0,
            consecutive_failures: 0,
            last_error: None,
            refreshed_at: None,
        }
    }
}

impl<T> Snapshot<T> {
    /// Whether the displayed data may be out of date because recent polls
    /// failed.
    pub fn is_degraded(&self) -> bool {
        self.consecutive_failures > 0
    }
}

/// Single-writer store for one poller's snapshot.
#[derive(Debug)]
pub struct SnapshotStore<T> {
    tx: watch::Sender<Snapshot<T>>,
    next_sequence: AtomicU64,
}

impl<T> Default for SnapshotStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SnapshotStore<T> {
    pub fn new() -> Self {
        Self {
            tx: watch::Sender::new(Snapshot::default()),
            next_sequence: AtomicU64::new(1),
        }
    }

    /// Stamp for the next outgoing request. Strictly increasing.
    pub fn next_sequence(&self) -> u64 {
        self.next_sequence.fetch_add(1, Ordering::Relaxed)
    }

    /// Receiver that observes every applied change.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot<T>> {
        self.tx.subscribe()
    }

    /// Apply a settled response stamped `sequence`.
    ///
    /// `absorb` folds a successful payload into the state it replaces. Nothing
    /// is applied once `token` is cancelled. Returns whether the snapshot
    /// changed.
    pub fn apply<F>(
        &self,
        sequence: u64,
        outcome: Result<F, ConsoleError>,
        token: &CancellationToken,
        absorb: impl FnOnce(Option<T>, F) -> T,
    ) -> bool {
        self.tx.send_if_modified(|snapshot| {
            if token.is_cancelled() {
                log::debug!("Discarding response #{sequence}: poller stopped");
                return false;
            }
            if sequence <= snapshot.sequence {
                log::debug!(
                    "Discarding response #{sequence}: #{} already applied",
                    snapshot.sequence
                );
                return false;
            }
            match outcome {
                Ok(fresh) => {
                    let previous = snapshot.data.take();
                    snapshot.data = Some(absorb(previous, fresh));
                    snapshot.sequence = sequence;
                    snapshot.consecutive_failures = 0;
                    snapshot.last_error = None;
                    snapshot.refreshed_at = Some(Timestamp::now());
                }
                Err(err) => {
                    snapshot.consecutive_failures += 1;
                    snapshot.last_error = Some(err.to_string());
                }
            }
            true
        })
    }

    /// Replace the state outright with a freshly stamped sequence number.
    pub fn seed(&self, data: T) {
        let sequence = self.next_sequence();
        self.tx.send_modify(|snapshot| {
            snapshot.data = Some(data);
            snapshot.sequence = sequence;
            snapshot.consecutive_failures = 0;
            snapshot.last_error = None;
            snapshot.refreshed_at = Some(Timestamp::now());
        });
    }

    /// Mutate the current state, if any. Returns the closure's result, or
    /// `None` when there is no state.
    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        let mut result = None;
        self.tx.send_if_modified(|snapshot| match snapshot.data.as_mut() {
            Some(data) => {
                result = Some(f(data));
                true
            }
            None => false,
        });
        result
    }

    /// Drop the state and failure history. The sequence counter is kept so
    /// responses issued before the clear stay too old to apply.
    pub fn clear(&self) {
        self.tx.send_modify(|snapshot| {
            let sequence = snapshot.sequence;
            *snapshot = Snapshot {
                sequence,
                ..Snapshot::default()
            };
        });
    }
}

impl<T: Clone> SnapshotStore<T> {
    /// Copy of the current snapshot.
    pub fn current(&self) -> Snapshot<T> {
        self.tx.borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn replace(_: Option<u32>, fresh: u32) -> u32 {
        fresh
    }

    #[test]
    fn test_sequences_increase() {
        let store = SnapshotStore::<u32>::new();
        let a = store.next_sequence();
        let b = store.next_sequence();
        assert!(b > a);
    }

    #[test]
    fn test_older_response_never_overwrites_newer() {
        let store = SnapshotStore::<u32>::new();
        let token = CancellationToken::new();
        let first = store.next_sequence();
        let second = store.next_sequence();

        assert!(store.apply(second, Ok(20), &token, replace));
        assert!(!store.apply(first, Ok(10), &token, replace));

        let snapshot = store.current();
        assert_eq!(snapshot.data, Some(20));
        assert_eq!(snapshot.sequence, second);
    }

    #[test]
    fn test_failure_keeps_data_and_counts() {
        let store = SnapshotStore::<u32>::new();
        let token = CancellationToken::new();
        let ok = store.next_sequence();
        store.apply(ok, Ok(1), &token, replace);

        for _ in 0..3 {
            let seq = store.next_sequence();
            store.apply(
                seq,
                Err(ConsoleError::http(503, None)),
                &token,
                replace,
            );
        }
        let snapshot = store.current();
        assert_eq!(snapshot.data, Some(1));
        assert_eq!(snapshot.consecutive_failures, 3);
        assert!(snapshot.is_degraded());
        assert_eq!(snapshot.last_error.as_deref(), Some("HTTP Error: 503"));

        let seq = store.next_sequence();
        store.apply(seq, Ok(2), &token, replace);
        let snapshot = store.current();
        assert_eq!(snapshot.consecutive_failures, 0);
        assert_eq!(snapshot.last_error, None);
    }

    #[test]
    fn test_cancelled_token_blocks_apply() {
        let store = SnapshotStore::<u32>::new();
        let token = CancellationToken::new();
        let seq = store.next_sequence();
        token.cancel();
        assert!(!store.apply(seq, Ok(5), &token, replace));
        assert_eq!(store.current().data, None);
    }

    #[test]
    fn test_clear_keeps_sequence_floor() {
        let store = SnapshotStore::<u32>::new();
        let token = CancellationToken::new();
        let early = store.next_sequence();
        store.seed(7);
        store.clear();

        assert_eq!(store.current().data, None);
        assert!(!store.apply(early, Ok(1), &token, replace));
    }

    #[test]
    fn test_update_requires_state() {
        let store = SnapshotStore::<u32>::new();
        assert_eq!(store.update(|v| *v += 1), None);
        store.seed(1);
        store.update(|v| *v += 1);
        assert_eq!(store.current().data, Some(2));
    }
}
