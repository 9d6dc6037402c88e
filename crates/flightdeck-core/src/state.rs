// ── Observable controller state ──
//
// Each controller owns one `watch` channel carrying a whole state
// snapshot. Every transition is a single `send_modify`, so subscribers
// never observe a half-applied update.

use std::pin::Pin;
use std::task::{Context, Poll};

use futures_core::Stream;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

/// A subscription to a controller's state.
///
/// Provides both point-in-time snapshot access and change notification
/// via `changed()` or by converting to a `Stream`.
pub struct StateStream<T: Clone + Send + Sync + 'static> {
    current: T,
    receiver: watch::Receiver<T>,
}

impl<T: Clone + Send + Sync + 'static> StateStream<T> {
    pub(crate) fn new(mut receiver: watch::Receiver<T>) -> Self {
        let current = receiver.borrow_and_update().clone();
        Self { current, receiver }
    }

    /// The snapshot captured at creation or by the last `changed()`.
    pub fn current(&self) -> &T {
        &self.current
    }

    /// The latest snapshot (may have changed since creation).
    pub fn latest(&self) -> T {
        self.receiver.borrow().clone()
    }

    /// Wait for the next change, returning the new snapshot.
    /// Returns `None` once the controller has been dropped.
    pub async fn changed(&mut self) -> Option<T> {
        self.receiver.changed().await.ok()?;
        let snap = self.receiver.borrow_and_update().clone();
        self.current = snap.clone();
        Some(snap)
    }

    /// Convert into a `Stream` for use with `StreamExt` combinators.
    pub fn into_stream(self) -> StateWatchStream<T> {
        StateWatchStream {
            inner: WatchStream::new(self.receiver),
        }
    }
}

/// `Stream` adapter yielding each new state snapshot.
pub struct StateWatchStream<T: Clone + Send + Sync + 'static> {
    inner: WatchStream<T>,
}

impl<T: Clone + Send + Sync + 'static> Stream for StateWatchStream<T> {
    type Item = T;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Pin::new(&mut self.inner).poll_next(cx)
    }
}

// ── Busy flag ────────────────────────────────────────────────────────

/// Brackets an operation with a busy flag (`is_loading`, `is_refreshing`).
///
/// `finish` commits the result and clears the flag in one update. If the
/// operation is dropped before finishing, the flag is still cleared.
pub(crate) struct Busy<'a, T> {
    state: &'a watch::Sender<T>,
    clear: fn(&mut T),
    armed: bool,
}

impl<'a, T> Busy<'a, T> {
    pub(crate) fn begin(
        state: &'a watch::Sender<T>,
        start: impl FnOnce(&mut T),
        clear: fn(&mut T),
    ) -> Self {
        state.send_modify(start);
        Self {
            state,
            clear,
            armed: true,
        }
    }

    pub(crate) fn finish(mut self, apply: impl FnOnce(&mut T)) {
        let clear = self.clear;
        self.state.send_modify(|s| {
            apply(s);
            clear(s);
        });
        self.armed = false;
    }
}

impl<T> Drop for Busy<'_, T> {
    fn drop(&mut self) {
        if self.armed {
            self.state.send_modify(self.clear);
        }
    }
}
