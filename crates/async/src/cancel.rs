//! Contains the [CancellationToken], a cooperative one-shot cancellation signal.

use alloc::{sync::Arc, vec::Vec};
use core::{
    future::Future,
    pin::Pin,
    sync::atomic::{AtomicBool, AtomicUsize, Ordering},
    task::{Context, Poll, Waker},
};
use tracing::debug;

/// A [CancellationToken] is a cheaply clonable handle to a shared cancellation flag.
///
/// Clones observe the same flag. Cancelling is one-way and idempotent: once [cancel] has been
/// called, every clone reports [is_cancelled] and every pending [cancelled] future resolves.
///
/// The combinators in this crate only observe the token. Firing it is the caller's concern.
///
/// [cancel]: CancellationToken::cancel
/// [is_cancelled]: CancellationToken::is_cancelled
/// [cancelled]: CancellationToken::cancelled
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    inner: Arc<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    cancelled: AtomicBool,
    next_slot: AtomicUsize,
    /// Wakers of the tasks suspended on [CancellationToken::cancelled], keyed by slot.
    waiters: spin::Mutex<Vec<(usize, Waker)>>,
}

impl CancellationToken {
    /// Creates a new [CancellationToken] that has not been cancelled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancels the token and wakes every task waiting on it. Subsequent calls are no-ops.
    pub fn cancel(&self) {
        if self.inner.cancelled.swap(true, Ordering::AcqRel) {
            return;
        }

        let waiters = core::mem::take(&mut *self.inner.waiters.lock());
        debug!(target: "railway_cancel", "Cancellation requested, waking {} waiters", waiters.len());
        for (_, waker) in waiters {
            waker.wake();
        }
    }

    /// Returns `true` once the token has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.load(Ordering::Acquire)
    }

    /// Returns a future that resolves once the token is cancelled.
    pub const fn cancelled(&self) -> WaitForCancellation<'_> {
        WaitForCancellation { token: self, slot: None }
    }

    #[cfg(test)]
    pub(crate) fn waiter_count(&self) -> usize {
        self.inner.waiters.lock().len()
    }
}

/// The future returned by [CancellationToken::cancelled].
///
/// Dropping it before the token fires releases its waker slot.
#[derive(Debug)]
#[must_use = "futures do nothing unless polled"]
pub struct WaitForCancellation<'a> {
    token: &'a CancellationToken,
    slot: Option<usize>,
}

impl Future for WaitForCancellation<'_> {
    type Output = ();

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        let inner = &this.token.inner;
        if inner.cancelled.load(Ordering::Acquire) {
            return Poll::Ready(());
        }

        let mut waiters = inner.waiters.lock();

        // `cancel` sets the flag before draining the waiters, so checking again under the lock
        // guarantees a registered waker is either drained or sees the flag.
        if inner.cancelled.load(Ordering::Acquire) {
            return Poll::Ready(());
        }

        let slot = *this.slot.get_or_insert_with(|| inner.next_slot.fetch_add(1, Ordering::Relaxed));
        match waiters.iter_mut().find(|(id, _)| *id == slot) {
            Some((_, waker)) => waker.clone_from(cx.waker()),
            None => waiters.push((slot, cx.waker().clone())),
        }
        Poll::Pending
    }
}

impl Drop for WaitForCancellation<'_> {
    fn drop(&mut self) {
        if let Some(slot) = self.slot {
            self.token.inner.waiters.lock().retain(|(id, _)| *id != slot);
        }
    }
}
