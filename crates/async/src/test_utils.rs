//! Test utilities for the `railway-async` crate.

use crate::CancellationToken;
use alloc::sync::Arc;
use core::{
    future::Future,
    pin::Pin,
    sync::atomic::{AtomicUsize, Ordering},
    task::{Context, Poll},
};

/// Counts how many times a continuation ran. Clones share the count.
#[derive(Debug, Clone, Default)]
pub(crate) struct CallCounter(Arc<AtomicUsize>);

impl CallCounter {
    pub(crate) fn hit(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    pub(crate) fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

/// A future that cancels its token on the first poll and stays pending for that poll, so the
/// token fires while the computation is suspended. Resolves to its value if polled again.
#[derive(Debug)]
pub(crate) struct CancelOnPoll<T> {
    cancel: CancellationToken,
    value: Option<T>,
    polled: bool,
}

impl<T> CancelOnPoll<T> {
    pub(crate) const fn new(cancel: CancellationToken, value: T) -> Self {
        Self { cancel, value: Some(value), polled: false }
    }
}

impl<T: Unpin> Future for CancelOnPoll<T> {
    type Output = T;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<T> {
        let this = self.get_mut();
        if !this.polled {
            this.polled = true;
            this.cancel.cancel();
            cx.waker().wake_by_ref();
            return Poll::Pending;
        }
        this.value.take().map_or(Poll::Pending, Poll::Ready)
    }
}
