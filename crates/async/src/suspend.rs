//! Contains the suspension primitive every bridge operation awaits through.

use crate::{
    errors::{Cancellable, Cancelled},
    CancellationToken,
};
use core::{future::Future, pin::pin};
use futures::future::{select, Either};
use tracing::debug;

/// Awaits `pending` unless `cancel` fires first.
///
/// An already-cancelled token returns [Cancelled] without polling `pending`. When the token and
/// the computation become ready on the same poll, cancellation wins.
pub async fn until_cancelled<F>(cancel: &CancellationToken, pending: F) -> Cancellable<F::Output>
where
    F: Future,
{
    if cancel.is_cancelled() {
        debug!(target: "railway_async", "Token already cancelled, pending computation not polled");
        return Err(Cancelled);
    }

    let cancelled = pin!(cancel.cancelled());
    let pending = pin!(pending);
    match select(cancelled, pending).await {
        Either::Left(((), _)) => {
            debug!(target: "railway_async", "Pending computation interrupted by cancellation");
            Err(Cancelled)
        }
        Either::Right((output, _)) => Ok(output),
    }
}
