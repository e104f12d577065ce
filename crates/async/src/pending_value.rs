//! Contains [PendingValueExt], the pipeline-entry operations that seed an [Outcome] from a pending
//! plain value.

use crate::{errors::Cancellable, suspend::until_cancelled, CancellationToken};
use core::future::Future;
use railway_result::Outcome;

/// Seeds a pipeline from any future by mapping its output into an [Outcome].
pub trait PendingValueExt: Future + Sized {
    /// Awaits the value, then converts it with a synchronous `mapper`.
    fn to_result_async<V, E, M>(
        self,
        cancel: &CancellationToken,
        mapper: M,
    ) -> impl Future<Output = Cancellable<Outcome<V, E>>>
    where
        M: FnOnce(Self::Output) -> Outcome<V, E>,
    {
        async move { Ok(mapper(until_cancelled(cancel, self).await?)) }
    }

    /// Awaits the value, then converts it with an asynchronous `mapper` that receives a clone of
    /// the token.
    fn to_result_async_with<V, E, M, Fut>(
        self,
        cancel: &CancellationToken,
        mapper: M,
    ) -> impl Future<Output = Cancellable<Outcome<V, E>>>
    where
        M: FnOnce(Self::Output, CancellationToken) -> Fut,
        Fut: Future<Output = Outcome<V, E>>,
    {
        async move {
            let value = until_cancelled(cancel, self).await?;
            until_cancelled(cancel, mapper(value, cancel.clone())).await
        }
    }
}

impl<F: Future> PendingValueExt for F {}
