//! Contains [PendingOutcomeExt], the mid-pipeline bridge operations over a pending [Outcome].

use crate::{
    errors::Cancellable,
    stage::{StageError, StageOutput, StageValue},
    suspend::until_cancelled,
    CancellationToken,
};
use core::future::Future;
use railway_result::Outcome;
use tracing::trace;

/// Resolves a pending stage into its outcome, or [Cancelled] if the token fires first or the
/// upstream stage was itself cancelled.
///
/// [Cancelled]: crate::Cancelled
async fn resolve<F>(
    cancel: &CancellationToken,
    pending: F,
) -> Cancellable<Outcome<StageValue<F>, StageError<F>>>
where
    F: Future,
    F::Output: StageOutput,
{
    until_cancelled(cancel, pending).await?.into_stage()
}

fn skipped(operation: &'static str) {
    trace!(target: "railway_async", "{operation}: upstream failed, continuation skipped");
}

/// Bridge operations over a future that resolves to an [Outcome] (or to the [Cancellable] outcome
/// of a previous bridge operation).
///
/// Every operation first awaits the pending stage raced against the [CancellationToken]. If the
/// token fires, or the upstream stage was cancelled, the operation resolves to
/// `Err(Cancelled)` and no continuation runs. Otherwise the corresponding [Outcome] combinator is
/// applied, and a failed outcome short-circuits the continuation.
///
/// Methods suffixed `_with` take an asynchronous continuation. It receives a clone of the token,
/// and the future it returns is raced against the token as well.
///
/// [Cancelled]: crate::Cancelled
pub trait PendingOutcomeExt: Future + Sized
where
    Self::Output: StageOutput,
{
    /// Maps the success value with a synchronous function.
    fn map_async<U, F>(
        self,
        cancel: &CancellationToken,
        f: F,
    ) -> impl Future<Output = Cancellable<Outcome<U, StageError<Self>>>>
    where
        F: FnOnce(StageValue<Self>) -> U,
    {
        async move {
            let outcome = resolve(cancel, self).await?;
            if !outcome.is_success() {
                skipped("map_async");
            }
            Ok(outcome.map(f))
        }
    }

    /// Maps the success value with an asynchronous function.
    fn map_async_with<U, F, Fut>(
        self,
        cancel: &CancellationToken,
        f: F,
    ) -> impl Future<Output = Cancellable<Outcome<U, StageError<Self>>>>
    where
        F: FnOnce(StageValue<Self>, CancellationToken) -> Fut,
        Fut: Future<Output = U>,
    {
        async move {
            match resolve(cancel, self).await?.into_branch() {
                Ok(value) => {
                    let mapped = until_cancelled(cancel, f(value, cancel.clone())).await?;
                    Ok(Outcome::Success(mapped))
                }
                Err(error) => {
                    skipped("map_async_with");
                    Ok(Outcome::Failure(error))
                }
            }
        }
    }

    /// Maps the failure with a synchronous function. A success passes through untouched.
    fn map_error_async<G, F>(
        self,
        cancel: &CancellationToken,
        f: F,
    ) -> impl Future<Output = Cancellable<Outcome<StageValue<Self>, G>>>
    where
        F: FnOnce(StageError<Self>) -> G,
    {
        async move { Ok(resolve(cancel, self).await?.map_error(f)) }
    }

    /// Chains a synchronous, outcome-producing continuation on the success path.
    fn bind_async<U, F>(
        self,
        cancel: &CancellationToken,
        f: F,
    ) -> impl Future<Output = Cancellable<Outcome<U, StageError<Self>>>>
    where
        F: FnOnce(StageValue<Self>) -> Outcome<U, StageError<Self>>,
    {
        async move {
            let outcome = resolve(cancel, self).await?;
            if !outcome.is_success() {
                skipped("bind_async");
            }
            Ok(outcome.bind(f))
        }
    }

    /// Chains an asynchronous, outcome-producing continuation on the success path.
    fn bind_async_with<U, F, Fut>(
        self,
        cancel: &CancellationToken,
        f: F,
    ) -> impl Future<Output = Cancellable<Outcome<U, StageError<Self>>>>
    where
        F: FnOnce(StageValue<Self>, CancellationToken) -> Fut,
        Fut: Future<Output = Outcome<U, StageError<Self>>>,
    {
        async move {
            match resolve(cancel, self).await?.into_branch() {
                Ok(value) => until_cancelled(cancel, f(value, cancel.clone())).await,
                Err(error) => {
                    skipped("bind_async_with");
                    Ok(Outcome::Failure(error))
                }
            }
        }
    }

    /// Runs a synchronous action with the success value and resolves to the original outcome.
    fn tap_async<F>(
        self,
        cancel: &CancellationToken,
        f: F,
    ) -> impl Future<Output = Cancellable<Outcome<StageValue<Self>, StageError<Self>>>>
    where
        F: FnOnce(&StageValue<Self>),
    {
        async move { Ok(resolve(cancel, self).await?.tap(f)) }
    }

    /// Runs an asynchronous action with the success value and resolves to the original outcome.
    ///
    /// The action borrows the value only while building its future. The returned future cannot
    /// hold on to that borrow.
    fn tap_async_with<F, Fut>(
        self,
        cancel: &CancellationToken,
        f: F,
    ) -> impl Future<Output = Cancellable<Outcome<StageValue<Self>, StageError<Self>>>>
    where
        F: FnOnce(&StageValue<Self>, CancellationToken) -> Fut,
        Fut: Future<Output = ()>,
    {
        async move {
            let outcome = resolve(cancel, self).await?;
            match outcome.as_ref().into_branch() {
                Ok(value) => until_cancelled(cancel, f(value, cancel.clone())).await?,
                Err(_) => skipped("tap_async_with"),
            }
            Ok(outcome)
        }
    }

    /// Runs a synchronous action with the failure and resolves to the original outcome.
    fn tap_error_async<F>(
        self,
        cancel: &CancellationToken,
        f: F,
    ) -> impl Future<Output = Cancellable<Outcome<StageValue<Self>, StageError<Self>>>>
    where
        F: FnOnce(&StageError<Self>),
    {
        async move { Ok(resolve(cancel, self).await?.tap_error(f)) }
    }

    /// Runs an asynchronous action with the failure and resolves to the original outcome.
    fn tap_error_async_with<F, Fut>(
        self,
        cancel: &CancellationToken,
        f: F,
    ) -> impl Future<Output = Cancellable<Outcome<StageValue<Self>, StageError<Self>>>>
    where
        F: FnOnce(&StageError<Self>, CancellationToken) -> Fut,
        Fut: Future<Output = ()>,
    {
        async move {
            let outcome = resolve(cancel, self).await?;
            if let Err(error) = outcome.as_ref().into_branch() {
                until_cancelled(cancel, f(error, cancel.clone())).await?;
            }
            Ok(outcome)
        }
    }

    /// Turns a success into `Failure(error)` when `predicate` rejects the value. An upstream
    /// failure is preserved and `predicate` is not evaluated.
    fn ensure_async<P>(
        self,
        cancel: &CancellationToken,
        predicate: P,
        error: StageError<Self>,
    ) -> impl Future<Output = Cancellable<Outcome<StageValue<Self>, StageError<Self>>>>
    where
        P: FnOnce(&StageValue<Self>) -> bool,
    {
        async move {
            let outcome = resolve(cancel, self).await?;
            if !outcome.is_success() {
                skipped("ensure_async");
            }
            Ok(outcome.ensure(predicate, error))
        }
    }

    /// Terminates the pipeline by applying exactly one of the two continuations.
    fn match_async<R, S, F>(
        self,
        cancel: &CancellationToken,
        on_success: S,
        on_failure: F,
    ) -> impl Future<Output = Cancellable<R>>
    where
        S: FnOnce(StageValue<Self>) -> R,
        F: FnOnce(StageError<Self>) -> R,
    {
        async move { Ok(resolve(cancel, self).await?.match_with(on_success, on_failure)) }
    }

    /// Terminates a pipeline whose success carries no payload, running `handler` only on failure.
    fn handle_failure_async<F>(
        self,
        cancel: &CancellationToken,
        handler: F,
    ) -> impl Future<Output = Cancellable<()>>
    where
        Self::Output: StageOutput<Value = ()>,
        F: FnOnce(StageError<Self>),
    {
        async move {
            if let Err(error) = resolve(cancel, self).await?.into_branch() {
                handler(error);
            }
            Ok(())
        }
    }

    /// Asynchronous variant of [PendingOutcomeExt::handle_failure_async].
    fn handle_failure_async_with<F, Fut>(
        self,
        cancel: &CancellationToken,
        handler: F,
    ) -> impl Future<Output = Cancellable<()>>
    where
        Self::Output: StageOutput<Value = ()>,
        F: FnOnce(StageError<Self>, CancellationToken) -> Fut,
        Fut: Future<Output = ()>,
    {
        async move {
            if let Err(error) = resolve(cancel, self).await?.into_branch() {
                until_cancelled(cancel, handler(error, cancel.clone())).await?;
            }
            Ok(())
        }
    }
}

impl<F> PendingOutcomeExt for F
where
    F: Future,
    F::Output: StageOutput,
{
}
