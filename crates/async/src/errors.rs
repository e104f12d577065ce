//! Errors for the `railway-async` crate.

use thiserror::Error;

/// Marks an operation that exited because its [CancellationToken] fired.
///
/// Cancellation is never carried inside an [Outcome]; it travels on the `Err` side of
/// [Cancellable] so it cannot be confused with a domain failure.
///
/// [CancellationToken]: crate::CancellationToken
/// [Outcome]: railway_result::Outcome
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[error("Operation cancelled")]
pub struct Cancelled;

/// A [Result] type for operations that may be interrupted by a [CancellationToken].
///
/// [CancellationToken]: crate::CancellationToken
pub type Cancellable<T> = Result<T, Cancelled>;
