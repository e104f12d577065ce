//! Extension traits that lift bare values into [Outcome]s.

use crate::Outcome;

/// Lifts any value into an [Outcome] on an explicitly chosen branch.
///
/// A generic `From<V>` and `From<E>` pair would overlap whenever `V == E`, so the branch is always
/// named at the call site.
pub trait IntoOutcome: Sized {
    /// Wraps `self` as the value of a successful [Outcome].
    fn into_success<E>(self) -> Outcome<Self, E> {
        Outcome::Success(self)
    }

    /// Wraps `self` as the error of a failed [Outcome].
    fn into_failure<V>(self) -> Outcome<V, Self> {
        Outcome::Failure(self)
    }
}

impl<T> IntoOutcome for T {}

/// Validates a bare value into an [Outcome].
pub trait Ensure: Sized {
    /// Returns `Success(self)` if `predicate` holds, or `Failure(error)` otherwise.
    ///
    /// The predicate is always evaluated exactly once.
    fn ensure<E, P>(self, predicate: P, error: E) -> Outcome<Self, E>
    where
        P: FnOnce(&Self) -> bool,
    {
        if predicate(&self) {
            Outcome::Success(self)
        } else {
            Outcome::Failure(error)
        }
    }
}

impl<T> Ensure for T {}
