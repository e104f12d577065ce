//! Contains the [Outcome] type, its constructors and its guarded accessors.

use crate::errors::{AccessError, AccessResult};
use alloc::format;
use core::fmt::Debug;

/// An [Outcome] holds either the success payload of an operation or its failure payload.
///
/// Outcomes are immutable. Every combinator consumes the receiver and returns a new [Outcome].
///
/// The [Outcome::Uninitialized] state is only reachable through [Default]. It reports
/// `is_success() == false`, but it carries no error: reading its error raises
/// [AccessError::ErrorOfUninitialized] rather than the fault raised for a successful outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome<V, E> {
    /// The operation succeeded with a value.
    Success(V),
    /// The operation failed with an error.
    Failure(E),
    /// The outcome was default-constructed and never given a payload.
    Uninitialized,
}

impl<V, E> Default for Outcome<V, E> {
    fn default() -> Self {
        Self::Uninitialized
    }
}

impl<V, E> Outcome<V, E> {
    /// Creates a successful [Outcome] holding `value`.
    pub const fn success(value: V) -> Self {
        Self::Success(value)
    }

    /// Creates a failed [Outcome] holding `error`.
    pub const fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    /// Returns `true` if the outcome holds a success payload.
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if the outcome holds a failure payload.
    ///
    /// An uninitialized outcome is neither a success nor a failure.
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Returns `true` if the outcome was default-constructed.
    pub const fn is_uninitialized(&self) -> bool {
        matches!(self, Self::Uninitialized)
    }

    /// Converts from `&Outcome<V, E>` to `Outcome<&V, &E>`.
    pub const fn as_ref(&self) -> Outcome<&V, &E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
            Self::Uninitialized => Outcome::Uninitialized,
        }
    }

    /// Returns the success payload, discarding any error.
    pub fn ok(self) -> Option<V> {
        match self {
            Self::Success(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the failure payload, discarding any value.
    pub fn err(self) -> Option<E> {
        match self {
            Self::Failure(error) => Some(error),
            _ => None,
        }
    }

    /// Splits the outcome into a [Result] over its two meaningful branches.
    ///
    /// This is the single branch decision every combinator is built on.
    ///
    /// # Panics
    /// Panics with the [AccessError::ErrorOfUninitialized] message if the outcome is
    /// uninitialized, as taking the failure branch requires reading an error that was never set.
    #[track_caller]
    pub fn into_branch(self) -> Result<V, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
            Self::Uninitialized => uninitialized_fault(),
        }
    }
}

/// Aborts with the [AccessError::ErrorOfUninitialized] message.
#[track_caller]
pub(crate) fn uninitialized_fault() -> ! {
    panic!("{}", AccessError::ErrorOfUninitialized)
}

impl<V: Debug, E: Debug> Outcome<V, E> {
    /// Returns a reference to the success payload.
    ///
    /// # Panics
    /// Panics with the [AccessError] message if the outcome is not a success. The message of a
    /// failed outcome includes the held error.
    #[track_caller]
    pub fn value(&self) -> &V {
        match self.try_value() {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }

    /// Returns a reference to the failure payload.
    ///
    /// # Panics
    /// Panics with the [AccessError] message if the outcome is not a failure. Successful outcomes
    /// and uninitialized outcomes panic with distinct messages.
    #[track_caller]
    pub fn error(&self) -> &E {
        match self.try_error() {
            Ok(error) => error,
            Err(err) => panic!("{err}"),
        }
    }

    /// Consumes the outcome and returns its success payload.
    ///
    /// # Panics
    /// See [Outcome::value].
    #[track_caller]
    pub fn into_value(self) -> V {
        match self {
            Self::Success(value) => value,
            other => panic!("{}", other.access_value_error()),
        }
    }

    /// Consumes the outcome and returns its failure payload.
    ///
    /// # Panics
    /// See [Outcome::error].
    #[track_caller]
    pub fn into_error(self) -> E {
        match self {
            Self::Failure(error) => error,
            other => panic!("{}", other.access_error_error()),
        }
    }

    /// Returns a reference to the success payload, or the [AccessError] describing why it is not
    /// available.
    pub fn try_value(&self) -> AccessResult<&V> {
        match self {
            Self::Success(value) => Ok(value),
            _ => Err(self.access_value_error()),
        }
    }

    /// Returns a reference to the failure payload, or the [AccessError] describing why it is not
    /// available.
    pub fn try_error(&self) -> AccessResult<&E> {
        match self {
            Self::Failure(error) => Ok(error),
            _ => Err(self.access_error_error()),
        }
    }

    fn access_value_error(&self) -> AccessError {
        match self {
            Self::Failure(error) => AccessError::ValueOfFailure(format!("{error:?}")),
            _ => AccessError::ValueOfUninitialized,
        }
    }

    fn access_error_error(&self) -> AccessError {
        match self {
            Self::Success(value) => AccessError::ErrorOfSuccess(format!("{value:?}")),
            _ => AccessError::ErrorOfUninitialized,
        }
    }
}

impl<V, E> From<Result<V, E>> for Outcome<V, E> {
    fn from(result: Result<V, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<V, E> TryFrom<Outcome<V, E>> for Result<V, E> {
    type Error = AccessError;

    fn try_from(outcome: Outcome<V, E>) -> Result<Self, Self::Error> {
        match outcome {
            Outcome::Success(value) => Ok(Ok(value)),
            Outcome::Failure(error) => Ok(Err(error)),
            Outcome::Uninitialized => Err(AccessError::ErrorOfUninitialized),
        }
    }
}
