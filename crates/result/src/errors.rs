//! Errors for the `railway-result` crate.

use alloc::string::String;
use thiserror::Error;

/// An [AccessError] is raised when a guarded accessor of an [Outcome] is read on the wrong branch.
///
/// The panicking accessors ([Outcome::value], [Outcome::error]) abort with the [Display] message
/// of this type, while the fallible accessors ([Outcome::try_value], [Outcome::try_error]) return
/// it. Payloads are captured with their [Debug] representation.
///
/// [Outcome]: crate::Outcome
/// [Outcome::value]: crate::Outcome::value
/// [Outcome::error]: crate::Outcome::error
/// [Outcome::try_value]: crate::Outcome::try_value
/// [Outcome::try_error]: crate::Outcome::try_error
/// [Display]: core::fmt::Display
/// [Debug]: core::fmt::Debug
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    /// The value of a failed outcome was read. Carries the held error.
    #[error("Cannot access the value of a failed outcome. Error: {0}")]
    ValueOfFailure(String),
    /// The value of an uninitialized outcome was read.
    #[error("Cannot access the value of a failed outcome. No error payload was provided.")]
    ValueOfUninitialized,
    /// The error of a successful outcome was read. Carries the held value.
    #[error("Cannot access the error of a successful outcome. Value: {0}")]
    ErrorOfSuccess(String),
    /// The error of an outcome that was never constructed through [Outcome::failure] was read.
    ///
    /// [Outcome::failure]: crate::Outcome::failure
    #[error(
        "The outcome is in an uninitialized (default) state and was never given an error. \
         Use Outcome::failure to construct a failed outcome."
    )]
    ErrorOfUninitialized,
}

impl AccessError {
    /// Returns the [AccessErrorKind] of this error.
    pub const fn kind(&self) -> AccessErrorKind {
        match self {
            Self::ValueOfFailure(_) | Self::ValueOfUninitialized | Self::ErrorOfSuccess(_) => {
                AccessErrorKind::InvalidAccess
            }
            Self::ErrorOfUninitialized => AccessErrorKind::UninitializedAccess,
        }
    }
}

/// A top level classification of [AccessError]s by root cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessErrorKind {
    /// A payload was read on the branch that does not hold it.
    InvalidAccess,
    /// The error of a default-constructed outcome was read.
    UninitializedAccess,
}

/// A [Result] type for the [AccessError] enum.
pub type AccessResult<T> = Result<T, AccessError>;
