//! Contains the [StageOutput] trait, which unifies what a bridge operation accepts as its resolved
//! input.

use crate::errors::Cancellable;
use core::future::Future;
use railway_result::Outcome;

/// The resolved output of a pipeline stage.
///
/// Implemented for a bare [Outcome] and for the [Cancellable] outcome produced by a previous
/// bridge operation, so stages compose without intermediate `.await`s.
pub trait StageOutput {
    /// The success payload type.
    type Value;
    /// The failure payload type.
    type Error;

    /// Converts the stage output into a [Cancellable] outcome.
    fn into_stage(self) -> Cancellable<Outcome<Self::Value, Self::Error>>;
}

impl<V, E> StageOutput for Outcome<V, E> {
    type Value = V;
    type Error = E;

    fn into_stage(self) -> Cancellable<Self> {
        Ok(self)
    }
}

impl<V, E> StageOutput for Cancellable<Outcome<V, E>> {
    type Value = V;
    type Error = E;

    fn into_stage(self) -> Self {
        self
    }
}

/// The success payload type of a pending stage `F`.
pub type StageValue<F> = <<F as Future>::Output as StageOutput>::Value;

/// The failure payload type of a pending stage `F`.
pub type StageError<F> = <<F as Future>::Output as StageOutput>::Error;
