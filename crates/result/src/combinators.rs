//! Synchronous combinators over [Outcome].
//!
//! Every combinator consumes its receiver and returns a new [Outcome]. Continuations registered
//! for one branch are never invoked for the other.
//!
//! Combinators decide the branch through [Outcome::into_branch], so an uninitialized receiver
//! panics with the [AccessError::ErrorOfUninitialized] message wherever the failure branch would be
//! taken.
//!
//! [AccessError::ErrorOfUninitialized]: crate::errors::AccessError::ErrorOfUninitialized

use crate::{outcome::uninitialized_fault, Outcome};

impl<V, E> Outcome<V, E> {
    /// Invokes `on_success` with the value or `on_failure` with the error, and returns the result
    /// of whichever ran.
    #[track_caller]
    pub fn match_with<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(V) -> R,
        F: FnOnce(E) -> R,
    {
        match self.into_branch() {
            Ok(value) => on_success(value),
            Err(error) => on_failure(error),
        }
    }

    /// Invokes `on_success` with the value or `on_failure` with the error.
    #[track_caller]
    pub fn switch<S, F>(self, on_success: S, on_failure: F)
    where
        S: FnOnce(V),
        F: FnOnce(E),
    {
        self.match_with(on_success, on_failure)
    }

    /// Maps an `Outcome<V, E>` to `Outcome<U, E>` by applying `f` to a success value. A failure is
    /// passed through without invoking `f`.
    #[track_caller]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(V) -> U,
    {
        match self.into_branch() {
            Ok(value) => Outcome::Success(f(value)),
            Err(error) => Outcome::Failure(error),
        }
    }

    /// Maps an `Outcome<V, E>` to `Outcome<V, G>` by applying `f` to a failure. A success is
    /// passed through without invoking `f`.
    #[track_caller]
    pub fn map_error<G, F>(self, f: F) -> Outcome<V, G>
    where
        F: FnOnce(E) -> G,
    {
        match self.into_branch() {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(f(error)),
        }
    }

    /// Chains an outcome-producing continuation on the success path. A failure is passed through
    /// without invoking `f`.
    #[track_caller]
    pub fn bind<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(V) -> Outcome<U, E>,
    {
        match self.into_branch() {
            Ok(value) => f(value),
            Err(error) => Outcome::Failure(error),
        }
    }

    /// Alias of [Outcome::map].
    #[track_caller]
    pub fn select<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(V) -> U,
    {
        self.map(f)
    }

    /// Binds a second outcome off the success value, then projects both values into the result.
    ///
    /// - If the receiver failed, its error is returned and neither closure runs.
    /// - If `binder` fails, the binder's error is returned and `projector` does not run.
    /// - Otherwise the projection is returned as a success.
    #[track_caller]
    pub fn select_many<U, R, B, P>(self, binder: B, projector: P) -> Outcome<R, E>
    where
        B: FnOnce(&V) -> Outcome<U, E>,
        P: FnOnce(V, U) -> R,
    {
        let value = match self.into_branch() {
            Ok(value) => value,
            Err(error) => return Outcome::Failure(error),
        };
        match binder(&value).into_branch() {
            Ok(bound) => Outcome::Success(projector(value, bound)),
            Err(error) => Outcome::Failure(error),
        }
    }

    /// Runs `f` with the success value and returns the outcome unchanged.
    #[track_caller]
    pub fn tap<F>(self, f: F) -> Self
    where
        F: FnOnce(&V),
    {
        match &self {
            Self::Success(value) => f(value),
            Self::Failure(_) => {}
            Self::Uninitialized => uninitialized_fault(),
        }
        self
    }

    /// Runs `f` with the failure and returns the outcome unchanged.
    #[track_caller]
    pub fn tap_error<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        match &self {
            Self::Success(_) => {}
            Self::Failure(error) => f(error),
            Self::Uninitialized => uninitialized_fault(),
        }
        self
    }

    /// Turns a success into `Failure(error)` when `predicate` rejects the value.
    ///
    /// A failure is returned unchanged: `predicate` is not evaluated and `error` is dropped.
    #[track_caller]
    pub fn ensure<P>(self, predicate: P, error: E) -> Self
    where
        P: FnOnce(&V) -> bool,
    {
        self.ensure_with(predicate, |_| error)
    }

    /// Like [Outcome::ensure], but builds the error from the rejected value.
    #[track_caller]
    pub fn ensure_with<P, F>(self, predicate: P, make_error: F) -> Self
    where
        P: FnOnce(&V) -> bool,
        F: FnOnce(V) -> E,
    {
        match self.into_branch() {
            Ok(value) => {
                if predicate(&value) {
                    Self::Success(value)
                } else {
                    Self::Failure(make_error(value))
                }
            }
            Err(error) => Self::Failure(error),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use alloc::{
        string::{String, ToString},
        vec::Vec,
    };
    use core::cell::Cell;
    use proptest::{prelude::any, proptest};

    #[test]
    fn test_match_with_invokes_one_branch() {
        let calls = Cell::new(0);
        let ok = Outcome::<u8, &str>::success(2).match_with(
            |v| {
                calls.set(calls.get() + 1);
                v * 2
            },
            |_| unreachable!(),
        );
        let err = Outcome::<u8, &str>::failure("e").match_with(|_| unreachable!(), |e| e.len() as u8);

        assert_eq!((ok, err), (4, 1));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_switch() {
        let mut seen = Vec::new();
        Outcome::<u8, &str>::success(1).switch(|v| seen.push(v), |_| unreachable!());
        Outcome::<u8, &str>::failure("e").switch(|_| unreachable!(), |_| {});
        assert_eq!(seen, [1]);
    }

    #[test]
    fn test_map_skips_failure() {
        let called = Cell::new(false);
        let outcome = Outcome::<u32, &str>::failure("Error").map(|x| {
            called.set(true);
            x * 2
        });
        assert_eq!(outcome, Outcome::failure("Error"));
        assert!(!called.get());
    }

    #[test]
    fn test_bind() {
        let halve = |x: u32| {
            if x % 2 == 0 {
                Outcome::success(x / 2)
            } else {
                Outcome::failure("odd")
            }
        };
        assert_eq!(Outcome::success(10).bind(halve), Outcome::success(5));
        assert_eq!(Outcome::success(5).bind(halve), Outcome::failure("odd"));
        assert_eq!(
            Outcome::<u32, &str>::failure("Error").bind(|_| -> Outcome<u32, &str> {
                unreachable!()
            }),
            Outcome::failure("Error")
        );
    }

    #[test]
    fn test_select_is_map() {
        let outcome = Outcome::<u8, ()>::success(3).select(|x| x.to_string());
        assert_eq!(outcome, Outcome::success("3".to_string()));
    }

    #[test]
    fn test_select_many_sums() {
        let outcome = Outcome::<i32, &str>::success(10)
            .select_many(|_| Outcome::success(20), |a, b| a + b);
        assert_eq!(outcome, Outcome::success(30));
    }

    #[test]
    fn test_select_many_receiver_failure() {
        let outcome = Outcome::<i32, &str>::failure("first").select_many(
            |_| -> Outcome<i32, &str> { unreachable!() },
            |_, _: i32| -> i32 { unreachable!() },
        );
        assert_eq!(outcome, Outcome::failure("first"));
    }

    #[test]
    fn test_select_many_binder_failure() {
        let projected = Cell::new(false);
        let outcome = Outcome::<i32, &str>::success(10).select_many(
            |_| Outcome::<i32, &str>::failure("second"),
            |a, b| {
                projected.set(true);
                a + b
            },
        );
        assert_eq!(outcome, Outcome::failure("second"));
        assert!(!projected.get());
    }

    #[test]
    fn test_tap_and_tap_error() {
        let seen = Cell::new(0);
        let ok = Outcome::<u8, u8>::success(7).tap(|v| seen.set(*v)).tap_error(|_| unreachable!());
        assert_eq!(ok, Outcome::success(7));
        assert_eq!(seen.get(), 7);

        let err = Outcome::<u8, u8>::failure(9).tap(|_| unreachable!()).tap_error(|e| seen.set(*e));
        assert_eq!(err, Outcome::failure(9));
        assert_eq!(seen.get(), 9);
    }

    #[test]
    fn test_ensure() {
        assert_eq!(Outcome::<i32, &str>::success(10).ensure(|x| *x > 5, "low"), Outcome::success(10));
        assert_eq!(Outcome::<i32, &str>::success(1).ensure(|x| *x > 5, "low"), Outcome::failure("low"));
    }

    #[test]
    fn test_ensure_preserves_failure() {
        let evaluated = Cell::new(false);
        let outcome = Outcome::<i32, &str>::failure("original").ensure(
            |_| {
                evaluated.set(true);
                false
            },
            "replacement",
        );
        assert_eq!(outcome, Outcome::failure("original"));
        assert!(!evaluated.get());
    }

    #[test]
    fn test_ensure_with_builds_error_from_value() {
        let outcome = Outcome::<i32, String>::success(3)
            .ensure_with(|x| *x > 5, |x| alloc::format!("{x} is too low"));
        assert_eq!(outcome, Outcome::failure("3 is too low".to_string()));
    }

    #[test]
    #[should_panic(expected = "uninitialized (default) state")]
    fn test_map_on_uninitialized_panics() {
        let _ = Outcome::<u8, u8>::default().map(|x| x + 1);
    }

    #[test]
    #[should_panic(expected = "uninitialized (default) state")]
    fn test_tap_on_uninitialized_panics() {
        let _ = Outcome::<u8, u8>::default().tap(|_| {});
    }

    proptest! {
        #[test]
        fn test_map_success(v in any::<i32>()) {
            let calls = Cell::new(0);
            let outcome = Outcome::<i32, String>::success(v).map(|x| {
                calls.set(calls.get() + 1);
                x.wrapping_mul(3)
            });
            assert_eq!(outcome, Outcome::success(v.wrapping_mul(3)));
            assert_eq!(calls.get(), 1);
        }

        #[test]
        fn test_map_error_duality(v in any::<i32>(), e in any::<u16>()) {
            let ok = Outcome::<i32, u16>::success(v).map_error(|_| -> u32 { unreachable!() });
            assert_eq!(ok, Outcome::success(v));

            let err = Outcome::<i32, u16>::failure(e).map_error(u32::from);
            assert_eq!(err, Outcome::failure(u32::from(e)));
        }

        #[test]
        fn test_ensure_evaluates_once(v in any::<i32>()) {
            let calls = Cell::new(0);
            let outcome = Outcome::<i32, &str>::success(v).ensure(
                |x| {
                    calls.set(calls.get() + 1);
                    *x >= 0
                },
                "negative",
            );
            assert_eq!(calls.get(), 1);
            assert_eq!(outcome.is_success(), v >= 0);
        }
    }
}
