//! `MonadError` type class - error handling capability.
//!
//! This module provides the `MonadError` trait which abstracts the ability to
//! throw and catch errors within a monadic context. `Try` is an instance with
//! `E = Cause`: `throw_error` is [`Try::failure`], and the catching methods
//! are built on [`Try::recover`], so a handler that panics produces a new
//! `Failure` instead of unwinding.
//!
//! # Laws
//!
//! ## Throw Catch Law
//!
//! ```text
//! catch_error(throw_error(e), handler) == handler(e)
//! ```
//!
//! ## Catch Pure Law
//!
//! ```text
//! catch_error(pure(a), handler) == pure(a)
//! ```
//!
//! ## Throw Short-Circuit Law
//!
//! ```text
//! throw_error(e).flat_map(f) == throw_error(e)
//! ```

use super::monad::Monad;
use crate::control::{Cause, Try};

/// A type class for monads that can throw and catch errors of type `E`.
///
/// # Examples
///
/// ```rust
/// use attempt::control::{Cause, Try};
/// use attempt::typeclass::MonadError;
///
/// fn safe_divide<M: MonadError<Cause>>(a: i32, b: i32) -> M::WithType<i32> {
///     if b == 0 {
///         M::throw_error(Cause::msg("division by zero"))
///     } else {
///         M::from_result(Ok(a / b))
///     }
/// }
///
/// assert_eq!(safe_divide::<Try<()>>(10, 2), Try::success(5));
/// assert_eq!(safe_divide::<Try<()>>(10, 0), Try::failure(Cause::msg("division by zero")));
/// ```
pub trait MonadError<E>: Monad {
    /// Throws an error, short-circuiting the computation.
    fn throw_error<A>(error: E) -> Self::WithType<A>;

    /// Catches an error and applies a handler that returns a new computation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::control::{Cause, Try};
    /// use attempt::typeclass::MonadError;
    ///
    /// let failing: Try<usize> = Try::failure(Cause::msg("error"));
    /// let recovered =
    ///     <Try<()>>::catch_error(failing, |cause| Try::success(cause.to_string().len()));
    /// assert_eq!(recovered, Try::success(5));
    /// ```
    fn catch_error<A, F>(computation: Self::WithType<A>, handler: F) -> Self::WithType<A>
    where
        F: FnOnce(E) -> Self::WithType<A>;

    /// Converts a `Result` into this error-handling monad.
    fn from_result<A>(result: Result<A, E>) -> Self::WithType<A>;

    /// Handles an error by converting it to a success value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::control::{Cause, Try};
    /// use attempt::typeclass::MonadError;
    ///
    /// let failing: Try<i32> = Try::failure(Cause::msg("error"));
    /// assert_eq!(<Try<()>>::handle_error(failing, |_| 0), Try::success(0));
    /// ```
    fn handle_error<A, F>(computation: Self::WithType<A>, handler: F) -> Self::WithType<A>
    where
        F: FnOnce(E) -> A;
}

// =============================================================================
// Try<T> Implementation
// =============================================================================

impl<T> MonadError<Cause> for Try<T> {
    #[inline]
    fn throw_error<A>(error: Cause) -> Try<A> {
        Try::failure(error)
    }

    fn catch_error<A, F>(computation: Try<A>, handler: F) -> Try<A>
    where
        F: FnOnce(Cause) -> Try<A>,
    {
        computation.recover(|cause| handler(cause).get())
    }

    #[inline]
    fn from_result<A>(result: Result<A, Cause>) -> Try<A> {
        Try::from(result)
    }

    fn handle_error<A, F>(computation: Try<A>, handler: F) -> Try<A>
    where
        F: FnOnce(Cause) -> A,
    {
        computation.recover(|cause| Ok(handler(cause)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::PanicError;
    use crate::typeclass::Applicative;
    use rstest::rstest;

    type TryM = Try<()>;

    #[rstest]
    fn throw_catch_law() {
        let handler = |cause: Cause| Try::success(cause.to_string());
        let thrown: Try<String> = TryM::throw_error(Cause::msg("thrown"));
        assert_eq!(
            TryM::catch_error(thrown, handler),
            handler(Cause::msg("thrown"))
        );
    }

    #[rstest]
    fn catch_pure_law() {
        let pure: Try<i32> = TryM::pure(7);
        let caught = TryM::catch_error(pure, |_| Try::success(0));
        assert_eq!(caught, Try::success(7));
    }

    #[rstest]
    fn throw_short_circuit_law() {
        let thrown: Try<i32> = TryM::throw_error(Cause::msg("stop"));
        let chained = Monad::flat_map(thrown, |n| Try::success(n + 1));
        assert_eq!(chained, Try::failure(Cause::msg("stop")));
    }

    #[rstest]
    fn catch_error_handler_failure_replaces_cause() {
        let thrown: Try<i32> = TryM::throw_error(Cause::msg("first"));
        let caught = TryM::catch_error(thrown, |_| Try::failure(Cause::msg("second")));
        assert_eq!(caught, Try::failure(Cause::msg("second")));
    }

    #[rstest]
    fn handle_error_captures_panicking_handler() {
        let thrown: Try<i32> = TryM::throw_error(Cause::msg("first"));
        let handled = TryM::handle_error(thrown, |_| panic!("handler broke"));
        assert_eq!(handled, Try::failure(PanicError::new("handler broke")));
    }

    #[rstest]
    #[case::ok(Ok(1), Try::success(1))]
    #[case::err(Err(Cause::msg("bad")), Try::failure(Cause::msg("bad")))]
    fn from_result_matches_variant(
        #[case] result: Result<i32, Cause>,
        #[case] expected: Try<i32>,
    ) {
        assert_eq!(TryM::from_result(result), expected);
    }
}
