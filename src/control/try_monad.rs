//! Try type - a computation that either produced a value or failed.
//!
//! This module provides `Try<T>`, which is either a `Success(T)` or a
//! `Failure(Cause)`. Every operation that runs caller-supplied code does so
//! behind a capture boundary: a returned `Err` and a panic both become a
//! `Failure`, so a chain of combinators never unwinds past the `Try`.
//!
//! # Examples
//!
//! ```rust
//! use attempt::control::{Cause, Try};
//!
//! let parsed = Try::of(|| Ok("21".parse::<i32>()?))
//!     .map(|n| Ok(n * 2))
//!     .flat_map(|n| {
//!         if n > 0 { Try::success(n) } else { Try::failure(Cause::msg("negative")) }
//!     });
//! assert_eq!(parsed, Try::success(42));
//!
//! let divisor = std::hint::black_box(0);
//! let recovered = Try::of(|| Ok(10 / divisor)).recover(|_| Ok(-1));
//! assert_eq!(recovered.get().ok(), Some(-1));
//! ```

use super::cause::{Cause, capture};

/// A value of type `T`, or the [`Cause`] that prevented producing one.
///
/// `Try` is immutable: every operation consumes it and returns either a new
/// `Try` or the same one moved back out. A `Failure` never holds a `T`, so it
/// moves freely between `Try<T>` and `Try<U>`.
///
/// Equality is structural. Failures compare by the error type and rendered
/// description of their causes, and a `Success` never equals a `Failure`.
///
/// # Type Parameters
///
/// * `T` - The type of the successful value. Use `Try<Option<U>>` for a
///   success that may carry no value.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Try<T> {
    /// The unit of work produced a value.
    Success(T),
    /// The unit of work failed with the given cause.
    Failure(Cause),
}

impl<T> Try<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Runs `producer`, capturing its failure.
    ///
    /// `Ok(value)` becomes `Success(value)`. `Err(cause)` and a panic inside
    /// `producer` both become `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::control::Try;
    ///
    /// let success = Try::of(|| Ok(1 + 1));
    /// assert_eq!(success, Try::success(2));
    ///
    /// let parsed = Try::of(|| Ok("nope".parse::<u8>()?));
    /// assert!(parsed.is_failure());
    ///
    /// let panicked: Try<i32> = Try::of(|| panic!("gave up"));
    /// assert_eq!(panicked.cause().map(ToString::to_string), Some("gave up".to_string()));
    /// ```
    pub fn of<F>(producer: F) -> Self
    where
        F: FnOnce() -> Result<T, Cause>,
    {
        match capture(producer) {
            Ok(Ok(value)) => Self::Success(value),
            Ok(Err(cause)) | Err(cause) => {
                tracing::trace!(cause = %cause, "unit of work failed");
                Self::Failure(cause)
            }
        }
    }

    /// Wraps a value as a `Success`.
    #[inline]
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Wraps a cause as a `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::control::{Cause, Try};
    /// use std::io;
    ///
    /// let from_error: Try<i32> = Try::failure(io::Error::other("offline"));
    /// assert_eq!(from_error, Try::failure(io::Error::other("offline")));
    /// assert_ne!(from_error, Try::failure(Cause::msg("offline")));
    /// ```
    #[inline]
    pub fn failure(cause: impl Into<Cause>) -> Self {
        Self::Failure(cause.into())
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns `true` if this is a `Success`.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a `Failure`.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Returns the cause if this is a `Failure`.
    #[inline]
    pub const fn cause(&self) -> Option<&Cause> {
        match self {
            Self::Success(_) => None,
            Self::Failure(cause) => Some(cause),
        }
    }

    /// Borrows the value, cloning the cause on failure.
    pub fn as_ref(&self) -> Try<&T> {
        match self {
            Self::Success(value) => Try::Success(value),
            Self::Failure(cause) => Try::Failure(cause.clone()),
        }
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the value, or re-raises the stored cause as `Err`.
    ///
    /// This is the point where a captured failure re-enters the caller's
    /// ordinary error flow, typically through `?`.
    ///
    /// # Errors
    ///
    /// Returns the stored [`Cause`] if this is a `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::control::{Cause, Try};
    ///
    /// fn total(a: Try<i32>, b: Try<i32>) -> Result<i32, Cause> {
    ///     Ok(a.get()? + b.get()?)
    /// }
    ///
    /// assert_eq!(total(Try::success(1), Try::success(2)).ok(), Some(3));
    /// assert!(total(Try::success(1), Try::failure(Cause::msg("missing"))).is_err());
    /// ```
    #[inline]
    pub fn get(self) -> Result<T, Cause> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(cause) => Err(cause),
        }
    }

    /// Returns the value, or re-raises the stored cause as a panic.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Failure`. The panic payload is the cause itself,
    /// so an enclosing [`Try::of`] recaptures it unchanged; see
    /// [`Cause::resume`].
    pub fn unwrap(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(cause) => cause.resume(),
        }
    }

    /// Returns the value, or `default` if this is a `Failure`.
    #[inline]
    pub fn get_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Converts into an `Option<T>`, discarding the cause.
    #[inline]
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Converts into an `Option<Cause>`, discarding the value.
    #[inline]
    pub fn into_cause(self) -> Option<Cause> {
        match self {
            Self::Success(_) => None,
            Self::Failure(cause) => Some(cause),
        }
    }

    /// Eliminates the `Try` by applying one of two functions.
    ///
    /// Unlike the combinators, `fold` does not capture panics: it hands the
    /// result straight back to the caller.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::control::{Cause, Try};
    ///
    /// let describe =
    ///     |t: Try<i32>| t.fold(|cause| format!("failed: {cause}"), |n| format!("got {n}"));
    /// assert_eq!(describe(Try::success(3)), "got 3");
    /// assert_eq!(describe(Try::failure(Cause::msg("timeout"))), "failed: timeout");
    /// ```
    #[inline]
    pub fn fold<R, F, G>(self, on_failure: F, on_success: G) -> R
    where
        F: FnOnce(Cause) -> R,
        G: FnOnce(T) -> R,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(cause) => on_failure(cause),
        }
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Applies `transformer` to the value of a `Success`.
    ///
    /// `Ok(new_value)` gives `Success(new_value)`; `Err(cause)` or a panic
    /// gives `Failure(cause)`. A `Failure` is returned unchanged and
    /// `transformer` is not invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::control::{Cause, Try};
    ///
    /// assert_eq!(Try::success(4).map(|n| Ok(n * 10)), Try::success(40));
    ///
    /// let rejected =
    ///     Try::success(4).map(|n| if n > 3 { Err(Cause::msg("too big")) } else { Ok(n) });
    /// assert_eq!(rejected, Try::failure(Cause::msg("too big")));
    /// ```
    pub fn map<U, F>(self, transformer: F) -> Try<U>
    where
        F: FnOnce(T) -> Result<U, Cause>,
    {
        match self {
            Self::Success(value) => Try::of(|| transformer(value)),
            Self::Failure(cause) => Try::Failure(cause),
        }
    }

    /// Applies a `Try`-returning `transformer` to the value of a `Success`
    /// and flattens the result.
    ///
    /// If the returned `Try` is a `Failure`, its cause becomes the cause of the
    /// result, so nested failures never stack. A panic inside `transformer` is
    /// captured. A `Failure` is returned unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::control::{Cause, Try};
    ///
    /// let halve = |n: i32| {
    ///     if n % 2 == 0 { Try::success(n / 2) } else { Try::failure(Cause::msg("odd")) }
    /// };
    /// assert_eq!(Try::success(8).flat_map(halve), Try::success(4));
    /// assert_eq!(Try::success(7).flat_map(halve), Try::failure(Cause::msg("odd")));
    /// ```
    pub fn flat_map<U, F>(self, transformer: F) -> Try<U>
    where
        F: FnOnce(T) -> Try<U>,
    {
        match self {
            Self::Success(value) => Try::of(|| transformer(value).get()),
            Self::Failure(cause) => Try::Failure(cause),
        }
    }

    // =========================================================================
    // Failure Interception
    // =========================================================================

    /// Passes the cause of a `Failure` to `consumer` for its side effect.
    ///
    /// If `consumer` returns `Ok(())` the same `Failure` is returned. If it
    /// returns `Err` or panics, the new cause supersedes the original. A
    /// `Success` is returned unchanged and `consumer` is not invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::control::{Cause, Try};
    ///
    /// let mut seen = Vec::new();
    /// let failed: Try<i32> = Try::failure(Cause::msg("lost connection"));
    /// let observed = failed.on_failure(|cause| {
    ///     seen.push(cause.to_string());
    ///     Ok(())
    /// });
    /// assert_eq!(observed, Try::failure(Cause::msg("lost connection")));
    /// assert_eq!(seen, vec!["lost connection".to_string()]);
    /// ```
    pub fn on_failure<F>(self, consumer: F) -> Self
    where
        F: FnOnce(&Cause) -> Result<(), Cause>,
    {
        match self {
            success @ Self::Success(_) => success,
            Self::Failure(cause) => match Try::of(|| consumer(&cause)) {
                Try::Success(()) => Self::Failure(cause),
                Try::Failure(superseding) => Self::Failure(superseding),
            },
        }
    }

    // =========================================================================
    // Recovery
    // =========================================================================

    /// Attempts to turn a `Failure` into a `Success` by passing its cause to
    /// `transformer`.
    ///
    /// `Ok(value)` gives `Success(value)`; `Err(cause)` or a panic gives a
    /// `Failure` with the new cause. A `Success` is returned unchanged and
    /// `transformer` is not invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::control::{Cause, Try};
    ///
    /// let fallback = Try::<u16>::failure(Cause::msg("no port configured")).recover(|_| Ok(8080));
    /// assert_eq!(fallback, Try::success(8080));
    ///
    /// let still_failed = Try::<u16>::failure(Cause::msg("no port configured"))
    ///     .recover(|cause| Err(Cause::msg(format!("fatal: {cause}"))));
    /// assert_eq!(still_failed, Try::failure(Cause::msg("fatal: no port configured")));
    /// ```
    pub fn recover<F>(self, transformer: F) -> Self
    where
        F: FnOnce(Cause) -> Result<T, Cause>,
    {
        match self {
            success @ Self::Success(_) => success,
            Self::Failure(cause) => {
                tracing::trace!(cause = %cause, "attempting recovery");
                Self::of(|| transformer(cause))
            }
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T, E> From<Result<T, E>> for Try<T>
where
    E: Into<Cause>,
{
    /// Converts a `Result` to a `Try`.
    ///
    /// `Ok(value)` becomes `Success(value)`, and `Err(error)` becomes
    /// `Failure(error.into())`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::control::Try;
    ///
    /// let parsed: Try<i32> = "12".parse::<i32>().into();
    /// assert_eq!(parsed, Try::success(12));
    /// ```
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error.into()),
        }
    }
}

impl<T> From<Try<T>> for Result<T, Cause> {
    /// Converts a `Try` to a `Result`, equivalent to [`Try::get`].
    #[inline]
    fn from(attempt: Try<T>) -> Self {
        attempt.get()
    }
}

static_assertions::assert_impl_all!(Try<String>: Send, Sync, Clone);
static_assertions::assert_not_impl_any!(Try<std::rc::Rc<i32>>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::{CauseKind, PanicError};
    use rstest::rstest;
    use std::cell::Cell;

    fn boom() -> Cause {
        Cause::msg("boom")
    }

    #[rstest]
    fn test_of_success() {
        assert_eq!(Try::of(|| Ok(10)), Try::Success(10));
    }

    #[rstest]
    fn test_of_returned_error() {
        let attempt: Try<i32> = Try::of(|| Err(boom()));
        assert_eq!(attempt, Try::Failure(boom()));
    }

    #[rstest]
    fn test_of_captures_panic() {
        let attempt: Try<i32> = Try::of(|| panic!("kaput"));
        let cause = attempt.into_cause().unwrap();
        assert!(cause.is_panic());
        assert_eq!(cause.to_string(), "kaput");
    }

    #[rstest]
    fn test_get_returns_value_or_cause() {
        assert_eq!(Try::success("value").get().ok(), Some("value"));
        assert_eq!(Try::<i32>::failure(boom()).get().err(), Some(boom()));
    }

    #[rstest]
    fn test_inspection() {
        let success = Try::success(1);
        let failure = Try::<i32>::failure(boom());

        assert!(success.is_success());
        assert!(!success.is_failure());
        assert!(failure.is_failure());
        assert_eq!(success.cause(), None);
        assert_eq!(failure.cause(), Some(&boom()));
        assert_eq!(success.as_ref(), Try::Success(&1));
        assert_eq!(failure.as_ref(), Try::Failure(boom()));
    }

    #[rstest]
    fn test_get_or_and_ok() {
        assert_eq!(Try::success(1).get_or(0), 1);
        assert_eq!(Try::<i32>::failure(boom()).get_or(0), 0);
        assert_eq!(Try::success(1).ok(), Some(1));
        assert_eq!(Try::<i32>::failure(boom()).ok(), None);
    }

    #[rstest]
    fn test_map_on_failure_skips_transformer() {
        let calls = Cell::new(0);
        let mapped = Try::<i32>::failure(boom()).map(|n| {
            calls.set(calls.get() + 1);
            Ok(n + 1)
        });
        assert_eq!(mapped, Try::failure(boom()));
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn test_map_captures_panic() {
        let mapped: Try<i32> = Try::success(1).map(|_| panic!("in map"));
        assert_eq!(mapped, Try::failure(PanicError::new("in map")));
    }

    #[rstest]
    fn test_flat_map_flattens_inner_failure() {
        let result: Try<i32> = Try::success(1).flat_map(|_| Try::failure(boom()));
        assert_eq!(result, Try::Failure(boom()));
    }

    #[rstest]
    fn test_flat_map_changes_failure_type() {
        let result: Try<String> =
            Try::<i32>::failure(boom()).flat_map(|n| Try::success(n.to_string()));
        assert_eq!(result, Try::Failure(boom()));
    }

    #[rstest]
    fn test_on_failure_consumer_error_supersedes() {
        let result =
            Try::<i32>::failure(boom()).on_failure(|_| Err(Cause::msg("cleanup failed")));
        assert_eq!(result, Try::failure(Cause::msg("cleanup failed")));
    }

    #[rstest]
    fn test_on_failure_keeps_same_cause_instance() {
        let original = boom();
        let result = Try::<i32>::Failure(original.clone()).on_failure(|_| Ok(()));
        let kept = result.into_cause().unwrap();
        assert!(std::ptr::addr_eq(kept.as_error(), original.as_error()));
    }

    #[rstest]
    fn test_recover_success_is_noop() {
        let calls = Cell::new(0);
        let result = Try::success(5).recover(|_| {
            calls.set(calls.get() + 1);
            Ok(0)
        });
        assert_eq!(result, Try::success(5));
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn test_recover_panic_replaces_cause() {
        let result: Try<i32> = Try::failure(boom()).recover(|_| panic!("recovery failed"));
        assert_eq!(result, Try::failure(PanicError::new("recovery failed")));
    }

    #[rstest]
    fn test_result_conversions() {
        let from_ok: Try<i32> = Ok::<i32, std::fmt::Error>(3).into();
        assert_eq!(from_ok, Try::success(3));

        let from_err: Try<i32> = Err::<i32, Cause>(boom()).into();
        assert_eq!(from_err, Try::failure(boom()));

        let back: Result<i32, Cause> = from_err.into();
        assert_eq!(back.err(), Some(boom()));
    }

    #[rstest]
    fn test_unwrap_failure_panics_with_cause() {
        let payload =
            std::panic::catch_unwind(|| Try::<i32>::failure(boom()).unwrap()).unwrap_err();
        assert_eq!(payload.downcast_ref::<Cause>(), Some(&boom()));
    }

    #[derive(Debug, thiserror::Error)]
    #[error("quota exceeded")]
    struct QuotaError;

    #[rstest]
    fn test_unwrap_inside_of_keeps_original_cause() {
        let inner: Try<i32> = Try::failure(QuotaError);
        let outer = Try::of(|| Ok(inner.unwrap()));
        let cause = outer.into_cause().unwrap();
        assert_eq!(cause.kind(), CauseKind::Error);
        assert!(cause.downcast_ref::<QuotaError>().is_some());
    }

    #[rstest]
    fn test_unwrap_inside_map_keeps_panic_cause() {
        let inner: Try<i32> = Try::success(0).map(|_| panic!("first"));
        let outer = Try::success(1).map(|n| Ok(n + inner.unwrap()));
        assert_eq!(outer, Try::failure(PanicError::new("first")));
        assert!(outer.cause().is_some_and(Cause::is_panic));
    }

    #[rstest]
    fn test_unwrap_success() {
        assert_eq!(Try::success(9).unwrap(), 9);
    }
}
