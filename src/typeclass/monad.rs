//! Monad type class - sequencing computations with dependency.
//!
//! This module provides the `Monad` trait, which extends `Applicative` with
//! the ability to chain computations where each step depends on the previous
//! result.
//!
//! For `Try`, `flat_map` is the inherent [`Try::flat_map`]: a `Failure`
//! short-circuits, and a `Failure` returned by the step becomes the result
//! without nesting.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! m.flat_map(pure) == m
//! ```
//!
//! ## Associativity
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```

use super::applicative::Applicative;
use crate::control::Try;

/// A type class for types that support sequencing dependent computations.
///
/// # Examples
///
/// ```rust
/// use attempt::control::{Cause, Try};
/// use attempt::typeclass::Monad;
///
/// fn checked_sqrt(m: Try<f64>) -> Try<f64> {
///     Monad::and_then(m, |x| {
///         if x >= 0.0 { Try::success(x.sqrt()) } else { Try::failure(Cause::msg("negative")) }
///     })
/// }
///
/// assert_eq!(checked_sqrt(Try::success(16.0)), Try::success(4.0));
/// assert_eq!(checked_sqrt(Try::success(-1.0)), Try::failure(Cause::msg("negative")));
/// ```
pub trait Monad: Applicative {
    /// Applies a function to the value inside the monad and flattens the result.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map` to match Rust's naming conventions.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two monadic computations, discarding the first result.
    ///
    /// If `self` is a failure, the failure propagates and `next` is dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::control::{Cause, Try};
    /// use attempt::typeclass::Monad;
    ///
    /// assert_eq!(Try::success(1).then(Try::success("next")), Try::success("next"));
    ///
    /// let stopped: Try<i32> = Try::failure(Cause::msg("stopped"));
    /// assert_eq!(stopped.then(Try::success("next")), Try::failure(Cause::msg("stopped")));
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

// =============================================================================
// Try<T> Implementation
// =============================================================================

impl<T> Monad for Try<T> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Try<B>
    where
        F: FnOnce(T) -> Try<B>,
    {
        // Delegate to the inherent combinator
        Self::flat_map(self, function)
    }
}
