//! Applicative type class - combining independent computations.
//!
//! This module provides the `Applicative` trait, which extends `Functor` with
//! the ability to:
//!
//! - Lift pure values into the context (`pure`)
//! - Combine independent values using a function (`map2`)
//! - Create tuples of values (`product`)
//!
//! For `Try`, combining short-circuits on the first `Failure` from left to
//! right. The combining function runs behind the capture boundary.
//!
//! # Laws
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(a).map2(pure(b), f) == pure(f(a, b))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use attempt::control::{Cause, Try};
//! use attempt::typeclass::Applicative;
//!
//! let lifted: Try<i32> = <Try<()>>::pure(42);
//! assert_eq!(lifted, Try::success(42));
//!
//! let first: Try<i32> = Try::failure(Cause::msg("first"));
//! let second: Try<i32> = Try::failure(Cause::msg("second"));
//! assert_eq!(first.map2(second, |a, b| a + b), Try::failure(Cause::msg("first")));
//! ```

use super::functor::Functor;
use crate::control::Try;

/// A type class for types that support lifting values and combining contexts.
pub trait Applicative: Functor {
    /// Lifts a value into the applicative context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::control::Try;
    /// use attempt::typeclass::Applicative;
    ///
    /// let x: Try<&str> = <Try<()>>::pure("ready");
    /// assert_eq!(x, Try::success("ready"));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two values in the context using a binary function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::control::Try;
    /// use attempt::typeclass::Applicative;
    ///
    /// let sum = Try::success(3).map2(Try::success(4), |x, y| x + y);
    /// assert_eq!(sum, Try::success(7));
    /// ```
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Pairs two values in the context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::control::Try;
    /// use attempt::typeclass::Applicative;
    ///
    /// assert_eq!(Try::success(1).product(Try::success("a")), Try::success((1, "a")));
    /// ```
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }
}

// =============================================================================
// Try<T> Implementation
// =============================================================================

impl<T> Applicative for Try<T> {
    #[inline]
    fn pure<B>(value: B) -> Try<B> {
        Try::success(value)
    }

    fn map2<B, C, F>(self, other: Try<B>, function: F) -> Try<C>
    where
        F: FnOnce(T, B) -> C,
    {
        match (self, other) {
            (Self::Success(first), Try::Success(second)) => Try::of(|| Ok(function(first, second))),
            (Self::Failure(cause), _) | (_, Try::Failure(cause)) => Try::Failure(cause),
        }
    }
}
