//! Functor type class - mapping over the success value.
//!
//! This module provides the `Functor` trait, which represents types that can
//! have a function applied to their inner value while preserving the structure.
//!
//! For `Try`, `fmap` is the infallible counterpart of [`Try::map`]: the
//! function returns a plain value, and only a panic can turn a `Success`
//! into a `Failure`.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use attempt::control::{Cause, Try};
//! use attempt::typeclass::Functor;
//!
//! let length = Try::success("hello").fmap(str::len);
//! assert_eq!(length, Try::success(5));
//!
//! let failed: Try<&str> = Try::failure(Cause::msg("unreadable"));
//! assert_eq!(failed.fmap(str::len), Try::failure(Cause::msg("unreadable")));
//! ```

use super::higher::TypeConstructor;
use crate::control::Try;

/// A type class for types that can have a function mapped over their contents.
///
/// # Laws
///
/// ## Identity Law
///
/// ```text
/// fa.fmap(|x| x) == fa
/// ```
///
/// ## Composition Law
///
/// ```text
/// fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::control::Try;
    /// use attempt::typeclass::Functor;
    ///
    /// assert_eq!(Try::success(5).fmap(|n| n * 2), Try::success(10));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the value inside the functor.
    ///
    /// Useful when the functor must stay available afterwards.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::control::Try;
    /// use attempt::typeclass::Functor;
    ///
    /// let name = Try::success("ferris".to_string());
    /// assert_eq!(name.fmap_ref(String::len), Try::success(6));
    /// assert!(name.is_success());
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the value inside the functor with a constant value.
    ///
    /// This is equivalent to `fmap(|_| value)`.
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, replacing it with `()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::control::{Cause, Try};
    /// use attempt::typeclass::Functor;
    ///
    /// assert_eq!(Try::success(5).void(), Try::success(()));
    /// assert!(Try::<i32>::failure(Cause::msg("no")).void().is_failure());
    /// ```
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

// =============================================================================
// Try<T> Implementation
// =============================================================================

impl<T> Functor for Try<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Try<B>
    where
        F: FnOnce(T) -> B,
    {
        self.map(|value| Ok(function(value)))
    }

    fn fmap_ref<B, F>(&self, function: F) -> Try<B>
    where
        F: FnOnce(&T) -> B,
    {
        match self {
            Self::Success(value) => Try::of(|| Ok(function(value))),
            Self::Failure(cause) => Try::Failure(cause.clone()),
        }
    }
}
