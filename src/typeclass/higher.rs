//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Try<_>` directly.
//! [`TypeConstructor`] names the applied type (`Inner`) and lets the same
//! constructor be re-applied to another type (`WithType<B>`), which is what
//! [`Functor`](super::Functor) and [`Monad`](super::Monad) are written
//! against.
//!
//! # Example
//!
//! ```rust
//! use attempt::control::Try;
//! use attempt::typeclass::TypeConstructor;
//!
//! fn rewrap<T: TypeConstructor>(_value: &T, next: T::WithType<String>) -> T::WithType<String> {
//!     next
//! }
//!
//! let rewrapped: Try<String> = rewrap(&Try::success(42), Try::success("answer".to_string()));
//! assert_eq!(rewrapped, Try::success("answer".to_string()));
//! ```

use crate::control::Try;

/// A trait representing a type constructor.
///
/// # Associated Types
///
/// - `Inner`: The type parameter that this type constructor is currently applied to.
/// - `WithType<B>`: The same type constructor applied to a different type `B`.
///
/// # Laws
///
/// 1. **Consistency**: `<F as TypeConstructor>::WithType<F::Inner>` should be
///    equivalent to `F` (up to type equality).
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For `Try<i32>`, this is `i32`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    ///
    /// For `Try<i32>`, `WithType<String>` is `Try<String>`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<T> TypeConstructor for Try<T> {
    type Inner = T;
    type WithType<B> = Try<B>;
}
