//! # attempt
//!
//! A `Try` monad for Rust: a single immutable type that is either a
//! successful value or the diagnostic cause of a failure.
//!
//! ## Overview
//!
//! Rust signals failure in two ways, returned errors and panics. `Try`
//! captures both at the point where caller-supplied code runs, so a chain of
//! combinators can be written without caring which one occurred:
//!
//! - **Construction**: [`Try::of`](control::Try::of), [`Try::success`](control::Try::success),
//!   [`Try::failure`](control::Try::failure)
//! - **Extraction**: [`Try::get`](control::Try::get) hands the cause back as `Err`
//! - **Combinators**: `map`, `flat_map`, `on_failure`, `recover`
//! - **Type Classes**: `Functor`, `Applicative`, `Monad`, `MonadError` instances
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits and their `Try` instances
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use attempt::prelude::*;
//!
//! let divisor = std::hint::black_box(0);
//! let answer = Try::of(|| Ok(10 / divisor))
//!     .map(|n| Ok(n + 1))
//!     .recover(|_| Ok(-1));
//! assert_eq!(answer.get().ok(), Some(-1));
//! ```
//!
//! Captured panics still pass through the process panic hook, so the default
//! hook prints them to stderr. Under `panic = "abort"` only returned errors
//! can be captured.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use attempt::prelude::*;
/// ```
pub mod prelude {
    pub use crate::control::*;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;
}

pub mod control;

#[cfg(feature = "typeclass")]
pub mod typeclass;
