//! Type class traits and their `Try` instances.
//!
//! This module provides the type classes a `Try` participates in:
//!
//! - [`TypeConstructor`]: Higher-kinded type emulation via GAT
//! - [`Functor`]: Mapping an infallible function over the success value
//! - [`Applicative`]: Lifting values and combining independent `Try`s
//! - [`Monad`]: Sequencing dependent computations
//! - [`MonadError`]: Throwing and catching causes
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! Generic Associated Types (GAT) are used to emulate them, so generic code
//! can be written against `M: Monad` and instantiated with `Try<_>`.
//!
//! ## Capture Boundary
//!
//! Every instance method that runs a caller-supplied function does so behind
//! the same capture boundary as the inherent `Try` combinators: a panic turns
//! into a `Failure` rather than unwinding.
//!
//! # Examples
//!
//! ```rust
//! use attempt::control::{Cause, Try};
//! use attempt::typeclass::{Applicative, Functor, Monad};
//!
//! let width = Try::success(3);
//! let height = Try::success(4);
//! let area = width.map2(height, |w, h| w * h).fmap(|a| a * 2);
//! assert_eq!(area, Try::success(24));
//!
//! let lifted: Try<&str> = <Try<()>>::pure("lifted");
//! let stopped = lifted.then(Try::<i32>::failure(Cause::msg("stop")));
//! assert_eq!(stopped, Try::failure(Cause::msg("stop")));
//! ```

mod applicative;
mod functor;
mod higher;
mod monad;
mod monad_error;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
pub use monad_error::MonadError;
