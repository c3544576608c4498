//! Control structures for capturing failure as a value.
//!
//! This module provides:
//!
//! - [`Try`]: either a `Success(T)` or a `Failure(Cause)`, with combinators
//!   that never let a failure escape as an unwinding panic
//! - [`Cause`]: the opaque diagnostic carried by a failure
//! - [`CauseKind`]: whether a cause came from a returned error or a panic
//!
//! # Examples
//!
//! ## Capturing Panics
//!
//! ```rust
//! use attempt::control::{CauseKind, Try};
//!
//! let divisor = std::hint::black_box(0);
//! let quotient = Try::of(|| Ok(10 / divisor));
//! let cause = quotient.cause().unwrap();
//! assert_eq!(cause.kind(), CauseKind::Panic);
//! assert_eq!(cause.to_string(), "attempt to divide by zero");
//! ```
//!
//! ## Chaining
//!
//! ```rust
//! use attempt::control::{Cause, Try};
//!
//! fn read_port(raw: &str) -> Try<u16> {
//!     Try::of(|| Ok(raw.trim().parse::<u16>()?))
//!         .on_failure(|cause| {
//!             eprintln!("invalid port {raw:?}: {cause}");
//!             Ok(())
//!         })
//!         .recover(|_| Ok(8080))
//! }
//!
//! assert_eq!(read_port(" 3000 "), Try::success(3000));
//! assert_eq!(read_port("http"), Try::success(8080));
//! ```

mod cause;
mod try_monad;

pub use cause::{Cause, CauseKind, MessageError, PanicError};
pub use try_monad::Try;
