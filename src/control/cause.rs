//! Diagnostic causes carried by a failed [`Try`](super::Try).
//!
//! A [`Cause`] is the opaque payload of a failure. It is produced in one of
//! two ways:
//!
//! - A unit of work returns `Err(cause)`. Any `E: Error + Send + Sync` converts
//!   into a `Cause` through `?`, so callers rarely construct one by hand.
//! - A unit of work panics. The panic is caught at the capture boundary and
//!   its payload is rendered into a [`PanicError`]. A panic raised by
//!   [`Cause::resume`] carries the cause itself and is captured unchanged.
//!
//! # Examples
//!
//! ```rust
//! use attempt::control::{Cause, CauseKind};
//!
//! let parsed: Result<i32, Cause> = "forty-two".parse::<i32>().map_err(Cause::from);
//! let cause = parsed.unwrap_err();
//! assert_eq!(cause.kind(), CauseKind::Error);
//! assert!(cause.downcast_ref::<std::num::ParseIntError>().is_some());
//!
//! let message = Cause::msg("disk full");
//! assert_eq!(message.to_string(), "disk full");
//! ```

use std::any::{Any, TypeId, type_name};
use std::error::Error;
use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

/// The category of failure a [`Cause`] was captured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CauseKind {
    /// The unit of work returned an error.
    Error,
    /// The unit of work panicked.
    Panic,
}

/// The rendered payload of a captured panic.
///
/// # Examples
///
/// ```rust
/// use attempt::control::PanicError;
///
/// let error = PanicError::new("index out of bounds");
/// assert_eq!(error.message(), "index out of bounds");
/// assert_eq!(error.to_string(), "index out of bounds");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct PanicError {
    message: String,
}

impl PanicError {
    /// Creates a panic error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the panic message.
    pub fn message(&self) -> &str {
        &self.message
    }

    fn from_payload(payload: &(dyn Any + Send)) -> Self {
        let message = if let Some(string) = payload.downcast_ref::<&str>() {
            (*string).to_string()
        } else if let Some(string) = payload.downcast_ref::<String>() {
            string.clone()
        } else {
            "Unknown panic".to_string()
        };
        Self { message }
    }
}

/// A plain-text diagnostic, created by [`Cause::msg`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct MessageError(String);

/// The opaque diagnostic held by a failed [`Try`](super::Try).
///
/// A `Cause` wraps a shared `dyn Error + Send + Sync` together with the
/// [`CauseKind`] it was captured from. Cloning is cheap and shares the
/// underlying error.
///
/// Two causes are equal when their qualified renderings,
/// `"{type_name}: {description}"`, are equal. Errors of different types never
/// compare equal, even when their descriptions match.
///
/// `Cause` does not implement [`std::error::Error`] itself, which is what
/// allows the blanket `From<E: Error>` conversion used by `?`. Use
/// [`Cause::as_error`] to borrow it as one, or convert it into
/// `Box<dyn Error + Send + Sync>`.
#[derive(Clone)]
pub struct Cause {
    kind: CauseKind,
    type_name: &'static str,
    error: Arc<dyn Error + Send + Sync + 'static>,
}

impl Cause {
    /// Wraps an error value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::control::Cause;
    /// use std::io;
    ///
    /// let cause = Cause::new(io::Error::new(io::ErrorKind::NotFound, "missing"));
    /// assert_eq!(cause.to_string(), "missing");
    /// ```
    pub fn new<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self {
            kind: CauseKind::Error,
            type_name: error_type_name::<E>(),
            error: Arc::new(error),
        }
    }

    /// Creates a cause from a plain message.
    pub fn msg<M: fmt::Display>(message: M) -> Self {
        Self::new(MessageError(message.to_string()))
    }

    /// Creates a cause from a panic payload as returned by
    /// [`std::panic::catch_unwind`].
    ///
    /// A payload that is itself a `Cause`, as raised by [`Cause::resume`], is
    /// returned unchanged. `&str` and `String` payloads keep their text; any
    /// other payload is rendered as `"Unknown panic"`.
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let payload = match payload.downcast::<Self>() {
            Ok(cause) => {
                tracing::debug!(cause = %cause, "captured re-raised cause");
                return *cause;
            }
            Err(payload) => payload,
        };
        let error = PanicError::from_payload(payload.as_ref());
        tracing::debug!(panic_message = %error.message(), "captured panic from unit of work");
        Self {
            kind: CauseKind::Panic,
            type_name: error_type_name::<PanicError>(),
            error: Arc::new(error),
        }
    }

    /// Returns the category this cause was captured from.
    #[inline]
    pub const fn kind(&self) -> CauseKind {
        self.kind
    }

    /// Returns the name of the underlying error type.
    ///
    /// Plain messages report `"message"` and captured panics report `"panic"`;
    /// any other error reports [`std::any::type_name`] of its type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::control::Cause;
    ///
    /// assert_eq!(Cause::msg("x").type_name(), "message");
    /// assert_eq!(Cause::new(std::fmt::Error).type_name(), "core::fmt::Error");
    /// ```
    #[inline]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns `true` if this cause was captured from a panic.
    #[inline]
    pub const fn is_panic(&self) -> bool {
        matches!(self.kind, CauseKind::Panic)
    }

    /// Attempts to downcast the underlying error to a concrete type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::control::{Cause, PanicError};
    ///
    /// let cause = Cause::new(PanicError::new("boom"));
    /// assert_eq!(cause.downcast_ref::<PanicError>().map(PanicError::message), Some("boom"));
    /// assert!(cause.downcast_ref::<std::fmt::Error>().is_none());
    /// ```
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: Error + 'static,
    {
        self.error.downcast_ref::<E>()
    }

    /// Borrows the underlying error.
    pub fn as_error(&self) -> &(dyn Error + Send + Sync + 'static) {
        self.error.as_ref()
    }

    /// Re-raises this cause as a panic on the current thread.
    ///
    /// The panic payload is the cause itself, so capturing it again yields the
    /// same cause with its kind and concrete error intact. A cause captured
    /// from a panic resumes unwinding without invoking the panic hook a second
    /// time; any other cause goes through the hook like a fresh panic.
    ///
    /// # Panics
    ///
    /// Always.
    pub fn resume(self) -> ! {
        match self.kind {
            CauseKind::Panic => std::panic::resume_unwind(Box::new(self)),
            CauseKind::Error => std::panic::panic_any(self),
        }
    }
}

fn error_type_name<E: 'static>() -> &'static str {
    let id = TypeId::of::<E>();
    if id == TypeId::of::<MessageError>() {
        "message"
    } else if id == TypeId::of::<PanicError>() {
        "panic"
    } else {
        type_name::<E>()
    }
}

/// Runs a unit of work, converting a panic into a [`Cause`].
///
/// This is the single capture boundary used by every `Try` operation that
/// invokes caller-supplied code.
pub(crate) fn capture<R, F>(work: F) -> Result<R, Cause>
where
    F: FnOnce() -> R,
{
    catch_unwind(AssertUnwindSafe(work)).map_err(Cause::from_panic)
}

// =============================================================================
// Formatting
// =============================================================================

impl fmt::Display for Cause {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, formatter)
    }
}

impl fmt::Debug for Cause {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Cause")
            .field("kind", &self.kind)
            .field("type_name", &self.type_name)
            .field("description", &self.error.to_string())
            .finish()
    }
}

impl PartialEq for Cause {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.error, &other.error)
            || (self.type_name == other.type_name
                && self.error.to_string() == other.error.to_string())
    }
}

impl Eq for Cause {}

// =============================================================================
// Conversions
// =============================================================================

impl<E> From<E> for Cause
where
    E: Error + Send + Sync + 'static,
{
    #[inline]
    fn from(error: E) -> Self {
        Self::new(error)
    }
}

impl AsRef<dyn Error + Send + Sync + 'static> for Cause {
    fn as_ref(&self) -> &(dyn Error + Send + Sync + 'static) {
        self.as_error()
    }
}

/// Error adapter used when a `Cause` leaves the crate as a boxed error.
struct SharedError(Arc<dyn Error + Send + Sync + 'static>);

impl fmt::Display for SharedError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, formatter)
    }
}

impl fmt::Debug for SharedError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, formatter)
    }
}

impl Error for SharedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.0.source()
    }
}

impl From<Cause> for Box<dyn Error + Send + Sync + 'static> {
    fn from(cause: Cause) -> Self {
        Box::new(SharedError(cause.error))
    }
}

static_assertions::assert_impl_all!(Cause: Send, Sync, Clone);
