use std::error::Error as StdError;
use std::fmt::Debug;

use thiserror::Error;

use crate::maybe::Maybe;

type BoxError = Box<dyn StdError + Send + Sync>;

/// The outcome of an operation that may succeed or fail.
///
/// The failure payload is held unmodified until explicitly transformed with
/// [`map_err`](Self::map_err). It is conventionally an error type, but any
/// type is permitted; wrap a plain payload in [`Payload`] when it has to
/// enter an error cause chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<T, E> {
  Success(T),
  Error(E),
}

/// Raised when unwrapping an [`Outcome`] in the wrong direction.
///
/// When the success value of an `Error` was requested, the original failure
/// payload is chained as [`source`](StdError::source).
#[derive(Debug, Error)]
#[error("{message}")]
pub struct UnwrapError {
  message: String,
  #[source]
  cause: Option<BoxError>,
}

impl UnwrapError {
  fn new(message: impl Into<String>, cause: Option<BoxError>) -> Self {
    Self {
      message: message.into(),
      cause,
    }
  }

  pub fn message(&self) -> &str {
    &self.message
  }
}

/// Carrier that lets a non-error payload sit in an error cause chain.
///
/// `Outcome::Error(404).map_err(Payload).try_unwrap()` yields an
/// [`UnwrapError`] whose source displays as `404`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{0:?}")]
pub struct Payload<E: Debug>(pub E);

const ERR_UNWRAP: &str = "Attempted to unwrap an Error";
const OK_UNWRAP_ERR: &str = "Attempted to unwrap the error from a Success";

impl<T, E> Outcome<T, E> {
  pub fn is_ok(&self) -> bool {
    matches!(self, Self::Success(_))
  }

  pub fn is_err(&self) -> bool {
    matches!(self, Self::Error(_))
  }

  pub fn as_ref(&self) -> Outcome<&T, &E> {
    match self {
      Self::Success(v) => Outcome::Success(v),
      Self::Error(e) => Outcome::Error(e),
    }
  }

  /// Transforms the success value, leaving a failure untouched.
  pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U, E> {
    match self {
      Self::Success(v) => Outcome::Success(f(v)),
      Self::Error(e) => Outcome::Error(e),
    }
  }

  /// Transforms the failure payload, leaving a success untouched.
  pub fn map_err<F>(self, f: impl FnOnce(E) -> F) -> Outcome<T, F> {
    match self {
      Self::Success(v) => Outcome::Success(v),
      Self::Error(e) => Outcome::Error(f(e)),
    }
  }

  /// Transforms the success value, or yields the default for a failure.
  ///
  /// Unlike [`Maybe::map_or`] this returns the bare value, not a container.
  pub fn map_or<U>(self, default: U, f: impl FnOnce(T) -> U) -> U {
    match self {
      Self::Success(v) => f(v),
      Self::Error(_) => default,
    }
  }

  /// Like [`map_or`](Self::map_or), but the default is computed lazily.
  pub fn map_or_else<U>(
    self,
    default: impl FnOnce() -> U,
    f: impl FnOnce(T) -> U,
  ) -> U {
    match self {
      Self::Success(v) => f(v),
      Self::Error(_) => default(),
    }
  }

  pub fn unwrap_or(self, fallback: T) -> T {
    match self {
      Self::Success(v) => v,
      Self::Error(_) => fallback,
    }
  }

  pub fn unwrap_or_else(self, fallback: impl FnOnce() -> T) -> T {
    match self {
      Self::Success(v) => v,
      Self::Error(_) => fallback(),
    }
  }

  /// Gets the failure payload, or reports the misdirected unwrap as a value.
  pub fn try_unwrap_err(self) -> Result<E, UnwrapError> {
    match self {
      Self::Success(_) => Err(UnwrapError::new(OK_UNWRAP_ERR, None)),
      Self::Error(e) => Ok(e),
    }
  }

  /// Chains a computation on the success value, short-circuiting a failure.
  pub fn and_then<U>(self, f: impl FnOnce(T) -> Outcome<U, E>) -> Outcome<U, E> {
    match self {
      Self::Success(v) => f(v),
      Self::Error(e) => Outcome::Error(e),
    }
  }

  /// Chains a recovery on the failure payload, short-circuiting a success.
  pub fn or_else<F>(self, f: impl FnOnce(E) -> Outcome<T, F>) -> Outcome<T, F> {
    match self {
      Self::Success(v) => Outcome::Success(v),
      Self::Error(e) => f(e),
    }
  }

  /// Converts to a [`Maybe`] over the success value, discarding a failure.
  pub fn ok(self) -> Maybe<T> {
    match self {
      Self::Success(v) => Maybe::Something(v),
      Self::Error(_) => Maybe::Nothing,
    }
  }

  /// Converts to a [`Maybe`] over the failure payload, discarding a success.
  pub fn err(self) -> Maybe<E> {
    match self {
      Self::Success(_) => Maybe::Nothing,
      Self::Error(e) => Maybe::Something(e),
    }
  }
}

impl<T, E: Into<BoxError>> Outcome<T, E> {
  /// Gets the success value, or reports the misdirected unwrap as a value
  /// with the failure payload chained as its cause.
  pub fn try_unwrap(self) -> Result<T, UnwrapError> {
    match self {
      Self::Success(v) => Ok(v),
      Self::Error(e) => Err(UnwrapError::new(ERR_UNWRAP, Some(e.into()))),
    }
  }
}

impl<T, E: Debug> Outcome<T, E> {
  /// Gets the success value.
  ///
  /// # Panics
  ///
  /// Panics with `Attempted to unwrap an Error` if this is a failure.
  pub fn unwrap(self) -> T {
    match self {
      Self::Success(v) => v,
      Self::Error(e) => panic!("{}: {:?}", ERR_UNWRAP, e),
    }
  }

  /// Gets the success value, panicking with the given message on a failure.
  pub fn expect(self, msg: &str) -> T {
    match self {
      Self::Success(v) => v,
      Self::Error(e) => panic!("{}: {:?}", msg, e),
    }
  }
}

impl<T: Debug, E> Outcome<T, E> {
  /// Gets the failure payload.
  ///
  /// # Panics
  ///
  /// Panics with `Attempted to unwrap the error from a Success` if this is
  /// a success.
  pub fn unwrap_err(self) -> E {
    match self {
      Self::Success(v) => panic!("{}: {:?}", OK_UNWRAP_ERR, v),
      Self::Error(e) => e,
    }
  }

  /// Gets the failure payload, panicking with the given message on a
  /// success.
  pub fn expect_err(self, msg: &str) -> E {
    match self {
      Self::Success(v) => panic!("{}: {:?}", msg, v),
      Self::Error(e) => e,
    }
  }
}

impl<T, E> From<&Outcome<T, E>> for bool {
  fn from(value: &Outcome<T, E>) -> Self {
    value.is_ok()
  }
}
