use thiserror::Error;

use crate::outcome::Outcome;

/// A value that may or may not be present.
///
/// Every combinator consumes the container and returns a new one. Callbacks
/// are invoked at most once, and only when the active variant calls for it:
/// `map` on [`Nothing`](Maybe::Nothing) never runs its callback, `*_or_else`
/// fallbacks never run on [`Something`](Maybe::Something).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
  Something(T),
  #[default]
  Nothing,
}

/// Raised when extracting the value of `Nothing` without a fallback.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct EmptyMaybeError {
  message: String,
}

impl EmptyMaybeError {
  fn new(message: impl Into<String>) -> Self {
    Self {
      message: message.into(),
    }
  }

  pub fn message(&self) -> &str {
    &self.message
  }
}

const EMPTY_UNWRAP: &str = "Attempted to unwrap Nothing";

impl<T> Maybe<T> {
  pub fn is_something(&self) -> bool {
    matches!(self, Self::Something(_))
  }

  pub fn is_nothing(&self) -> bool {
    matches!(self, Self::Nothing)
  }

  pub fn as_ref(&self) -> Maybe<&T> {
    match self {
      Self::Something(v) => Maybe::Something(v),
      Self::Nothing => Maybe::Nothing,
    }
  }

  /// Transforms the held value, leaving `Nothing` untouched.
  pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Maybe<U> {
    match self {
      Self::Something(v) => Maybe::Something(f(v)),
      Self::Nothing => Maybe::Nothing,
    }
  }

  /// Transforms the held value, or wraps the fallback for `Nothing`.
  ///
  /// Either way the returned container is `Something`.
  pub fn map_or<U>(self, f: impl FnOnce(T) -> U, fallback: U) -> Maybe<U> {
    match self {
      Self::Something(v) => Maybe::Something(f(v)),
      Self::Nothing => Maybe::Something(fallback),
    }
  }

  /// Like [`map_or`](Self::map_or), but the fallback is computed lazily.
  pub fn map_or_else<U>(
    self,
    f: impl FnOnce(T) -> U,
    fallback: impl FnOnce() -> U,
  ) -> Maybe<U> {
    match self {
      Self::Something(v) => Maybe::Something(f(v)),
      Self::Nothing => Maybe::Something(fallback()),
    }
  }

  /// Gets the held value, or `None` for `Nothing`.
  ///
  /// An earlier revision of this accessor failed on an empty container;
  /// returning the absent marker was kept instead, so `get` never fails.
  /// Use [`try_unwrap`](Self::try_unwrap) to get a hard error on `Nothing`.
  pub fn get(self) -> Option<T> {
    match self {
      Self::Something(v) => Some(v),
      Self::Nothing => None,
    }
  }

  /// Gets the held value, or the fallback for `Nothing`.
  pub fn get_or(self, fallback: T) -> T {
    match self {
      Self::Something(v) => v,
      Self::Nothing => fallback,
    }
  }

  /// Gets the held value, or reports the empty access as a value.
  pub fn try_unwrap(self) -> Result<T, EmptyMaybeError> {
    match self {
      Self::Something(v) => Ok(v),
      Self::Nothing => Err(EmptyMaybeError::new(EMPTY_UNWRAP)),
    }
  }

  /// Gets the held value.
  ///
  /// # Panics
  ///
  /// Panics with `Attempted to unwrap Nothing` if this is `Nothing`.
  pub fn unwrap(self) -> T {
    match self {
      Self::Something(v) => v,
      Self::Nothing => panic!("{}", EMPTY_UNWRAP),
    }
  }

  /// Gets the held value, panicking with the given message on `Nothing`.
  pub fn expect(self, msg: &str) -> T {
    match self {
      Self::Something(v) => v,
      Self::Nothing => panic!("{}", msg),
    }
  }

  pub fn unwrap_or(self, fallback: T) -> T {
    match self {
      Self::Something(v) => v,
      Self::Nothing => fallback,
    }
  }

  pub fn unwrap_or_else(self, fallback: impl FnOnce() -> T) -> T {
    match self {
      Self::Something(v) => v,
      Self::Nothing => fallback(),
    }
  }

  /// Chains a computation that itself may produce `Nothing`.
  pub fn and_then<U>(self, f: impl FnOnce(T) -> Maybe<U>) -> Maybe<U> {
    match self {
      Self::Something(v) => f(v),
      Self::Nothing => Maybe::Nothing,
    }
  }

  /// Keeps `Something` as is, or computes a replacement for `Nothing`.
  pub fn or_else(self, fallback: impl FnOnce() -> Maybe<T>) -> Maybe<T> {
    match self {
      Self::Something(v) => Self::Something(v),
      Self::Nothing => fallback(),
    }
  }

  /// Converts to an [`Outcome`], using `err` as the failure payload of
  /// `Nothing`.
  pub fn ok_or<E>(self, err: E) -> Outcome<T, E> {
    match self {
      Self::Something(v) => Outcome::Success(v),
      Self::Nothing => Outcome::Error(err),
    }
  }

  /// Like [`ok_or`](Self::ok_or), but the payload is computed lazily.
  pub fn ok_or_else<E>(self, err: impl FnOnce() -> E) -> Outcome<T, E> {
    match self {
      Self::Something(v) => Outcome::Success(v),
      Self::Nothing => Outcome::Error(err()),
    }
  }
}

impl<T> From<Option<T>> for Maybe<T> {
  fn from(value: Option<T>) -> Self {
    maybe(value)
  }
}

impl<T> From<Maybe<T>> for Option<T> {
  fn from(value: Maybe<T>) -> Self {
    value.get()
  }
}

impl<T> From<&Maybe<T>> for bool {
  fn from(value: &Maybe<T>) -> Self {
    value.is_something()
  }
}

/// Classifies an `Option` into a [`Maybe`].
///
/// `None` is assumed to never be a legitimate held value.
pub fn maybe<T>(value: Option<T>) -> Maybe<T> {
  match value {
    Some(v) => Maybe::Something(v),
    None => Maybe::Nothing,
  }
}

/// Adapts a function returning `Option` into one returning [`Maybe`].
///
/// Meant for call-site boundaries when migrating code incrementally.
pub fn maybe_wrap<A, R>(f: impl Fn(A) -> Option<R>) -> impl Fn(A) -> Maybe<R> {
  move |arg| maybe(f(arg))
}

/// Adapts a function returning [`Maybe`] back into one returning `Option`.
pub fn maybe_unwrap<A, R>(
  f: impl Fn(A) -> Maybe<R>,
) -> impl Fn(A) -> Option<R> {
  move |arg| f(arg).get()
}

#[cfg(test)]
mod tests {
  use super::Maybe::{Nothing, Something};
  use super::*;
  use crate::outcome::Outcome;
  use pretty_assertions::assert_eq;
  use quickcheck::{Arbitrary, Gen};
  use quickcheck_macros::quickcheck;

  impl<T: Arbitrary> Arbitrary for Maybe<T> {
    fn arbitrary(g: &mut Gen) -> Self {
      maybe(Option::<T>::arbitrary(g))
    }
  }

  fn never(_: i32) -> i32 {
    panic!("callback must not be invoked")
  }

  #[test]
  fn map_something() {
    assert_eq!(Something(1).map(|v| v.to_string()), Something("1".to_owned()));
  }

  #[test]
  fn map_nothing_skips_callback() {
    assert_eq!(Nothing.map(never), Nothing);
  }

  #[test]
  fn map_or() {
    assert_eq!(Something(2).map_or(|v| v * 10, 7), Something(20));
    assert_eq!(Nothing.map_or(never, 7), Something(7));
  }

  #[test]
  fn map_or_else() {
    assert_eq!(Something(2).map_or_else(|v| v * 10, || 7), Something(20));
    assert_eq!(Nothing.map_or_else(never, || 7), Something(7));
  }

  #[test]
  fn predicates() {
    assert!(Something(1).is_something());
    assert!(!Something(1).is_nothing());
    assert!(!Nothing::<i32>.is_something());
    assert!(Nothing::<i32>.is_nothing());
    assert!(bool::from(&Something(1)));
    assert!(!bool::from(&Nothing::<i32>));
  }

  #[test]
  fn get() {
    assert_eq!(Something(1).get(), Some(1));
    assert_eq!(Nothing::<i32>.get(), None);
    assert_eq!(Nothing.get_or("foo"), "foo");
    assert_eq!(Something(1).get_or(2), 1);
  }

  #[test]
  fn unwrap_something() {
    assert_eq!(Something("foo").unwrap(), "foo");
  }

  #[test]
  #[should_panic(expected = "Attempted to unwrap Nothing")]
  fn unwrap_nothing() {
    Nothing::<i32>.unwrap();
  }

  #[test]
  #[should_panic(expected = "test message")]
  fn expect_nothing_custom_message() {
    Nothing::<i32>.expect("test message");
  }

  #[test]
  fn try_unwrap() {
    assert_eq!(Something(1).try_unwrap(), Ok(1));
    let err = Nothing::<i32>.try_unwrap().unwrap_err();
    assert_eq!(err.to_string(), "Attempted to unwrap Nothing");
    assert_eq!(err.message(), "Attempted to unwrap Nothing");
  }

  #[test]
  fn unwrap_or() {
    assert_eq!(Something(1).unwrap_or(2), 1);
    assert_eq!(Nothing.unwrap_or(2), 2);
  }

  #[test]
  fn unwrap_or_else_is_lazy() {
    assert_eq!(Something(1).unwrap_or_else(|| panic!("not lazy")), 1);
    assert_eq!(Nothing.unwrap_or_else(|| 2), 2);
  }

  #[test]
  fn and_then() {
    assert_eq!(Something(4).and_then(|v| Something(v + 1)), Something(5));
    assert_eq!(Something(4).and_then(|_| Nothing::<i32>), Nothing);
    assert_eq!(Nothing::<i32>.and_then(|_| Something(1)), Nothing);
  }

  #[test]
  fn or_else() {
    assert_eq!(Something(1).or_else(|| panic!("not lazy")), Something(1));
    assert_eq!(Nothing.or_else(|| Something(2)), Something(2));
    assert_eq!(Nothing::<i32>.or_else(|| Nothing), Nothing);
  }

  #[test]
  fn ok_or() {
    assert_eq!(Something(1).ok_or("nope"), Outcome::Success(1));
    assert_eq!(Nothing::<i32>.ok_or("nope"), Outcome::Error("nope"));
  }

  #[test]
  fn ok_or_else_is_lazy() {
    assert_eq!(
      Something(1).ok_or_else(|| -> &str { panic!("not lazy") }),
      Outcome::Success(1)
    );
    assert_eq!(Nothing::<i32>.ok_or_else(|| "nope"), Outcome::Error("nope"));
  }

  #[test]
  fn classify() {
    assert_eq!(maybe(None::<i32>), Nothing);
    assert_eq!(maybe(Some("x")), Something("x"));
    assert_eq!(Maybe::from(Some(1)), Something(1));
    assert_eq!(Option::from(Something(1)), Some(1));
    assert_eq!(Maybe::<i32>::default(), Nothing);
  }

  #[test]
  fn wrap_adapters() {
    let wrapped = maybe_wrap(|found: bool| found.then_some("foo"));
    assert_eq!(wrapped(false), Nothing);
    assert_eq!(wrapped(true), Something("foo"));

    let unwrapped = maybe_unwrap(|found: bool| {
      if found {
        Something("foo")
      } else {
        Nothing
      }
    });
    assert_eq!(unwrapped(false), None);
    assert_eq!(unwrapped(true), Some("foo"));
  }

  #[quickcheck]
  fn map_identity(m: Maybe<i32>) -> bool {
    m.map(|v| v) == m
  }

  #[quickcheck]
  fn classify_matches_option(o: Option<String>) -> bool {
    maybe(o.clone()).get() == o
  }

  #[quickcheck]
  fn ok_or_round_trips(m: Maybe<i32>) -> bool {
    m.ok_or(()).ok() == m
  }

  #[quickcheck]
  fn predicates_disagree(m: Maybe<u8>) -> bool {
    m.is_something() != m.is_nothing()
  }
}
