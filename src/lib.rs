//! Algebraic container types for values that may be absent and operations
//! that may fail.
//!
//! [`Maybe`] holds a value that may or may not be present, [`Outcome`] holds
//! the result of an operation that may succeed or fail. Both are closed
//! two-variant sum types with a fixed combinator set; transforming operations
//! always return a new container, nothing is mutated in place.
//!
//! Expected absence or failure is represented by the [`Nothing`] and
//! [`Error`] variants themselves. Calling an accessor in the wrong direction
//! is a caller bug and fails with a distinct error kind:
//! [`EmptyMaybeError`] for `Maybe`, [`UnwrapError`] for `Outcome`. The
//! `try_*` accessors return these as values, the plain `unwrap`/`expect`
//! forms panic with the same message.

pub mod maybe;
pub mod outcome;

pub use self::maybe::Maybe::{self, Nothing, Something};
pub use self::maybe::{maybe, maybe_unwrap, maybe_wrap, EmptyMaybeError};
pub use self::outcome::Outcome::{self, Error, Success};
pub use self::outcome::{Payload, UnwrapError};
