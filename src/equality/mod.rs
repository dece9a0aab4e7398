//! Equality comparers: pluggable equality and hashing.
//!
//! An [`EqualityComparer`] decides whether two values are equal and produces
//! a [`HashCode`] consistent with that decision. Structural comparers take
//! one as a parameter so that element equality can be swapped without the
//! element type changing its own `PartialEq`/`Hash`.
//!
//! - [`NaturalEquality`]: the type's own `PartialEq` and `Hash`
//! - [`FnEquality`]: equality and hashing from a pair of closures
//! - [`KeyEquality`]: equality and hashing of a projected key
//! - [`Nullable`]: lifts a comparer to `Option<T>` with absent-aware hashing
//! - [`ReferenceEquality`]: object identity, ignoring user-defined equality
//!
//! # Laws
//!
//! For all `a`, `b`:
//!
//! ```text
//! comparer.equals(a, a)
//! comparer.equals(a, b) == comparer.equals(b, a)
//! comparer.equals(a, b) => comparer.hash_code(a) == comparer.hash_code(b)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use ordkit::equality::{EqualityComparer, NaturalEquality, key_equality};
//!
//! assert!(NaturalEquality.equals("abc", "abc"));
//!
//! let by_length = key_equality(|text: &&str| text.len());
//! assert!(by_length.equals(&"abc", &"xyz"));
//! assert_eq!(by_length.hash_code(&"abc"), by_length.hash_code(&"xyz"));
//! ```

mod key;
mod nullable;
mod reference;

pub use key::{KeyEquality, key_equality};
pub use nullable::Nullable;
pub use reference::ReferenceEquality;

use std::hash::Hash;

use crate::hash::{HashCode, hash_one};

/// A type class for pluggable equality with a consistent hash.
///
/// # Laws
///
/// ```text
/// equals(a, a)
/// equals(a, b) == equals(b, a)
/// equals(a, b) && equals(b, c) => equals(a, c)
/// equals(a, b) => hash_code(a) == hash_code(b)
/// ```
pub trait EqualityComparer<T: ?Sized> {
    /// Returns `true` if the two values are equal under this comparer.
    fn equals(&self, left: &T, right: &T) -> bool;

    /// Returns a hash code consistent with [`equals`](Self::equals).
    fn hash_code(&self, value: &T) -> HashCode;
}

impl<T: ?Sized, E: EqualityComparer<T> + ?Sized> EqualityComparer<T> for &E {
    #[inline]
    fn equals(&self, left: &T, right: &T) -> bool {
        (**self).equals(left, right)
    }

    #[inline]
    fn hash_code(&self, value: &T) -> HashCode {
        (**self).hash_code(value)
    }
}

impl<T: ?Sized, E: EqualityComparer<T> + ?Sized> EqualityComparer<T> for Box<E> {
    #[inline]
    fn equals(&self, left: &T, right: &T) -> bool {
        (**self).equals(left, right)
    }

    #[inline]
    fn hash_code(&self, value: &T) -> HashCode {
        (**self).hash_code(value)
    }
}

/// Equality through the type's own `PartialEq` and `Hash`.
///
/// This is the default element comparer of the structural functions.
///
/// # Examples
///
/// ```rust
/// use ordkit::equality::{EqualityComparer, NaturalEquality};
///
/// assert!(NaturalEquality.equals(&1, &1));
/// assert!(!NaturalEquality.equals(&1, &2));
/// assert_eq!(NaturalEquality.hash_code(&1), NaturalEquality.hash_code(&1));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NaturalEquality;

impl<T: PartialEq + Hash + ?Sized> EqualityComparer<T> for NaturalEquality {
    #[inline]
    fn equals(&self, left: &T, right: &T) -> bool {
        left == right
    }

    #[inline]
    fn hash_code(&self, value: &T) -> HashCode {
        hash_one(value)
    }
}

/// An equality comparer built from an equality closure and a hash closure.
///
/// The caller is responsible for keeping the two closures consistent.
///
/// # Examples
///
/// ```rust
/// use ordkit::equality::{EqualityComparer, equality_by};
///
/// let case_insensitive = equality_by(
///     |left: &String, right: &String| left.eq_ignore_ascii_case(right),
///     |value: &String| ordkit::hash::hash_one(&value.to_ascii_lowercase()),
/// );
/// assert!(case_insensitive.equals(&"Rust".to_string(), &"RUST".to_string()));
/// ```
#[derive(Clone, Copy)]
pub struct FnEquality<E, H> {
    equality: E,
    hasher: H,
}

impl<E, H> FnEquality<E, H> {
    /// Creates a new `FnEquality` from an equality and a hash function.
    #[must_use]
    pub const fn new(equality: E, hasher: H) -> Self {
        Self { equality, hasher }
    }
}

impl<T: ?Sized, E, H> EqualityComparer<T> for FnEquality<E, H>
where
    E: Fn(&T, &T) -> bool,
    H: Fn(&T) -> HashCode,
{
    #[inline]
    fn equals(&self, left: &T, right: &T) -> bool {
        (self.equality)(left, right)
    }

    #[inline]
    fn hash_code(&self, value: &T) -> HashCode {
        (self.hasher)(value)
    }
}

impl<E, H> std::fmt::Debug for FnEquality<E, H> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("FnEquality").finish_non_exhaustive()
    }
}

/// Creates an equality comparer from an equality and a hash closure.
#[must_use]
pub const fn equality_by<E, H>(equality: E, hasher: H) -> FnEquality<E, H> {
    FnEquality::new(equality, hasher)
}
