//! Absent-aware lifting of equality comparers to `Option<T>`.

use super::{EqualityComparer, NaturalEquality};
use crate::hash::{ABSENT_HASH, HashCode};

/// Lifts an `EqualityComparer<T>` to `EqualityComparer<Option<T>>`.
///
/// - `None` equals `None`
/// - `None` never equals `Some`
/// - `None` hashes to [`ABSENT_HASH`]
///
/// Wrapping a structural comparer in `Nullable` gives it the
/// absent-versus-empty distinction: an absent sequence hashes to `0`, an
/// empty one to the empty seed.
///
/// # Examples
///
/// ```rust
/// use ordkit::equality::{EqualityComparer, Nullable};
/// use ordkit::hash::ABSENT_HASH;
///
/// let comparer = Nullable::natural();
/// assert!(comparer.equals(&None::<i32>, &None));
/// assert!(!comparer.equals(&None, &Some(1)));
/// assert_eq!(comparer.hash_code(&None::<i32>), ABSENT_HASH);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Nullable<E> {
    inner: E,
}

impl<E> Nullable<E> {
    /// Wraps an element comparer.
    #[must_use]
    pub const fn new(inner: E) -> Self {
        Self { inner }
    }

    /// Returns the wrapped comparer.
    #[must_use]
    pub const fn inner(&self) -> &E {
        &self.inner
    }
}

impl Nullable<NaturalEquality> {
    /// Lifts [`NaturalEquality`].
    #[must_use]
    pub const fn natural() -> Self {
        Self::new(NaturalEquality)
    }
}

impl<T, E: EqualityComparer<T>> EqualityComparer<Option<T>> for Nullable<E> {
    fn equals(&self, left: &Option<T>, right: &Option<T>) -> bool {
        match (left, right) {
            (None, None) => true,
            (Some(left), Some(right)) => self.inner.equals(left, right),
            _ => false,
        }
    }

    fn hash_code(&self, value: &Option<T>) -> HashCode {
        value
            .as_ref()
            .map_or(ABSENT_HASH, |value| self.inner.hash_code(value))
    }
}
