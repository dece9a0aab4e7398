//! Reversal of a comparer.

use std::cmp::Ordering;

use super::{Comparer, ComparerExt};
use crate::error::{ConstructionError, NullElementError};

/// Reverses the ordering of a wrapped comparer.
///
/// `Less` and `Greater` are swapped; `Equal` stays `Equal`. Errors from the
/// wrapped comparer's `try_compare` pass through unchanged.
///
/// # Examples
///
/// ```rust
/// use std::cmp::Ordering;
/// use ordkit::comparer::{Comparer, NaturalOrder, ReverseComparer};
///
/// let descending = ReverseComparer::new(NaturalOrder);
/// assert_eq!(descending.compare(&1, &2), Ordering::Greater);
/// assert_eq!(descending.compare(&2, &2), Ordering::Equal);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReverseComparer<C> {
    inner: C,
}

impl<C> ReverseComparer<C> {
    /// Wraps a comparer.
    #[must_use]
    pub const fn new(inner: C) -> Self {
        Self { inner }
    }

    /// Wraps a comparer, failing if it is absent.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::MissingArgument`] when `inner` is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordkit::comparer::{NaturalOrder, ReverseComparer};
    ///
    /// assert!(ReverseComparer::from_optional(Some(NaturalOrder)).is_ok());
    /// assert!(ReverseComparer::<NaturalOrder>::from_optional(None).is_err());
    /// ```
    pub fn from_optional(inner: Option<C>) -> Result<Self, ConstructionError> {
        inner
            .map(Self::new)
            .ok_or(ConstructionError::MissingArgument {
                combinator: "ReverseComparer",
                argument: "comparer",
            })
    }

    /// Returns the wrapped comparer.
    #[must_use]
    pub const fn inner(&self) -> &C {
        &self.inner
    }

    /// Unwraps the comparer.
    #[must_use]
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<T: ?Sized, C: Comparer<T>> Comparer<T> for ReverseComparer<C> {
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self.inner.compare(left, right).reverse()
    }

    #[inline]
    fn try_compare(&self, left: &T, right: &T) -> Result<Ordering, NullElementError> {
        self.inner.try_compare(left, right).map(Ordering::reverse)
    }
}

impl<C> ComparerExt for ReverseComparer<C> {}
