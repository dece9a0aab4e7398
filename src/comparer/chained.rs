//! Comparers that consult other comparers in priority order.

use std::cmp::Ordering;

use super::{Comparer, ComparerExt};
use crate::error::{ConstructionError, NullElementError};

/// Consults `primary`, and `secondary` only when `primary` reports `Equal`.
///
/// The statically typed counterpart of [`ChainedComparer`], built with
/// [`ComparerExt::then`].
///
/// # Examples
///
/// ```rust
/// use std::cmp::Ordering;
/// use ordkit::comparer::{Comparer, ComparerExt, key_comparer};
///
/// let by_length_then_text = key_comparer(|word: &&str| word.len())
///     .then(key_comparer(|word: &&str| *word));
/// assert_eq!(by_length_then_text.compare(&"b", &"a"), Ordering::Greater);
/// assert_eq!(by_length_then_text.compare(&"b", &"aa"), Ordering::Less);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThenComparer<A, B> {
    primary: A,
    secondary: B,
}

impl<A, B> ThenComparer<A, B> {
    /// Creates a two-step chain.
    #[must_use]
    pub const fn new(primary: A, secondary: B) -> Self {
        Self { primary, secondary }
    }
}

impl<T: ?Sized, A: Comparer<T>, B: Comparer<T>> Comparer<T> for ThenComparer<A, B> {
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self.primary
            .compare(left, right)
            .then_with(|| self.secondary.compare(left, right))
    }

    fn try_compare(&self, left: &T, right: &T) -> Result<Ordering, NullElementError> {
        match self.primary.try_compare(left, right)? {
            Ordering::Equal => self.secondary.try_compare(left, right),
            ordering => Ok(ordering),
        }
    }
}

impl<A, B> ComparerExt for ThenComparer<A, B> {}

/// A chain of boxed comparers consulted in order.
///
/// Each comparer is consulted only when every comparer before it reported
/// `Equal`. The first non-`Equal` result wins; if all agree, the result is
/// `Equal`. A chain needs at least two members.
///
/// # Examples
///
/// ```rust
/// use std::cmp::Ordering;
/// use ordkit::comparer::{ChainedComparer, Comparer, key_comparer};
///
/// #[derive(Debug)]
/// struct Row { a: i32, b: i32 }
///
/// let chain = ChainedComparer::new(vec![
///     key_comparer(|row: &Row| row.a).boxed(),
///     key_comparer(|row: &Row| row.b).boxed(),
/// ])
/// .unwrap();
///
/// assert_eq!(chain.compare(&Row { a: 1, b: 2 }, &Row { a: 1, b: 1 }), Ordering::Greater);
/// assert_eq!(chain.compare(&Row { a: 2, b: 0 }, &Row { a: 1, b: 9 }), Ordering::Greater);
/// ```
pub struct ChainedComparer<'a, T: ?Sized> {
    comparers: Vec<Box<dyn Comparer<T> + 'a>>,
}

impl<'a, T: ?Sized> ChainedComparer<'a, T> {
    /// The minimum number of members of a chain.
    pub const MINIMUM_LENGTH: usize = 2;

    /// Creates a chain from at least two comparers.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::TooFewComparers`] when fewer than
    /// [`MINIMUM_LENGTH`](Self::MINIMUM_LENGTH) comparers are given.
    pub fn new(comparers: Vec<Box<dyn Comparer<T> + 'a>>) -> Result<Self, ConstructionError> {
        if comparers.len() < Self::MINIMUM_LENGTH {
            return Err(ConstructionError::TooFewComparers {
                required: Self::MINIMUM_LENGTH,
                actual: comparers.len(),
            });
        }
        Ok(Self { comparers })
    }

    /// Creates a chain from optional comparers, failing on the first absent
    /// member.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::MissingArgument`] if any member is
    /// `None`, otherwise the errors of [`new`](Self::new).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordkit::comparer::{ChainedComparer, Comparer, NaturalOrder};
    /// use ordkit::error::ConstructionError;
    ///
    /// let result = ChainedComparer::<i32>::from_optional([
    ///     Some(NaturalOrder.boxed()),
    ///     None,
    /// ]);
    /// assert!(matches!(result, Err(ConstructionError::MissingArgument { .. })));
    /// ```
    pub fn from_optional<I>(comparers: I) -> Result<Self, ConstructionError>
    where
        I: IntoIterator<Item = Option<Box<dyn Comparer<T> + 'a>>>,
    {
        let comparers = comparers
            .into_iter()
            .collect::<Option<Vec<_>>>()
            .ok_or(ConstructionError::MissingArgument {
                combinator: "ChainedComparer",
                argument: "comparers",
            })?;
        Self::new(comparers)
    }

    /// Appends a comparer consulted after every existing member.
    #[must_use]
    pub fn push(mut self, comparer: Box<dyn Comparer<T> + 'a>) -> Self {
        self.comparers.push(comparer);
        self
    }

    /// Returns the number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.comparers.len()
    }

    /// Always `false`: a chain has at least two members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.comparers.is_empty()
    }
}

impl<T: ?Sized> Comparer<T> for ChainedComparer<'_, T> {
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self.comparers
            .iter()
            .map(|comparer| comparer.compare(left, right))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }

    fn try_compare(&self, left: &T, right: &T) -> Result<Ordering, NullElementError> {
        for comparer in &self.comparers {
            let ordering = comparer.try_compare(left, right)?;
            if ordering.is_ne() {
                return Ok(ordering);
            }
        }
        Ok(Ordering::Equal)
    }
}

impl<T: ?Sized> ComparerExt for ChainedComparer<'_, T> {}

impl<T: ?Sized> std::fmt::Debug for ChainedComparer<'_, T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ChainedComparer")
            .field("length", &self.comparers.len())
            .finish_non_exhaustive()
    }
}
