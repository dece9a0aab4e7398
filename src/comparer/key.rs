//! Key-selector comparers and absent-element handling.

use std::cmp::Ordering;
use std::marker::PhantomData;

use super::{Comparer, ComparerExt};
use crate::error::{ConstructionError, NullElementError, Operand};

/// Orders values by a key projected from each of them.
///
/// The element type does not need to be `Ord`; only the key does.
///
/// # Type Parameters
///
/// - `T`: The element type
/// - `K`: The key type
/// - `F`: The selector function type
///
/// # Examples
///
/// ```rust
/// use std::cmp::Ordering;
/// use ordkit::comparer::{Comparer, KeyComparer};
///
/// struct Task { priority: u8 }
///
/// let by_priority = KeyComparer::new(|task: &Task| task.priority);
/// assert_eq!(
///     by_priority.compare(&Task { priority: 1 }, &Task { priority: 3 }),
///     Ordering::Less
/// );
/// ```
pub struct KeyComparer<T: ?Sized, K, F>
where
    F: Fn(&T) -> K,
{
    selector: F,
    _marker: PhantomData<fn(&T) -> K>,
}

impl<T: ?Sized, K, F> KeyComparer<T, K, F>
where
    F: Fn(&T) -> K,
{
    /// Creates a new `KeyComparer` from a key selector.
    #[must_use]
    pub const fn new(selector: F) -> Self {
        Self {
            selector,
            _marker: PhantomData,
        }
    }

    /// Creates a new `KeyComparer`, failing if the selector is absent.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::MissingArgument`] when `selector` is `None`.
    pub fn from_optional(selector: Option<F>) -> Result<Self, ConstructionError> {
        selector
            .map(Self::new)
            .ok_or(ConstructionError::MissingArgument {
                combinator: "KeyComparer",
                argument: "selector",
            })
    }

    /// Projects the key of a value.
    #[inline]
    pub fn key_of(&self, value: &T) -> K {
        (self.selector)(value)
    }

    /// Lifts this comparer to `Option<T>`, sorting `None` first.
    #[must_use]
    pub const fn nulls_first(self) -> NullsFirst<Self>
    where
        T: Sized,
    {
        NullsFirst::new(self)
    }
}

impl<T: ?Sized, K: Ord, F> Comparer<T> for KeyComparer<T, K, F>
where
    F: Fn(&T) -> K,
{
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self.key_of(left).cmp(&self.key_of(right))
    }
}

impl<T: ?Sized, K, F> ComparerExt for KeyComparer<T, K, F> where F: Fn(&T) -> K {}

impl<T: ?Sized, K, F> Clone for KeyComparer<T, K, F>
where
    F: Fn(&T) -> K + Clone,
{
    fn clone(&self) -> Self {
        Self {
            selector: self.selector.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T: ?Sized, K, F> std::fmt::Debug for KeyComparer<T, K, F>
where
    F: Fn(&T) -> K,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("KeyComparer").finish_non_exhaustive()
    }
}

/// Creates a [`KeyComparer`] from a key selector.
///
/// # Examples
///
/// ```rust
/// use ordkit::comparer::{Comparer, key_comparer};
///
/// let by_length = key_comparer(|word: &&str| word.len());
/// assert!(by_length.compare(&"fig", &"banana").is_lt());
/// ```
#[must_use]
pub const fn key_comparer<T: ?Sized, K, F>(selector: F) -> KeyComparer<T, K, F>
where
    F: Fn(&T) -> K,
{
    KeyComparer::new(selector)
}

/// Lifts a `Comparer<T>` to `Comparer<Option<T>>`, sorting `None` first.
///
/// - `None` vs `None` is `Equal`
/// - `None` vs `Some` is `Less`
/// - `Some` vs `Some` delegates to the wrapped comparer
///
/// # Examples
///
/// ```rust
/// use std::cmp::Ordering;
/// use ordkit::comparer::{Comparer, nullable_key_comparer};
///
/// let by_length = nullable_key_comparer(|word: &String| word.len());
/// assert_eq!(by_length.compare(&None, &Some("a".to_string())), Ordering::Less);
/// assert_eq!(by_length.compare(&None, &None), Ordering::Equal);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullsFirst<C> {
    inner: C,
}

impl<C> NullsFirst<C> {
    /// Wraps a comparer.
    #[must_use]
    pub const fn new(inner: C) -> Self {
        Self { inner }
    }

    /// Returns the wrapped comparer.
    #[must_use]
    pub const fn inner(&self) -> &C {
        &self.inner
    }
}

impl<T, C: Comparer<T>> Comparer<Option<T>> for NullsFirst<C> {
    fn compare(&self, left: &Option<T>, right: &Option<T>) -> Ordering {
        match (left, right) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(left), Some(right)) => self.inner.compare(left, right),
        }
    }

    fn try_compare(
        &self,
        left: &Option<T>,
        right: &Option<T>,
    ) -> Result<Ordering, NullElementError> {
        match (left, right) {
            (Some(left), Some(right)) => self.inner.try_compare(left, right),
            _ => Ok(self.compare(left, right)),
        }
    }
}

impl<C> ComparerExt for NullsFirst<C> {}

/// Creates a key comparer over `Option<T>` that sorts `None` first.
#[must_use]
pub const fn nullable_key_comparer<T, K, F>(selector: F) -> NullsFirst<KeyComparer<T, K, F>>
where
    F: Fn(&T) -> K,
{
    NullsFirst::new(KeyComparer::new(selector))
}

/// Orders `Option<T>` values by key, treating `None` as a programming error.
///
/// [`try_compare`](Comparer::try_compare) returns a [`NullElementError`]
/// naming the absent operand; [`compare`](Comparer::compare) panics with the
/// same message. Use it where an absent element means a broken invariant
/// rather than a sortable value.
///
/// # Examples
///
/// ```rust
/// use std::cmp::Ordering;
/// use ordkit::comparer::{Comparer, non_null_key_comparer};
/// use ordkit::error::Operand;
///
/// let by_value = non_null_key_comparer(|value: &i32| *value);
/// assert_eq!(by_value.try_compare(&Some(1), &Some(2)), Ok(Ordering::Less));
///
/// let error = by_value.try_compare(&Some(1), &None).unwrap_err();
/// assert_eq!(error.operand, Operand::Right);
/// ```
pub struct NonNullKeyComparer<T, K, F>
where
    F: Fn(&T) -> K,
{
    key: KeyComparer<T, K, F>,
}

impl<T, K, F> NonNullKeyComparer<T, K, F>
where
    F: Fn(&T) -> K,
{
    const NAME: &'static str = "NonNullKeyComparer";

    /// Creates a new `NonNullKeyComparer` from a key selector.
    #[must_use]
    pub const fn new(selector: F) -> Self {
        Self {
            key: KeyComparer::new(selector),
        }
    }

    /// Creates a new `NonNullKeyComparer`, failing if the selector is absent.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::MissingArgument`] when `selector` is `None`.
    pub fn from_optional(selector: Option<F>) -> Result<Self, ConstructionError> {
        selector
            .map(Self::new)
            .ok_or(ConstructionError::MissingArgument {
                combinator: Self::NAME,
                argument: "selector",
            })
    }
}

impl<T, K: Ord, F> Comparer<Option<T>> for NonNullKeyComparer<T, K, F>
where
    F: Fn(&T) -> K,
{
    /// # Panics
    ///
    /// Panics if either operand is `None`.
    fn compare(&self, left: &Option<T>, right: &Option<T>) -> Ordering {
        match self.try_compare(left, right) {
            Ok(ordering) => ordering,
            Err(error) => panic!("{error}"),
        }
    }

    fn try_compare(
        &self,
        left: &Option<T>,
        right: &Option<T>,
    ) -> Result<Ordering, NullElementError> {
        match (left, right) {
            (Some(left), Some(right)) => Ok(self.key.compare(left, right)),
            _ => Err(NullElementError {
                combinator: Self::NAME,
                operand: Operand::from_absence(left.is_none(), right.is_none())
                    .unwrap_or(Operand::Both),
            }),
        }
    }
}

impl<T, K, F> ComparerExt for NonNullKeyComparer<T, K, F> where F: Fn(&T) -> K {}

impl<T, K, F> Clone for NonNullKeyComparer<T, K, F>
where
    F: Fn(&T) -> K + Clone,
{
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
        }
    }
}

impl<T, K, F> std::fmt::Debug for NonNullKeyComparer<T, K, F>
where
    F: Fn(&T) -> K,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("NonNullKeyComparer")
            .finish_non_exhaustive()
    }
}

/// Creates a [`NonNullKeyComparer`] from a key selector.
#[must_use]
pub const fn non_null_key_comparer<T, K, F>(selector: F) -> NonNullKeyComparer<T, K, F>
where
    F: Fn(&T) -> K,
{
    NonNullKeyComparer::new(selector)
}
