//! Positional structural equality.

use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

use crate::equality::{EqualityComparer, NaturalEquality, Nullable};
use crate::hash::{ABSENT_HASH, EMPTY_SEED, HashCode, fold_step};

/// Returns `true` if two optional slices are positionally equal.
///
/// - the same slice (address and length) is equal to itself
/// - exactly one absent is not equal
/// - both absent is equal
/// - otherwise equal iff the lengths match and every pair of elements at the
///   same index is equal; the first mismatch stops the comparison
///
/// # Examples
///
/// ```rust
/// use ordkit::structural::sequence_equals;
///
/// let values = [1, 2, 3];
/// assert!(sequence_equals(Some(&values[..]), Some(&values[..])));
/// assert!(sequence_equals::<i32>(None, None));
/// assert!(!sequence_equals(Some(&values[..]), None));
/// assert!(!sequence_equals(Some(&[1, 2][..]), Some(&[1, 2, 3][..])));
/// ```
#[must_use]
pub fn sequence_equals<T: PartialEq>(left: Option<&[T]>, right: Option<&[T]>) -> bool {
    match (left, right) {
        (None, None) => true,
        (Some(left), Some(right)) => slices_equal(left, right, |left, right| left == right),
        _ => false,
    }
}

/// Returns `true` if two optional slices are positionally equal under
/// `comparer`.
///
/// Same rules as [`sequence_equals`], with element equality supplied by the
/// caller.
///
/// # Examples
///
/// ```rust
/// use ordkit::equality::key_equality;
/// use ordkit::structural::sequence_equals_with;
///
/// let by_abs = key_equality(|value: &i32| value.abs());
/// assert!(sequence_equals_with(Some(&[1, -2][..]), Some(&[-1, 2][..]), &by_abs));
/// ```
#[must_use]
pub fn sequence_equals_with<T, E>(left: Option<&[T]>, right: Option<&[T]>, comparer: &E) -> bool
where
    E: EqualityComparer<T> + ?Sized,
{
    match (left, right) {
        (None, None) => true,
        (Some(left), Some(right)) => {
            slices_equal(left, right, |left, right| comparer.equals(left, right))
        }
        _ => false,
    }
}

/// Computes the order-sensitive hash of an optional slice.
///
/// `None` hashes to `0`, an empty slice to `23`, and otherwise each element
/// hash is folded in order as `seed * 31 + hash(element)`.
///
/// # Examples
///
/// ```rust
/// use ordkit::structural::sequence_hash;
///
/// assert_ne!(
///     sequence_hash(Some(&[1, 2, 3][..])),
///     sequence_hash(Some(&[3, 2, 1][..]))
/// );
/// ```
#[must_use]
pub fn sequence_hash<T: PartialEq + Hash>(sequence: Option<&[T]>) -> HashCode {
    sequence_hash_with(sequence, &NaturalEquality)
}

/// Computes the order-sensitive hash of an optional slice under `comparer`.
///
/// To treat `None` elements as the absent sentinel, pass a
/// [`Nullable`] comparer.
///
/// # Examples
///
/// ```rust
/// use ordkit::equality::Nullable;
/// use ordkit::structural::sequence_hash_with;
///
/// let values = [None, None::<i32>];
/// assert_eq!(sequence_hash_with(Some(&values[..]), &Nullable::natural()), 23 * 31 * 31);
/// ```
#[must_use]
pub fn sequence_hash_with<T, E>(sequence: Option<&[T]>, comparer: &E) -> HashCode
where
    E: EqualityComparer<T> + ?Sized,
{
    sequence.map_or(ABSENT_HASH, |sequence| fold_hashes(sequence, comparer))
}

/// Returns `true` if two iterators yield positionally equal elements.
///
/// Suitable for lazily produced sequences. A length mismatch is detected
/// when one side runs out before the other.
///
/// # Examples
///
/// ```rust
/// use ordkit::equality::NaturalEquality;
/// use ordkit::structural::iter_equals_with;
///
/// assert!(iter_equals_with((1..4).map(|n| n * 2), [2, 4, 6], &NaturalEquality));
/// assert!(!iter_equals_with(1..4, 1..5, &NaturalEquality));
/// ```
pub fn iter_equals_with<T, L, R, E>(left: L, right: R, comparer: &E) -> bool
where
    L: IntoIterator<Item = T>,
    R: IntoIterator<Item = T>,
    E: EqualityComparer<T> + ?Sized,
{
    let mut left = left.into_iter();
    let mut right = right.into_iter();
    loop {
        match (left.next(), right.next()) {
            (None, None) => return true,
            (Some(left), Some(right)) => {
                if !comparer.equals(&left, &right) {
                    return false;
                }
            }
            _ => return false,
        }
    }
}

/// Computes the order-sensitive hash of the elements an iterator yields.
///
/// An empty iterator hashes to `23`.
pub fn iter_hash_with<T, I, E>(items: I, comparer: &E) -> HashCode
where
    I: IntoIterator<Item = T>,
    E: EqualityComparer<T> + ?Sized,
{
    items.into_iter().fold(EMPTY_SEED, |accumulator, item| {
        fold_step(accumulator, comparer.hash_code(&item))
    })
}

/// Returns `true` if two slices hold the same elements with the same
/// multiplicities, in any order.
///
/// Elements are bucketed by `comparer.hash_code` and matched with
/// `comparer.equals`, so the comparer must honour the hash law.
///
/// # Examples
///
/// ```rust
/// use ordkit::equality::NaturalEquality;
/// use ordkit::structural::multiset_equals_with;
///
/// assert!(multiset_equals_with(&[1, 2, 2, 3], &[2, 3, 2, 1], &NaturalEquality));
/// assert!(!multiset_equals_with(&[1, 2, 2], &[1, 1, 2], &NaturalEquality));
/// ```
pub fn multiset_equals_with<T, E>(left: &[T], right: &[T], comparer: &E) -> bool
where
    E: EqualityComparer<T> + ?Sized,
{
    if std::ptr::eq(left, right) {
        return true;
    }
    if left.len() != right.len() {
        return false;
    }

    let mut buckets: HashMap<HashCode, Vec<&T>> = HashMap::new();
    for item in right {
        buckets
            .entry(comparer.hash_code(item))
            .or_default()
            .push(item);
    }

    left.iter().all(|item| {
        let Some(bucket) = buckets.get_mut(&comparer.hash_code(item)) else {
            return false;
        };
        match bucket
            .iter()
            .position(|candidate| comparer.equals(item, candidate))
        {
            Some(index) => {
                bucket.swap_remove(index);
                true
            }
            None => false,
        }
    })
}

fn slices_equal<T>(left: &[T], right: &[T], equals: impl FnMut(&T, &T) -> bool) -> bool {
    std::ptr::eq(left, right) || positionally_equal(left.iter(), right.iter(), equals)
}

fn positionally_equal<'a, T: 'a>(
    left: impl ExactSizeIterator<Item = &'a T>,
    right: impl ExactSizeIterator<Item = &'a T>,
    mut equals: impl FnMut(&T, &T) -> bool,
) -> bool {
    left.len() == right.len() && left.zip(right).all(|(left, right)| equals(left, right))
}

fn fold_hashes<'a, T: 'a, E>(items: impl IntoIterator<Item = &'a T>, comparer: &E) -> HashCode
where
    E: EqualityComparer<T> + ?Sized,
{
    items.into_iter().fold(EMPTY_SEED, |accumulator, item| {
        fold_step(accumulator, comparer.hash_code(item))
    })
}

/// A reusable positional equality comparer for slices, arrays, vectors and
/// deques.
///
/// Elements are compared and hashed with the wrapped comparer `E`. Wrap in
/// [`Nullable`] (see [`SequenceEquality::nullable`]) to compare
/// `Option<Vec<T>>` with absent-sequence semantics.
///
/// # Examples
///
/// ```rust
/// use ordkit::equality::EqualityComparer;
/// use ordkit::structural::SequenceEquality;
///
/// let comparer = SequenceEquality::natural();
/// assert!(comparer.equals(&vec![1, 2], &vec![1, 2]));
/// assert_eq!(comparer.hash_code(&Vec::<i32>::new()), 23);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SequenceEquality<E> {
    element: E,
}

impl<E> SequenceEquality<E> {
    /// Creates a sequence comparer using `element` for each element.
    #[must_use]
    pub const fn new(element: E) -> Self {
        Self { element }
    }

    /// Returns the element comparer.
    #[must_use]
    pub const fn element(&self) -> &E {
        &self.element
    }

    /// Lifts this comparer to optional sequences.
    #[must_use]
    pub const fn nullable(self) -> Nullable<Self> {
        Nullable::new(self)
    }
}

impl SequenceEquality<NaturalEquality> {
    /// A sequence comparer using the elements' own equality.
    #[must_use]
    pub const fn natural() -> Self {
        Self::new(NaturalEquality)
    }
}

impl<T, E: EqualityComparer<T>> EqualityComparer<[T]> for SequenceEquality<E> {
    fn equals(&self, left: &[T], right: &[T]) -> bool {
        slices_equal(left, right, |left, right| self.element.equals(left, right))
    }

    fn hash_code(&self, value: &[T]) -> HashCode {
        fold_hashes(value, &self.element)
    }
}

impl<T, E: EqualityComparer<T>> EqualityComparer<Vec<T>> for SequenceEquality<E> {
    fn equals(&self, left: &Vec<T>, right: &Vec<T>) -> bool {
        EqualityComparer::<[T]>::equals(self, left, right)
    }

    fn hash_code(&self, value: &Vec<T>) -> HashCode {
        EqualityComparer::<[T]>::hash_code(self, value)
    }
}

impl<T, E: EqualityComparer<T>, const N: usize> EqualityComparer<[T; N]> for SequenceEquality<E> {
    fn equals(&self, left: &[T; N], right: &[T; N]) -> bool {
        EqualityComparer::<[T]>::equals(self, left, right)
    }

    fn hash_code(&self, value: &[T; N]) -> HashCode {
        EqualityComparer::<[T]>::hash_code(self, value)
    }
}

impl<T, E: EqualityComparer<T>> EqualityComparer<VecDeque<T>> for SequenceEquality<E> {
    fn equals(&self, left: &VecDeque<T>, right: &VecDeque<T>) -> bool {
        std::ptr::eq(left, right)
            || positionally_equal(left.iter(), right.iter(), |left, right| {
                self.element.equals(left, right)
            })
    }

    fn hash_code(&self, value: &VecDeque<T>) -> HashCode {
        fold_hashes(value, &self.element)
    }
}
