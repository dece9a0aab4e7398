//! Lazy, restartable k-way merging of pre-sorted sources.
//!
//! An [`OrderedMerge`] owns a list of sources, each already sorted under one
//! comparer and direction, and yields their union in that same order. Nothing
//! is read from the sources until iteration starts, and each iteration
//! re-reads them from the beginning:
//!
//! - [`OrderedMerge::iter`] starts a fresh pass over clones of the sources
//! - iterating `&OrderedMerge` does the same
//! - iterating `OrderedMerge` by value consumes the sources
//!
//! A merge over no sources, or over only empty sources, yields nothing.
//!
//! # Examples
//!
//! ```rust
//! use ordkit::merge::merge_ordered;
//!
//! let a = [1, 8, 13, 19, 40];
//! let b = [0, 4, 12, 41];
//! let c = [3, 22, 30, 37, 43];
//!
//! let merge = merge_ordered([&a[..], &b[..], &c[..]]);
//! let first: Vec<i32> = merge.iter().copied().collect();
//! let again: Vec<i32> = merge.iter().copied().collect();
//!
//! assert_eq!(first.len(), 14);
//! assert_eq!(first.first(), Some(&0));
//! assert_eq!(first.last(), Some(&43));
//! assert_eq!(first, again);
//! ```

mod iter;

pub use iter::MergeIter;

use crate::comparer::{Comparer, KeyComparer, NaturalOrder, SortDirection, key_comparer};

/// A restartable merge of pre-sorted sources.
///
/// # Type Parameters
///
/// - `I`: a source; any `IntoIterator` whose items are sorted under `C`
/// - `C`: the comparer the sources are sorted by
///
/// # Examples
///
/// ```rust
/// use ordkit::comparer::{NaturalOrder, SortDirection};
/// use ordkit::merge::OrderedMerge;
///
/// let merge = OrderedMerge::new(
///     vec![vec![9, 3], vec![8, 7, 1]],
///     NaturalOrder,
///     SortDirection::Descending,
/// );
/// assert_eq!(merge.into_iter().collect::<Vec<_>>(), vec![9, 8, 7, 3, 1]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedMerge<I, C> {
    sources: Vec<I>,
    comparer: C,
    direction: SortDirection,
}

impl<I, C> OrderedMerge<I, C>
where
    I: IntoIterator,
    C: Comparer<I::Item>,
{
    /// Creates a merge without touching any source.
    #[must_use]
    pub fn new<S>(sources: S, comparer: C, direction: SortDirection) -> Self
    where
        S: IntoIterator<Item = I>,
    {
        Self {
            sources: sources.into_iter().collect(),
            comparer,
            direction,
        }
    }

    /// Starts a new pass over the sources.
    ///
    /// Each call clones the sources and merges them from the start, so
    /// repeated passes yield the same sequence as long as the sources
    /// themselves are stable. Cloning a borrowed source such as `&[T]` is
    /// free.
    #[must_use]
    pub fn iter(&self) -> MergeIter<I::IntoIter, &C>
    where
        I: Clone,
    {
        MergeIter::new(self.sources.iter().cloned(), &self.comparer, self.direction)
    }

    /// Returns the sources in the order they were given.
    #[must_use]
    pub fn sources(&self) -> &[I] {
        &self.sources
    }

    /// Returns the comparer the sources are sorted by.
    #[must_use]
    pub const fn comparer(&self) -> &C {
        &self.comparer
    }

    /// Returns the direction of the merge.
    #[must_use]
    pub const fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Appends a source.
    #[must_use]
    pub fn with_source(mut self, source: I) -> Self {
        self.sources.push(source);
        self
    }
}

impl<I, C> IntoIterator for OrderedMerge<I, C>
where
    I: IntoIterator,
    C: Comparer<I::Item>,
{
    type Item = I::Item;
    type IntoIter = MergeIter<I::IntoIter, C>;

    fn into_iter(self) -> Self::IntoIter {
        MergeIter::new(self.sources, self.comparer, self.direction)
    }
}

impl<'m, I, C> IntoIterator for &'m OrderedMerge<I, C>
where
    I: IntoIterator + Clone,
    C: Comparer<I::Item>,
{
    type Item = I::Item;
    type IntoIter = MergeIter<I::IntoIter, &'m C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Merges sources sorted ascending by the items' own `Ord`.
///
/// # Examples
///
/// ```rust
/// use ordkit::merge::merge_ordered;
///
/// let merged: Vec<i32> = merge_ordered(vec![vec![1, 4], vec![2, 3]]).into_iter().collect();
/// assert_eq!(merged, vec![1, 2, 3, 4]);
/// ```
#[must_use]
pub fn merge_ordered<S, I>(sources: S) -> OrderedMerge<I, NaturalOrder>
where
    S: IntoIterator<Item = I>,
    I: IntoIterator,
    I::Item: Ord,
{
    OrderedMerge::new(sources, NaturalOrder, SortDirection::Ascending)
}

/// Merges sources sorted ascending by a projected key.
///
/// # Examples
///
/// ```rust
/// use ordkit::merge::merge_ordered_by;
///
/// let merged: Vec<&str> = merge_ordered_by(vec![vec!["a", "ccc"], vec!["bb"]], |word: &&str| word.len())
///     .into_iter()
///     .collect();
/// assert_eq!(merged, vec!["a", "bb", "ccc"]);
/// ```
#[must_use]
pub fn merge_ordered_by<S, I, K, F>(
    sources: S,
    selector: F,
) -> OrderedMerge<I, KeyComparer<I::Item, K, F>>
where
    S: IntoIterator<Item = I>,
    I: IntoIterator,
    K: Ord,
    F: Fn(&I::Item) -> K,
{
    OrderedMerge::new(sources, key_comparer(selector), SortDirection::Ascending)
}

/// Merges sources sorted descending by a projected key.
///
/// # Examples
///
/// ```rust
/// use ordkit::merge::merge_ordered_by_descending;
///
/// let merged: Vec<i32> = merge_ordered_by_descending(vec![vec![5, 1], vec![4, 2]], |value: &i32| *value)
///     .into_iter()
///     .collect();
/// assert_eq!(merged, vec![5, 4, 2, 1]);
/// ```
#[must_use]
pub fn merge_ordered_by_descending<S, I, K, F>(
    sources: S,
    selector: F,
) -> OrderedMerge<I, KeyComparer<I::Item, K, F>>
where
    S: IntoIterator<Item = I>,
    I: IntoIterator,
    K: Ord,
    F: Fn(&I::Item) -> K,
{
    OrderedMerge::new(sources, key_comparer(selector), SortDirection::Descending)
}

/// Merges sources sorted by an arbitrary comparer and direction.
#[must_use]
pub fn merge_ordered_with<S, I, C>(
    sources: S,
    comparer: C,
    direction: SortDirection,
) -> OrderedMerge<I, C>
where
    S: IntoIterator<Item = I>,
    I: IntoIterator,
    C: Comparer<I::Item>,
{
    OrderedMerge::new(sources, comparer, direction)
}

/// Method syntax for building merges from a collection of sources.
///
/// # Examples
///
/// ```rust
/// use ordkit::merge::MergeOrderedExt;
///
/// let evens = [0, 2, 4];
/// let odds = [1, 3, 5];
/// let merged: Vec<i32> = [&evens[..], &odds[..]].merge_ordered().iter().copied().collect();
/// assert_eq!(merged, vec![0, 1, 2, 3, 4, 5]);
/// ```
pub trait MergeOrderedExt<I: IntoIterator>: IntoIterator<Item = I> + Sized {
    /// See [`merge_ordered`].
    fn merge_ordered(self) -> OrderedMerge<I, NaturalOrder>
    where
        I::Item: Ord,
    {
        merge_ordered(self)
    }

    /// See [`merge_ordered_by`].
    fn merge_ordered_by<K, F>(self, selector: F) -> OrderedMerge<I, KeyComparer<I::Item, K, F>>
    where
        K: Ord,
        F: Fn(&I::Item) -> K,
    {
        merge_ordered_by(self, selector)
    }

    /// See [`merge_ordered_by_descending`].
    fn merge_ordered_by_descending<K, F>(
        self,
        selector: F,
    ) -> OrderedMerge<I, KeyComparer<I::Item, K, F>>
    where
        K: Ord,
        F: Fn(&I::Item) -> K,
    {
        merge_ordered_by_descending(self, selector)
    }

    /// See [`merge_ordered_with`].
    fn merge_ordered_with<C>(self, comparer: C, direction: SortDirection) -> OrderedMerge<I, C>
    where
        C: Comparer<I::Item>,
    {
        merge_ordered_with(self, comparer, direction)
    }
}

impl<S, I> MergeOrderedExt<I> for S
where
    S: IntoIterator<Item = I>,
    I: IntoIterator,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparer::{ComparerExt, comparer_fn, nullable_key_comparer};
    use rstest::{fixture, rstest};
    use std::cell::Cell;

    #[fixture]
    fn three_sources() -> [Vec<i32>; 3] {
        [
            vec![1, 8, 13, 19, 40],
            vec![0, 4, 12, 41],
            vec![3, 22, 30, 37, 43],
        ]
    }

    #[rstest]
    fn test_merge_three_sources(three_sources: [Vec<i32>; 3]) {
        let merge = merge_ordered(three_sources.iter().map(Vec::as_slice));
        let merged: Vec<i32> = merge.iter().copied().collect();

        assert_eq!(merged.len(), 14);
        assert_eq!(merged.first(), Some(&0));
        assert_eq!(merged.last(), Some(&43));
        assert!(merged.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[rstest]
    fn test_merge_is_restartable(three_sources: [Vec<i32>; 3]) {
        let merge = merge_ordered(three_sources);
        let first: Vec<i32> = merge.iter().collect();
        let second: Vec<i32> = (&merge).into_iter().collect();
        assert_eq!(first, second);
        assert_eq!(merge.into_iter().collect::<Vec<_>>(), first);
    }

    #[rstest]
    fn test_merge_is_lazy() {
        let pulled = Cell::new(0);
        let source = |values: Vec<i32>| {
            values.into_iter().inspect(|_| pulled.set(pulled.get() + 1))
        };
        let merge = merge_ordered(vec![source(vec![1, 3, 5]), source(vec![2, 4, 6])]);
        assert_eq!(pulled.get(), 0);

        let mut iter = merge.into_iter();
        assert_eq!(pulled.get(), 2);
        assert_eq!(iter.next(), Some(1));
        assert_eq!(pulled.get(), 3);
    }

    #[rstest]
    #[case(Vec::new())]
    #[case(vec![Vec::new()])]
    #[case(vec![Vec::new(), Vec::new(), Vec::new()])]
    fn test_merge_of_nothing(#[case] sources: Vec<Vec<i32>>) {
        assert_eq!(merge_ordered(sources).into_iter().next(), None);
    }

    #[rstest]
    fn test_merge_ordered_by_key() {
        let short = vec!["a".to_string(), "ccc".to_string()];
        let long = vec!["bb".to_string(), "dddd".to_string()];
        let merged: Vec<String> = vec![short, long]
            .merge_ordered_by(|word: &String| word.len())
            .into_iter()
            .collect();
        assert_eq!(merged, vec!["a", "bb", "ccc", "dddd"]);
    }

    #[rstest]
    fn test_merge_ordered_by_descending(three_sources: [Vec<i32>; 3]) {
        let descending: Vec<Vec<i32>> = three_sources
            .into_iter()
            .map(|source| source.into_iter().rev().collect())
            .collect();
        let merged: Vec<i32> = merge_ordered_by_descending(descending, |value: &i32| *value)
            .into_iter()
            .collect();
        assert_eq!(merged.first(), Some(&43));
        assert_eq!(merged.last(), Some(&0));
        assert!(merged.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    #[rstest]
    fn test_merge_with_reversed_comparer_and_descending_direction() {
        let merged: Vec<i32> = vec![vec![1, 5], vec![2, 3]]
            .merge_ordered_with(NaturalOrder.reversed(), SortDirection::Descending)
            .into_iter()
            .collect();
        assert_eq!(merged, vec![1, 2, 3, 5]);
    }

    #[rstest]
    fn test_merge_with_absent_elements_first() {
        let merged: Vec<Option<i32>> = merge_ordered_with(
            vec![vec![None, Some(2)], vec![Some(1), Some(3)]],
            nullable_key_comparer(|value: &i32| *value),
            SortDirection::Ascending,
        )
        .into_iter()
        .collect();
        assert_eq!(merged, vec![None, Some(1), Some(2), Some(3)]);
    }

    #[rstest]
    fn test_merge_with_closure_comparer() {
        let merge = merge_ordered_with(
            vec![vec![10, 30], vec![20]],
            comparer_fn(|left: &i32, right: &i32| left.cmp(right)),
            SortDirection::Ascending,
        );
        assert_eq!(merge.iter().collect::<Vec<_>>(), vec![10, 20, 30]);
    }

    #[rstest]
    fn test_with_source_appends() {
        let merge = merge_ordered(vec![vec![1, 3]]).with_source(vec![2]);
        assert_eq!(merge.sources().len(), 2);
        assert_eq!(merge.direction(), SortDirection::Ascending);
        assert_eq!(merge.iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    }
}
