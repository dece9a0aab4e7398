//! The lazy k-way merge iterator.

use std::cmp::Ordering;
use std::iter::FusedIterator;

use smallvec::SmallVec;

use crate::comparer::{Comparer, SortDirection};

/// Number of sources kept inline before the cursor heap spills to the heap
/// allocator.
const INLINE_SOURCES: usize = 8;

/// The current head of one source plus the rest of it.
struct Cursor<S: Iterator> {
    head: S::Item,
    rest: S,
    source: usize,
}

/// Lazily merges pre-sorted iterators into one sorted iterator.
///
/// Holds one cursor per non-exhausted source in a binary heap ordered by
/// the cursors' heads. Each call to `next` yields the root's head and
/// advances only that source, so producing `M` elements from `N` sources
/// costs `O(M log N)` comparisons and nothing is buffered beyond one head
/// per source.
///
/// Sources are trusted to be sorted by the same comparer and direction;
/// the merge never checks. Heads that compare `Equal` are all yielded, in
/// an unspecified order.
///
/// # Panics
///
/// Panics if the comparer panics, e.g. a
/// [`NonNullKeyComparer`](crate::comparer::NonNullKeyComparer) meeting an
/// absent element.
pub struct MergeIter<S: Iterator, C> {
    heap: SmallVec<[Cursor<S>; INLINE_SOURCES]>,
    comparer: C,
    direction: SortDirection,
}

impl<S, C> MergeIter<S, C>
where
    S: Iterator,
    C: Comparer<S::Item>,
{
    /// Creates a merge over `sources`, skipping the empty ones.
    pub fn new<I>(sources: I, comparer: C, direction: SortDirection) -> Self
    where
        I: IntoIterator,
        I::Item: IntoIterator<IntoIter = S, Item = S::Item>,
    {
        let heap = sources
            .into_iter()
            .enumerate()
            .filter_map(|(source, items)| {
                let mut rest = items.into_iter();
                rest.next().map(|head| Cursor { head, rest, source })
            })
            .collect();

        let mut merge = Self {
            heap,
            comparer,
            direction,
        };
        merge.heapify();
        merge
    }

    /// Returns the number of sources that still have elements.
    #[must_use]
    pub fn active_sources(&self) -> usize {
        self.heap.len()
    }

    /// Returns the element the next call to `next` will yield.
    #[must_use]
    pub fn peek(&self) -> Option<&S::Item> {
        self.heap.first().map(|cursor| &cursor.head)
    }

    fn precedes(&self, candidate: &Cursor<S>, current: &Cursor<S>) -> bool {
        let ordering = self
            .direction
            .apply(self.comparer.compare(&candidate.head, &current.head));
        match ordering {
            Ordering::Less => true,
            Ordering::Greater => false,
            Ordering::Equal => candidate.source < current.source,
        }
    }

    fn heapify(&mut self) {
        for index in (0..self.heap.len() / 2).rev() {
            self.sift_down(index);
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let length = self.heap.len();
        loop {
            let left = 2 * index + 1;
            if left >= length {
                break;
            }
            let right = left + 1;
            let child = if right < length && self.precedes(&self.heap[right], &self.heap[left]) {
                right
            } else {
                left
            };
            if !self.precedes(&self.heap[child], &self.heap[index]) {
                break;
            }
            self.heap.swap(child, index);
            index = child;
        }
    }
}

impl<S, C> Iterator for MergeIter<S, C>
where
    S: Iterator,
    C: Comparer<S::Item>,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let root = self.heap.first_mut()?;
        let item = match root.rest.next() {
            Some(next) => std::mem::replace(&mut root.head, next),
            None => self.heap.swap_remove(0).head,
        };
        if self.heap.len() > 1 {
            self.sift_down(0);
        }
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.heap
            .iter()
            .fold((0, Some(0)), |(lower, upper), cursor| {
                let (rest_lower, rest_upper) = cursor.rest.size_hint();
                (
                    lower.saturating_add(rest_lower).saturating_add(1),
                    upper
                        .zip(rest_upper)
                        .and_then(|(upper, rest_upper)| upper.checked_add(rest_upper)?.checked_add(1)),
                )
            })
    }
}

impl<S, C> FusedIterator for MergeIter<S, C>
where
    S: Iterator,
    C: Comparer<S::Item>,
{
}

impl<S: Iterator, C> std::fmt::Debug for MergeIter<S, C> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("MergeIter")
            .field("active_sources", &self.heap.len())
            .field("direction", &self.direction)
            .finish_non_exhaustive()
    }
}
