//! Ordering comparers and their combinators.
//!
//! A [`Comparer`] is a three-way ordering function over `T`. Unlike `Ord`,
//! it is a value: several orderings of the same type can coexist and be
//! composed.
//!
//! - [`NaturalOrder`]: the type's own `Ord`
//! - [`FnComparer`]: an ordering closure
//! - [`KeyComparer`]: orders by a projected key
//! - [`NullsFirst`]: lifts a comparer to `Option<T>`, `None` first
//! - [`NonNullKeyComparer`]: orders `Option<T>` by key, rejecting `None`
//! - [`ReverseComparer`]: swaps `Less` and `Greater`
//! - [`ThenComparer`], [`ChainedComparer`]: consult comparers in priority
//!   order, moving on only on ties
//!
//! # Laws
//!
//! For all `a`, `b`, `c`:
//!
//! ```text
//! compare(a, a) == Equal
//! compare(a, b) == compare(b, a).reverse()
//! compare(a, b) == Less && compare(b, c) == Less => compare(a, c) == Less
//! ```
//!
//! # Examples
//!
//! ```rust
//! use std::cmp::Ordering;
//! use ordkit::comparer::{Comparer, ComparerExt, key_comparer};
//!
//! struct Employee { department: u32, salary: u32 }
//!
//! let ordering = key_comparer(|employee: &Employee| employee.department)
//!     .then_by_key(|employee: &Employee| employee.salary)
//!     .reversed();
//!
//! let junior = Employee { department: 1, salary: 10 };
//! let senior = Employee { department: 1, salary: 20 };
//! assert_eq!(ordering.compare(&junior, &senior), Ordering::Greater);
//! ```

mod chained;
mod key;
mod reverse;

pub use chained::{ChainedComparer, ThenComparer};
pub use key::{
    KeyComparer, NonNullKeyComparer, NullsFirst, key_comparer, non_null_key_comparer,
    nullable_key_comparer,
};
pub use reverse::ReverseComparer;

use std::cmp::Ordering;

use crate::error::NullElementError;

/// A type class for three-way orderings over `T`.
///
/// # Laws
///
/// ```text
/// compare(a, a) == Equal
/// compare(a, b) == compare(b, a).reverse()
/// transitivity of Less, Equal and Greater
/// ```
///
/// # Errors and panics
///
/// Comparers that reject some inputs (see [`NonNullKeyComparer`]) report the
/// rejection through [`try_compare`](Self::try_compare) and panic from
/// [`compare`](Self::compare).
pub trait Comparer<T: ?Sized> {
    /// Compares two values.
    fn compare(&self, left: &T, right: &T) -> Ordering;

    /// Compares two values, reporting rejected inputs as an error.
    ///
    /// The default implementation never fails.
    ///
    /// # Errors
    ///
    /// Returns [`NullElementError`] when the comparer forbids one of the
    /// operands.
    fn try_compare(&self, left: &T, right: &T) -> Result<Ordering, NullElementError> {
        Ok(self.compare(left, right))
    }

    /// Returns the greater of two values, or `right` when they are equal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordkit::comparer::{Comparer, NaturalOrder};
    ///
    /// assert_eq!(*NaturalOrder.max_of(&3, &7), 7);
    /// ```
    fn max_of<'v>(&self, left: &'v T, right: &'v T) -> &'v T
    where
        Self: Sized,
    {
        match self.compare(left, right) {
            Ordering::Greater => left,
            Ordering::Less | Ordering::Equal => right,
        }
    }

    /// Returns the lesser of two values, or `left` when they are equal.
    fn min_of<'v>(&self, left: &'v T, right: &'v T) -> &'v T
    where
        Self: Sized,
    {
        match self.compare(left, right) {
            Ordering::Greater => right,
            Ordering::Less | Ordering::Equal => left,
        }
    }

    /// Borrows this comparer as a closure, for APIs such as
    /// [`slice::sort_by`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordkit::comparer::{Comparer, ComparerExt, NaturalOrder};
    ///
    /// let descending = NaturalOrder.reversed();
    /// let mut values = vec![3, 1, 2];
    /// values.sort_by(Comparer::<i32>::as_fn(&descending));
    /// assert_eq!(values, vec![3, 2, 1]);
    /// ```
    fn as_fn(&self) -> impl Fn(&T, &T) -> Ordering
    where
        Self: Sized,
    {
        move |left: &T, right: &T| self.compare(left, right)
    }

    /// Boxes this comparer as a trait object.
    fn boxed<'a>(self) -> Box<dyn Comparer<T> + 'a>
    where
        Self: Sized + 'a,
    {
        Box::new(self)
    }
}

impl<T: ?Sized, C: Comparer<T> + ?Sized> Comparer<T> for &C {
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        (**self).compare(left, right)
    }

    #[inline]
    fn try_compare(&self, left: &T, right: &T) -> Result<Ordering, NullElementError> {
        (**self).try_compare(left, right)
    }
}

impl<T: ?Sized, C: Comparer<T> + ?Sized> Comparer<T> for Box<C> {
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        (**self).compare(left, right)
    }

    #[inline]
    fn try_compare(&self, left: &T, right: &T) -> Result<Ordering, NullElementError> {
        (**self).try_compare(left, right)
    }
}

/// Combinators shared by every comparer in this crate.
///
/// The combinators do not mention the compared type, so comparers such as
/// [`NaturalOrder`] that work for any `T` can be combined without type
/// annotations. Implement it for your own comparer with an empty
/// `impl ComparerExt for MyComparer {}`.
pub trait ComparerExt: Sized {
    /// Reverses this comparer.
    #[must_use]
    fn reversed(self) -> ReverseComparer<Self> {
        ReverseComparer::new(self)
    }

    /// Consults `next` when this comparer reports `Equal`.
    #[must_use]
    fn then<C>(self, next: C) -> ThenComparer<Self, C> {
        ThenComparer::new(self, next)
    }

    /// Breaks ties with the ordering of a projected key.
    #[must_use]
    fn then_by_key<T: ?Sized, K, F>(self, selector: F) -> ThenComparer<Self, KeyComparer<T, K, F>>
    where
        F: Fn(&T) -> K,
        K: Ord,
    {
        ThenComparer::new(self, KeyComparer::new(selector))
    }

    /// Breaks ties with the reversed ordering of a projected key.
    #[must_use]
    fn then_by_key_descending<T: ?Sized, K, F>(
        self,
        selector: F,
    ) -> ThenComparer<Self, ReverseComparer<KeyComparer<T, K, F>>>
    where
        F: Fn(&T) -> K,
        K: Ord,
    {
        ThenComparer::new(self, ReverseComparer::new(KeyComparer::new(selector)))
    }
}

/// Orders values by their own `Ord`.
///
/// On `Option<T>` this already sorts `None` before any `Some`.
///
/// # Examples
///
/// ```rust
/// use std::cmp::Ordering;
/// use ordkit::comparer::{Comparer, NaturalOrder};
///
/// assert_eq!(NaturalOrder.compare(&1, &2), Ordering::Less);
/// assert_eq!(NaturalOrder.compare(&None, &Some(0)), Ordering::Less);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Comparer<T> for NaturalOrder {
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        left.cmp(right)
    }
}

impl ComparerExt for NaturalOrder {}

/// A comparer backed by an ordering closure.
///
/// # Examples
///
/// ```rust
/// use std::cmp::Ordering;
/// use ordkit::comparer::{Comparer, comparer_fn};
///
/// let by_length = comparer_fn(|left: &&str, right: &&str| left.len().cmp(&right.len()));
/// assert_eq!(by_length.compare(&"abc", &"de"), Ordering::Greater);
/// ```
#[derive(Clone, Copy)]
pub struct FnComparer<F> {
    function: F,
}

impl<F> FnComparer<F> {
    /// Wraps an ordering closure.
    #[must_use]
    pub const fn new(function: F) -> Self {
        Self { function }
    }
}

impl<T: ?Sized, F> Comparer<T> for FnComparer<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        (self.function)(left, right)
    }
}

impl<F> ComparerExt for FnComparer<F> {}

impl<F> std::fmt::Debug for FnComparer<F> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("FnComparer").finish_non_exhaustive()
    }
}

/// Creates a comparer from an ordering closure.
#[must_use]
pub const fn comparer_fn<F>(function: F) -> FnComparer<F> {
    FnComparer::new(function)
}

/// The direction of a sort or merge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    Ascending,
    /// Largest first.
    Descending,
}

impl SortDirection {
    /// Orients an ordering produced by an ascending comparer.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::cmp::Ordering;
    /// use ordkit::comparer::SortDirection;
    ///
    /// assert_eq!(SortDirection::Ascending.apply(Ordering::Less), Ordering::Less);
    /// assert_eq!(SortDirection::Descending.apply(Ordering::Less), Ordering::Greater);
    /// ```
    #[inline]
    #[must_use]
    pub const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }

    /// Returns the opposite direction.
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

static_assertions::assert_impl_all!(NaturalOrder: Send, Sync, Copy);
static_assertions::assert_impl_all!(SortDirection: Send, Sync, Copy);
