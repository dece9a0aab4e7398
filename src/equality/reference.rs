//! Object-identity equality.

use std::marker::PhantomData;
use std::rc::Rc;
use std::sync::Arc;

use super::EqualityComparer;
use crate::hash::{HashCode, hash_one};

/// Compares by object identity, ignoring `T`'s own `PartialEq` and `Hash`.
///
/// Two handles are equal iff they point at the same allocation. Implemented
/// for `&T`, `Rc<T>` and `Arc<T>`. The comparer is stateless; use
/// [`ReferenceEquality::INSTANCE`] as the shared default.
///
/// # Examples
///
/// ```rust
/// use std::rc::Rc;
/// use ordkit::equality::{EqualityComparer, ReferenceEquality};
///
/// let first = Rc::new(String::from("same"));
/// let alias = Rc::clone(&first);
/// let other = Rc::new(String::from("same"));
///
/// let identity = ReferenceEquality::<String>::INSTANCE;
/// assert!(identity.equals(&first, &alias));
/// assert!(!identity.equals(&first, &other));
/// ```
pub struct ReferenceEquality<T: ?Sized> {
    _marker: PhantomData<fn(&T)>,
}

impl<T: ?Sized> ReferenceEquality<T> {
    /// The default instance.
    pub const INSTANCE: Self = Self {
        _marker: PhantomData,
    };

    /// Creates a new `ReferenceEquality`.
    #[must_use]
    pub const fn new() -> Self {
        Self::INSTANCE
    }

    fn address(value: &T) -> usize {
        std::ptr::from_ref(value).cast::<()>().addr()
    }

    fn same(&self, left: &T, right: &T) -> bool {
        Self::address(left) == Self::address(right)
    }

    fn identity_hash(&self, value: &T) -> HashCode {
        hash_one(&Self::address(value))
    }
}

impl<T: ?Sized> EqualityComparer<&T> for ReferenceEquality<T> {
    fn equals(&self, left: &&T, right: &&T) -> bool {
        self.same(left, right)
    }

    fn hash_code(&self, value: &&T) -> HashCode {
        self.identity_hash(value)
    }
}

impl<T: ?Sized> EqualityComparer<Rc<T>> for ReferenceEquality<T> {
    fn equals(&self, left: &Rc<T>, right: &Rc<T>) -> bool {
        self.same(left, right)
    }

    fn hash_code(&self, value: &Rc<T>) -> HashCode {
        self.identity_hash(value)
    }
}

impl<T: ?Sized> EqualityComparer<Arc<T>> for ReferenceEquality<T> {
    fn equals(&self, left: &Arc<T>, right: &Arc<T>) -> bool {
        self.same(left, right)
    }

    fn hash_code(&self, value: &Arc<T>) -> HashCode {
        self.identity_hash(value)
    }
}

impl<T: ?Sized> Default for ReferenceEquality<T> {
    fn default() -> Self {
        Self::INSTANCE
    }
}

impl<T: ?Sized> Clone for ReferenceEquality<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for ReferenceEquality<T> {}

impl<T: ?Sized> std::fmt::Debug for ReferenceEquality<T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("ReferenceEquality")
    }
}

static_assertions::assert_impl_all!(ReferenceEquality<String>: Send, Sync, Copy);
static_assertions::assert_impl_all!(ReferenceEquality<dyn std::fmt::Debug>: Send, Sync, Copy);
