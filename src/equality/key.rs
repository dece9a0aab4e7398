//! Equality by projected key.

use std::hash::Hash;
use std::marker::PhantomData;

use super::EqualityComparer;
use crate::error::ConstructionError;
use crate::hash::{HashCode, hash_one};

/// Compares values for equality by a key projected from each of them.
///
/// Two values are equal iff their keys are equal, and a value hashes as its
/// key does.
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
/// use ordkit::equality::{EqualityComparer, KeyEquality};
///
/// struct User { id: u32, name: &'static str }
///
/// let by_id = KeyEquality::new(|user: &User| user.id);
/// let first = User { id: 7, name: "alice" };
/// let renamed = User { id: 7, name: "alicia" };
/// assert!(by_id.equals(&first, &renamed));
/// ```
pub struct KeyEquality<T: ?Sized, K, F>
where
    F: Fn(&T) -> K,
{
    selector: F,
    _marker: PhantomData<fn(&T) -> K>,
}

impl<T: ?Sized, K, F> KeyEquality<T, K, F>
where
    F: Fn(&T) -> K,
{
    /// Creates a new `KeyEquality` from a key selector.
    #[must_use]
    pub const fn new(selector: F) -> Self {
        Self {
            selector,
            _marker: PhantomData,
        }
    }

    /// Creates a new `KeyEquality`, failing if the selector is absent.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::MissingArgument`] when `selector` is `None`.
    pub fn from_optional(selector: Option<F>) -> Result<Self, ConstructionError> {
        selector
            .map(Self::new)
            .ok_or(ConstructionError::MissingArgument {
                combinator: "KeyEquality",
                argument: "selector",
            })
    }

    /// Projects the key of a value.
    #[inline]
    pub fn key_of(&self, value: &T) -> K {
        (self.selector)(value)
    }
}

impl<T: ?Sized, K, F> EqualityComparer<T> for KeyEquality<T, K, F>
where
    F: Fn(&T) -> K,
    K: PartialEq + Hash,
{
    #[inline]
    fn equals(&self, left: &T, right: &T) -> bool {
        self.key_of(left) == self.key_of(right)
    }

    #[inline]
    fn hash_code(&self, value: &T) -> HashCode {
        hash_one(&self.key_of(value))
    }
}

impl<T: ?Sized, K, F> Clone for KeyEquality<T, K, F>
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

impl<T: ?Sized, K, F> std::fmt::Debug for KeyEquality<T, K, F>
where
    F: Fn(&T) -> K,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("KeyEquality").finish_non_exhaustive()
    }
}

/// Creates a [`KeyEquality`] from a key selector.
#[must_use]
pub const fn key_equality<T: ?Sized, K, F>(selector: F) -> KeyEquality<T, K, F>
where
    F: Fn(&T) -> K,
{
    KeyEquality::new(selector)
}
