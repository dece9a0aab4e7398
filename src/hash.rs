//! Hash codes and the hasher behind them.
//!
//! Structural hashing in this crate folds element hashes into a
//! [`HashCode`] (`i32`) using wrapping arithmetic. The element hashes
//! themselves come from [`hash_one`], which runs a `T: Hash` through the
//! hasher selected by the crate features:
//!
//! - `ahash`: `ahash::AHasher` with fixed keys
//! - `fxhash`: `rustc_hash::FxHasher`
//! - neither: `std::collections::hash_map::DefaultHasher`
//!
//! Every choice is deterministic: the same value always produces the same
//! hash code within a build.

use std::hash::{Hash, Hasher};

/// The hash code produced by equality comparers.
pub type HashCode = i32;

/// The hash code of an absent sequence, map or element.
pub const ABSENT_HASH: HashCode = 0;

/// The hash code of a present but empty collection, and the initial
/// accumulator of every fold.
pub const EMPTY_SEED: HashCode = 23;

/// The multiplier applied to the accumulator before each element is added.
pub const FOLD_MULTIPLIER: HashCode = 31;

#[cfg(feature = "ahash")]
type SelectedHasher = ahash::AHasher;

#[cfg(all(feature = "fxhash", not(feature = "ahash")))]
type SelectedHasher = rustc_hash::FxHasher;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
type SelectedHasher = std::collections::hash_map::DefaultHasher;

/// Hashes a single value into a [`HashCode`].
///
/// # Examples
///
/// ```rust
/// use ordkit::hash::hash_one;
///
/// assert_eq!(hash_one(&"key"), hash_one(&"key"));
/// ```
#[must_use]
pub fn hash_one<T: Hash + ?Sized>(value: &T) -> HashCode {
    let mut hasher = SelectedHasher::default();
    value.hash(&mut hasher);
    fold_u64(hasher.finish())
}

/// Adds one element hash to an order-sensitive accumulator.
///
/// `accumulator * 31 + element`, wrapping on overflow.
#[inline]
#[must_use]
pub const fn fold_step(accumulator: HashCode, element: HashCode) -> HashCode {
    accumulator
        .wrapping_mul(FOLD_MULTIPLIER)
        .wrapping_add(element)
}

/// Combines a key hash and a value hash into one entry hash.
#[inline]
#[must_use]
pub const fn combine_entry(key: HashCode, value: HashCode) -> HashCode {
    fold_step(key, value)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
const fn fold_u64(hash: u64) -> HashCode {
    ((hash >> 32) ^ hash) as u32 as HashCode
}
