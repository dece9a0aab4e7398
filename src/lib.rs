//! # ordkit
//!
//! Structural equality, composable comparers and lazy ordered merging for
//! Rust collections.
//!
//! ## Overview
//!
//! The standard traits give each type exactly one notion of equality and one
//! ordering. This library turns both into values that can be chosen, composed
//! and passed around:
//!
//! - **Equality**: [`EqualityComparer`](equality::EqualityComparer) values,
//!   equality by projected key, reference identity, and absent-aware lifting
//! - **Structural**: element-wise equality and hashing of sequences and maps
//!   that treat an absent collection differently from an empty one
//! - **Comparers**: key, chained, reversed and null-rejecting
//!   [`Comparer`](comparer::Comparer) values
//! - **Merge**: a lazy, restartable k-way merge of pre-sorted sources
//!
//! ## Feature Flags
//!
//! - `equality`: equality comparers
//! - `structural`: sequence and map equality and hashing (implies `equality`)
//! - `comparer`: ordering comparers
//! - `merge`: k-way merging (implies `comparer`)
//! - `serde`: `Serialize`/`Deserialize` for the plain data types
//! - `fxhash`, `ahash`: swap the hasher behind element hash codes
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use ordkit::prelude::*;
//!
//! assert!(sequence_equals(Some(&[1, 2, 3][..]), Some(&[1, 2, 3][..])));
//! assert!(!sequence_equals(None, Some(&[0_i32; 0][..])));
//!
//! let a = [1, 4, 9];
//! let b = [2, 3, 10];
//! let merged: Vec<i32> = merge_ordered([&a[..], &b[..]]).iter().copied().collect();
//! assert_eq!(merged, vec![1, 2, 3, 4, 9, 10]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use ordkit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::*;

    #[cfg(feature = "equality")]
    pub use crate::equality::*;

    #[cfg(feature = "structural")]
    pub use crate::structural::*;

    #[cfg(feature = "comparer")]
    pub use crate::comparer::*;

    #[cfg(feature = "merge")]
    pub use crate::merge::*;
}

pub mod error;
pub mod hash;

#[cfg(feature = "equality")]
pub mod equality;

#[cfg(feature = "structural")]
pub mod structural;

#[cfg(feature = "comparer")]
pub mod comparer;

#[cfg(feature = "merge")]
pub mod merge;

#[cfg(test)]
mod tests {
    #[test]
    #[cfg(all(feature = "structural", feature = "merge"))]
    fn prelude_reaches_every_module() {
        use crate::prelude::*;

        assert!(sequence_equals::<i32>(None, None));
        assert_eq!(
            NaturalOrder.compare(&1, &2),
            std::cmp::Ordering::Less
        );
        assert_eq!(merge_ordered(vec![vec![2], vec![1]]).into_iter().count(), 2);
    }
}
