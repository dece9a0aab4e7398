//! Structural equality and hashing of collections.
//!
//! Two families of structural comparison are provided:
//!
//! - **Positional** ([`sequence_equals`], [`sequence_hash`],
//!   [`SequenceEquality`]): arrays, slices, vectors and arbitrary
//!   iterators are equal iff they have the same length and equal elements
//!   at equal positions. The hash is an order-sensitive fold.
//! - **Unordered keyed** ([`map_equals`], [`map_hash`], [`MapEquality`]):
//!   maps are equal iff they hold the same key/value pairs. The hash is an
//!   order-independent sum, so two maps with the same content hash the
//!   same regardless of iteration order.
//!
//! # Absent and empty
//!
//! The free functions take `Option<&_>` so that an absent collection can be
//! told apart from an empty one:
//!
//! | input   | hash                     |
//! |---------|--------------------------|
//! | `None`  | [`ABSENT_HASH`] (`0`)    |
//! | empty   | [`EMPTY_SEED`] (`23`)    |
//! | `[x..]` | fold starting from `23`  |
//!
//! Comparer values ([`SequenceEquality`], [`MapEquality`]) work on present
//! collections; wrap them in [`Nullable`](crate::equality::Nullable) to get
//! the same absent semantics over `Option<C>`.
//!
//! # Examples
//!
//! ```rust
//! use std::collections::HashMap;
//! use ordkit::structural::{map_equals, sequence_equals, sequence_hash};
//!
//! assert!(sequence_equals(Some(&[1, 2, 3][..]), Some(&[1, 2, 3][..])));
//! assert!(!sequence_equals(Some(&[1, 2, 3][..]), Some(&[3, 2, 1][..])));
//!
//! assert_eq!(sequence_hash::<i32>(None), 0);
//! assert_eq!(sequence_hash::<i32>(Some(&[])), 23);
//!
//! let first = HashMap::from([("A", 1), ("B", 2)]);
//! let second = HashMap::from([("B", 2), ("A", 1)]);
//! assert!(map_equals(Some(&first), Some(&second)));
//! ```
//!
//! [`ABSENT_HASH`]: crate::hash::ABSENT_HASH
//! [`EMPTY_SEED`]: crate::hash::EMPTY_SEED

mod map;
mod sequence;

pub use map::{
    KeyedCollection, MapEquality, map_equals, map_equals_with, map_hash, map_hash_with,
};
pub use sequence::{
    SequenceEquality, iter_equals_with, iter_hash_with, multiset_equals_with, sequence_equals,
    sequence_equals_with, sequence_hash, sequence_hash_with,
};
