//! Unordered keyed structural equality.

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use crate::equality::{EqualityComparer, NaturalEquality, Nullable};
use crate::hash::{ABSENT_HASH, EMPTY_SEED, HashCode, combine_entry, hash_one};

/// A read-only view of a map: entry count, lookup by key and iteration.
///
/// Implemented for `HashMap` and `BTreeMap`, so that maps of either kind
/// (or one of each) can be compared structurally.
pub trait KeyedCollection<K, V> {
    /// Returns the number of entries.
    fn entry_count(&self) -> usize;

    /// Returns the value mapped to `key`, if any.
    fn lookup(&self, key: &K) -> Option<&V>;

    /// Iterates over the entries in an unspecified order.
    fn entries<'a>(&'a self) -> impl Iterator<Item = (&'a K, &'a V)>
    where
        K: 'a,
        V: 'a;
}

impl<K: Eq + Hash, V, S: BuildHasher> KeyedCollection<K, V> for HashMap<K, V, S> {
    #[inline]
    fn entry_count(&self) -> usize {
        self.len()
    }

    #[inline]
    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn entries<'a>(&'a self) -> impl Iterator<Item = (&'a K, &'a V)>
    where
        K: 'a,
        V: 'a,
    {
        self.iter()
    }
}

impl<K: Ord, V> KeyedCollection<K, V> for BTreeMap<K, V> {
    #[inline]
    fn entry_count(&self) -> usize {
        self.len()
    }

    #[inline]
    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn entries<'a>(&'a self) -> impl Iterator<Item = (&'a K, &'a V)>
    where
        K: 'a,
        V: 'a,
    {
        self.iter()
    }
}

/// Returns `true` if two optional maps hold the same key/value pairs.
///
/// - the same map instance is equal to itself
/// - exactly one absent is not equal
/// - both absent is equal
/// - otherwise equal iff both have the same number of entries and every key
///   of `left` is mapped in `right` to an equal value
///
/// Iteration order never matters.
///
/// # Examples
///
/// ```rust
/// use std::collections::{BTreeMap, HashMap};
/// use ordkit::structural::map_equals;
///
/// let hashed = HashMap::from([("A", 1), ("B", 2)]);
/// let sorted = BTreeMap::from([("B", 2), ("A", 1)]);
/// assert!(map_equals(Some(&hashed), Some(&sorted)));
/// assert!(!map_equals(Some(&hashed), None::<&HashMap<&str, i32>>));
/// ```
#[must_use]
pub fn map_equals<K, V, L, R>(left: Option<&L>, right: Option<&R>) -> bool
where
    V: PartialEq,
    L: KeyedCollection<K, V>,
    R: KeyedCollection<K, V>,
{
    keyed_equals(left, right, |left, right| left == right)
}

/// Returns `true` if two optional maps hold the same keys mapped to values
/// that are equal under `comparer`.
///
/// Same rules as [`map_equals`]. Keys are always matched with the map's own
/// key equality.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use ordkit::equality::key_equality;
/// use ordkit::structural::map_equals_with;
///
/// let by_len = key_equality(|text: &&str| text.len());
/// let left = HashMap::from([(1, "ab"), (2, "c")]);
/// let right = HashMap::from([(2, "z"), (1, "xy")]);
/// assert!(map_equals_with(Some(&left), Some(&right), &by_len));
/// ```
#[must_use]
pub fn map_equals_with<K, V, L, R, E>(left: Option<&L>, right: Option<&R>, comparer: &E) -> bool
where
    L: KeyedCollection<K, V>,
    R: KeyedCollection<K, V>,
    E: EqualityComparer<V> + ?Sized,
{
    keyed_equals(left, right, |left, right| comparer.equals(left, right))
}

/// Computes the order-independent hash of an optional map.
///
/// `None` hashes to `0`, an empty map to `23`. Otherwise the entry hashes
/// `hash(key) * 31 + hash(value)` are summed onto `23` with wrapping
/// arithmetic, so insertion and iteration order never affect the result.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use ordkit::structural::map_hash;
///
/// let mut first = HashMap::new();
/// first.insert("A", 1);
/// first.insert("B", 2);
/// let mut second = HashMap::new();
/// second.insert("B", 2);
/// second.insert("A", 1);
/// assert_eq!(map_hash(Some(&first)), map_hash(Some(&second)));
/// assert_eq!(map_hash(None::<&HashMap<&str, i32>>), 0);
/// ```
#[must_use]
pub fn map_hash<K, V, M>(map: Option<&M>) -> HashCode
where
    K: Hash,
    V: PartialEq + Hash,
    M: KeyedCollection<K, V>,
{
    map_hash_with(map, &NaturalEquality)
}

/// Computes the order-independent hash of an optional map, hashing values
/// with `comparer`.
#[must_use]
pub fn map_hash_with<K, V, M, E>(map: Option<&M>, comparer: &E) -> HashCode
where
    K: Hash,
    M: KeyedCollection<K, V>,
    E: EqualityComparer<V> + ?Sized,
{
    map.map_or(ABSENT_HASH, |map| sum_entry_hashes(map, comparer))
}

fn keyed_equals<K, V, L, R>(
    left: Option<&L>,
    right: Option<&R>,
    mut values_equal: impl FnMut(&V, &V) -> bool,
) -> bool
where
    L: KeyedCollection<K, V>,
    R: KeyedCollection<K, V>,
{
    match (left, right) {
        (None, None) => true,
        (Some(left), Some(right)) => {
            if std::ptr::addr_eq(left, right) {
                return true;
            }
            left.entry_count() == right.entry_count()
                && left.entries().all(|(key, value)| {
                    right
                        .lookup(key)
                        .is_some_and(|other| values_equal(value, other))
                })
        }
        _ => false,
    }
}

fn sum_entry_hashes<K, V, M, E>(map: &M, comparer: &E) -> HashCode
where
    K: Hash,
    M: KeyedCollection<K, V>,
    E: EqualityComparer<V> + ?Sized,
{
    map.entries().fold(EMPTY_SEED, |accumulator, (key, value)| {
        accumulator.wrapping_add(combine_entry(hash_one(key), comparer.hash_code(value)))
    })
}

/// A reusable unordered equality comparer for `HashMap` and `BTreeMap`.
///
/// Values are compared and hashed with the wrapped comparer `E`; keys use
/// the map's own key equality and their natural hash.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeMap;
/// use ordkit::equality::EqualityComparer;
/// use ordkit::structural::MapEquality;
///
/// let comparer = MapEquality::natural();
/// let left = BTreeMap::from([(1, 'a'), (2, 'b')]);
/// let right = BTreeMap::from([(2, 'b'), (1, 'a')]);
/// assert!(comparer.equals(&left, &right));
/// assert_eq!(comparer.hash_code(&BTreeMap::<i32, char>::new()), 23);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MapEquality<E> {
    value: E,
}

impl<E> MapEquality<E> {
    /// Creates a map comparer using `value` for the mapped values.
    #[must_use]
    pub const fn new(value: E) -> Self {
        Self { value }
    }

    /// Lifts this comparer to optional maps.
    #[must_use]
    pub const fn nullable(self) -> Nullable<Self> {
        Nullable::new(self)
    }
}

impl MapEquality<NaturalEquality> {
    /// A map comparer using the values' own equality.
    #[must_use]
    pub const fn natural() -> Self {
        Self::new(NaturalEquality)
    }
}

impl<K, V, S, E> EqualityComparer<HashMap<K, V, S>> for MapEquality<E>
where
    K: Eq + Hash,
    S: BuildHasher,
    E: EqualityComparer<V>,
{
    fn equals(&self, left: &HashMap<K, V, S>, right: &HashMap<K, V, S>) -> bool {
        map_equals_with(Some(left), Some(right), &self.value)
    }

    fn hash_code(&self, value: &HashMap<K, V, S>) -> HashCode {
        sum_entry_hashes(value, &self.value)
    }
}

impl<K, V, E> EqualityComparer<BTreeMap<K, V>> for MapEquality<E>
where
    K: Ord + Hash,
    E: EqualityComparer<V>,
{
    fn equals(&self, left: &BTreeMap<K, V>, right: &BTreeMap<K, V>) -> bool {
        map_equals_with(Some(left), Some(right), &self.value)
    }

    fn hash_code(&self, value: &BTreeMap<K, V>) -> HashCode {
        sum_entry_hashes(value, &self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn ordered_pairs() -> Vec<(String, i32)> {
        ["alpha", "beta", "gamma", "delta", "epsilon"]
            .into_iter()
            .enumerate()
            .map(|(index, name)| (name.to_string(), i32::try_from(index).unwrap_or(0)))
            .collect()
    }

    #[rstest]
    fn test_map_equals_ignores_insertion_order(ordered_pairs: Vec<(String, i32)>) {
        let forward: HashMap<String, i32> = ordered_pairs.iter().cloned().collect();
        let backward: HashMap<String, i32> = ordered_pairs.iter().rev().cloned().collect();
        assert!(map_equals(Some(&forward), Some(&backward)));
        assert_eq!(map_hash(Some(&forward)), map_hash(Some(&backward)));
    }

    #[rstest]
    fn test_map_equals_absent_cases() {
        let map = HashMap::from([(1, 1)]);
        assert!(map_equals::<i32, i32, HashMap<i32, i32>, HashMap<i32, i32>>(None, None));
        assert!(!map_equals(Some(&map), None::<&HashMap<i32, i32>>));
        assert!(!map_equals(None::<&HashMap<i32, i32>>, Some(&map)));
    }

    #[rstest]
    fn test_map_equals_same_instance() {
        let map = HashMap::from([("nan", f64::NAN)]);
        assert!(map_equals(Some(&map), Some(&map)));
    }

    #[rstest]
    #[case(vec![("A", 1), ("B", 2)], vec![("A", 1), ("B", 3)], false)]
    #[case(vec![("A", 1), ("B", 2)], vec![("A", 1), ("C", 2)], false)]
    #[case(vec![("A", 1)], vec![("A", 1), ("B", 2)], false)]
    #[case(vec![], vec![], true)]
    #[case(vec![("B", 2), ("A", 1)], vec![("A", 1), ("B", 2)], true)]
    fn test_map_equals_cases(
        #[case] left: Vec<(&str, i32)>,
        #[case] right: Vec<(&str, i32)>,
        #[case] expected: bool,
    ) {
        let left: HashMap<&str, i32> = left.into_iter().collect();
        let right: HashMap<&str, i32> = right.into_iter().collect();
        assert_eq!(map_equals(Some(&left), Some(&right)), expected);
        assert_eq!(map_equals(Some(&right), Some(&left)), expected);
    }

    #[rstest]
    fn test_map_hash_absent_and_empty() {
        assert_eq!(map_hash(None::<&BTreeMap<i32, i32>>), ABSENT_HASH);
        assert_eq!(map_hash(Some(&BTreeMap::<i32, i32>::new())), EMPTY_SEED);
    }

    #[rstest]
    fn test_map_hash_same_across_map_kinds(ordered_pairs: Vec<(String, i32)>) {
        let hashed: HashMap<String, i32> = ordered_pairs.iter().cloned().collect();
        let sorted: BTreeMap<String, i32> = ordered_pairs.into_iter().collect();
        assert_eq!(map_hash(Some(&hashed)), map_hash(Some(&sorted)));
        assert!(map_equals(Some(&hashed), Some(&sorted)));
    }

    #[rstest]
    fn test_map_hash_single_entry() {
        let map = BTreeMap::from([(3, 4)]);
        let expected = EMPTY_SEED.wrapping_add(combine_entry(hash_one(&3), hash_one(&4)));
        assert_eq!(map_hash(Some(&map)), expected);
    }

    #[rstest]
    fn test_map_equals_with_nullable_values() {
        let left = HashMap::from([("a", None), ("b", Some(2))]);
        let right = HashMap::from([("b", Some(2)), ("a", None)]);
        let comparer = Nullable::natural();
        assert!(map_equals_with(Some(&left), Some(&right), &comparer));
        assert_eq!(
            map_hash_with(Some(&left), &comparer),
            map_hash_with(Some(&right), &comparer)
        );
    }

    #[rstest]
    fn test_map_equality_comparer() {
        let comparer = MapEquality::natural();
        let left = HashMap::from([(1, "one"), (2, "two")]);
        let right = HashMap::from([(2, "two"), (1, "one")]);
        assert!(comparer.equals(&left, &right));
        assert_eq!(comparer.hash_code(&left), comparer.hash_code(&right));
        assert_eq!(comparer.hash_code(&left), map_hash(Some(&left)));
    }

    #[rstest]
    fn test_map_equality_nullable() {
        let comparer = MapEquality::natural().nullable();
        let absent: Option<BTreeMap<i32, i32>> = None;
        let empty = Some(BTreeMap::new());
        assert!(!comparer.equals(&absent, &empty));
        assert_eq!(comparer.hash_code(&absent), 0);
        assert_eq!(comparer.hash_code(&empty), 23);
    }

    fn sorted_entries<K, V, M>(map: &M) -> Vec<(K, V)>
    where
        K: Ord + Clone,
        V: Ord + Clone,
        M: KeyedCollection<K, V>,
    {
        let mut entries: Vec<(K, V)> = map
            .entries()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        entries.sort_unstable();
        entries
    }

    #[rstest]
    fn test_keyed_collection_views_agree(ordered_pairs: Vec<(String, i32)>) {
        let hashed: HashMap<String, i32> = ordered_pairs.iter().cloned().collect();
        let sorted: BTreeMap<String, i32> = ordered_pairs.iter().cloned().collect();

        assert_eq!(sorted_entries(&hashed), sorted_entries(&sorted));
        assert_eq!(hashed.entry_count(), 5);
        assert_eq!(KeyedCollection::entry_count(&sorted), 5);
        assert_eq!(KeyedCollection::lookup(&hashed, &"gamma".to_string()), Some(&2));
        assert_eq!(KeyedCollection::lookup(&sorted, &"omega".to_string()), None);
    }

    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    struct Quota {
        limit: u32,
        burst: Option<u32>,
    }

    #[rstest]
    fn test_map_hash_of_struct_values_uses_natural_equality() {
        let quotas = BTreeMap::from([
            ("read", Quota { limit: 100, burst: None }),
            ("write", Quota { limit: 10, burst: Some(20) }),
        ]);
        let reordered: HashMap<&str, Quota> = quotas
            .iter()
            .rev()
            .map(|(name, quota)| (*name, quota.clone()))
            .collect();

        assert_eq!(
            map_hash(Some(&quotas)),
            map_hash_with(Some(&quotas), &NaturalEquality)
        );
        assert_eq!(map_hash(Some(&quotas)), map_hash(Some(&reordered)));
    }
}
