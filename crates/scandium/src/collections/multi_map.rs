use core::hash::Hash;

use ahash::RandomState;
use hashbrown::HashMap;
use smallvec::SmallVec;

/// A map from keys to an insertion-ordered list of values.
///
/// Inserting twice under the same key keeps both values, in the order they
/// were added; duplicate values are permitted. Most keys hold exactly one
/// value, so the per-key storage keeps a single value inline.
#[derive(Debug, Clone)]
pub struct MultiMap<K, V> {
    data: HashMap<K, SmallVec<[V; 1]>, RandomState>,
}

impl<K: Eq + Hash, V> MultiMap<K, V> {
    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self {
            data: HashMap::with_hasher(RandomState::new()),
        }
    }

    /// Create an empty map with room for `capacity` keys.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: HashMap::with_capacity_and_hasher(capacity, RandomState::new()),
        }
    }

    /// Append `value` to the list stored under `key`.
    pub fn put(&mut self, key: K, value: V) {
        self.data.entry(key).or_default().push(value);
    }

    /// The values stored under `key`, in insertion order, or `None` when
    /// the key is absent.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&[V]> {
        self.data.get(key).map(SmallVec::as_slice)
    }

    /// Iterate over the distinct keys. Order is undefined.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.data.keys()
    }

    /// The number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the map holds no keys at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<K: Eq + Hash, V> Default for MultiMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
