//! # LRU (Least Recently Used) Cache
//!
//! Evicts the entry whose most recent touch (`get` or `put`) is furthest in
//! the past. Both reads and writes count as touches and relocate the entry to
//! the most-recently-used end, so the recency list is a strict total order by
//! touch time with no ties.
//!
//! ## Structure
//!
//! ```text
//!   recency (EntryList<(K, V)>):   front = MRU, back = LRU
//!
//!     MRU ─► [k4] ◄──► [k2] ◄──► [k1] ◄──► [k3] ◄─ LRU (eviction victim)
//!
//!   index (HashMap<K, EntryId>):   key → position handle into the list
//! ```
//!
//! ## Touch Flow
//!
//! ```text
//!   get(&key) hit / put(key) update
//!        │
//!        ▼
//!   ┌───────────────────────────────────────────────┐
//!   │ 1. index lookup → EntryId            O(1)     │
//!   │ 2. move_to_front(EntryId)            O(1)     │
//!   │ 3. clone value (get) / rewrite (put) O(1)     │
//!   └───────────────────────────────────────────────┘
//! ```
//!
//! Eviction pops the back of the list and removes the key from the index,
//! both O(1). The arena-backed list keeps every `EntryId` in the index valid
//! across moves, so the index never needs a rebuild.

use std::collections::HashMap;
use std::fmt;
use std::hash::{BuildHasher, Hash};

use rustc_hash::FxBuildHasher;

use crate::ds::{EntryId, EntryList};
use crate::error::KeyNotFound;
use crate::traits::Cache;

/// Least-Recently-Used cache.
///
/// Every successful `get` and every `put` marks the entry most recently
/// used. The hasher for the key index is pluggable via `S`.
///
/// # Example
///
/// ```
/// use capcache::policy::lru::LruCache;
/// use capcache::traits::Cache;
///
/// let mut cache = LruCache::new(2);
/// cache.put(1, "one");
/// cache.put(2, "two");
/// cache.get(&1).unwrap(); // key 1 becomes MRU
/// cache.put(3, "three"); // evicts key 2, the least recently touched
///
/// assert!(cache.contains(&1));
/// assert!(!cache.contains(&2));
/// ```
pub struct LruCache<K, V, S = FxBuildHasher>
where
    K: Eq + Hash + Clone,
{
    recency: EntryList<(K, V)>,
    index: HashMap<K, EntryId, S>,
    capacity: usize,
}

// Written by hand so that `S` needs no `Debug` bound.
impl<K, V, S> fmt::Debug for LruCache<K, V, S>
where
    K: Eq + Hash + Clone + fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCache")
            .field("recency", &self.recency)
            .field("index", &self.index)
            .field("capacity", &self.capacity)
            .finish()
    }
}

impl<K, V> LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates an LRU cache bounded to `capacity` entries.
    ///
    /// Capacity 0 is valid and means nothing is ever retained.
    pub fn new(capacity: usize) -> Self {
        Self::with_hasher(capacity, FxBuildHasher)
    }
}

impl<K, V, S> LruCache<K, V, S>
where
    K: Eq + Hash + Clone,
    S: BuildHasher,
{
    /// Creates an LRU cache using a caller-supplied hasher for the key index.
    pub fn with_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            recency: EntryList::with_capacity(capacity),
            index: HashMap::with_capacity_and_hasher(capacity, hasher),
            capacity,
        }
    }

    /// Peeks at the least recently used entry (the next eviction victim)
    /// without touching it.
    pub fn peek_lru(&self) -> Option<(&K, &V)> {
        self.recency.back().map(|(key, value)| (key, value))
    }

    /// Marks `key` most recently used without cloning its value.
    ///
    /// Returns `true` if the key was found and touched.
    pub fn touch(&mut self, key: &K) -> bool {
        match self.index.get(key) {
            Some(&id) => self.recency.move_to_front(id),
            None => false,
        }
    }

    fn evict_lru(&mut self) -> Option<(K, V)> {
        let (key, value) = self.recency.pop_back()?;
        self.index.remove(&key);
        Some((key, value))
    }
}

impl<K, V, S> Cache<K, V> for LruCache<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Clone,
    S: BuildHasher,
{
    fn get(&mut self, key: &K) -> Result<V, KeyNotFound> {
        let id = *self.index.get(key).ok_or(KeyNotFound)?;
        self.recency.move_to_front(id);
        let (_, value) = self.recency.get(id).expect("lru entry missing");
        Ok(value.clone())
    }

    fn put(&mut self, key: K, value: V) {
        if self.capacity == 0 {
            return;
        }
        if let Some(&id) = self.index.get(&key) {
            if let Some(entry) = self.recency.get_mut(id) {
                entry.1 = value;
            }
            self.recency.move_to_front(id);
            return;
        }
        // One eviction at steady state; repeats only after a capacity shrink.
        while self.index.len() >= self.capacity {
            if self.evict_lru().is_none() {
                break;
            }
        }
        let id = self.recency.push_front((key.clone(), value));
        self.index.insert(key, id);
    }

    fn clear(&mut self) {
        self.recency.clear();
        self.index.clear();
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
    }

    fn len(&self) -> usize {
        self.index.len()
    }

    fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_lookup() {
        let mut cache = LruCache::new(3);
        cache.put(1, 10);
        cache.put(2, 20);

        assert_eq!(cache.get(&1), Ok(10));
        assert_eq!(cache.get(&2), Ok(20));
        assert_eq!(cache.get(&9), Err(KeyNotFound));
    }

    #[test]
    fn get_protects_from_eviction() {
        let mut cache = LruCache::new(2);
        cache.put(1, 1);
        cache.put(2, 2);
        assert_eq!(cache.get(&1), Ok(1)); // key 1 becomes MRU

        cache.put(3, 3); // evicts key 2
        assert_eq!(cache.get(&2), Err(KeyNotFound));

        cache.put(4, 4); // evicts key 1; key 3 was inserted more recently
        assert_eq!(cache.get(&1), Err(KeyNotFound));
        assert_eq!(cache.get(&3), Ok(3));
        assert_eq!(cache.get(&4), Ok(4));
    }

    #[test]
    fn put_update_refreshes_recency() {
        let mut cache = LruCache::new(2);
        cache.put(1, 1);
        cache.put(2, 2);
        cache.put(1, 11); // update makes key 1 MRU

        cache.put(3, 3); // evicts key 2
        assert_eq!(cache.get(&2), Err(KeyNotFound));
        assert_eq!(cache.get(&1), Ok(11));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn touch_refreshes_without_cloning() {
        let mut cache = LruCache::new(2);
        cache.put(1, 1);
        cache.put(2, 2);

        assert!(cache.touch(&1));
        assert!(!cache.touch(&99));

        cache.put(3, 3); // evicts key 2, not the touched key 1
        assert!(cache.contains(&1));
        assert!(!cache.contains(&2));
    }

    #[test]
    fn peek_lru_matches_eviction_order() {
        let mut cache = LruCache::new(3);
        cache.put(1, 1);
        cache.put(2, 2);
        cache.put(3, 3);
        assert_eq!(cache.peek_lru(), Some((&1, &1)));

        cache.get(&1).unwrap();
        assert_eq!(cache.peek_lru(), Some((&2, &2)));

        cache.put(4, 4);
        assert!(!cache.contains(&2));
    }

    #[test]
    fn contains_does_not_touch() {
        let mut cache = LruCache::new(2);
        cache.put(1, 1);
        cache.put(2, 2);

        assert!(cache.contains(&1)); // must not refresh key 1
        cache.put(3, 3); // still evicts key 1

        assert!(!cache.contains(&1));
        assert!(cache.contains(&2));
    }

    #[test]
    fn zero_capacity_rejects_all() {
        let mut cache = LruCache::new(0);
        cache.put(1, 1);
        assert_eq!(cache.len(), 0);
        assert_eq!(cache.get(&1), Err(KeyNotFound));
    }

    #[test]
    fn clear_then_reuse() {
        let mut cache = LruCache::new(2);
        cache.put(1, 1);
        cache.put(2, 2);
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.get(&1), Err(KeyNotFound));

        cache.put(1, 10);
        cache.put(2, 20);
        cache.get(&1).unwrap();
        cache.put(3, 30); // evicts 2, same as a fresh cache would
        assert!(!cache.contains(&2));
    }

    #[test]
    fn shrink_capacity_enforced_lazily() {
        let mut cache = LruCache::new(3);
        cache.put(1, 1);
        cache.put(2, 2);
        cache.put(3, 3);
        cache.get(&1).unwrap(); // recency: 1, 3, 2

        cache.set_capacity(2);
        assert_eq!(cache.len(), 3);

        cache.put(4, 4); // evicts 2 then 3; keeps 1 and inserts 4
        assert_eq!(cache.len(), 2);
        assert!(cache.contains(&1));
        assert!(cache.contains(&4));
        assert!(!cache.contains(&2));
        assert!(!cache.contains(&3));
    }

    #[test]
    fn values_are_independent_clones() {
        let mut cache = LruCache::new(2);
        cache.put(1, vec![1, 2, 3]);

        let mut out = cache.get(&1).unwrap();
        out.push(4); // caller's copy, not live storage

        assert_eq!(cache.get(&1), Ok(vec![1, 2, 3]));
    }
}
