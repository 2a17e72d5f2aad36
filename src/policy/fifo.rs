//! # FIFO (First-In-First-Out) Cache
//!
//! Evicts the entry that has been resident the longest, determined purely by
//! insertion order. Reads never reorder, and updating an existing key's value
//! does not reset its age; the entry keeps its place in line.
//!
//! ## Structure
//!
//! ```text
//!   queue (EntryList<(K, V)>):   front = oldest, back = newest
//!
//!     [k1] ─► [k2] ─► [k3] ─► [k4]
//!      ▲                        ▲
//!    evict                   insert
//!
//!   index (HashMap<K, EntryId>):  key → position handle into the queue
//! ```
//!
//! All operations are O(1): `get` is an index lookup, `put` of a new key
//! pops the front when full and pushes to the back.

use std::collections::HashMap;
use std::fmt;
use std::hash::{BuildHasher, Hash};

use rustc_hash::FxBuildHasher;

use crate::ds::{EntryId, EntryList};
use crate::error::KeyNotFound;
use crate::traits::Cache;

/// First-In-First-Out cache.
///
/// See the module docs for the eviction rule. The hasher for the key index
/// is pluggable via `S` and defaults to the crate-wide `FxBuildHasher`.
///
/// # Example
///
/// ```
/// use capcache::policy::fifo::FifoCache;
/// use capcache::traits::Cache;
///
/// let mut cache = FifoCache::new(2);
/// cache.put(1, "one");
/// cache.put(2, "two");
/// cache.get(&1).unwrap(); // reads do not protect an entry
/// cache.put(3, "three"); // evicts key 1, the oldest
///
/// assert!(!cache.contains(&1));
/// assert!(cache.contains(&2));
/// ```
pub struct FifoCache<K, V, S = FxBuildHasher>
where
    K: Eq + Hash + Clone,
{
    queue: EntryList<(K, V)>,
    index: HashMap<K, EntryId, S>,
    capacity: usize,
}

// Written by hand so that `S` needs no `Debug` bound.
impl<K, V, S> fmt::Debug for FifoCache<K, V, S>
where
    K: Eq + Hash + Clone + fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FifoCache")
            .field("queue", &self.queue)
            .field("index", &self.index)
            .field("capacity", &self.capacity)
            .finish()
    }
}

impl<K, V> FifoCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates a FIFO cache bounded to `capacity` entries.
    ///
    /// Capacity 0 is valid and means nothing is ever retained.
    pub fn new(capacity: usize) -> Self {
        Self::with_hasher(capacity, FxBuildHasher)
    }
}

impl<K, V, S> FifoCache<K, V, S>
where
    K: Eq + Hash + Clone,
    S: BuildHasher,
{
    /// Creates a FIFO cache using a caller-supplied hasher for the key index.
    pub fn with_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            queue: EntryList::with_capacity(capacity),
            index: HashMap::with_capacity_and_hasher(capacity, hasher),
            capacity,
        }
    }

    /// Peeks at the oldest entry (the next eviction victim) without removing
    /// or touching it.
    pub fn peek_oldest(&self) -> Option<(&K, &V)> {
        self.queue.front().map(|(key, value)| (key, value))
    }

    fn evict_oldest(&mut self) -> Option<(K, V)> {
        let (key, value) = self.queue.pop_front()?;
        self.index.remove(&key);
        Some((key, value))
    }
}

impl<K, V, S> Cache<K, V> for FifoCache<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Clone,
    S: BuildHasher,
{
    fn get(&mut self, key: &K) -> Result<V, KeyNotFound> {
        let id = *self.index.get(key).ok_or(KeyNotFound)?;
        let (_, value) = self.queue.get(id).expect("fifo entry missing");
        Ok(value.clone())
    }

    fn put(&mut self, key: K, value: V) {
        if self.capacity == 0 {
            return;
        }
        if let Some(&id) = self.index.get(&key) {
            // Value refresh only; a FIFO update never resets the entry's age.
            if let Some(entry) = self.queue.get_mut(id) {
                entry.1 = value;
            }
            return;
        }
        // One eviction at steady state; repeats only after a capacity shrink.
        while self.index.len() >= self.capacity {
            if self.evict_oldest().is_none() {
                break;
            }
        }
        let id = self.queue.push_back((key.clone(), value));
        self.index.insert(key, id);
    }

    fn clear(&mut self) {
        self.queue.clear();
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
        let mut cache = FifoCache::new(3);
        cache.put(1, 10);
        cache.put(2, 20);

        assert_eq!(cache.get(&1), Ok(10));
        assert_eq!(cache.get(&2), Ok(20));
        assert_eq!(cache.get(&3), Err(KeyNotFound));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn evicts_in_insertion_order() {
        let mut cache = FifoCache::new(3);
        cache.put(1, 1);
        cache.put(2, 2);
        cache.put(3, 3);
        cache.put(4, 4); // evicts 1
        cache.put(5, 5); // evicts 2

        assert_eq!(cache.get(&1), Err(KeyNotFound));
        assert_eq!(cache.get(&2), Err(KeyNotFound));
        assert_eq!(cache.get(&3), Ok(3));
        assert_eq!(cache.get(&4), Ok(4));
        assert_eq!(cache.get(&5), Ok(5));
        assert_eq!(cache.len(), 3);
    }

    #[test]
    fn reads_never_reorder() {
        let mut cache = FifoCache::new(2);
        cache.put(1, 1);
        cache.put(2, 2);

        // Heavy reads on key 1 do not save it from eviction.
        for _ in 0..10 {
            cache.get(&1).unwrap();
        }
        cache.put(3, 3);

        assert_eq!(cache.get(&1), Err(KeyNotFound));
        assert_eq!(cache.get(&2), Ok(2));
    }

    #[test]
    fn update_keeps_age() {
        let mut cache = FifoCache::new(3);
        cache.put(1, 1);
        cache.put(2, 2);
        cache.put(1, 15); // rewrite, key 1 is still the oldest
        assert_eq!(cache.get(&1), Ok(15));
        assert_eq!(cache.len(), 2);

        cache.put(3, 3);
        cache.put(4, 4); // evicts key 1 despite its recent rewrite
        assert_eq!(cache.get(&1), Err(KeyNotFound));
        assert_eq!(cache.get(&2), Ok(2));
    }

    #[test]
    fn string_keys_round_trip() {
        let mut cache = FifoCache::new(3);
        cache.put("first_item".to_string(), 1);
        cache.put("second_item".to_string(), 2);
        cache.put("first_item".to_string(), 15);
        assert_eq!(cache.get(&"first_item".to_string()), Ok(15));

        cache.put("third_item".to_string(), 3);
        cache.put("fourth_item".to_string(), 4); // evicts "first_item"
        assert_eq!(cache.get(&"second_item".to_string()), Ok(2));

        cache.put("fifth_item".to_string(), 5); // evicts "second_item"
        assert_eq!(cache.get(&"second_item".to_string()), Err(KeyNotFound));
        cache.put("fifth_item".to_string(), 0);
        assert_eq!(cache.get(&"fifth_item".to_string()), Ok(0));
    }

    #[test]
    fn zero_capacity_rejects_all() {
        let mut cache = FifoCache::new(0);
        cache.put(1, 1);
        assert_eq!(cache.len(), 0);
        assert_eq!(cache.get(&1), Err(KeyNotFound));
        assert_eq!(cache.capacity(), 0);
    }

    #[test]
    fn peek_oldest_is_next_victim() {
        let mut cache = FifoCache::new(2);
        assert_eq!(cache.peek_oldest(), None);
        cache.put(1, 1);
        cache.put(2, 2);
        assert_eq!(cache.peek_oldest(), Some((&1, &1)));

        cache.put(3, 3);
        assert_eq!(cache.peek_oldest(), Some((&2, &2)));
    }

    #[test]
    fn clear_then_reuse() {
        let mut cache = FifoCache::new(2);
        cache.put(1, 1);
        cache.put(2, 2);
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.get(&1), Err(KeyNotFound));
        assert_eq!(cache.capacity(), 2);

        cache.put(5, 5);
        assert_eq!(cache.get(&5), Ok(5));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn shrink_capacity_enforced_lazily() {
        let mut cache = FifoCache::new(3);
        cache.put(1, 1);
        cache.put(2, 2);
        cache.put(3, 3);

        cache.set_capacity(2);
        assert_eq!(cache.len(), 3); // not evicted yet

        cache.put(4, 4); // evicts 1 and 2 to fit the new bound
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(&1), Err(KeyNotFound));
        assert_eq!(cache.get(&2), Err(KeyNotFound));
        assert_eq!(cache.get(&3), Ok(3));
        assert_eq!(cache.get(&4), Ok(4));
    }

    #[test]
    fn grow_capacity_takes_effect() {
        let mut cache = FifoCache::new(1);
        cache.put(1, 1);
        cache.set_capacity(2);
        cache.put(2, 2);
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(&1), Ok(1));
    }

    #[test]
    fn custom_hasher_construction() {
        use std::collections::hash_map::RandomState;

        let mut cache: FifoCache<u64, u64, RandomState> =
            FifoCache::with_hasher(2, RandomState::new());
        cache.put(1, 1);
        cache.put(2, 2);
        cache.put(3, 3);
        assert_eq!(cache.get(&1), Err(KeyNotFound));
        assert_eq!(cache.get(&3), Ok(3));
    }
}
