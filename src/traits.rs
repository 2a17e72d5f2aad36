//! # The shared cache contract
//!
//! This module defines [`Cache`], the single interface implemented by every
//! eviction policy in the library. Callers program against the capability set
//! {get, put, clear, capacity query/update}; the policies differ only in
//! which entry they remove when a new key arrives at full capacity.
//!
//! ## Architecture
//!
//! ```text
//!                   ┌──────────────────────────────────────┐
//!                   │             Cache<K, V>              │
//!                   │                                      │
//!                   │  get(&mut, &K) → Result<V, KeyNotFound>
//!                   │  put(&mut, K, V)                     │
//!                   │  clear(&mut)                         │
//!                   │  capacity(&) / set_capacity(&mut)    │
//!                   │  len(&) / is_empty(&) / contains(&)  │
//!                   └──────────────────┬───────────────────┘
//!                                      │
//!              ┌───────────────────────┼───────────────────────┐
//!              ▼                       ▼                       ▼
//!   ┌──────────────────┐   ┌──────────────────┐   ┌──────────────────┐
//!   │  FifoCache<K,V>  │   │  LruCache<K,V>   │   │  LfuCache<K,V>   │
//!   │                  │   │                  │   │                  │
//!   │ evicts oldest-   │   │ evicts least     │   │ evicts lowest    │
//!   │ inserted; reads  │   │ recently touched │   │ frequency, LRU   │
//!   │ never reorder    │   │                  │   │ within a tie     │
//!   └──────────────────┘   └──────────────────┘   └──────────────────┘
//! ```
//!
//! ## Contract summary
//!
//! | Operation        | Effect on policy state                                |
//! |------------------|-------------------------------------------------------|
//! | `get` (hit)      | FIFO: none. LRU: entry becomes MRU. LFU: freq + 1     |
//! | `get` (miss)     | None; returns `Err(KeyNotFound)`                      |
//! | `put` (update)   | FIFO: value only. LRU: MRU. LFU: freq + 1             |
//! | `put` (new)      | May evict per policy first; then insert               |
//! | `put` (cap = 0)  | No-op, not an error                                   |
//! | `clear`          | Empties entries, resets aggregates, keeps capacity    |
//! | `set_capacity`   | Immediate; shrink below `len` enforced on next put    |
//!
//! Values cross the boundary by clone: a hit hands back an independent `V`,
//! never a reference into internal storage, because later operations may
//! relocate the entry. Keys and values are the only things callers may
//! retain.

use crate::error::KeyNotFound;

/// Uniform interface over the FIFO, LRU, and LFU caches.
///
/// # Type Parameters
///
/// - `K`: key type (implementations require `Eq + Hash + Clone`)
/// - `V`: value type (implementations require `Clone` for get-by-value)
///
/// # Example
///
/// ```
/// use capcache::policy::fifo::FifoCache;
/// use capcache::traits::Cache;
///
/// fn warm<C: Cache<u64, String>>(cache: &mut C, data: &[(u64, String)]) {
///     for (key, value) in data {
///         cache.put(*key, value.clone());
///     }
/// }
///
/// let mut cache = FifoCache::new(100);
/// warm(&mut cache, &[(1, "one".to_string()), (2, "two".to_string())]);
/// assert_eq!(cache.len(), 2);
/// ```
pub trait Cache<K, V> {
    /// Looks up `key` and returns a clone of its value.
    ///
    /// A hit updates policy state where the policy calls for it (LRU moves
    /// the entry to the most-recently-used end, LFU increments its
    /// frequency); FIFO lookups never reorder. A miss has no observable
    /// effect.
    ///
    /// # Errors
    ///
    /// Returns [`KeyNotFound`] if the key is absent, whether never inserted,
    /// evicted, or cleared.
    ///
    /// # Example
    ///
    /// ```
    /// use capcache::policy::lru::LruCache;
    /// use capcache::traits::Cache;
    ///
    /// let mut cache = LruCache::new(10);
    /// cache.put(1, "value");
    ///
    /// assert_eq!(cache.get(&1), Ok("value"));
    /// assert!(cache.get(&99).is_err());
    /// ```
    fn get(&mut self, key: &K) -> Result<V, KeyNotFound>;

    /// Inserts or updates `key` with `value`. Never fails.
    ///
    /// With capacity 0 this is a no-op. An existing key has its value
    /// overwritten in place plus the policy-specific reorder. A new key at
    /// full capacity evicts exactly one entry per the policy first; if the
    /// capacity was shrunk below the current size, eviction repeats until
    /// the new entry fits the bound.
    ///
    /// # Example
    ///
    /// ```
    /// use capcache::policy::lru::LruCache;
    /// use capcache::traits::Cache;
    ///
    /// let mut cache = LruCache::new(2);
    /// cache.put(1, "one");
    /// cache.put(1, "uno"); // update in place
    /// assert_eq!(cache.get(&1), Ok("uno"));
    /// assert_eq!(cache.len(), 1);
    /// ```
    fn put(&mut self, key: K, value: V);

    /// Removes all entries and resets policy aggregates.
    ///
    /// The capacity bound is unchanged; a cleared cache behaves like a
    /// freshly constructed one of the same capacity.
    ///
    /// # Example
    ///
    /// ```
    /// use capcache::policy::fifo::FifoCache;
    /// use capcache::traits::Cache;
    ///
    /// let mut cache = FifoCache::new(10);
    /// cache.put(1, "one");
    /// cache.clear();
    /// assert!(cache.is_empty());
    /// assert_eq!(cache.capacity(), 10);
    /// ```
    fn clear(&mut self);

    /// Returns the current capacity bound (maximum distinct keys held).
    fn capacity(&self) -> usize;

    /// Replaces the capacity bound immediately.
    ///
    /// Shrinking below the current size is accepted silently and does not
    /// evict; the over-capacity condition resolves lazily on the next `put`
    /// that adds a new key.
    ///
    /// # Example
    ///
    /// ```
    /// use capcache::policy::fifo::FifoCache;
    /// use capcache::traits::Cache;
    ///
    /// let mut cache = FifoCache::new(3);
    /// cache.put(1, 1);
    /// cache.put(2, 2);
    /// cache.put(3, 3);
    ///
    /// cache.set_capacity(1);
    /// assert_eq!(cache.len(), 3); // no proactive eviction
    ///
    /// cache.put(4, 4); // lazy enforcement kicks in
    /// assert_eq!(cache.len(), 1);
    /// ```
    fn set_capacity(&mut self, capacity: usize);

    /// Returns the current number of entries.
    fn len(&self) -> usize;

    /// Returns `true` if the cache holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Checks whether `key` is present without touching policy state.
    ///
    /// Unlike [`get`](Self::get), this never affects eviction order or
    /// frequency, for any policy.
    fn contains(&self, key: &K) -> bool;
}
