//! Runtime-selectable cache construction.
//!
//! [`CacheBuilder`] picks an eviction policy at runtime and hands back a
//! [`PolicyCache`], an enum wrapper that dispatches the [`Cache`] trait to
//! the chosen implementation. Use the concrete types in [`crate::policy`]
//! directly when the policy is known at compile time.
//!
//! # Example
//!
//! ```
//! use capcache::builder::{CacheBuilder, CachePolicy};
//! use capcache::traits::Cache;
//!
//! let mut cache = CacheBuilder::new(100).build::<u64, String>(CachePolicy::Lru);
//! cache.put(1, "one".to_string());
//! assert_eq!(cache.get(&1).unwrap(), "one");
//! ```

use std::hash::Hash;

use crate::error::KeyNotFound;
use crate::policy::{FifoCache, LfuCache, LruCache};
use crate::traits::Cache;

/// Which entry a full cache sacrifices to admit a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CachePolicy {
    /// Evict in insertion order; accesses never reorder.
    Fifo,
    /// Evict the entry accessed longest ago.
    Lru,
    /// Evict the entry accessed fewest times, oldest first on ties.
    Lfu,
}

/// A cache whose eviction policy was chosen at runtime.
#[derive(Debug)]
pub enum PolicyCache<K, V>
where
    K: Eq + Hash + Clone,
{
    Fifo(FifoCache<K, V>),
    Lru(LruCache<K, V>),
    Lfu(LfuCache<K, V>),
}

impl<K, V> PolicyCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Reports which policy this cache was built with.
    pub fn policy(&self) -> CachePolicy {
        match self {
            PolicyCache::Fifo(_) => CachePolicy::Fifo,
            PolicyCache::Lru(_) => CachePolicy::Lru,
            PolicyCache::Lfu(_) => CachePolicy::Lfu,
        }
    }
}

impl<K, V> Cache<K, V> for PolicyCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    fn get(&mut self, key: &K) -> Result<V, KeyNotFound> {
        match self {
            PolicyCache::Fifo(cache) => cache.get(key),
            PolicyCache::Lru(cache) => cache.get(key),
            PolicyCache::Lfu(cache) => cache.get(key),
        }
    }

    fn put(&mut self, key: K, value: V) {
        match self {
            PolicyCache::Fifo(cache) => cache.put(key, value),
            PolicyCache::Lru(cache) => cache.put(key, value),
            PolicyCache::Lfu(cache) => cache.put(key, value),
        }
    }

    fn clear(&mut self) {
        match self {
            PolicyCache::Fifo(cache) => cache.clear(),
            PolicyCache::Lru(cache) => cache.clear(),
            PolicyCache::Lfu(cache) => cache.clear(),
        }
    }

    fn capacity(&self) -> usize {
        match self {
            PolicyCache::Fifo(cache) => cache.capacity(),
            PolicyCache::Lru(cache) => cache.capacity(),
            PolicyCache::Lfu(cache) => cache.capacity(),
        }
    }

    fn set_capacity(&mut self, capacity: usize) {
        match self {
            PolicyCache::Fifo(cache) => cache.set_capacity(capacity),
            PolicyCache::Lru(cache) => cache.set_capacity(capacity),
            PolicyCache::Lfu(cache) => cache.set_capacity(capacity),
        }
    }

    fn len(&self) -> usize {
        match self {
            PolicyCache::Fifo(cache) => cache.len(),
            PolicyCache::Lru(cache) => cache.len(),
            PolicyCache::Lfu(cache) => cache.len(),
        }
    }

    fn contains(&self, key: &K) -> bool {
        match self {
            PolicyCache::Fifo(cache) => cache.contains(key),
            PolicyCache::Lru(cache) => cache.contains(key),
            PolicyCache::Lfu(cache) => cache.contains(key),
        }
    }
}

/// Builder for [`PolicyCache`].
#[derive(Debug, Clone, Copy)]
pub struct CacheBuilder {
    capacity: usize,
}

impl CacheBuilder {
    /// Starts a builder for a cache bounded to `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Builds a cache with the given eviction policy.
    pub fn build<K, V>(self, policy: CachePolicy) -> PolicyCache<K, V>
    where
        K: Eq + Hash + Clone,
    {
        match policy {
            CachePolicy::Fifo => PolicyCache::Fifo(FifoCache::new(self.capacity)),
            CachePolicy::Lru => PolicyCache::Lru(LruCache::new(self.capacity)),
            CachePolicy::Lfu => PolicyCache::Lfu(LfuCache::new(self.capacity)),
        }
    }
}
