//! # LFU (Least Frequently Used) Cache
//!
//! Evicts the entry with the smallest access count; among entries tied at
//! that count, the one touched least recently goes first. Entries are
//! partitioned into frequency buckets, each an internally-linked sub-list
//! ordered most-recently-touched first, and a scalar `min_freq` identifies
//! the bucket holding the next victim in O(1).
//!
//! ## Structure
//!
//! ```text
//!   entries (Arena<LfuEntry>):  key, value, freq, prev/next links
//!   index   (HashMap<K, EntryId>)
//!   buckets (FxHashMap<u64, BucketList>):
//!
//!     freq=1: [k7] ◄──► [k2]      ◄─ min_freq bucket; back = victim
//!     freq=3: [k1]
//!     freq=8: [k4] ◄──► [k9]
//!
//!   min_freq = 1
//! ```
//!
//! ## Touch Flow (get hit, or put on an existing key)
//!
//! ```text
//!   1. index lookup → EntryId, read freq f                        O(1)
//!   2. unlink from bucket f; if emptied, drop the bucket and,     O(1)
//!      when f was minimal, min_freq becomes f + 1 (the entry was
//!      the last occupant, and frequencies grow by exactly 1)
//!   3. relink at the front of bucket f + 1 with freq = f + 1      O(1)
//! ```
//!
//! ## Eviction Flow (new key at full capacity)
//!
//! ```text
//!   1. pop the back of the min_freq bucket; if emptied, drop it
//!      and advance min_freq to the next occupied bucket
//!   2. remove the victim from arena and index                     O(1)
//!   3. insert the new entry with freq = 1, min_freq = 1           O(1)
//!      (1 is the floor: a fresh entry is always the new minimum)
//! ```
//!
//! Frequency starts at 1 on first insertion and saturates at `u64::MAX`,
//! where further touches only refresh recency within the bucket.

use std::collections::HashMap;
use std::fmt;
use std::hash::{BuildHasher, Hash};

use rustc_hash::{FxBuildHasher, FxHashMap};

use crate::ds::{Arena, EntryId};
use crate::error::KeyNotFound;
use crate::traits::Cache;

#[derive(Debug)]
struct LfuEntry<K, V> {
    key: K,
    value: V,
    freq: u64,
    prev: Option<EntryId>,
    next: Option<EntryId>,
}

/// One frequency bucket: a doubly-linked sub-list threaded through the
/// entry arena. Front = most recently touched at this frequency.
#[derive(Debug, Default)]
struct BucketList {
    head: Option<EntryId>,
    tail: Option<EntryId>,
    len: usize,
}

/// Least-Frequently-Used cache with O(1) bucketed eviction.
///
/// See the module docs for the bucket layout. The hasher for the key index
/// is pluggable via `S`; the frequency-to-bucket map always uses FxHash
/// since its keys are internal counters.
///
/// # Example
///
/// ```
/// use capcache::policy::lfu::LfuCache;
/// use capcache::traits::Cache;
///
/// let mut cache = LfuCache::new(2);
/// cache.put(1, "one");
/// cache.put(2, "two");
/// cache.get(&1).unwrap(); // freq(1) = 2, freq(2) = 1
/// cache.put(3, "three"); // evicts key 2, the lowest frequency
///
/// assert!(cache.contains(&1));
/// assert!(!cache.contains(&2));
/// assert!(cache.contains(&3));
/// ```
pub struct LfuCache<K, V, S = FxBuildHasher>
where
    K: Eq + Hash + Clone,
{
    entries: Arena<LfuEntry<K, V>>,
    index: HashMap<K, EntryId, S>,
    buckets: FxHashMap<u64, BucketList>,
    min_freq: u64,
    capacity: usize,
}

// Written by hand so that `S` needs no `Debug` bound; hasher state is not
// worth printing anyway.
impl<K, V, S> fmt::Debug for LfuCache<K, V, S>
where
    K: Eq + Hash + Clone + fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LfuCache")
            .field("entries", &self.entries)
            .field("index", &self.index)
            .field("buckets", &self.buckets)
            .field("min_freq", &self.min_freq)
            .field("capacity", &self.capacity)
            .finish()
    }
}

impl<K, V> LfuCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates an LFU cache bounded to `capacity` entries.
    ///
    /// Capacity 0 is valid and means nothing is ever retained.
    pub fn new(capacity: usize) -> Self {
        Self::with_hasher(capacity, FxBuildHasher)
    }
}

impl<K, V, S> LfuCache<K, V, S>
where
    K: Eq + Hash + Clone,
    S: BuildHasher,
{
    /// Creates an LFU cache using a caller-supplied hasher for the key index.
    pub fn with_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            entries: Arena::with_capacity(capacity),
            index: HashMap::with_capacity_and_hasher(capacity, hasher),
            buckets: FxHashMap::default(),
            min_freq: 0,
            capacity,
        }
    }

    /// Returns the access count for `key`, if present.
    ///
    /// Starts at 1 on insertion; each `get` hit and each `put` on the
    /// existing key adds 1. Query only, never a touch.
    pub fn frequency(&self, key: &K) -> Option<u64> {
        let id = *self.index.get(key)?;
        self.entries.get(id).map(|entry| entry.freq)
    }

    /// Peeks at the next eviction victim (back of the minimal-frequency
    /// bucket) without touching it.
    pub fn peek_lfu(&self) -> Option<(&K, &V)> {
        let id = self.buckets.get(&self.min_freq)?.tail?;
        self.entries.get(id).map(|entry| (&entry.key, &entry.value))
    }

    fn bucket_push_front(entries: &mut Arena<LfuEntry<K, V>>, list: &mut BucketList, id: EntryId) {
        let old_head = list.head;
        if let Some(entry) = entries.get_mut(id) {
            entry.prev = None;
            entry.next = old_head;
        }
        match old_head {
            Some(head_id) => {
                if let Some(head) = entries.get_mut(head_id) {
                    head.prev = Some(id);
                }
            },
            None => list.tail = Some(id),
        }
        list.head = Some(id);
        list.len += 1;
    }

    fn bucket_unlink(entries: &mut Arena<LfuEntry<K, V>>, list: &mut BucketList, id: EntryId) {
        let (prev, next) = match entries.get(id) {
            Some(entry) => (entry.prev, entry.next),
            None => return,
        };
        match prev {
            Some(prev_id) => {
                if let Some(entry) = entries.get_mut(prev_id) {
                    entry.next = next;
                }
            },
            None => list.head = next,
        }
        match next {
            Some(next_id) => {
                if let Some(entry) = entries.get_mut(next_id) {
                    entry.prev = prev;
                }
            },
            None => list.tail = prev,
        }
        if let Some(entry) = entries.get_mut(id) {
            entry.prev = None;
            entry.next = None;
        }
        list.len -= 1;
    }

    fn bucket_pop_back(entries: &mut Arena<LfuEntry<K, V>>, list: &mut BucketList) -> Option<EntryId> {
        let id = list.tail?;
        Self::bucket_unlink(entries, list, id);
        Some(id)
    }

    /// Moves the entry from bucket `f` to the front of bucket `f + 1`.
    fn promote(&mut self, id: EntryId) {
        let freq = self.entries.get(id).expect("lfu entry missing").freq;
        if freq == u64::MAX {
            // Saturated: refresh recency within the bucket only.
            if let Some(list) = self.buckets.get_mut(&freq) {
                Self::bucket_unlink(&mut self.entries, list, id);
                Self::bucket_push_front(&mut self.entries, list, id);
            }
            return;
        }
        let next_freq = freq + 1;

        let emptied = {
            let list = self.buckets.get_mut(&freq).expect("lfu bucket missing");
            Self::bucket_unlink(&mut self.entries, list, id);
            list.len == 0
        };
        if emptied {
            self.buckets.remove(&freq);
            if self.min_freq == freq {
                // The promoted entry was the bucket's last occupant, so the
                // new minimum is exactly one higher.
                self.min_freq = next_freq;
            }
        }

        if let Some(entry) = self.entries.get_mut(id) {
            entry.freq = next_freq;
        }
        let list = self.buckets.entry(next_freq).or_default();
        Self::bucket_push_front(&mut self.entries, list, id);
    }

    /// Removes the back-most entry of the minimal-frequency bucket.
    ///
    /// When that bucket empties, `min_freq` advances to the next occupied
    /// bucket (0 once the cache is empty), so repeated calls drain entries
    /// in frequency order.
    fn evict_lfu(&mut self) -> Option<(K, V)> {
        let min_freq = self.min_freq;
        if min_freq == 0 {
            return None;
        }
        let id = {
            let list = self.buckets.get_mut(&min_freq)?;
            Self::bucket_pop_back(&mut self.entries, list)?
        };
        if self.buckets.get(&min_freq).is_some_and(|list| list.len == 0) {
            self.buckets.remove(&min_freq);
            self.min_freq = self.buckets.keys().min().copied().unwrap_or(0);
        }
        let entry = self.entries.remove(id)?;
        self.index.remove(&entry.key);
        Some((entry.key, entry.value))
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        assert_eq!(self.index.len(), self.entries.len());

        if self.entries.is_empty() {
            assert_eq!(self.min_freq, 0);
            assert!(self.buckets.is_empty());
            return;
        }

        assert!(self.min_freq > 0);
        assert!(self.buckets.contains_key(&self.min_freq));
        let true_min = self
            .entries
            .iter()
            .map(|(_, entry)| entry.freq)
            .min()
            .expect("non-empty arena");
        assert_eq!(self.min_freq, true_min);

        let mut total = 0usize;
        for (&freq, list) in &self.buckets {
            assert!(list.len > 0, "empty bucket retained for freq {freq}");
            let mut current = list.head;
            let mut last = None;
            let mut count = 0usize;
            while let Some(id) = current {
                let entry = self.entries.get(id).expect("lfu entry missing");
                assert_eq!(entry.freq, freq);
                assert_eq!(entry.prev, last);
                last = Some(id);
                current = entry.next;
                count += 1;
                assert!(count <= list.len, "cycle detected in bucket {freq}");
            }
            assert_eq!(list.tail, last);
            assert_eq!(list.len, count);
            total += count;
        }
        assert_eq!(total, self.entries.len());
    }
}

impl<K, V, S> Cache<K, V> for LfuCache<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Clone,
    S: BuildHasher,
{
    fn get(&mut self, key: &K) -> Result<V, KeyNotFound> {
        let id = *self.index.get(key).ok_or(KeyNotFound)?;
        self.promote(id);
        let entry = self.entries.get(id).expect("lfu entry missing");
        Ok(entry.value.clone())
    }

    fn put(&mut self, key: K, value: V) {
        if self.capacity == 0 {
            return;
        }
        if let Some(&id) = self.index.get(&key) {
            if let Some(entry) = self.entries.get_mut(id) {
                entry.value = value;
            }
            self.promote(id);
            return;
        }
        // One eviction at steady state; repeats only after a capacity shrink.
        while self.index.len() >= self.capacity {
            if self.evict_lfu().is_none() {
                break;
            }
        }

        let id = self.entries.insert(LfuEntry {
            key: key.clone(),
            value,
            freq: 1,
            prev: None,
            next: None,
        });
        self.index.insert(key, id);
        let list = self.buckets.entry(1).or_default();
        Self::bucket_push_front(&mut self.entries, list, id);
        // A fresh entry is always the new minimum: 1 is the frequency floor.
        self.min_freq = 1;
    }

    fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
        self.buckets.clear();
        self.min_freq = 0;
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
