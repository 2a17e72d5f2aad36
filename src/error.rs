//! Error types for the capcache library.
//!
//! ## Key Components
//!
//! - [`KeyNotFound`]: Returned by [`Cache::get`](crate::traits::Cache::get)
//!   when the requested key is absent (never inserted, evicted, or cleared).
//!
//! `KeyNotFound` is expected control flow rather than a fault: callers treat
//! it as a cache miss and recompute. It is always detected before any
//! mutation, so a failed `get` never leaves a cache in a partial state.
//!
//! ## Example Usage
//!
//! ```
//! use capcache::error::KeyNotFound;
//! use capcache::policy::lru::LruCache;
//! use capcache::traits::Cache;
//!
//! let mut cache: LruCache<u64, String> = LruCache::new(8);
//! assert_eq!(cache.get(&1), Err(KeyNotFound));
//!
//! cache.put(1, "one".to_string());
//! assert_eq!(cache.get(&1), Ok("one".to_string()));
//! ```

use std::fmt;

/// Error returned when a `get` is issued for a key the cache does not hold.
///
/// The only error the library produces: `put` and `clear` are total
/// operations and never fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyNotFound;

impl fmt::Display for KeyNotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("key is not found")
    }
}

impl std::error::Error for KeyNotFound {}
