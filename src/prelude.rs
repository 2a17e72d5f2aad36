//! Convenience re-exports of the commonly used types.
//!
//! ```
//! use capcache::prelude::*;
//!
//! let mut cache = LruCache::new(8);
//! cache.put("a", 1);
//! assert_eq!(cache.get(&"a"), Ok(1));
//! ```

pub use crate::builder::{CacheBuilder, CachePolicy, PolicyCache};
pub use crate::error::KeyNotFound;
pub use crate::policy::{FifoCache, LfuCache, LruCache};
pub use crate::traits::Cache;
