//! Eviction policy implementations.
//!
//! Every policy pairs a key index (`HashMap<K, EntryId>`) with an ordered
//! structure over an arena, so `get`, `put`, and eviction stay O(1):
//!
//! | Policy | Victim                       | Ordered structure        |
//! |--------|------------------------------|--------------------------|
//! | FIFO   | oldest insertion             | single queue             |
//! | LRU    | least recently accessed      | single recency list      |
//! | LFU    | least frequently accessed    | per-frequency buckets    |

pub mod fifo;
pub mod lfu;
pub mod lru;

pub use fifo::FifoCache;
pub use lfu::LfuCache;
pub use lru::LruCache;
