//! capcache: fixed-capacity in-memory key/value caches with pluggable
//! eviction (FIFO, LRU, LFU).
//!
//! All policies share the [`traits::Cache`] contract and run `get`, `put`,
//! and eviction in O(1) amortized time. See the module docs in
//! [`policy`] for how each policy decides its victim.

pub mod builder;
pub mod ds;
pub mod error;
pub mod policy;
pub mod prelude;
pub mod traits;
