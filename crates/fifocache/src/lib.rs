//! # fifocache
//!
//! Fixed-capacity, thread-safe key to integer cache with insertion-order
//! eviction.
//!
//! ## Architecture
//! - **HashMap**: AHash index from key to arena slot (O(1) lookup)
//! - **Chain**: doubly-linked list over arena slots, oldest to newest (O(1) evict/append)
//! - **Lock**: one `parking_lot::Mutex` around both, taken by every operation
//!
//! Reads never reorder entries, so eviction order is insertion order.
//!
//! ```
//! use fifocache::{Error, FifoCache};
//!
//! let cache = FifoCache::new(3);
//! cache.insert("Sergei", 14);
//! cache.insert("Roma", 12);
//! cache.insert("Peter", 3);
//! cache.insert("Masha", 4);
//!
//! assert_eq!(cache.get("Roma"), Ok(12));
//! assert_eq!(cache.get("Sergei"), Err(Error::NotFound));
//! assert_eq!(cache.keys(), ["Roma", "Peter", "Masha"]);
//! ```

#![warn(missing_docs)]

mod cache;
mod chain;
mod config;
mod error;
mod stats;

pub use cache::FifoCache;
pub use config::{CacheConfig, DEFAULT_CAPACITY};
pub use error::{Error, Result};
pub use stats::{CacheStats, StatsSnapshot};
