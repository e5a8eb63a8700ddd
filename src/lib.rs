//! tenure-cached is an in-memory, capacity bound cache meant to sit in front of a
//! data-access layer as a read-through accelerator. Every entry carries a time to live
//! and a usage counter; entries accessed at least three times since their last write are
//! shielded from capacity eviction while a colder entry is available. A background
//! sweeper removes the expired entries independent of any caller activity.
//!
//! Callers own the cache-aside control flow: check the cache, load from the backing
//! store on a miss, `put` the result, and `evict` whenever the backing record changes.
//!
//! ```
//! use std::time::Duration;
//!
//! use tenure_cached::cache::config::ConfigBuilder;
//! use tenure_cached::cache::tenured_cache::TenuredCache;
//!
//! let cache = TenuredCache::new(
//!     ConfigBuilder::new()
//!         .capacity(64)
//!         .time_to_live(Duration::from_secs(300))
//!         .build()
//! ).unwrap();
//!
//! cache.put("account-1", 2500).unwrap();
//! assert_eq!(Some(2500), cache.get(&"account-1"));
//!
//! cache.evict(&"account-1");
//! assert_eq!(None, cache.get(&"account-1"));
//! ```
pub mod cache;
