use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;

use log::info;

use crate::cache::config::Config;
use crate::cache::errors::Errors;
use crate::cache::policy::eviction_policy::EvictionPolicy;
use crate::cache::stats::{ConcurrentStatsCounter, StatsSummary};
use crate::cache::store::EntryStore;
use crate::cache::sweeper::Sweeper;

/// TenuredCache is a capacity bound, in-process cache with per-entry time to live.
/// Every write stores the value with a fresh expiry and a usage counter reset to 0; reads
/// increment the usage counter, and entries accessed at least three times since their last
/// write are shielded from capacity eviction while a colder entry is available. A background
/// sweeper removes the expired entries on a fixed period equal to the time to live.
///
/// One instance typically fronts one entity kind of the backing store, configured with its
/// own capacity and time to live; instances share no state. Callers own the cache-aside
/// control flow and invoke [`TenuredCache::evict`] whenever the backing record is mutated.
///
/// All operations are synchronous and serialize on a single per-instance lock, which keeps
/// expiry, eviction and the sweep atomic relative to each other. Capacities are expected to
/// be small, every operation is at worst O(capacity).
pub struct TenuredCache<Key, Value>
    where Key: Hash + Eq + Send + Sync + Clone + 'static,
          Value: Send + Sync + 'static {
    store: Arc<EntryStore<Key, Value>>,
    eviction_policy: EvictionPolicy,
    sweeper: Sweeper,
    stats_counter: Arc<ConcurrentStatsCounter>,
}

impl<Key, Value> TenuredCache<Key, Value>
    where Key: Hash + Eq + Send + Sync + Clone + 'static,
          Value: Send + Sync + 'static {
    /// Creates the cache and starts its sweeper. Fails fast with a configuration error on a
    /// zero capacity or a zero time to live; there is no degraded mode.
    pub fn new(config: Config) -> Result<TenuredCache<Key, Value>, Errors> {
        if config.capacity == 0 {
            return Err(Errors::TotalCapacityGtZero);
        }
        if config.time_to_live.is_zero() {
            return Err(Errors::TimeToLiveGtZero);
        }

        let stats_counter = Arc::new(ConcurrentStatsCounter::new());
        let store = EntryStore::new(
            config.capacity,
            config.time_to_live,
            config.clock,
            stats_counter.clone(),
        );
        let sweeper = Sweeper::new(Arc::downgrade(&store), config.time_to_live);

        info!("initialized the cache with capacity {} and time to live {:?}", config.capacity, config.time_to_live);
        Ok(TenuredCache {
            store,
            eviction_policy: EvictionPolicy::new(),
            sweeper,
            stats_counter,
        })
    }

    /// Inserts or overwrites the entry for the key with a fresh expiry and a usage counter
    /// reset to 0, evicting one entry first if the cache is at capacity and the key is new.
    /// A put is rejected after [`TenuredCache::shutdown`], writes are never silently dropped.
    pub fn put(&self, key: Key, value: Value) -> Result<(), Errors> {
        if !self.sweeper.is_running() {
            return Err(Errors::PutAfterShutdown);
        }
        self.store.put(key, value, &self.eviction_policy);
        Ok(())
    }

    /// Unconditionally removes the entry for the key, no-op if it is absent. Meant for
    /// callers reacting to a mutation of the backing record, so the cache cannot keep
    /// serving the stale value until its expiry.
    pub fn evict(&self, key: &Key) {
        self.store.remove(key);
    }

    /// Instantaneous number of entries, always within the configured capacity.
    pub fn size(&self) -> usize {
        self.store.len()
    }

    pub fn clear(&self) {
        self.store.clear();
    }

    /// Stops the background sweeper and closes the cache for writes. Reads keep working on
    /// whatever is still in the table. Invoked on drop as well, so a discarded instance
    /// does not leak its periodic task.
    pub fn shutdown(&self) {
        self.sweeper.shutdown();
    }

    pub fn stats_summary(&self) -> StatsSummary {
        self.stats_counter.summary()
    }
}

impl<Key, Value> TenuredCache<Key, Value>
    where Key: Hash + Eq + Send + Sync + Clone + 'static,
          Value: Send + Sync + Clone + 'static {
    /// Looks up the value for the key. Returns `None` for an absent key and for a key whose
    /// expiry instant has passed; an expired entry is removed on the spot, without waiting
    /// for the sweep. A hit increments the usage counter of the entry.
    pub fn get(&self, key: &Key) -> Option<Value> {
        self.store.get(key)
    }

    pub fn multi_get<'a>(&self, keys: Vec<&'a Key>) -> HashMap<&'a Key, Option<Value>> {
        keys.into_iter().map(|key| (key, self.get(key))).collect::<HashMap<_, _>>()
    }
}

impl<Key, Value> Drop for TenuredCache<Key, Value>
    where Key: Hash + Eq + Send + Sync + Clone + 'static,
          Value: Send + Sync + 'static {
    fn drop(&mut self) {
        self.shutdown();
    }
}
