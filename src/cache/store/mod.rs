use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;

use hashbrown::HashMap;
use log::debug;
use parking_lot::Mutex;

use crate::cache::clock::ClockType;
use crate::cache::policy::eviction_policy::EvictionPolicy;
use crate::cache::stats::ConcurrentStatsCounter;
use crate::cache::store::cache_entry::CacheEntry;
use crate::cache::types::TotalCapacity;

pub(crate) mod cache_entry;

/// EntryStore is the keyed table of the cache. A single mutex guards the entries and every
/// operation holds it for its full critical section, which makes each operation atomic with
/// respect to concurrent readers, writers and the sweep. The table never holds more than
/// `capacity` entries at the instant any operation returns.
pub(crate) struct EntryStore<Key, Value>
    where Key: Hash + Eq, {
    entries: Mutex<HashMap<Key, CacheEntry<Value>>>,
    capacity: TotalCapacity,
    time_to_live: Duration,
    clock: ClockType,
    stats_counter: Arc<ConcurrentStatsCounter>,
}

impl<Key, Value> EntryStore<Key, Value>
    where Key: Hash + Eq, {
    pub(crate) fn new(
        capacity: TotalCapacity,
        time_to_live: Duration,
        clock: ClockType,
        stats_counter: Arc<ConcurrentStatsCounter>) -> Arc<EntryStore<Key, Value>> {
        Arc::new(EntryStore {
            entries: Mutex::new(HashMap::with_capacity(capacity)),
            capacity,
            time_to_live,
            clock,
            stats_counter,
        })
    }

    pub(crate) fn remove(&self, key: &Key) -> bool {
        let removed = self.entries.lock().remove(key).is_some();
        if removed {
            self.stats_counter.delete_key();
        }
        removed
    }

    /// Removes every entry whose expiry instant has already passed. Capacity and usage are
    /// not evaluated here, expiry is the only criterion.
    pub(crate) fn remove_expired(&self) -> usize {
        let mut entries = self.entries.lock();
        let count_before_removal = entries.len();
        entries.retain(|_, entry| !entry.has_expired(&self.clock));

        let removed = count_before_removal - entries.len();
        if removed > 0 {
            self.stats_counter.expire_keys(removed as u64);
        }
        removed
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub(crate) fn clear(&self) {
        self.entries.lock().clear();
    }
}

impl<Key, Value> EntryStore<Key, Value>
    where Key: Hash + Eq + Clone, {
    /// Inserts or overwrites the entry for the key with a fresh expiry and a usage counter
    /// reset to 0. An insert at capacity asks the eviction policy for exactly one victim
    /// first; eviction and insertion happen in one critical section, so the capacity bound
    /// holds at every instant a caller can observe.
    pub(crate) fn put(&self, key: Key, value: Value, eviction_policy: &EvictionPolicy) {
        let mut entries = self.entries.lock();
        if entries.len() >= self.capacity && !entries.contains_key(&key) {
            let victim = eviction_policy.select_victim(&entries).cloned();
            if let Some(victim) = victim {
                entries.remove(&victim);
                self.stats_counter.evict_key();
                debug!("evicted an entry to make room for an incoming entry");
            }
        }
        entries.insert(key, CacheEntry::fresh(value, self.time_to_live, &self.clock));
        self.stats_counter.add_key();
    }
}

impl<Key, Value> EntryStore<Key, Value>
    where Key: Hash + Eq,
          Value: Clone, {
    /// Looks up the entry for the key. An entry whose expiry instant has passed is removed
    /// on the spot and reported as a miss, even if the sweep has not run yet. A live entry
    /// gets its usage counter incremented before its value is returned.
    pub(crate) fn get(&self, key: &Key) -> Option<Value> {
        let mut entries = self.entries.lock();
        let has_expired = match entries.get(key) {
            Some(entry) => entry.has_expired(&self.clock),
            None => {
                self.stats_counter.found_a_miss();
                return None;
            }
        };
        if has_expired {
            entries.remove(key);
            self.stats_counter.expire_keys(1);
            self.stats_counter.found_a_miss();
            return None;
        }
        entries.get_mut(key).map(|entry| {
            entry.record_access();
            self.stats_counter.found_a_hit();
            entry.value()
        })
    }
}
