use std::hash::Hash;

use hashbrown::HashMap;

use crate::cache::store::cache_entry::CacheEntry;
use crate::cache::types::UsageCount;

/// An entry accessed at least this many times since its last write is treated as hot.
pub(crate) const PROTECTION_THRESHOLD: UsageCount = 3;

/// EvictionPolicy selects the entry to remove when the cache is at capacity.
/// Entries at or above [`PROTECTION_THRESHOLD`] accesses since their last write are hot and
/// are preferred for retention; the victim is picked among the cold entries by the lowest
/// usage, breaking ties by the earliest expiry instant. Every write resets the expiry to a
/// fixed offset from the write time, so the earliest expiry stands in for the oldest write.
/// This tie-break is sound only while the time to live is constant per instance.
///
/// Protection is a soft preference. If every entry is hot, the entry with the overall
/// earliest expiry is selected, because some entry must go to honor the capacity bound.
pub(crate) struct EvictionPolicy {
    protection_threshold: UsageCount,
}

impl EvictionPolicy {
    pub(crate) fn new() -> Self {
        EvictionPolicy {
            protection_threshold: PROTECTION_THRESHOLD,
        }
    }

    /// Scans all current entries and selects exactly one victim. Returns `None` only for an
    /// empty table, which the caller never presents when it is at capacity.
    pub(crate) fn select_victim<'a, Key, Value>(&self, entries: &'a HashMap<Key, CacheEntry<Value>>) -> Option<&'a Key>
        where Key: Hash + Eq, {
        let mut coldest: Option<(&Key, &CacheEntry<Value>)> = None;
        let mut earliest_expiring: Option<(&Key, &CacheEntry<Value>)> = None;

        for (key, entry) in entries.iter() {
            let expires_earliest = earliest_expiring
                .map_or(true, |(_, other)| entry.expire_after() < other.expire_after());
            if expires_earliest {
                earliest_expiring = Some((key, entry));
            }

            if entry.usage() >= self.protection_threshold {
                continue;
            }
            let is_colder = coldest.map_or(true, |(_, other)| {
                entry.usage() < other.usage()
                    || (entry.usage() == other.usage() && entry.expire_after() < other.expire_after())
            });
            if is_colder {
                coldest = Some((key, entry));
            }
        }
        coldest.or(earliest_expiring).map(|(key, _)| key)
    }
}
