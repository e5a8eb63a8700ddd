use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use crossbeam_utils::CachePadded;

const TOTAL_STATS: usize = 6;

/// Defines the various stats that are measured in the cache.
#[repr(usize)]
#[non_exhaustive]
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum StatsType {
    /// Defines the number of hits for the keys
    CacheHits = 0,
    /// Defines the number of misses for the keys
    CacheMisses = 1,
    /// Defines the number of keys added
    KeysAdded = 2,
    /// Defines the number of keys removed by the callers
    KeysDeleted = 3,
    /// Defines the number of keys evicted to honor the capacity bound
    KeysEvicted = 4,
    /// Defines the number of keys removed because their expiry instant had passed
    KeysExpired = 5,
}

impl StatsType {
    const VALUES: [Self; TOTAL_STATS] = [
        Self::CacheHits,
        Self::CacheMisses,
        Self::KeysAdded,
        Self::KeysDeleted,
        Self::KeysEvicted,
        Self::KeysExpired,
    ];
}

/// StatsSummary is a view representation of the various stats represented by [`StatsType`].
#[derive(Debug, PartialEq)]
pub struct StatsSummary {
    pub stats_by_type: HashMap<StatsType, u64>,
    pub hit_ratio: f64,
}

impl StatsSummary {
    pub(crate) fn new(stats_by_type: HashMap<StatsType, u64>, hit_ratio: f64) -> Self {
        StatsSummary {
            stats_by_type,
            hit_ratio,
        }
    }

    /// Returns an Option&lt;u64&gt; counter corresponding to the [`StatsType`].
    pub fn get(&self, stats_type: &StatsType) -> Option<u64> {
        self.stats_by_type.get(stats_type).copied()
    }
}

#[repr(transparent)]
#[derive(Debug)]
struct Counter(CachePadded<AtomicU64>);

/// ConcurrentStatsCounter measures the stats defined by [`StatsType`].
/// It is represented as an array of entries where each entry is a
/// [`crossbeam_utils::CachePadded`] AtomicU64, to avoid false sharing.
pub(crate) struct ConcurrentStatsCounter {
    entries: [Counter; TOTAL_STATS],
}

impl ConcurrentStatsCounter {
    pub(crate) fn new() -> Self {
        ConcurrentStatsCounter {
            entries: std::array::from_fn(|_index| Counter(CachePadded::new(AtomicU64::new(0))))
        }
    }

    pub(crate) fn found_a_hit(&self) { self.add(StatsType::CacheHits, 1); }

    pub(crate) fn found_a_miss(&self) { self.add(StatsType::CacheMisses, 1); }

    pub(crate) fn add_key(&self) { self.add(StatsType::KeysAdded, 1); }

    pub(crate) fn delete_key(&self) { self.add(StatsType::KeysDeleted, 1); }

    pub(crate) fn evict_key(&self) { self.add(StatsType::KeysEvicted, 1); }

    pub(crate) fn expire_keys(&self, count: u64) { self.add(StatsType::KeysExpired, count); }

    pub(crate) fn hits(&self) -> u64 {
        self.get(&StatsType::CacheHits)
    }

    pub(crate) fn misses(&self) -> u64 {
        self.get(&StatsType::CacheMisses)
    }

    pub(crate) fn keys_added(&self) -> u64 {
        self.get(&StatsType::KeysAdded)
    }

    pub(crate) fn keys_deleted(&self) -> u64 {
        self.get(&StatsType::KeysDeleted)
    }

    pub(crate) fn keys_evicted(&self) -> u64 { self.get(&StatsType::KeysEvicted) }

    pub(crate) fn keys_expired(&self) -> u64 { self.get(&StatsType::KeysExpired) }

    pub(crate) fn hit_ratio(&self) -> f64 {
        let hits = self.hits();
        let misses = self.misses();
        if hits + misses == 0 {
            return 0.0;
        }
        (hits as f64) / (hits + misses) as f64
    }

    pub(crate) fn summary(&self) -> StatsSummary {
        let mut stats_by_type = HashMap::new();
        for stats_type in StatsType::VALUES.iter().copied() {
            stats_by_type.insert(stats_type, self.get(&stats_type));
        }
        StatsSummary::new(stats_by_type, self.hit_ratio())
    }

    fn add(&self, stats_type: StatsType, count: u64) {
        self.entries[stats_type as usize].0.fetch_add(count, Ordering::AcqRel);
    }

    fn get(&self, stats_type: &StatsType) -> u64 {
        self.entries[*stats_type as usize].0.load(Ordering::Acquire)
    }
}
