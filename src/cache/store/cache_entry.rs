use std::ops::Add;
use std::time::Duration;

use crate::cache::clock::ClockType;
use crate::cache::types::{ExpireAfter, UsageCount};

/// CacheEntry associates a value with its expiry instant and a usage counter.
/// The usage counter starts at 0 on every write and counts the accesses since that write;
/// it is the signal the eviction policy uses to shield frequently accessed entries.
pub(crate) struct CacheEntry<Value> {
    value: Value,
    expire_after: ExpireAfter,
    usage: UsageCount,
}

impl<Value> CacheEntry<Value> {
    pub(crate) fn fresh(value: Value, time_to_live: Duration, clock: &ClockType) -> Self {
        CacheEntry {
            value,
            expire_after: clock.now().add(time_to_live),
            usage: 0,
        }
    }

    pub(crate) fn has_expired(&self, clock: &ClockType) -> bool {
        clock.has_passed(&self.expire_after)
    }

    pub(crate) fn record_access(&mut self) {
        self.usage += 1;
    }

    pub(crate) fn usage(&self) -> UsageCount {
        self.usage
    }

    pub(crate) fn expire_after(&self) -> ExpireAfter {
        self.expire_after
    }
}

impl<Value> CacheEntry<Value>
    where Value: Clone {

    pub(crate) fn value(&self) -> Value {
        self.value.clone()
    }
}
