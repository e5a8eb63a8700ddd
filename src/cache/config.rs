use std::time::Duration;

use crate::cache::clock::{ClockType, SystemClock};
use crate::cache::types::TotalCapacity;

const TIME_TO_LIVE: Duration = Duration::from_secs(300);
const CAPACITY: TotalCapacity = 1024;

/// Config holds the construction time parameters of a cache instance: the time to live
/// applied to every write, the maximum number of entries and the clock used for expiry.
/// Each instance is configured independently, typically one instance per entity kind.
pub struct Config {
    pub clock: ClockType,
    pub time_to_live: Duration,
    pub capacity: TotalCapacity,
}

pub struct ConfigBuilder {
    clock: ClockType,
    time_to_live: Duration,
    capacity: TotalCapacity,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigBuilder {
    pub fn new() -> Self {
        ConfigBuilder {
            clock: SystemClock::shared(),
            time_to_live: TIME_TO_LIVE,
            capacity: CAPACITY,
        }
    }

    pub fn clock(mut self, clock: ClockType) -> ConfigBuilder {
        self.clock = clock;
        self
    }

    pub fn time_to_live(mut self, time_to_live: Duration) -> ConfigBuilder {
        self.time_to_live = time_to_live;
        self
    }

    pub fn capacity(mut self, capacity: TotalCapacity) -> ConfigBuilder {
        self.capacity = capacity;
        self
    }

    pub fn build(self) -> Config {
        Config {
            clock: self.clock,
            time_to_live: self.time_to_live,
            capacity: self.capacity,
        }
    }
}
