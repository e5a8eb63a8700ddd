use std::sync::Arc;
use std::time::SystemTime;

pub type ClockType = Arc<dyn Clock + Send + Sync>;

pub trait Clock: Send + Sync {
    fn now(&self) -> SystemTime;

    fn has_passed(&self, time: &SystemTime) -> bool {
        self.now().gt(time)
    }
}

#[derive(Clone)]
pub struct SystemClock {}

impl Clock for SystemClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}

impl SystemClock {
    pub fn new() -> SystemClock {
        SystemClock {}
    }

    pub fn shared() -> ClockType {
        Arc::new(SystemClock::new())
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        SystemClock::new()
    }
}
