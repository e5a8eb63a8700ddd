use std::hash::Hash;
use std::sync::{Arc, Weak};
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use crossbeam_channel::tick;
use log::debug;

use crate::cache::store::EntryStore;

/// Sweeper runs one background thread per cache instance that periodically removes the
/// expired entries, independent of any caller activity. It bounds the memory for keys that
/// are written once and never read again, which would otherwise linger until a later put
/// happened to evict them.
///
/// The thread holds only a weak reference to the store, so a discarded cache instance does
/// not keep its table alive; the thread exits on the next tick after either the store is
/// dropped or `shutdown` is invoked.
pub(crate) struct Sweeper {
    keep_running: Arc<AtomicBool>,
}

impl Sweeper {
    pub(crate) fn new<Key, Value>(store: Weak<EntryStore<Key, Value>>, sweep_interval: Duration) -> Sweeper
        where Key: Hash + Eq + Send + Sync + 'static,
              Value: Send + Sync + 'static {
        let sweeper = Sweeper {
            keep_running: Arc::new(AtomicBool::new(true)),
        };
        sweeper.spin(store, sweep_interval);
        sweeper
    }

    pub(crate) fn shutdown(&self) {
        self.keep_running.store(false, Ordering::Release);
    }

    pub(crate) fn is_running(&self) -> bool {
        self.keep_running.load(Ordering::Acquire)
    }

    fn spin<Key, Value>(&self, store: Weak<EntryStore<Key, Value>>, sweep_interval: Duration)
        where Key: Hash + Eq + Send + Sync + 'static,
              Value: Send + Sync + 'static {
        let keep_running = self.keep_running.clone();
        let receiver = tick(sweep_interval);

        thread::spawn(move || {
            while receiver.recv().is_ok() {
                if !keep_running.load(Ordering::Acquire) {
                    debug!("shutting down the sweeper");
                    drop(receiver);
                    break;
                }
                match store.upgrade() {
                    Some(store) => {
                        let removed = store.remove_expired();
                        if removed > 0 {
                            debug!("sweep removed {} expired entries", removed);
                        }
                    }
                    None => break,
                }
            }
        });
    }
}
