//! Trailing-edge debounce with generation tagging.
//!
//! Every call bumps a per-key counter and schedules its work after `delay`.
//! When the timer fires, work whose generation has been superseded is
//! skipped. Work that does run receives its [`Generation`] so it can check
//! again right before publishing, which keeps a slow older run from
//! overwriting a newer one.

use std::collections::HashMap;
use std::future::Future;
use std::hash::Hash;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;

/// Sequence number captured when a debounced call was made.
#[derive(Debug, Clone)]
pub struct Generation {
    value: u64,
    latest: Arc<AtomicU64>,
}

impl Generation {
    pub fn value(&self) -> u64 {
        self.value
    }

    /// False once a newer call has been made on the same lane.
    pub fn is_current(&self) -> bool {
        self.latest.load(Ordering::Acquire) == self.value
    }
}

#[derive(Debug)]
pub struct Debouncer<K = ()> {
    /// Trailing delay in nanoseconds; adjustable while calls are in flight.
    delay_nanos: AtomicU64,
    lanes: Mutex<HashMap<K, Arc<AtomicU64>>>,
}

fn as_nanos(delay: Duration) -> u64 {
    u64::try_from(delay.as_nanos()).unwrap_or(u64::MAX)
}

impl<K> Debouncer<K>
where
    K: Eq + Hash + Clone,
{
    pub fn new(delay: Duration) -> Self {
        Self {
            delay_nanos: AtomicU64::new(as_nanos(delay)),
            lanes: Mutex::new(HashMap::new()),
        }
    }

    pub fn delay(&self) -> Duration {
        Duration::from_nanos(self.delay_nanos.load(Ordering::Relaxed))
    }

    /// Applies to calls made from now on; pending timers keep their delay.
    pub fn set_delay(&self, delay: Duration) {
        self.delay_nanos.store(as_nanos(delay), Ordering::Relaxed);
    }

    /// Drops the lane for `key`. A pending call on it still runs; the next
    /// call on `key` starts a fresh lane.
    pub fn forget(&self, key: &K) {
        self.lanes.lock().unwrap_or_else(|e| e.into_inner()).remove(key);
    }

    /// Supersedes any pending call on `key` and schedules `work`.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn call<F, Fut>(&self, key: K, work: F) -> JoinHandle<()>
    where
        F: FnOnce(Generation) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let latest = {
            let mut lanes = self.lanes.lock().unwrap_or_else(|e| e.into_inner());
            Arc::clone(lanes.entry(key).or_default())
        };
        let value = latest.fetch_add(1, Ordering::AcqRel) + 1;
        let generation = Generation { value, latest };
        let delay = self.delay();

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if !generation.is_current() {
                tracing::trace!(generation = generation.value, "debounced call superseded");
                return;
            }
            work(generation).await;
        })
    }
}
