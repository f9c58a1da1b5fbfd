//! A checkout counter: its queue and its service statistics.

use std::sync::{Mutex, MutexGuard};

use ck_core::{CounterId, SimSeconds};

use crate::queue::CounterQueue;

/// Running totals for one counter, written only by that counter's worker.
///
/// Both fields live behind one mutex so no reader can observe one
/// accumulator updated without the other.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct CounterStats {
    pub customers_processed: u64,
    pub total_service_time:  SimSeconds,
}

/// One checkout counter.  Counter 1 is the reserved express lane.
pub struct Counter {
    number: CounterId,
    queue:  CounterQueue,
    stats:  Mutex<CounterStats>,
}

impl Counter {
    pub(crate) fn new(number: CounterId) -> Self {
        Self {
            number,
            queue: CounterQueue::new(),
            stats: Mutex::new(CounterStats::default()),
        }
    }

    #[inline]
    pub fn number(&self) -> CounterId {
        self.number
    }

    #[inline]
    pub fn queue(&self) -> &CounterQueue {
        &self.queue
    }

    /// Snapshot of the accumulators (consistent pair).
    pub fn stats(&self) -> CounterStats {
        *self.lock_stats()
    }

    /// Record one completed service: both accumulators move together under
    /// the stats lock.
    pub(crate) fn record_service(&self, duration: SimSeconds) {
        let mut stats = self.lock_stats();
        stats.customers_processed += 1;
        stats.total_service_time += duration;
    }

    fn lock_stats(&self) -> MutexGuard<'_, CounterStats> {
        self.stats.lock().unwrap_or_else(|poisoned| {
            log::warn!("{} stats lock poisoned; continuing", self.number);
            poisoned.into_inner()
        })
    }
}
