//! Aggregated results of a completed run.

use ck_core::CounterId;

use crate::counter::Counter;

/// Final statistics for one counter.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct CounterReport {
    pub counter: CounterId,

    pub customers_processed: u64,

    /// Mean service time in simulated seconds; `0.0` when the counter
    /// processed nothing (never a division fault).
    pub average_waiting_secs: f64,
}

/// Per-counter results, ordered by counter number ascending.
#[derive(Clone, PartialEq, Debug)]
pub struct Report {
    pub counters: Vec<CounterReport>,

    /// Customers the generators enqueued over the whole run.
    pub customers_arrived: u64,
}

impl Report {
    /// Aggregate the counters' final accumulators.  Called by the controller
    /// after every worker has joined, so the snapshots are quiescent.
    pub(crate) fn collect(counters: &[Counter], customers_arrived: u64) -> Self {
        let counters = counters
            .iter()
            .map(|counter| {
                let stats = counter.stats();
                let average_waiting_secs = if stats.customers_processed == 0 {
                    0.0
                } else {
                    stats.total_service_time.as_secs() as f64 / stats.customers_processed as f64
                };
                CounterReport {
                    counter: counter.number(),
                    customers_processed: stats.customers_processed,
                    average_waiting_secs,
                }
            })
            .collect();

        Report { counters, customers_arrived }
    }

    /// Total customers processed across all counters.
    pub fn total_processed(&self) -> u64 {
        self.counters.iter().map(|c| c.customers_processed).sum()
    }
}
