//! The run controller: shared state, thread topology, shutdown ordering.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::thread;

use ck_core::{CounterId, CustomerClass, IdAllocator, SimConfig};

use crate::arrivals::ArrivalGenerator;
use crate::counter::Counter;
use crate::observer::SimObserver;
use crate::report::Report;
use crate::worker::CounterWorker;

/// State shared by the generators, the workers, and the controller.
///
/// Everything here is scoped to one simulation instance — no process-wide
/// statics — so independent simulations can run concurrently (e.g. in
/// tests) without interfering.
pub(crate) struct SimShared {
    pub(crate) config:   SimConfig,
    pub(crate) counters: Vec<Counter>,

    /// True while the generators may still produce arrivals.  Cleared
    /// exactly once by the controller after both generators have joined;
    /// never set back to true.
    processing: AtomicBool,

    /// Customers enqueued so far.  Monotonic visibility is all that is
    /// needed, hence relaxed ordering.
    pub(crate) arrived: AtomicU64,

    pub(crate) ids: IdAllocator,
}

impl SimShared {
    pub(crate) fn new(config: SimConfig) -> Self {
        let counters = (1..=config.counters).map(|n| Counter::new(CounterId(n))).collect();
        Self {
            config,
            counters,
            processing: AtomicBool::new(true),
            arrived:    AtomicU64::new(0),
            ids:        IdAllocator::new(),
        }
    }

    /// Observed by workers to decide whether more work may still arrive.
    pub(crate) fn is_processing(&self) -> bool {
        self.processing.load(Ordering::Acquire)
    }

    fn stop_processing(&self) {
        self.processing.store(false, Ordering::Release);
    }

    /// The all-queues check that licenses a worker to exit.  Re-verified on
    /// every polling iteration, never cached.
    pub(crate) fn all_queues_empty(&self) -> bool {
        self.counters.iter().all(|c| c.queue().is_empty())
    }

    pub(crate) fn express_counter(&self) -> &Counter {
        &self.counters[0]
    }

    /// Non-express counter with the fewest queued customers right now;
    /// first minimum wins, so ties break to the lowest counter number.
    pub(crate) fn shortest_regular_queue(&self) -> &Counter {
        let eligible = &self.counters[1..];
        // The builder guarantees a non-express counter exists whenever
        // regular customers do.
        let mut best = &eligible[0];
        for candidate in &eligible[1..] {
            if candidate.queue().len() < best.queue().len() {
                best = candidate;
            }
        }
        best
    }
}

/// A validated, ready-to-run simulation.
///
/// Create via [`SimBuilder`][crate::SimBuilder]; consume with
/// [`run`][Self::run].
pub struct Simulation {
    pub(crate) shared:  SimShared,
    pub(crate) regular: Vec<u32>,
    pub(crate) express: Vec<u32>,
}

impl Simulation {
    /// Run to completion and return the per-counter report.
    ///
    /// Spawns both generators and one worker per counter, joins the
    /// generators, announces end-of-arrivals (flag clear + queue wake, so
    /// shutdown is not left to the poll timeout), joins the workers, then
    /// aggregates.  Infallible: all configuration errors were rejected at
    /// build time, and a worker's interrupted wait is recovered locally.
    pub fn run<O: SimObserver>(self, observer: &O) -> Report {
        let Simulation { shared, regular, express } = self;

        log::debug!(
            "starting: {} counter(s), {} express + {} regular customer(s)",
            shared.counters.len(),
            express.len(),
            regular.len(),
        );

        thread::scope(|scope| {
            let express_gen = ArrivalGenerator::new(CustomerClass::Express, express, &shared);
            let regular_gen = ArrivalGenerator::new(CustomerClass::Regular, regular, &shared);
            let generators = [
                scope.spawn(|| express_gen.run(observer)),
                scope.spawn(|| regular_gen.run(observer)),
            ];

            let workers: Vec<_> = (0..shared.counters.len())
                .map(|index| {
                    let worker = CounterWorker::new(index, &shared);
                    scope.spawn(move || worker.run(observer))
                })
                .collect();

            for generator in generators {
                join(generator);
            }

            shared.stop_processing();
            for counter in &shared.counters {
                counter.queue().notify_all();
            }

            for worker in workers {
                join(worker);
            }
        });

        Report::collect(&shared.counters, shared.arrived.load(Ordering::Relaxed))
    }
}

/// Re-raise a child thread's panic on the controller thread.
fn join<T>(handle: thread::ScopedJoinHandle<'_, T>) -> T {
    match handle.join() {
        Ok(value) => value,
        Err(payload) => std::panic::resume_unwind(payload),
    }
}
