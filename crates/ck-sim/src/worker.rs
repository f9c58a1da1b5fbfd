//! Per-counter worker loop.

use ck_core::Customer;

use crate::counter::Counter;
use crate::observer::SimObserver;
use crate::sim::SimShared;

/// Drains one counter's queue, simulating service time per customer.
///
/// Each counter has exactly one worker (no competing consumers), so a
/// customer once enqueued is guaranteed eventual service by this worker and
/// service order equals queue order.
pub(crate) struct CounterWorker<'sim> {
    index:  usize,
    shared: &'sim SimShared,
}

impl<'sim> CounterWorker<'sim> {
    pub(crate) fn new(index: usize, shared: &'sim SimShared) -> Self {
        Self { index, shared }
    }

    pub(crate) fn run<O: SimObserver>(self, observer: &O) {
        let counter = &self.shared.counters[self.index];
        let poll = self.shared.config.pacing.poll_interval();

        loop {
            if let Some(customer) = counter.queue().try_dequeue() {
                serve(counter, customer, self.shared, observer);
                continue;
            }

            // Exit only once arrivals are finished AND every queue was empty
            // at the moment of the check.  A momentary blip elsewhere just
            // means another bounded wait — wake/sleep cycles near shutdown
            // are idempotent no-ops.
            if !self.shared.is_processing() && self.shared.all_queues_empty() {
                break;
            }

            counter.queue().wait_for_work(poll);
        }

        log::debug!("{} worker done", counter.number());
    }
}

fn serve<O: SimObserver>(
    counter:  &Counter,
    customer: Customer,
    shared:   &SimShared,
    observer: &O,
) {
    // Service holds no lock: a slow cart must not block routing reads or a
    // neighbor's dequeue.
    shared.config.pacing.pause(customer.processing_time());

    counter.record_service(customer.processing_time());
    observer.on_processed(counter.number(), &customer);
}
