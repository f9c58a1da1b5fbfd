//! Arrival generation and class-based routing.

use std::sync::atomic::Ordering;

use ck_core::{Customer, CustomerClass};

use crate::counter::Counter;
use crate::observer::SimObserver;
use crate::sim::SimShared;

/// Produces one class of customers over simulated time and routes each into
/// a counter queue.
///
/// One generator runs per class, each on its own thread, so a slow class
/// never head-of-line-blocks the other.  Express traffic always targets the
/// reserved counter; regular traffic targets the non-express counter with
/// the fewest queued customers at the instant of selection, ties broken by
/// lowest counter number.
pub(crate) struct ArrivalGenerator<'sim> {
    class:  CustomerClass,
    items:  Vec<u32>,
    shared: &'sim SimShared,
}

impl<'sim> ArrivalGenerator<'sim> {
    /// `items` is the per-customer cart size sequence, in arrival order.
    pub(crate) fn new(class: CustomerClass, items: Vec<u32>, shared: &'sim SimShared) -> Self {
        Self { class, items, shared }
    }

    pub(crate) fn run<O: SimObserver>(self, observer: &O) {
        let rate = self.shared.config.arrival_rate;
        let last = self.items.len().saturating_sub(1);

        for (seq, &items) in self.items.iter().enumerate() {
            let customer = Customer::new(
                self.shared.ids.next(),
                self.class,
                rate * seq as u64,
                items,
            );

            let counter = self.route();
            counter.queue().enqueue(customer);
            self.shared.arrived.fetch_add(1, Ordering::Relaxed);
            observer.on_arrival(counter.number(), &customer);

            if seq != last {
                self.shared.config.pacing.pause(rate);
            }
        }

        log::debug!("{} arrivals finished: {} customer(s)", self.class, self.items.len());
    }

    fn route(&self) -> &'sim Counter {
        match self.class {
            CustomerClass::Express => self.shared.express_counter(),
            CustomerClass::Regular => self.shared.shortest_regular_queue(),
        }
    }
}
