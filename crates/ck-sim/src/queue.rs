//! Per-counter FIFO queue with a mutex/condvar discipline.

use std::collections::VecDeque;
use std::sync::{Condvar, Mutex, MutexGuard};
use std::time::Duration;

use ck_core::Customer;

/// FIFO of customers pending at one counter.
///
/// All mutation goes through `enqueue`/`try_dequeue` under a single mutex,
/// so every customer is handed to the counter's worker exactly once and
/// dequeue order equals enqueue order.  [`len`][Self::len] takes the same
/// lock and is used only for routing decisions.
pub struct CounterQueue {
    pending:  Mutex<VecDeque<Customer>>,
    has_work: Condvar,
}

impl CounterQueue {
    pub fn new() -> Self {
        Self {
            pending:  Mutex::new(VecDeque::new()),
            has_work: Condvar::new(),
        }
    }

    /// Append a customer and wake the counter's worker if it is idle.
    pub fn enqueue(&self, customer: Customer) {
        self.lock_pending().push_back(customer);
        self.has_work.notify_one();
    }

    /// Remove and return the head of the queue, or `None` if it is empty
    /// right now.
    pub fn try_dequeue(&self) -> Option<Customer> {
        self.lock_pending().pop_front()
    }

    /// Current queue length.
    pub fn len(&self) -> usize {
        self.lock_pending().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock_pending().is_empty()
    }

    /// Block until [`enqueue`][Self::enqueue] signals new work, a
    /// [`notify_all`][Self::notify_all] broadcast arrives, or `timeout`
    /// elapses.  Returns immediately if the queue is already non-empty.
    ///
    /// Spurious wakeups are harmless: the worker re-checks state on every
    /// loop iteration.
    pub fn wait_for_work(&self, timeout: Duration) {
        let guard = self.lock_pending();
        if guard.is_empty() {
            let (_guard, _timed_out) = self
                .has_work
                .wait_timeout(guard, timeout)
                .unwrap_or_else(|poisoned| {
                    log::warn!("counter queue lock poisoned during wait; continuing");
                    poisoned.into_inner()
                });
        }
    }

    /// Wake the worker regardless of queue state (end-of-arrivals
    /// broadcast).
    pub fn notify_all(&self) {
        self.has_work.notify_all();
    }

    /// Lock the pending list, adopting the guard if a peer thread panicked
    /// while holding it.  The queue is consistent between push/pop calls, so
    /// an interrupted peer never costs a customer; log and carry on.
    fn lock_pending(&self) -> MutexGuard<'_, VecDeque<Customer>> {
        self.pending.lock().unwrap_or_else(|poisoned| {
            log::warn!("counter queue lock poisoned; continuing");
            poisoned.into_inner()
        })
    }
}

impl Default for CounterQueue {
    fn default() -> Self {
        Self::new()
    }
}
