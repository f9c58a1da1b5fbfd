//! Observer trait for arrival and completion events.

use ck_core::{CounterId, Customer};

/// Callbacks fired by the engine as customers move through the system.
///
/// Arrivals fire on the generator threads and completions on the worker
/// threads, concurrently — hence `&self` receivers and the `Sync` bound.
/// All methods default to no-ops so implementors only override what they
/// care about.
///
/// # Example — console printer
///
/// ```rust,ignore
/// struct Printer;
///
/// impl SimObserver for Printer {
///     fn on_arrival(&self, counter: CounterId, customer: &Customer) {
///         println!("{} {} arrived at {}", customer.class(), customer.id(), counter);
///     }
/// }
/// ```
pub trait SimObserver: Sync {
    /// A customer was enqueued at `counter`.
    fn on_arrival(&self, _counter: CounterId, _customer: &Customer) {}

    /// A customer's service at `counter` finished.
    fn on_processed(&self, _counter: CounterId, _customer: &Customer) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want event callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
