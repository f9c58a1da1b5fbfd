//! `log`-backed observer emitting the classic event lines.

use ck_core::{CounterId, Customer};
use ck_sim::SimObserver;

/// Emits one `info` line per arrival and per completed service, wording
/// matched to the classic console output:
///
/// ```text
/// Express Customer 3 arrived at Counter 1
/// Regular Customer 2 processed at Counter 4
/// ```
///
/// Lines go through the `log` facade, so the application picks the sink
/// (stderr via `env_logger`, a file, …).
pub struct LogObserver;

impl SimObserver for LogObserver {
    fn on_arrival(&self, counter: CounterId, customer: &Customer) {
        log::info!("{} {} arrived at {}", customer.class(), customer.id(), counter);
    }

    fn on_processed(&self, counter: CounterId, customer: &Customer) {
        log::info!("{} {} processed at {}", customer.class(), customer.id(), counter);
    }
}
