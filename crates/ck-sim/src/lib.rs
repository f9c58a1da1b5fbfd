//! `ck-sim` — the concurrent checkout-lane simulation engine.
//!
//! # Thread topology
//!
//! ```text
//! express generator ──▶ counter 1 queue ──▶ worker 1 ─┐
//! regular generator ─┬▶ counter 2 queue ──▶ worker 2 ─┼─▶ Report
//!  (shortest queue)  └▶ counter N queue ──▶ worker N ─┘
//! ```
//!
//! Two generator threads produce customers over simulated time: express
//! traffic always targets the reserved counter 1, regular traffic targets
//! the non-express counter with the shortest queue at the instant of
//! selection.  One worker thread per counter drains its queue, sleeping for
//! each customer's service time with no lock held.
//!
//! # Shutdown protocol
//!
//! The controller joins both generators, clears the processing flag exactly
//! once (release store), wakes every queue, and joins the workers.  A worker
//! exits only when the flag is down **and** every counter's queue is empty
//! at the instant of the check, so a customer once enqueued is always
//! served.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ck_core::{SimConfig, SimSeconds};
//! use ck_sim::{NoopObserver, SimBuilder};
//!
//! let report = SimBuilder::new(SimConfig::new(3, SimSeconds(1)))
//!     .regular(vec![3, 5])
//!     .express(vec![1])
//!     .build()?
//!     .run(&NoopObserver);
//! ```

pub mod builder;
pub mod counter;
pub mod error;
pub mod observer;
pub mod queue;
pub mod report;
pub mod sim;

mod arrivals;
mod worker;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use builder::SimBuilder;
pub use counter::{Counter, CounterStats};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use queue::CounterQueue;
pub use report::{CounterReport, Report};
pub use sim::Simulation;
