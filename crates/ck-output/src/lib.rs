//! `ck-output` — output surfaces for the checkout simulator.
//!
//! The engine exposes raw events (via `SimObserver`) and a raw [`Report`];
//! everything human- or file-facing lives here:
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`text`]     | classic console rendering of the final report         |
//! | [`writer`]   | backend-agnostic `ReportWriter` trait                 |
//! | [`csv`]      | CSV backend (`counter_report.csv`)                    |
//! | [`observer`] | `LogObserver` — event lines through the `log` facade  |
//! | [`error`]    | `OutputError`, `OutputResult`                         |
//!
//! [`Report`]: ck_sim::Report

pub mod csv;
pub mod error;
pub mod observer;
pub mod text;
pub mod writer;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use csv::CsvReportWriter;
pub use error::{OutputError, OutputResult};
pub use observer::LogObserver;
pub use text::render_report;
pub use writer::ReportWriter;
