//! Classic console rendering of the final report.

use std::fmt::Write;

use ck_sim::Report;

/// Render the run summary in the classic format, one line per counter:
///
/// ```text
/// Counter 1: (2) Customers Processed, Average Waiting Time - 2.0 seconds
/// ```
pub fn render_report(report: &Report) -> String {
    let mut out = String::from("Simulation Reporting:\n\n");
    for row in &report.counters {
        let _ = writeln!(
            out,
            "Counter {}: ({}) Customers Processed, Average Waiting Time - {:.1} seconds",
            row.counter.0, row.customers_processed, row.average_waiting_secs,
        );
    }
    out
}
