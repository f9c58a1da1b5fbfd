//! CSV report backend.
//!
//! Creates `counter_report.csv` in the configured output directory.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use ck_sim::Report;

use crate::OutputResult;
use crate::writer::ReportWriter;

/// Writes the per-counter report to a CSV file.
pub struct CsvReportWriter {
    rows:     Writer<File>,
    finished: bool,
}

impl CsvReportWriter {
    /// Open (or create) `counter_report.csv` in `dir` and write the header
    /// row.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut rows = Writer::from_path(dir.join("counter_report.csv"))?;
        rows.write_record(["counter", "customers_processed", "average_waiting_secs"])?;

        Ok(Self { rows, finished: false })
    }
}

impl ReportWriter for CsvReportWriter {
    fn write_report(&mut self, report: &Report) -> OutputResult<()> {
        for row in &report.counters {
            self.rows.write_record(&[
                row.counter.0.to_string(),
                row.customers_processed.to_string(),
                format!("{:.1}", row.average_waiting_secs),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.rows.flush()?;
        Ok(())
    }
}
