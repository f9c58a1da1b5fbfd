//! Backend-agnostic report writer trait.

use ck_sim::Report;

use crate::OutputResult;

/// Persistence backend for a final [`Report`].
pub trait ReportWriter {
    /// Write every per-counter row of `report`.
    fn write_report(&mut self, report: &Report) -> OutputResult<()>;

    /// Flush and close the backend.  Must be idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
