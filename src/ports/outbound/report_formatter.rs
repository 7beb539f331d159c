use crate::alert_reporting::domain::ReportRow;
use crate::shared::Result;

/// ReportFormatter port for serializing the accumulated rows
///
/// # Returns
/// The full report document as a string, header row included.
pub trait ReportFormatter {
    /// Serializes the rows in accumulation order.
    ///
    /// # Errors
    /// Returns an error if serialization fails (e.g. the writer rejects a
    /// record).
    fn format(&self, rows: &[ReportRow]) -> Result<String>;
}
