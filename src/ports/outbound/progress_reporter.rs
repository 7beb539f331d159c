/// ProgressReporter port for user feedback during a scan
///
/// Abstracts console output so the scan loop stays testable and stdout is
/// left untouched for the sinks.
pub trait ProgressReporter {
    /// Reports a routine status message.
    fn info(&self, message: &str);

    /// Reports progress through the resolved scan targets.
    fn progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a non-fatal problem (a skipped target, a degraded row).
    fn warn(&self, message: &str);

    /// Reports the end of the run.
    fn finish(&self, message: &str);
}
