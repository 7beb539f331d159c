use crate::shared::Result;
use std::path::{Path, PathBuf};

/// ReportSink port for delivering the finished report
///
/// Abstracts where the report lands and how its location is announced, so
/// the scan core has zero knowledge of the execution environment. Two
/// implementations exist: the working directory for interactive runs, and
/// the artifact staging directory plus logging directives when running
/// inside a pipeline.
pub trait ReportSink {
    /// Writes the report under the given (already sanitized) file name,
    /// overwriting any existing file.
    ///
    /// # Returns
    /// The full path the report was written to.
    fn write(&self, file_name: &str, content: &str) -> Result<PathBuf>;

    /// Announces where the report can be found, in whatever form the
    /// environment understands (console message, CI logging directive).
    fn announce(&self, path: &Path);

    /// Signals that the run finished. A no-op outside CI.
    fn complete(&self);
}
