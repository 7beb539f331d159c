/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (REST API, file system, console, CI).
pub mod alert_source;
pub mod branch_source;
pub mod commit_source;
pub mod progress_reporter;
pub mod project_directory;
pub mod report_formatter;
pub mod report_sink;

pub use alert_source::{AlertRecord, AlertSource};
pub use branch_source::BranchSource;
pub use commit_source::CommitSource;
pub use progress_reporter::ProgressReporter;
pub use project_directory::{ProjectDirectory, ProjectRecord, RepositoryRecord};
pub use report_formatter::ReportFormatter;
pub use report_sink::ReportSink;

use crate::shared::error::ApiError;

/// Result type for single REST calls. Unlike the crate-wide `Result`, the
/// error stays typed so callers can distinguish a non-success status (handle
/// with a fallback) from a transport failure (skip the work item).
pub type ApiResult<T> = std::result::Result<T, ApiError>;
