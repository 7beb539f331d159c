//! ado-alert-report - branch-level Advanced Security reports for Azure DevOps
//!
//! This library scans an organization, a project or a single repository,
//! fetches the Advanced Security alerts and last-commit metadata for every
//! branch, and serializes the result as a CSV report.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`alert_reporting`): Pure scan types, no I/O
//! - **Application Layer** (`application`): The scan use case and its DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use ado_alert_report::prelude::*;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let rest = RestClient::new("personal-access-token".to_string())?;
//! let api = DevOpsClient::new("https://dev.azure.com/contoso", rest);
//! let progress = StderrProgressReporter::new();
//!
//! // Create use case (the API client implements all four source ports)
//! let use_case =
//!     ScanAlertsUseCase::new(api.clone(), api.clone(), api.clone(), api, progress);
//!
//! // Execute
//! let request = ScanRequest::new(
//!     Scope::Project,
//!     "https://dev.azure.com/contoso".to_string(),
//!     Some("Platform".to_string()),
//!     None,
//! );
//! let report = use_case.execute(&request)?;
//!
//! // Serialize and deliver
//! let content = CsvFormatter::new().format(report.rows())?;
//! let sink = LocalDirSink::current_dir();
//! let path = sink.write("advanced-security-report.csv", &content)?;
//! sink.announce(&path);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod alert_reporting;
pub mod application;
pub mod cli;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::formatters::CsvFormatter;
    pub use crate::adapters::outbound::network::{ApiResponse, DevOpsClient, RestClient};
    pub use crate::adapters::outbound::sink::{detect_sink, LocalDirSink, PipelineSink};
    pub use crate::alert_reporting::domain::{
        AlertDataStatus, AlertOutcome, AlertTally, BranchRef, CommitInfo, ReportRow, ScanTarget,
        Scope, Severity,
    };
    pub use crate::application::dto::{ScanReport, ScanRequest};
    pub use crate::application::use_cases::ScanAlertsUseCase;
    pub use crate::config::{AppConfig, ConfigFile, EnvDefaults};
    pub use crate::ports::outbound::{
        AlertRecord, AlertSource, ApiResult, BranchSource, CommitSource, ProgressReporter,
        ProjectDirectory, ProjectRecord, ReportFormatter, ReportSink, RepositoryRecord,
    };
    pub use crate::shared::error::{ApiError, ExitCode, ReportError};
    pub use crate::shared::Result;
}
