use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the scan completed, including the "nothing found" case
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (missing credential, fatal API error, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Failure of a single REST call.
///
/// The scan loop reacts differently to a non-success status (fall back,
/// degrade the row) than to a transport failure (skip the branch), so the
/// two are kept as separate variants instead of one opaque error.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{url} returned HTTP {status}")]
    Status { status: u16, url: String },

    #[error("Transport failure calling {url}: {details}")]
    Transport { url: String, details: String },

    #[error("Failed to decode response from {url}: {details}")]
    Decode { url: String, details: String },
}

impl ApiError {
    /// True for the non-success-status case, which the caller may handle
    /// with a fallback rather than skipping the work item.
    pub fn is_status(&self) -> bool {
        matches!(self, ApiError::Status { .. })
    }
}

/// Application-specific errors for report generation.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("No credential provided\n\n💡 Hint: Set the ADO_PAT environment variable (or SYSTEM_ACCESSTOKEN in a pipeline) to a personal access token with Code (read) and Advanced Security (read) scopes")]
    MissingCredential,

    #[error("No organization URL provided\n\n💡 Hint: Pass --organization or set ADO_ORGANIZATION_URL (SYSTEM_COLLECTIONURI is used automatically inside Azure Pipelines)")]
    MissingOrganization,

    #[error("Scope '{scope}' requires a {missing}\n\n💡 Hint: Pass --{missing} or set the matching environment variable")]
    IncompleteScope { scope: String, missing: String },

    #[error("Listing projects for {organization} failed with HTTP {status}; no scan targets can be derived")]
    ProjectListingFailed { organization: String, status: u16 },

    #[error("Report file name {name:?} contains no usable characters\n\n💡 Hint: File names keep only letters, digits, '.', '_' and '-'")]
    UnusableFileName { name: String },

    #[error("Failed to write report to {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    ReportWriteError { path: PathBuf, details: String },

    #[error("Failed to load config file: {path}\nDetails: {details}")]
    ConfigError { path: PathBuf, details: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::InvalidArguments),
            "Invalid Arguments (2)"
        );
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_api_error_status_display() {
        let error = ApiError::Status {
            status: 404,
            url: "https://dev.azure.com/contoso/_apis/projects".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("404"));
        assert!(display.contains("_apis/projects"));
        assert!(error.is_status());
    }

    #[test]
    fn test_api_error_transport_is_not_status() {
        let error = ApiError::Transport {
            url: "https://dev.azure.com".to_string(),
            details: "connection refused".to_string(),
        };
        assert!(!error.is_status());
        assert!(format!("{}", error).contains("connection refused"));
    }

    #[test]
    fn test_missing_credential_display() {
        let display = format!("{}", ReportError::MissingCredential);
        assert!(display.contains("No credential provided"));
        assert!(display.contains("ADO_PAT"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_project_listing_failed_display() {
        let error = ReportError::ProjectListingFailed {
            organization: "https://dev.azure.com/contoso".to_string(),
            status: 401,
        };
        let display = format!("{}", error);
        assert!(display.contains("contoso"));
        assert!(display.contains("401"));
        assert!(display.contains("no scan targets"));
    }

    #[test]
    fn test_unusable_file_name_display() {
        let error = ReportError::UnusableFileName {
            name: "!!!".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("!!!"));
        assert!(display.contains("no usable characters"));
    }

    #[test]
    fn test_report_write_error_display() {
        let error = ReportError::ReportWriteError {
            path: PathBuf::from("/tmp/report.csv"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("/tmp/report.csv"));
        assert!(display.contains("Permission denied"));
    }
}
