mod mock_alert_source;
mod mock_branch_source;
mod mock_commit_source;
mod mock_directory;
mod mock_progress_reporter;

pub use mock_alert_source::MockAlertSource;
pub use mock_branch_source::MockBranchSource;
pub use mock_commit_source::MockCommitSource;
pub use mock_directory::MockDirectory;
pub use mock_progress_reporter::MockProgressReporter;

use ado_alert_report::prelude::ApiError;

/// How a scripted mock call fails.
#[derive(Debug, Clone, Copy)]
pub enum MockFailure {
    /// The endpoint answered with a non-success status.
    Status(u16),
    /// The call never produced a response.
    Transport,
}

impl MockFailure {
    pub fn to_api_error(self, url: &str) -> ApiError {
        match self {
            MockFailure::Status(status) => ApiError::Status {
                status,
                url: url.to_string(),
            },
            MockFailure::Transport => ApiError::Transport {
                url: url.to_string(),
                details: "mock transport failure".to_string(),
            },
        }
    }
}

/// Lookup key for per-branch scripted behavior.
pub fn branch_key(project: &str, repository: &str, branch: &str) -> String {
    format!("{}/{}@{}", project, repository, branch)
}
