use crate::alert_reporting::domain::{CommitInfo, ScanTarget};
use crate::ports::outbound::ApiResult;

/// CommitSource port for last-commit metadata
pub trait CommitSource {
    /// Fetches the single most recent commit on a branch.
    ///
    /// Returns `Ok(None)` when the branch has no commits (the API answers
    /// with an empty list). Failures degrade the row to `N/A` fields at the
    /// call site; they never abort the scan.
    fn latest_commit(&self, target: &ScanTarget, branch: &str) -> ApiResult<Option<CommitInfo>>;
}
