use crate::alert_reporting::domain::{BranchRef, ScanTarget};
use crate::ports::outbound::ApiResult;

/// BranchSource port for enumerating the head refs of a repository
pub trait BranchSource {
    /// Lists the branches of one repository, in API response order.
    ///
    /// Only head refs are requested; the implementation derives the short
    /// branch name and browse URL for each ref.
    ///
    /// # Errors
    /// A non-success status or transport failure skips the whole repository
    /// (no rows emitted), so the caller needs the typed error to log it.
    fn list_branches(&self, target: &ScanTarget) -> ApiResult<Vec<BranchRef>>;
}
