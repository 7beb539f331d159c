use crate::alert_reporting::domain::ScanTarget;
use crate::ports::outbound::ApiResult;

/// One security alert, reduced to the field the tally needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertRecord {
    pub severity: String,
}

/// AlertSource port for the Advanced Security data of a repository
///
/// Two operations that the scan combines into its fallback chain: fetch the
/// alerts of one branch, and - when that fails with a non-success status -
/// check whether Advanced Security is enabled at all for the repository.
pub trait AlertSource {
    /// Fetches the security alerts scoped to one branch.
    ///
    /// A single page with a fixed generous size ceiling is requested; alerts
    /// beyond the ceiling are not fetched. This is an accepted limitation.
    fn list_alerts(&self, target: &ScanTarget, branch: &str) -> ApiResult<Vec<AlertRecord>>;

    /// Reads the Advanced Security enablement state of the repository.
    fn advanced_security_enabled(&self, target: &ScanTarget) -> ApiResult<bool>;
}
