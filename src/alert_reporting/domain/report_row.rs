use crate::alert_reporting::domain::{AlertOutcome, BranchRef, CommitInfo, ScanTarget};

/// Quality of the alert data behind a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertDataStatus {
    /// Counts come from a successful alert fetch.
    Ok,
    /// Advanced Security is disabled for the repository; counts are zero.
    Disabled,
    /// The alert fetch failed while Advanced Security was enabled or its
    /// state could not be confirmed; counts are zero and untrustworthy.
    Unavailable,
}

impl AlertDataStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertDataStatus::Ok => "ok",
            AlertDataStatus::Disabled => "disabled",
            AlertDataStatus::Unavailable => "unavailable",
        }
    }
}

impl std::fmt::Display for AlertDataStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&AlertOutcome> for AlertDataStatus {
    fn from(outcome: &AlertOutcome) -> Self {
        match outcome {
            AlertOutcome::Counted(_) => AlertDataStatus::Ok,
            AlertOutcome::Disabled => AlertDataStatus::Disabled,
            AlertOutcome::Unavailable { .. } => AlertDataStatus::Unavailable,
        }
    }
}

/// One row of the final report: the flattened union of scan target, branch,
/// alert tally and commit metadata.
///
/// Invariant: project, repository and branch are never empty; counts are the
/// explicit zero fallback whenever `alert_data` is not `Ok`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub project: String,
    pub repository: String,
    pub repository_url: String,
    pub branch: String,
    pub branch_url: String,
    pub critical: u32,
    pub high: u32,
    pub medium: u32,
    pub low: u32,
    pub advanced_security_enabled: Option<bool>,
    pub alert_data: AlertDataStatus,
    pub last_committer: String,
    pub last_commit_date: String,
}

impl ReportRow {
    /// Column names, in output order. The CSV header row is derived from
    /// this list.
    pub const HEADERS: [&'static str; 13] = [
        "project",
        "repository",
        "repository_url",
        "branch",
        "branch_url",
        "critical",
        "high",
        "medium",
        "low",
        "advanced_security_enabled",
        "alert_data",
        "last_committer",
        "last_commit_date",
    ];

    pub fn from_parts(
        target: &ScanTarget,
        branch: &BranchRef,
        outcome: &AlertOutcome,
        commit: &CommitInfo,
    ) -> Self {
        let tally = outcome.tally();
        Self {
            project: target.project().to_string(),
            repository: target.repository().to_string(),
            repository_url: target.web_url().to_string(),
            branch: branch.short_name().to_string(),
            branch_url: branch.browse_url().to_string(),
            critical: tally.critical,
            high: tally.high,
            medium: tally.medium,
            low: tally.low,
            advanced_security_enabled: outcome.enabled(),
            alert_data: AlertDataStatus::from(outcome),
            last_committer: commit.author_display(),
            last_commit_date: commit.date_display(),
        }
    }

    /// Enablement posture as a CSV cell: `true`, `false`, or empty when the
    /// check was inconclusive.
    pub fn enabled_display(&self) -> String {
        self.advanced_security_enabled
            .map(|e| e.to_string())
            .unwrap_or_default()
    }
}
