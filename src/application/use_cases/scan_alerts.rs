use crate::application::dto::{ScanReport, ScanRequest};
use crate::alert_reporting::domain::{
    AlertOutcome, AlertTally, BranchRef, CommitInfo, ReportRow, ScanTarget, Scope,
};
use crate::ports::outbound::{
    AlertSource, BranchSource, CommitSource, ProgressReporter, ProjectDirectory,
};
use crate::shared::error::{ApiError, ReportError};
use crate::shared::Result;

/// ScanAlertsUseCase - Core use case for the branch-level alert scan
///
/// Expands the requested scope into scan targets, then walks them
/// sequentially: enumerate branches, fetch alerts with the enablement
/// fallback, look up the last commit, and merge everything into one row per
/// branch. One HTTP call is in flight at a time; failures degrade or skip
/// exactly as far as the error taxonomy demands, never further.
///
/// # Type Parameters
/// * `D` - ProjectDirectory implementation
/// * `B` - BranchSource implementation
/// * `A` - AlertSource implementation
/// * `C` - CommitSource implementation
/// * `P` - ProgressReporter implementation
pub struct ScanAlertsUseCase<D, B, A, C, P> {
    directory: D,
    branches: B,
    alerts: A,
    commits: C,
    progress: P,
}

impl<D, B, A, C, P> ScanAlertsUseCase<D, B, A, C, P>
where
    D: ProjectDirectory,
    B: BranchSource,
    A: AlertSource,
    C: CommitSource,
    P: ProgressReporter,
{
    /// Creates a new ScanAlertsUseCase with injected dependencies
    pub fn new(directory: D, branches: B, alerts: A, commits: C, progress: P) -> Self {
        Self {
            directory,
            branches,
            alerts,
            commits,
            progress,
        }
    }

    /// Executes the scan.
    ///
    /// # Errors
    /// Fails only on the fatal cases: an inconsistent request, or a failed
    /// project listing under organization scope. Everything else degrades
    /// into skipped targets or flagged rows.
    pub fn execute(&self, request: &ScanRequest) -> Result<ScanReport> {
        let targets = self.resolve_scope(request)?;
        self.progress.info(&format!(
            "🔎 Resolved {} repositorie(s) to scan under {} scope",
            targets.len(),
            request.scope
        ));

        let mut rows = Vec::new();
        for (index, target) in targets.iter().enumerate() {
            let label = target.qualified_name();
            self.progress
                .progress(index, targets.len(), Some(label.as_str()));
            self.scan_target(target, &mut rows);
        }
        if !targets.is_empty() {
            self.progress.progress(targets.len(), targets.len(), None);
        }
        self.progress
            .finish(&format!("Scan complete: {} row(s) collected", rows.len()));

        Ok(ScanReport::new(rows))
    }

    /// Expands the scope selector into an ordered list of scan targets.
    fn resolve_scope(&self, request: &ScanRequest) -> Result<Vec<ScanTarget>> {
        match request.scope {
            Scope::Repository => {
                let project = required(&request.project, request.scope, "project")?;
                let repository = required(&request.repository, request.scope, "repository")?;
                Ok(vec![ScanTarget::derived(
                    &request.organization_url,
                    project,
                    repository,
                )])
            }
            Scope::Project => {
                let project = required(&request.project, request.scope, "project")?;
                Ok(self.targets_for_project(&request.organization_url, project))
            }
            Scope::Organization => {
                // Without the project list nothing can be derived, so this
                // is the one listing failure that aborts the run.
                let projects = self.directory.list_projects().map_err(|e| match e {
                    ApiError::Status { status, .. } => {
                        anyhow::Error::from(ReportError::ProjectListingFailed {
                            organization: request.organization_url.clone(),
                            status,
                        })
                    }
                    other => anyhow::Error::from(other)
                        .context("Listing projects for the organization failed"),
                })?;

                let mut targets = Vec::new();
                for project in &projects {
                    targets.extend(
                        self.targets_for_project(&request.organization_url, &project.name),
                    );
                }
                Ok(targets)
            }
        }
    }

    /// One target per repository of the project, in API response order.
    /// A failed listing contributes zero targets and is logged; it never
    /// aborts the run.
    fn targets_for_project(&self, organization_url: &str, project: &str) -> Vec<ScanTarget> {
        match self.directory.list_repositories(project) {
            Ok(repositories) => repositories
                .into_iter()
                .map(|repo| {
                    let web_url = repo.web_url.unwrap_or_else(|| {
                        ScanTarget::derived(organization_url, project, &repo.name)
                            .web_url()
                            .to_string()
                    });
                    ScanTarget::new(project.to_string(), repo.name, web_url)
                })
                .collect(),
            Err(e) => {
                self.progress
                    .warn(&format!("Skipping project '{}': {}", project, e));
                Vec::new()
            }
        }
    }

    /// Scans every branch of one repository. A failed branch listing skips
    /// the whole repository.
    fn scan_target(&self, target: &ScanTarget, rows: &mut Vec<ReportRow>) {
        let branches = match self.branches.list_branches(target) {
            Ok(branches) => branches,
            Err(e) => {
                self.progress.warn(&format!(
                    "Skipping repository '{}': {}",
                    target.qualified_name(),
                    e
                ));
                return;
            }
        };

        for branch in &branches {
            if let Some(row) = self.scan_branch(target, branch) {
                rows.push(row);
            }
        }
    }

    /// Builds the row for one branch, or `None` when a transport failure
    /// skips the branch entirely.
    fn scan_branch(&self, target: &ScanTarget, branch: &BranchRef) -> Option<ReportRow> {
        let outcome = match self.alerts.list_alerts(target, branch.short_name()) {
            Ok(alerts) => AlertOutcome::Counted(AlertTally::from_severities(
                alerts.iter().map(|a| a.severity.as_str()),
            )),
            Err(e) if e.is_status() => {
                self.progress.warn(&format!(
                    "Alert fetch failed for {}@{}: {}",
                    target.qualified_name(),
                    branch.short_name(),
                    e
                ));
                self.enablement_fallback(target, branch)?
            }
            Err(e) => {
                self.progress.warn(&format!(
                    "Skipping branch '{}' of {}: {}",
                    branch.short_name(),
                    target.qualified_name(),
                    e
                ));
                return None;
            }
        };

        let commit = if outcome.wants_commit_lookup() {
            self.lookup_commit(target, branch)
        } else {
            CommitInfo::unavailable()
        };

        Some(ReportRow::from_parts(target, branch, &outcome, &commit))
    }

    /// Resolves what a failed alert fetch means for the row.
    ///
    /// Confirmed disabled turns into the all-zero row; enabled or an
    /// inconclusive check turns into an explicitly flagged `Unavailable`
    /// row. A transport failure propagates the branch skip (`None`).
    fn enablement_fallback(&self, target: &ScanTarget, branch: &BranchRef) -> Option<AlertOutcome> {
        match self.alerts.advanced_security_enabled(target) {
            Ok(false) => Some(AlertOutcome::Disabled),
            Ok(true) => Some(AlertOutcome::Unavailable {
                enabled: Some(true),
            }),
            Err(e) if e.is_status() => {
                self.progress.warn(&format!(
                    "Enablement check inconclusive for {}: {}",
                    target.qualified_name(),
                    e
                ));
                Some(AlertOutcome::Unavailable { enabled: None })
            }
            Err(e) => {
                self.progress.warn(&format!(
                    "Skipping branch '{}' of {}: {}",
                    branch.short_name(),
                    target.qualified_name(),
                    e
                ));
                None
            }
        }
    }

    fn lookup_commit(&self, target: &ScanTarget, branch: &BranchRef) -> CommitInfo {
        match self.commits.latest_commit(target, branch.short_name()) {
            Ok(Some(commit)) => commit,
            Ok(None) => CommitInfo::unavailable(),
            Err(e) => {
                self.progress.warn(&format!(
                    "Commit lookup failed for {}@{}: {}",
                    target.qualified_name(),
                    branch.short_name(),
                    e
                ));
                CommitInfo::unavailable()
            }
        }
    }
}

/// A scope parameter the request must carry to be resolvable.
fn required<'a>(value: &'a Option<String>, scope: Scope, missing: &str) -> Result<&'a str> {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .ok_or_else(|| {
            ReportError::IncompleteScope {
                scope: scope.to_string(),
                missing: missing.to_string(),
            }
            .into()
        })
}
