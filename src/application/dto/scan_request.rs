use crate::alert_reporting::domain::Scope;

/// ScanRequest - Internal request DTO for the alert scan use case
///
/// Carries the resolved scope and its identifying parameters. `project` and
/// `repository` are conditional: project scope needs the former, repository
/// scope needs both. Config resolution validates this before a request is
/// built; the use case re-checks and fails cleanly if handed an
/// inconsistent one.
#[derive(Debug, Clone)]
pub struct ScanRequest {
    pub scope: Scope,
    pub organization_url: String,
    pub project: Option<String>,
    pub repository: Option<String>,
}

impl ScanRequest {
    pub fn new(
        scope: Scope,
        organization_url: String,
        project: Option<String>,
        repository: Option<String>,
    ) -> Self {
        Self {
            scope,
            organization_url,
            project,
            repository,
        }
    }
}
