use super::MockFailure;
use ado_alert_report::prelude::*;
use std::collections::HashMap;

/// Mock BranchSource with scripted head refs per repository
#[derive(Default)]
pub struct MockBranchSource {
    branches: HashMap<String, std::result::Result<Vec<String>, MockFailure>>,
}

impl MockBranchSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts the raw ref names of one repository.
    pub fn with_branches(mut self, project: &str, repository: &str, refs: &[&str]) -> Self {
        self.branches.insert(
            format!("{}/{}", project, repository),
            Ok(refs.iter().map(|r| r.to_string()).collect()),
        );
        self
    }

    pub fn with_failure(mut self, project: &str, repository: &str, failure: MockFailure) -> Self {
        self.branches
            .insert(format!("{}/{}", project, repository), Err(failure));
        self
    }
}

impl BranchSource for MockBranchSource {
    fn list_branches(&self, target: &ScanTarget) -> ApiResult<Vec<BranchRef>> {
        match self.branches.get(&target.qualified_name()) {
            Some(Ok(refs)) => Ok(refs
                .iter()
                .map(|name| BranchRef::from_ref(name, target.web_url()))
                .collect()),
            Some(Err(failure)) => Err(failure.to_api_error(&format!(
                "mock:///{}/refs",
                target.qualified_name()
            ))),
            None => Ok(Vec::new()),
        }
    }
}
