use super::{branch_key, MockFailure};
use ado_alert_report::prelude::*;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock CommitSource with scripted last commits
///
/// Records every lookup so tests can assert the short-circuit behavior of
/// disabled repositories (no commit call at all).
#[derive(Default)]
pub struct MockCommitSource {
    commits: HashMap<String, std::result::Result<(String, DateTime<Utc>), MockFailure>>,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl MockCommitSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_commit(
        mut self,
        project: &str,
        repository: &str,
        branch: &str,
        author: &str,
        date: DateTime<Utc>,
    ) -> Self {
        self.commits.insert(
            branch_key(project, repository, branch),
            Ok((author.to_string(), date)),
        );
        self
    }

    pub fn with_failure(
        mut self,
        project: &str,
        repository: &str,
        branch: &str,
        failure: MockFailure,
    ) -> Self {
        self.commits
            .insert(branch_key(project, repository, branch), Err(failure));
        self
    }

}

impl CommitSource for MockCommitSource {
    fn latest_commit(&self, target: &ScanTarget, branch: &str) -> ApiResult<Option<CommitInfo>> {
        let key = branch_key(target.project(), target.repository(), branch);
        self.calls.lock().unwrap().push(key.clone());
        match self.commits.get(&key) {
            Some(Ok((author, date))) => {
                Ok(Some(CommitInfo::new(author.clone(), *date)))
            }
            Some(Err(failure)) => Err(failure.to_api_error(&format!(
                "mock:///{}/commits?branch={}",
                target.qualified_name(),
                branch
            ))),
            None => Ok(None),
        }
    }
}
