use super::MockFailure;
use ado_alert_report::prelude::*;
use std::collections::HashMap;

/// Mock ProjectDirectory with scripted project and repository listings
#[derive(Default)]
pub struct MockDirectory {
    list_projects_failure: Option<MockFailure>,
    projects: Vec<String>,
    repositories: HashMap<String, std::result::Result<Vec<String>, MockFailure>>,
}

impl MockDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_project(mut self, project: &str, repositories: &[&str]) -> Self {
        self.projects.push(project.to_string());
        self.repositories.insert(
            project.to_string(),
            Ok(repositories.iter().map(|r| r.to_string()).collect()),
        );
        self
    }

    /// A project whose repository listing fails.
    pub fn with_failing_project(mut self, project: &str, failure: MockFailure) -> Self {
        self.projects.push(project.to_string());
        self.repositories.insert(project.to_string(), Err(failure));
        self
    }

    pub fn with_projects_failure(failure: MockFailure) -> Self {
        Self {
            list_projects_failure: Some(failure),
            ..Self::default()
        }
    }
}

impl ProjectDirectory for MockDirectory {
    fn list_projects(&self) -> ApiResult<Vec<ProjectRecord>> {
        if let Some(failure) = self.list_projects_failure {
            return Err(failure.to_api_error("mock:///_apis/projects"));
        }
        Ok(self
            .projects
            .iter()
            .map(|name| ProjectRecord { name: name.clone() })
            .collect())
    }

    fn list_repositories(&self, project: &str) -> ApiResult<Vec<RepositoryRecord>> {
        match self.repositories.get(project) {
            Some(Ok(repositories)) => Ok(repositories
                .iter()
                .map(|name| RepositoryRecord {
                    name: name.clone(),
                    web_url: None,
                })
                .collect()),
            Some(Err(failure)) => Err(failure
                .to_api_error(&format!("mock:///{}/_apis/git/repositories", project))),
            None => Ok(Vec::new()),
        }
    }
}
