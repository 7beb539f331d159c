/// A resolved (project, repository) pair to be branch-enumerated.
///
/// Produced by scope resolution, consumed by the branch scan loop.
/// Transient - never persisted beyond a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanTarget {
    project: String,
    repository: String,
    web_url: String,
}

impl ScanTarget {
    pub fn new(project: String, repository: String, web_url: String) -> Self {
        Self {
            project,
            repository,
            web_url,
        }
    }

    /// Builds a target without a repository-listing call, deriving the
    /// browse URL from its parts. Used for `repository` scope, where the
    /// only repository is named explicitly and no listing response carries
    /// a `webUrl` for it.
    pub fn derived(organization_url: &str, project: &str, repository: &str) -> Self {
        let web_url = format!(
            "{}/{}/_git/{}",
            organization_url.trim_end_matches('/'),
            urlencoding::encode(project),
            urlencoding::encode(repository)
        );
        Self::new(project.to_string(), repository.to_string(), web_url)
    }

    pub fn project(&self) -> &str {
        &self.project
    }

    pub fn repository(&self) -> &str {
        &self.repository
    }

    pub fn web_url(&self) -> &str {
        &self.web_url
    }

    /// "project/repository" label used in log output.
    pub fn qualified_name(&self) -> String {
        format!("{}/{}", self.project, self.repository)
    }
}
