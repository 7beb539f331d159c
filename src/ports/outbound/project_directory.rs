use crate::ports::outbound::ApiResult;

/// A project as returned by the project-listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRecord {
    pub name: String,
}

/// A repository as returned by the repository-listing endpoint.
///
/// `web_url` is the browse URL the API reports for the repository; it is
/// `None` when the payload omits it, in which case the caller derives one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryRecord {
    pub name: String,
    pub web_url: Option<String>,
}

/// ProjectDirectory port for expanding a scan scope
///
/// Abstracts the two listing endpoints scope resolution depends on:
/// projects of the organization and repositories of a project.
pub trait ProjectDirectory {
    /// Lists every project in the organization.
    ///
    /// # Errors
    /// `ApiError::Status` when the endpoint answers with a non-success
    /// status; `ApiError::Transport`/`Decode` on lower-level failures.
    fn list_projects(&self) -> ApiResult<Vec<ProjectRecord>>;

    /// Lists every Git repository in one project, in API response order.
    fn list_repositories(&self, project: &str) -> ApiResult<Vec<RepositoryRecord>>;
}
