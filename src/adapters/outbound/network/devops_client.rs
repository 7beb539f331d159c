use crate::adapters::outbound::network::RestClient;
use crate::alert_reporting::domain::{BranchRef, CommitInfo, ScanTarget};
use crate::ports::outbound::{
    AlertRecord, AlertSource, ApiResult, BranchSource, CommitSource, ProjectDirectory,
    ProjectRecord, RepositoryRecord,
};
use crate::shared::error::ApiError;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use urlencoding::encode;

/// Azure DevOps REST adapter implementing the four data-source ports.
///
/// All endpoints are read-only GETs pinned to fixed API versions. Listing
/// calls request one generous page and do not page further; for alerts the
/// ceiling is `ALERT_PAGE_CEILING` and anything beyond it is not fetched.
#[derive(Clone)]
pub struct DevOpsClient {
    rest: RestClient,
    organization_url: String,
}

impl DevOpsClient {
    const GIT_API_VERSION: &'static str = "7.1";
    const PROJECTS_API_VERSION: &'static str = "7.1";
    const ALERT_API_VERSION: &'static str = "7.2-preview.1";
    const PROJECT_PAGE_SIZE: u32 = 1000;
    /// Alerts beyond this ceiling are silently dropped. Accepted limitation.
    pub const ALERT_PAGE_CEILING: u32 = 10_000;

    pub fn new(organization_url: &str, rest: RestClient) -> Self {
        Self {
            rest,
            organization_url: organization_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn organization_url(&self) -> &str {
        &self.organization_url
    }

    fn projects_url(&self) -> String {
        format!(
            "{}/_apis/projects?$top={}&api-version={}",
            self.organization_url,
            Self::PROJECT_PAGE_SIZE,
            Self::PROJECTS_API_VERSION
        )
    }

    fn repositories_url(&self, project: &str) -> String {
        format!(
            "{}/{}/_apis/git/repositories?api-version={}",
            self.organization_url,
            encode(project),
            Self::GIT_API_VERSION
        )
    }

    fn refs_url(&self, target: &ScanTarget) -> String {
        format!(
            "{}/{}/_apis/git/repositories/{}/refs?filter=heads/&api-version={}",
            self.organization_url,
            encode(target.project()),
            encode(target.repository()),
            Self::GIT_API_VERSION
        )
    }

    fn alerts_url(&self, target: &ScanTarget, branch: &str) -> String {
        format!(
            "{}/{}/_apis/alert/repositories/{}/alerts?top={}&criteria.ref=refs/heads/{}&api-version={}",
            self.organization_url,
            encode(target.project()),
            encode(target.repository()),
            Self::ALERT_PAGE_CEILING,
            encode(branch),
            Self::ALERT_API_VERSION
        )
    }

    fn enablement_url(&self, target: &ScanTarget) -> String {
        format!(
            "{}/{}/_apis/management/repositories/{}/enablement?api-version={}",
            self.organization_url,
            encode(target.project()),
            encode(target.repository()),
            Self::ALERT_API_VERSION
        )
    }

    fn commits_url(&self, target: &ScanTarget, branch: &str) -> String {
        format!(
            "{}/{}/_apis/git/repositories/{}/commits?searchCriteria.itemVersion.version={}&searchCriteria.$top=1&api-version={}",
            self.organization_url,
            encode(target.project()),
            encode(target.repository()),
            encode(branch),
            Self::GIT_API_VERSION
        )
    }

    /// GETs a list endpoint and unwraps the `{count, value}` envelope.
    fn fetch_list<T: DeserializeOwned>(&self, url: &str) -> ApiResult<Vec<T>> {
        let response = self.rest.get(url)?;
        if !response.is_success() {
            return Err(ApiError::Status {
                status: response.status(),
                url: url.to_string(),
            });
        }
        let list: ListEnvelope<T> = response.json()?;
        Ok(list.value)
    }
}

impl ProjectDirectory for DevOpsClient {
    fn list_projects(&self) -> ApiResult<Vec<ProjectRecord>> {
        let projects: Vec<ProjectDto> = self.fetch_list(&self.projects_url())?;
        Ok(projects
            .into_iter()
            .map(|p| ProjectRecord { name: p.name })
            .collect())
    }

    fn list_repositories(&self, project: &str) -> ApiResult<Vec<RepositoryRecord>> {
        let repositories: Vec<RepositoryDto> = self.fetch_list(&self.repositories_url(project))?;
        Ok(repositories
            .into_iter()
            .map(|r| RepositoryRecord {
                name: r.name,
                web_url: r.web_url,
            })
            .collect())
    }
}

impl BranchSource for DevOpsClient {
    fn list_branches(&self, target: &ScanTarget) -> ApiResult<Vec<BranchRef>> {
        let refs: Vec<RefDto> = self.fetch_list(&self.refs_url(target))?;
        Ok(refs
            .into_iter()
            .map(|r| BranchRef::from_ref(&r.name, target.web_url()))
            .collect())
    }
}

impl AlertSource for DevOpsClient {
    fn list_alerts(&self, target: &ScanTarget, branch: &str) -> ApiResult<Vec<AlertRecord>> {
        let alerts: Vec<AlertDto> = self.fetch_list(&self.alerts_url(target, branch))?;
        Ok(alerts
            .into_iter()
            .map(|a| AlertRecord {
                severity: a.severity.unwrap_or_default(),
            })
            .collect())
    }

    fn advanced_security_enabled(&self, target: &ScanTarget) -> ApiResult<bool> {
        let url = self.enablement_url(target);
        let response = self.rest.get(&url)?;
        if !response.is_success() {
            return Err(ApiError::Status {
                status: response.status(),
                url,
            });
        }
        let enablement: EnablementDto = response.json()?;
        Ok(enablement.adv_sec_enabled)
    }
}

impl CommitSource for DevOpsClient {
    fn latest_commit(&self, target: &ScanTarget, branch: &str) -> ApiResult<Option<CommitInfo>> {
        let commits: Vec<CommitDto> = self.fetch_list(&self.commits_url(target, branch))?;
        Ok(commits.into_iter().next().map(|c| {
            let author = c.author.unwrap_or_default();
            CommitInfo::from_parts(author.name, author.date)
        }))
    }
}

// REST payload envelopes. Every list endpoint wraps its items in
// {"count": n, "value": [...]}; only `value` is consumed.

#[derive(Debug, Deserialize)]
struct ListEnvelope<T> {
    #[serde(default = "Vec::new")]
    value: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct ProjectDto {
    name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RepositoryDto {
    name: String,
    #[serde(default)]
    web_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RefDto {
    name: String,
}

#[derive(Debug, Deserialize)]
struct AlertDto {
    #[serde(default)]
    severity: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EnablementDto {
    #[serde(default)]
    adv_sec_enabled: bool,
}

#[derive(Debug, Deserialize)]
struct CommitDto {
    #[serde(default)]
    author: Option<AuthorDto>,
}

#[derive(Debug, Deserialize, Default)]
struct AuthorDto {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    date: Option<DateTime<Utc>>,
}
