use crate::shared::error::ApiError;
use crate::shared::Result;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Outcome of a single GET call: status code plus raw body.
///
/// A non-2xx status is data here, not an error. The caller inspects the
/// status explicitly and decides whether to fall back, skip or abort;
/// only transport-level failures surface as `ApiError`.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: u16,
    body: String,
    url: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: String, url: String) -> Self {
        Self { status, body, url }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Deserializes the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> std::result::Result<T, ApiError> {
        serde_json::from_str(&self.body).map_err(|e| ApiError::Decode {
            url: self.url.clone(),
            details: e.to_string(),
        })
    }
}

/// Thin authenticated HTTP adapter over the blocking reqwest client.
///
/// Every call carries the same basic-auth credential (personal access token
/// with an empty user name, the scheme the platform expects) and the same
/// timeout. One request in flight at a time; no retries.
#[derive(Clone)]
pub struct RestClient {
    client: reqwest::blocking::Client,
    credential: String,
}

impl RestClient {
    const TIMEOUT_SECONDS: u64 = 30;

    /// Creates a new client with default configuration.
    pub fn new(credential: String) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("ado-alert-report/{}", version);
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(Self::TIMEOUT_SECONDS))
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client, credential })
    }

    /// Issues one authenticated GET request.
    ///
    /// # Errors
    /// `ApiError::Transport` on connection, timeout or body-read failures.
    /// Non-success statuses are returned inside the `ApiResponse`.
    pub fn get(&self, url: &str) -> std::result::Result<ApiResponse, ApiError> {
        let response = self
            .client
            .get(url)
            .basic_auth("", Some(&self.credential))
            .send()
            .map_err(|e| ApiError::Transport {
                url: url.to_string(),
                details: e.to_string(),
            })?;

        let status = response.status().as_u16();
        let body = response.text().map_err(|e| ApiError::Transport {
            url: url.to_string(),
            details: e.to_string(),
        })?;

        Ok(ApiResponse::new(status, body, url.to_string()))
    }
}
