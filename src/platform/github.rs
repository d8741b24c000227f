//! GitHub issue service implementation

use crate::error::{Error, Result};
use crate::platform::IssueService;
use crate::types::{CreatedIssue, QuotaState, RepoConfig, SubmissionRequest};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// GitHub service using reqwest
pub struct GitHubService {
    client: Client,
    config: RepoConfig,
}

#[derive(Serialize)]
struct CreateIssuePayload<'a> {
    title: &'a str,
    body: &'a str,
    #[serde(skip_serializing_if = "<[String]>::is_empty")]
    assignees: &'a [String],
    #[serde(skip_serializing_if = "<[String]>::is_empty")]
    labels: &'a [String],
}

#[derive(Deserialize)]
struct RateLimitResponse {
    rate: QuotaState,
}

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

const GITHUB_ACCEPT: &str = "application/vnd.github+json";

impl GitHubService {
    /// Create a new GitHub service
    pub fn new(token: &str, config: RepoConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|_| Error::Auth("token contains invalid characters".to_string()))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_ACCEPT));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("gh-batch-tools/", env!("CARGO_PKG_VERSION"))),
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()?;

        Ok(Self { client, config })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.config.api_url, path)
    }
}

#[async_trait]
impl IssueService for GitHubService {
    async fn create_issue(&self, request: &SubmissionRequest) -> Result<CreatedIssue> {
        let url = self.api_url(&format!(
            "/repos/{}/{}/issues",
            self.config.owner, self.config.repo
        ));

        let payload = CreateIssuePayload {
            title: request.title(),
            body: request.body(),
            assignees: request.assignees(),
            labels: request.labels(),
        };

        debug!(%url, title = request.title(), "creating issue");
        let response = self.client.post(&url).json(&payload).send().await?;

        let status = response.status();
        if status != StatusCode::CREATED {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Service {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }

    async fn rate_limit(&self) -> Result<QuotaState> {
        let url = self.api_url("/rate_limit");

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Service {
                status: status.as_u16(),
                body,
            });
        }

        let limits: RateLimitResponse = response.json().await?;
        debug!(
            remaining = limits.rate.remaining,
            reset = limits.rate.reset_at_epoch_seconds,
            "rate limit"
        );
        Ok(limits.rate)
    }
}
