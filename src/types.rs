//! Core types for gh-batch-tools

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Default GitHub REST API endpoint
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// One issue to create, derived from one input record
///
/// Immutable once constructed; the title is guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRequest {
    title: String,
    body: String,
    assignees: Vec<String>,
    labels: Vec<String>,
}

impl SubmissionRequest {
    /// Build a request, rejecting a blank title
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        assignees: Vec<String>,
        labels: Vec<String>,
    ) -> Result<Self> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(Error::InvalidRequest("title must not be empty".to_string()));
        }

        Ok(Self {
            title,
            body: body.into(),
            assignees,
            labels,
        })
    }

    /// Issue title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Issue body (markdown)
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Logins to assign, in input order
    pub fn assignees(&self) -> &[String] {
        &self.assignees
    }

    /// Labels to apply, in input order
    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}

/// An issue the service reported as created
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedIssue {
    /// Issue number in the repository
    pub number: u64,
    /// Web URL for the issue
    #[serde(default)]
    pub html_url: String,
}

/// Outcome of a single submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    /// The service created the issue
    Success(CreatedIssue),
    /// The submission did not go through
    Failure {
        /// Response or transport error text
        reason: String,
    },
}

impl SubmissionResult {
    /// Whether the issue was created
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

/// Remaining request quota as reported by the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotaState {
    /// Requests left in the current window
    pub remaining: u64,
    /// When the window resets (unix epoch seconds)
    #[serde(rename = "reset")]
    pub reset_at_epoch_seconds: i64,
}

/// Aggregate counts for a processed batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchCounts {
    /// Issues created
    pub created: usize,
    /// Submissions that failed
    pub failed: usize,
}

impl BatchCounts {
    /// Number of requests processed
    pub const fn total(&self) -> usize {
        self.created + self.failed
    }

    /// Count one outcome
    pub fn record(&mut self, result: &SubmissionResult) {
        if result.is_success() {
            self.created += 1;
        } else {
            self.failed += 1;
        }
    }
}

/// Target repository and API endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoConfig {
    /// API base URL, without trailing slash
    pub api_url: String,
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
}

impl RepoConfig {
    /// Create a config, normalizing the API URL
    pub fn new(api_url: &str, owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    /// `owner/repo`
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }

    /// Browser URL of the repository's issue list
    ///
    /// Assumes github.com unless the API lives on a GitHub Enterprise host.
    pub fn issues_web_url(&self) -> String {
        let web_base = self
            .api_url
            .strip_suffix("/api/v3")
            .unwrap_or("https://github.com");
        format!("{web_base}/{}/{}/issues", self.owner, self.repo)
    }
}
