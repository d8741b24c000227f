//! Issue service for GitHub
//!
//! Provides the narrow interface the batch importer needs from the tracker.

mod factory;
mod github;

pub use factory::create_issue_service;
pub use github::GitHubService;

use crate::error::Result;
use crate::types::{CreatedIssue, QuotaState, SubmissionRequest};
use async_trait::async_trait;

/// Issue-tracker operations used by the importer
///
/// This trait abstracts the HTTP API so the batch logic can run against a
/// mock in tests.
#[async_trait]
pub trait IssueService: Send + Sync {
    /// Create one issue
    ///
    /// Anything other than `201 Created` is reported as [`crate::error::Error::Service`].
    async fn create_issue(&self, request: &SubmissionRequest) -> Result<CreatedIssue>;

    /// Fetch the current core rate-limit window
    async fn rate_limit(&self) -> Result<QuotaState>;
}
