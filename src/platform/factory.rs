//! Issue service factory
//!
//! Creates issue services based on configuration.

use crate::auth::GitHubAuthConfig;
use crate::error::Result;
use crate::platform::{GitHubService, IssueService};
use crate::types::RepoConfig;

/// Create an issue service from configuration and resolved credentials
pub fn create_issue_service(
    config: &RepoConfig,
    auth: &GitHubAuthConfig,
) -> Result<Box<dyn IssueService>> {
    Ok(Box::new(GitHubService::new(&auth.token, config.clone())?))
}
