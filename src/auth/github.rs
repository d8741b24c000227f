//! GitHub authentication

use crate::auth::AuthSource;
use crate::error::{Error, Result};
use crate::types::RepoConfig;
use serde::Deserialize;
use std::env;
use tokio::process::Command;
use tracing::debug;

/// Environment variables checked for a token, in priority order
pub const TOKEN_ENV_VARS: [&str; 2] = ["GITHUB_TOKEN", "GH_TOKEN"];

/// GitHub authentication configuration
#[derive(Debug, Clone)]
pub struct GitHubAuthConfig {
    /// Authentication token
    pub token: String,
    /// Where the token was obtained from
    pub source: AuthSource,
}

/// Get GitHub authentication
///
/// Priority:
/// 1. `GITHUB_TOKEN` environment variable (a `.env` file in the working
///    directory is loaded first)
/// 2. `GH_TOKEN` environment variable
/// 3. gh CLI (`gh auth token`)
pub async fn get_github_auth() -> Result<GitHubAuthConfig> {
    dotenv::dotenv().ok();

    if let Some(config) = token_from_env(|key| env::var(key).ok()) {
        return Ok(config);
    }

    if let Some(token) = get_gh_cli_token().await {
        return Ok(GitHubAuthConfig {
            token,
            source: AuthSource::Cli,
        });
    }

    Err(Error::Auth(
        "No GitHub token found. Set GITHUB_TOKEN (or add it to a .env file) or run `gh auth login`"
            .to_string(),
    ))
}

/// Pick the first non-blank token among [`TOKEN_ENV_VARS`]
pub fn token_from_env(lookup: impl Fn(&str) -> Option<String>) -> Option<GitHubAuthConfig> {
    TOKEN_ENV_VARS.iter().find_map(|key| {
        lookup(key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(|token| GitHubAuthConfig {
                token,
                source: AuthSource::EnvVar,
            })
    })
}

async fn get_gh_cli_token() -> Option<String> {
    // Check gh is available
    Command::new("gh")
        .arg("--version")
        .output()
        .await
        .ok()?;

    let output = Command::new("gh")
        .args(["auth", "token"])
        .output()
        .await
        .ok()?;

    if !output.status.success() {
        return None;
    }

    let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

#[derive(Deserialize)]
struct Login {
    login: String,
}

/// Verify that the target repository is reachable with this token
///
/// Returns the authenticated login when the token may read `/user`.
/// Installation tokens (e.g. the Actions `GITHUB_TOKEN`) are refused there
/// but can still create issues, so only the repository lookup is a gate.
pub async fn verify_github_access(
    config: &GitHubAuthConfig,
    repo: &RepoConfig,
) -> Result<Option<String>> {
    let octocrab = octocrab::Octocrab::builder()
        .personal_token(config.token.clone())
        .base_uri(repo.api_url.as_str())
        .map_err(|e| Error::GitHubApi(e.to_string()))?
        .build()
        .map_err(|e| Error::GitHubApi(e.to_string()))?;

    let route = format!("/repos/{}/{}", repo.owner, repo.repo);
    octocrab
        .get::<serde_json::Value, _, ()>(route, None)
        .await
        .map_err(|e| {
            Error::Config(format!(
                "Repository {} is not accessible: {}",
                repo.full_name(),
                service_message(&e)
            ))
        })?;

    match octocrab.get::<Login, _, ()>("/user", None).await {
        Ok(user) => Ok(Some(user.login)),
        Err(e) => {
            debug!(error = %service_message(&e), "login lookup failed");
            Ok(None)
        }
    }
}

/// Message GitHub put in the error body, or the client error text
fn service_message(err: &octocrab::Error) -> String {
    match err {
        octocrab::Error::GitHub { source, .. } => source.message.clone(),
        other => other.to_string(),
    }
}
