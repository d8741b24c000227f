//! Authentication for GitHub
//!
//! Supports environment variables (optionally from `.env`) and the gh CLI.

mod github;

pub use github::{
    get_github_auth, token_from_env, verify_github_access, GitHubAuthConfig, TOKEN_ENV_VARS,
};

/// Source of authentication token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthSource {
    /// Token from CLI tool (gh)
    Cli,
    /// Token from environment variable
    EnvVar,
}
