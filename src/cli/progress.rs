//! CLI progress callback with styled output

use crate::cli::style::{Stream, Stylize, check, cross, human_duration, hyperlink_url};
use crate::error::Error;
use crate::import::ImportProgress;
use crate::types::{BatchCounts, QuotaState, RepoConfig, SubmissionRequest, SubmissionResult};
use anstream::{eprintln, println};
use async_trait::async_trait;
use std::time::Duration;

/// Longest title shown in per-item progress lines
const TITLE_PREVIEW_CHARS: usize = 60;

/// CLI progress callback that prints to stdout/stderr with styled output
pub struct CliImportProgress {
    /// Repository shown in the summary (`owner/repo`)
    pub repo: String,
    /// Browser URL of the repository's issue list
    pub issues_url: String,
}

impl CliImportProgress {
    /// Create progress output for a repository
    pub fn new(repo: &RepoConfig) -> Self {
        Self {
            repo: repo.full_name(),
            issues_url: repo.issues_web_url(),
        }
    }

    /// Closing line linking to the issue list, once anything was created
    pub fn issues_link(&self, counts: &BatchCounts) -> Option<String> {
        (counts.created > 0).then(|| {
            format!(
                "Issues created in {}: {}",
                self.repo.accent(),
                hyperlink_url(Stream::Stdout, &self.issues_url)
            )
        })
    }
}

/// Shorten a title to [`TITLE_PREVIEW_CHARS`] characters
pub fn title_preview(title: &str) -> String {
    if title.chars().count() <= TITLE_PREVIEW_CHARS {
        title.to_string()
    } else {
        let cut: String = title.chars().take(TITLE_PREVIEW_CHARS).collect();
        format!("{cut}...")
    }
}

#[async_trait]
impl ImportProgress for CliImportProgress {
    async fn on_item_start(&self, index: usize, total: usize, request: &SubmissionRequest) {
        println!();
        println!(
            "{} Creating: {}",
            format!("[{index}/{total}]").muted(),
            title_preview(request.title()).emphasis()
        );
    }

    async fn on_quota_wait(&self, state: &QuotaState, wait: Duration) {
        eprintln!(
            "  {} {} requests left; waiting {} for the rate limit to reset",
            "rate limit".warn(),
            state.remaining,
            human_duration(wait.as_secs()).accent().for_stderr()
        );
    }

    async fn on_quota_unavailable(&self, error: &Error) {
        eprintln!(
            "  {}: could not fetch rate limit info ({error}); continuing",
            "warning".warn()
        );
    }

    async fn on_result(&self, request: &SubmissionRequest, result: &SubmissionResult) {
        match result {
            SubmissionResult::Success(issue) => {
                println!(
                    "  {} Created issue {}: {}",
                    check(),
                    format!("#{}", issue.number).accent(),
                    request.title()
                );
                if !issue.html_url.is_empty() {
                    println!("    {}", hyperlink_url(Stream::Stdout, &issue.html_url));
                }
            }
            SubmissionResult::Failure { reason } => {
                eprintln!(
                    "  {} Failed to create issue '{}': {}",
                    cross(),
                    request.title(),
                    reason.error()
                );
            }
        }
    }

    async fn on_summary(&self, counts: &BatchCounts) {
        println!();
        println!("{}", "Summary".emphasis());
        println!("  {} Created: {}", check(), counts.created.success());
        println!("  {} Failed:  {}", cross().for_stdout(), counts.failed.error().for_stdout());
        println!("  Total:     {}", counts.total().accent());
        if let Some(link) = self.issues_link(counts) {
            println!();
            println!("{link}");
        }
    }
}
