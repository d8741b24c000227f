//! Test data factories for gh-batch-tools types

use gh_batch_tools::types::{QuotaState, RepoConfig, SubmissionRequest};

/// Fixed "now" used by the recording clock
pub const NOW: i64 = 1_700_000_000;

/// Create a request with only a title
pub fn make_request(title: &str) -> SubmissionRequest {
    SubmissionRequest::new(title, format!("Body of {title}"), vec![], vec![]).unwrap()
}

/// Create a request with labels and assignees
pub fn make_request_full(title: &str, assignees: &[&str], labels: &[&str]) -> SubmissionRequest {
    SubmissionRequest::new(
        title,
        format!("Body of {title}"),
        assignees.iter().map(ToString::to_string).collect(),
        labels.iter().map(ToString::to_string).collect(),
    )
    .unwrap()
}

/// Create `n` requests titled `Issue 1`..`Issue n`
pub fn make_requests(n: usize) -> Vec<SubmissionRequest> {
    (1..=n).map(|i| make_request(&format!("Issue {i}"))).collect()
}

/// Quota with plenty of headroom
pub fn plenty_of_quota() -> QuotaState {
    QuotaState {
        remaining: 4999,
        reset_at_epoch_seconds: NOW + 3600,
    }
}

/// Repository config pointing at github.com
pub fn github_repo() -> RepoConfig {
    RepoConfig::new("https://api.github.com", "octo", "hello-world")
}
