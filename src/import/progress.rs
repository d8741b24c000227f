//! Progress callback trait for interface-agnostic updates
//!
//! This trait allows different interfaces (CLI, tests, etc.) to receive
//! progress updates while a batch is being imported.

use crate::error::Error;
use crate::types::{BatchCounts, QuotaState, SubmissionRequest, SubmissionResult};
use async_trait::async_trait;
use std::time::Duration;

/// Import progress callback
///
/// Implement this trait to receive progress updates during an import.
#[async_trait]
pub trait ImportProgress: Send + Sync {
    /// Called before a request is processed (`index` is 1-based)
    async fn on_item_start(&self, index: usize, total: usize, request: &SubmissionRequest);

    /// Called when the importer is about to pause for quota
    async fn on_quota_wait(&self, state: &QuotaState, wait: Duration);

    /// Called when the rate-limit query failed and the batch carries on
    async fn on_quota_unavailable(&self, error: &Error);

    /// Called with the outcome of each submission
    async fn on_result(&self, request: &SubmissionRequest, result: &SubmissionResult);

    /// Called once after the last request
    async fn on_summary(&self, counts: &BatchCounts);
}

/// No-op progress callback for testing or when progress isn't needed
pub struct NoopProgress;

#[async_trait]
impl ImportProgress for NoopProgress {
    async fn on_item_start(&self, _index: usize, _total: usize, _request: &SubmissionRequest) {}
    async fn on_quota_wait(&self, _state: &QuotaState, _wait: Duration) {}
    async fn on_quota_unavailable(&self, _error: &Error) {}
    async fn on_result(&self, _request: &SubmissionRequest, _result: &SubmissionResult) {}
    async fn on_summary(&self, _counts: &BatchCounts) {}
}
