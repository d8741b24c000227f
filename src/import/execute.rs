//! Rate-limited batch submission
//!
//! Creates issues one at a time, pausing for quota and between requests.

use crate::import::{Clock, ImportProgress, QuotaPolicy};
use crate::platform::IssueService;
use crate::types::{BatchCounts, SubmissionRequest, SubmissionResult};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Default pause between consecutive submissions
pub const DEFAULT_REQUEST_DELAY: Duration = Duration::from_secs(1);

/// Tunables for [`BatchSubmitter`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitterConfig {
    /// When and how long to wait for the quota window
    pub policy: QuotaPolicy,
    /// Fixed pause after every submission
    pub delay: Duration,
}

impl Default for SubmitterConfig {
    fn default() -> Self {
        Self {
            policy: QuotaPolicy::default(),
            delay: DEFAULT_REQUEST_DELAY,
        }
    }
}

/// Submits requests strictly in order while respecting the service quota
pub struct BatchSubmitter<'a> {
    service: &'a dyn IssueService,
    clock: &'a dyn Clock,
    progress: &'a dyn ImportProgress,
    config: SubmitterConfig,
}

impl<'a> BatchSubmitter<'a> {
    /// Create a submitter over a service, clock and progress sink
    pub fn new(
        service: &'a dyn IssueService,
        clock: &'a dyn Clock,
        progress: &'a dyn ImportProgress,
        config: SubmitterConfig,
    ) -> Self {
        Self {
            service,
            clock,
            progress,
            config,
        }
    }

    /// Create a single issue
    ///
    /// Never fails: transport and service errors become
    /// [`SubmissionResult::Failure`].
    pub async fn submit_one(&self, request: &SubmissionRequest) -> SubmissionResult {
        let result = match self.service.create_issue(request).await {
            Ok(issue) => {
                debug!(number = issue.number, "issue created");
                SubmissionResult::Success(issue)
            }
            Err(e) => {
                debug!(error = %e, title = request.title(), "issue creation failed");
                SubmissionResult::Failure {
                    reason: e.to_string(),
                }
            }
        };

        self.progress.on_result(request, &result).await;
        result
    }

    /// Pause until the quota window resets if it is nearly exhausted
    ///
    /// Fails open: if the rate limit cannot be queried the batch proceeds
    /// without waiting. Sustained query failures can therefore push the
    /// batch past the real quota, in which case the service rejects the
    /// surplus submissions and they are counted as failures.
    pub async fn check_and_wait_for_quota(&self) {
        let state = match self.service.rate_limit().await {
            Ok(state) => state,
            Err(e) => {
                warn!(error = %e, "could not fetch rate limit; continuing without waiting");
                self.progress.on_quota_unavailable(&e).await;
                return;
            }
        };

        let wait = self
            .config
            .policy
            .should_wait(&state, self.clock.now_epoch_seconds());
        if wait.is_zero() {
            return;
        }

        info!(
            remaining = state.remaining,
            wait_secs = wait.as_secs(),
            "rate limit nearly exhausted, waiting for reset"
        );
        self.progress.on_quota_wait(&state, wait).await;
        self.clock.sleep(wait).await;
    }

    /// Process every request once, in order, and tally the outcomes
    pub async fn process_all(&self, requests: &[SubmissionRequest]) -> BatchCounts {
        let mut counts = BatchCounts::default();
        let total = requests.len();

        for (i, request) in requests.iter().enumerate() {
            self.progress.on_item_start(i + 1, total, request).await;

            self.check_and_wait_for_quota().await;
            let result = self.submit_one(request).await;
            counts.record(&result);

            self.clock.sleep(self.config.delay).await;
        }

        info!(
            created = counts.created,
            failed = counts.failed,
            total = counts.total(),
            "batch complete"
        );
        self.progress.on_summary(&counts).await;
        counts
    }
}
