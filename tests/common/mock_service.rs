//! Mock issue service, clock and progress sink for testing
//!
//! All three share an [`EventLog`] so tests can assert the exact order of
//! quota checks, submissions and sleeps.

use async_trait::async_trait;
use gh_batch_tools::error::{Error, Result};
use gh_batch_tools::import::{Clock, ImportProgress};
use gh_batch_tools::platform::IssueService;
use gh_batch_tools::types::{
    BatchCounts, CreatedIssue, QuotaState, RepoConfig, SubmissionRequest, SubmissionResult,
};
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Something observable that happened during a batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Rate-limit endpoint queried
    RateLimit,
    /// Issue creation attempted with this title
    Create(String),
    /// Clock slept
    Sleep(Duration),
}

/// Shared, ordered record of [`Event`]s
pub type EventLog = Arc<Mutex<Vec<Event>>>;

/// Create an empty event log
pub fn event_log() -> EventLog {
    Arc::new(Mutex::new(Vec::new()))
}

/// Simple mock issue service for testing
///
/// Features:
/// - Auto-incrementing issue numbers
/// - Scripted HTTP statuses per call (default 201)
/// - Transport failure injection per title
/// - Configurable quota, or a failing rate-limit endpoint
pub struct MockIssueService {
    config: RepoConfig,
    log: EventLog,
    next_number: AtomicU64,
    statuses: Mutex<VecDeque<u16>>,
    transport_failures: Mutex<HashMap<String, String>>,
    quota: Mutex<Option<QuotaState>>,
}

impl MockIssueService {
    /// Create a new mock writing to `log`
    pub fn new(config: RepoConfig, log: EventLog) -> Self {
        Self {
            config,
            log,
            next_number: AtomicU64::new(1),
            statuses: Mutex::new(VecDeque::new()),
            transport_failures: Mutex::new(HashMap::new()),
            quota: Mutex::new(None),
        }
    }

    /// Answer successive `create_issue` calls with these statuses
    pub fn script_statuses(&self, statuses: &[u16]) {
        self.statuses.lock().unwrap().extend(statuses.iter().copied());
    }

    /// Make `create_issue` fail at the transport level for `title`
    pub fn fail_transport(&self, title: &str, msg: &str) {
        self.transport_failures
            .lock()
            .unwrap()
            .insert(title.to_string(), msg.to_string());
    }

    /// Report this quota from `rate_limit`
    pub fn set_quota(&self, quota: QuotaState) {
        *self.quota.lock().unwrap() = Some(quota);
    }

    /// Make `rate_limit` fail
    pub fn fail_rate_limit(&self) {
        *self.quota.lock().unwrap() = None;
    }

    /// Titles passed to `create_issue`, in call order
    pub fn create_calls(&self) -> Vec<String> {
        self.log
            .lock()
            .unwrap()
            .iter()
            .filter_map(|e| match e {
                Event::Create(title) => Some(title.clone()),
                _ => None,
            })
            .collect()
    }
}

#[async_trait]
impl IssueService for MockIssueService {
    async fn create_issue(&self, request: &SubmissionRequest) -> Result<CreatedIssue> {
        self.log
            .lock()
            .unwrap()
            .push(Event::Create(request.title().to_string()));

        if let Some(msg) = self.transport_failures.lock().unwrap().get(request.title()) {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::ConnectionReset,
                msg.clone(),
            )));
        }

        let status = self.statuses.lock().unwrap().pop_front().unwrap_or(201);
        if status != 201 {
            return Err(Error::Service {
                status,
                body: r#"{"message":"Validation Failed"}"#.to_string(),
            });
        }

        let number = self.next_number.fetch_add(1, Ordering::SeqCst);
        Ok(CreatedIssue {
            number,
            html_url: format!(
                "https://github.com/{}/{}/issues/{number}",
                self.config.owner, self.config.repo
            ),
        })
    }

    async fn rate_limit(&self) -> Result<QuotaState> {
        self.log.lock().unwrap().push(Event::RateLimit);
        let quota = *self.quota.lock().unwrap();
        quota.ok_or_else(|| Error::Service {
                status: 503,
                body: "rate limit service unavailable".to_string(),
            })
    }
}

/// Clock frozen at a fixed time that records sleeps instead of sleeping
pub struct RecordingClock {
    now: i64,
    log: EventLog,
}

impl RecordingClock {
    /// Create a clock frozen at `now`
    pub const fn new(now: i64, log: EventLog) -> Self {
        Self { now, log }
    }
}

#[async_trait]
impl Clock for RecordingClock {
    fn now_epoch_seconds(&self) -> i64 {
        self.now
    }

    async fn sleep(&self, duration: Duration) {
        self.log.lock().unwrap().push(Event::Sleep(duration));
    }
}

/// Progress sink that records every callback as a string
#[derive(Default)]
pub struct RecordingProgress {
    events: Mutex<Vec<String>>,
    summary: Mutex<Option<BatchCounts>>,
}

impl RecordingProgress {
    /// Recorded callbacks
    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    /// Counts passed to `on_summary`, if it was called
    pub fn summary(&self) -> Option<BatchCounts> {
        *self.summary.lock().unwrap()
    }
}

#[async_trait]
impl ImportProgress for RecordingProgress {
    async fn on_item_start(&self, index: usize, total: usize, request: &SubmissionRequest) {
        self.events
            .lock()
            .unwrap()
            .push(format!("start {index}/{total} {}", request.title()));
    }

    async fn on_quota_wait(&self, state: &QuotaState, wait: Duration) {
        self.events
            .lock()
            .unwrap()
            .push(format!("wait {}s (remaining {})", wait.as_secs(), state.remaining));
    }

    async fn on_quota_unavailable(&self, _error: &Error) {
        self.events.lock().unwrap().push("quota unavailable".to_string());
    }

    async fn on_result(&self, request: &SubmissionRequest, result: &SubmissionResult) {
        let line = match result {
            SubmissionResult::Success(issue) => {
                format!("created #{} {}", issue.number, request.title())
            }
            SubmissionResult::Failure { reason } => {
                format!("failed {}: {reason}", request.title())
            }
        };
        self.events.lock().unwrap().push(line);
    }

    async fn on_summary(&self, counts: &BatchCounts) {
        *self.summary.lock().unwrap() = Some(*counts);
        self.events.lock().unwrap().push(format!(
            "summary created={} failed={}",
            counts.created, counts.failed
        ));
    }
}
