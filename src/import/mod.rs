//! Batch issue import
//!
//! Reads requests from CSV and submits them one by one:
//! 1. Quota check - pause if the rate-limit window is nearly spent
//! 2. Submission - create the issue, recording success or failure
//! 3. Courtesy delay - fixed pause before the next request

mod clock;
mod execute;
mod progress;
mod quota;
mod source;

pub use clock::{Clock, SystemClock};
pub use execute::{BatchSubmitter, DEFAULT_REQUEST_DELAY, SubmitterConfig};
pub use progress::{ImportProgress, NoopProgress};
pub use quota::{DEFAULT_QUOTA_THRESHOLD, DEFAULT_RESET_BUFFER, QuotaPolicy};
pub use source::{
    CsvImport, SkippedRow, parse_assignees, parse_labels, read_requests, read_requests_from,
};
