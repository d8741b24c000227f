//! gh-batch-tools - small GitHub and web utilities
//!
//! Library behind two binaries:
//! - `gh-issue-import`: create GitHub issues from a CSV file, pacing requests
//!   against the API rate limit
//! - `scrape-text`: save the readable text of a web page to a file

pub mod auth;
pub mod cli;
pub mod error;
pub mod import;
pub mod platform;
pub mod scrape;
pub mod types;
