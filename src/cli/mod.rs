//! CLI commands
//!
//! Command implementations for the `gh-issue-import` and `scrape-text`
//! binaries.

mod import;
mod progress;
mod scrape;
pub mod style;

pub use import::{ImportArgs, run_import};
pub use progress::{CliImportProgress, title_preview};
pub use scrape::{ScrapeArgs, run_scrape};

/// Install the tracing subscriber shared by both binaries
///
/// Logs go to stderr; the default level is `warn`, override with `RUST_LOG`.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
