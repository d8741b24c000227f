//! scrape-text - save the readable text of a web page

use anyhow::{Context, Result};
use clap::Parser;
use gh_batch_tools::cli::{self, ScrapeArgs};

#[tokio::main]
async fn main() -> Result<()> {
    cli::init_tracing();
    let args = ScrapeArgs::parse();
    let directory = args.directory.display().to_string();
    cli::run_scrape(args)
        .await
        .with_context(|| format!("failed to save page text under {directory}"))?;
    Ok(())
}
