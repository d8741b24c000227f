//! gh-issue-import - create GitHub issues from a CSV file

use anyhow::Result;
use clap::Parser;
use gh_batch_tools::cli::{self, ImportArgs};

#[tokio::main]
async fn main() -> Result<()> {
    cli::init_tracing();
    let args = ImportArgs::parse();
    cli::run_import(args).await?;
    Ok(())
}
