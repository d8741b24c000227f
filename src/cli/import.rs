//! Import command - create issues from a CSV file

use crate::auth::{get_github_auth, verify_github_access};
use crate::cli::progress::{CliImportProgress, title_preview};
use crate::cli::style::{Stylize, arrow, cross, skip, spinner_style};
use crate::error::Result;
use crate::import::{
    BatchSubmitter, QuotaPolicy, SubmitterConfig, SystemClock, read_requests,
};
use crate::platform::create_issue_service;
use crate::types::{DEFAULT_API_URL, RepoConfig};
use anstream::{eprintln, println};
use clap::Parser;
use dialoguer::Confirm;
use indicatif::ProgressBar;
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

/// Create GitHub issues from the rows of a CSV file
///
/// The CSV needs a `title` column; `body`, `assignee` and `label` are
/// optional. Labels may be a JSON array (`["bug","ui"]`) or a comma-separated
/// list.
#[derive(Debug, Parser)]
#[command(name = "gh-issue-import")]
#[command(version)]
pub struct ImportArgs {
    /// Repository owner (user or organization)
    pub owner: String,

    /// Repository name
    pub repo: String,

    /// CSV file with one issue per row
    pub csv_file: PathBuf,

    /// GitHub API base URL (GitHub Enterprise: https://HOST/api/v3)
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,

    /// Dry run - show what would be created without calling the API
    #[arg(long)]
    pub dry_run: bool,

    /// Pause between issues, in milliseconds
    #[arg(long, default_value_t = 1000)]
    pub delay_ms: u64,
}

/// Run the import command
///
/// Setup problems (no token, missing file, nothing to import, declined
/// prompt) are reported and end the command without submitting anything.
pub async fn run_import(args: ImportArgs) -> Result<()> {
    let repo = RepoConfig::new(&args.api_url, &args.owner, &args.repo);

    let auth = if args.dry_run {
        None
    } else {
        match get_github_auth().await {
            Ok(auth) => Some(auth),
            Err(e) => {
                eprintln!("{} {e}", cross());
                eprintln!(
                    "  {}",
                    "Create a token at https://github.com/settings/tokens (scope: repo)".muted()
                );
                return Ok(());
            }
        }
    };

    if !args.csv_file.is_file() {
        eprintln!(
            "{} CSV file not found: {}",
            cross(),
            args.csv_file.display().accent().for_stderr()
        );
        return Ok(());
    }

    println!("Reading issues from {}...", args.csv_file.display().accent());
    let import = match read_requests(&args.csv_file) {
        Ok(import) => import,
        Err(e) => {
            eprintln!("{} Error reading CSV file: {e}", cross());
            return Ok(());
        }
    };

    for row in &import.skipped {
        println!(
            "  {} {}",
            skip(),
            format!("Skipped line {}: {}", row.line, row.reason).muted()
        );
    }

    let requests = import.requests;
    if requests.is_empty() {
        eprintln!("{} No valid issues found in CSV file.", cross());
        return Ok(());
    }

    let noun = if requests.len() == 1 { "issue" } else { "issues" };
    println!("Found {} {noun} to create.", requests.len().accent());

    let Some(auth) = auth else {
        println!();
        println!("Dry run - would create in {}:", repo.full_name().accent());
        for request in &requests {
            println!("  {} {}", arrow(), title_preview(request.title()));
            if !request.labels().is_empty() {
                println!("    labels: {}", request.labels().join(", ").muted());
            }
            if !request.assignees().is_empty() {
                println!("    assignees: {}", request.assignees().join(", ").muted());
            }
        }
        return Ok(());
    };

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(spinner_style());
    spinner.set_message(format!("Checking access to {}...", repo.full_name()));
    spinner.enable_steady_tick(Duration::from_millis(80));
    let verified = verify_github_access(&auth, &repo).await;
    spinner.finish_and_clear();

    match verified {
        Ok(Some(login)) => {
            println!("Authenticated as {} ({:?} token)", login.accent(), auth.source);
        }
        Ok(None) => println!("Access to {} verified", repo.full_name().accent()),
        Err(e) => {
            eprintln!("{} {e}", cross());
            return Ok(());
        }
    }

    if !args.yes && !confirm(requests.len(), &repo) {
        println!("Operation cancelled.");
        return Ok(());
    }

    let service = create_issue_service(&repo, &auth)?;
    let progress = CliImportProgress::new(&repo);
    let config = SubmitterConfig {
        policy: QuotaPolicy::default(),
        delay: Duration::from_millis(args.delay_ms),
    };
    let submitter = BatchSubmitter::new(service.as_ref(), &SystemClock, &progress, config);

    println!();
    println!("Creating issues in {}...", repo.full_name().emphasis());
    submitter.process_all(&requests).await;

    Ok(())
}

fn confirm(count: usize, repo: &RepoConfig) -> bool {
    let noun = if count == 1 { "issue" } else { "issues" };
    let prompt = format!("Create {count} {noun} in {}?", repo.full_name());
    match Confirm::new().with_prompt(prompt).default(false).interact() {
        Ok(answer) => answer,
        Err(e) => {
            debug!(error = %e, "confirmation prompt unavailable");
            eprintln!(
                "{} Cannot prompt for confirmation here; rerun with --yes to proceed",
                cross()
            );
            false
        }
    }
}
