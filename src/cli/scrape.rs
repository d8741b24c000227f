//! Scrape command - save a page's readable text

use crate::cli::style::{Stylize, check, cross, spinner_style};
use crate::error::{Error, Result};
use crate::scrape::{DEFAULT_USER_AGENT, PageFetcher, scrape_to_dir};
use anstream::{eprintln, println};
use clap::Parser;
use indicatif::ProgressBar;
use std::path::PathBuf;
use std::time::Duration;

/// Scrape the main text content of a website into a text file
#[derive(Debug, Parser)]
#[command(name = "scrape-text")]
#[command(version)]
pub struct ScrapeArgs {
    /// The URL of the website to scrape
    pub url: String,

    /// The directory to save the scraped text file in
    pub directory: PathBuf,

    /// User-Agent header sent with the request
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,
}

/// Run the scrape command
///
/// Fetch failures are reported and end the command normally; only local I/O
/// errors propagate.
pub async fn run_scrape(args: ScrapeArgs) -> Result<()> {
    let fetcher = PageFetcher::new(&args.user_agent)?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(spinner_style());
    spinner.set_message(format!("Fetching {}...", args.url));
    spinner.enable_steady_tick(Duration::from_millis(80));
    let outcome = scrape_to_dir(&fetcher, &args.url, &args.directory).await;
    spinner.finish_and_clear();

    match outcome {
        Ok(outcome) => match outcome.path {
            Some(path) => println!(
                "{} Saved \"{}\" to {}",
                check(),
                outcome.title,
                path.display().accent()
            ),
            None => println!("{}", "No content to save.".muted()),
        },
        Err(e @ Error::Io(_)) => return Err(e),
        Err(e) if e.is_configuration() => eprintln!("{} {e}", cross()),
        Err(e) => eprintln!("{} Error fetching the URL: {e}", cross()),
    }

    Ok(())
}
