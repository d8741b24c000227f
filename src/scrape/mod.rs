//! Single-page text scraper
//!
//! Fetches a page, pulls out its title and readable text, and writes the
//! text to `<dir>/<kebab-title>.txt`.

mod extract;
mod fetch;
mod save;
mod slug;

pub use extract::{ExtractedPage, UNTITLED, extract_page, normalize_text};
pub use fetch::{DEFAULT_USER_AGENT, PageFetcher};
pub use save::{output_path, save_text};
pub use slug::to_kebab_case;

use crate::error::Result;
use std::path::{Path, PathBuf};

/// Result of scraping one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeOutcome {
    /// Page title
    pub title: String,
    /// Where the text was written; `None` if the page had no text
    pub path: Option<PathBuf>,
}

/// Fetch `url`, extract its text and save it under `dir`
pub async fn scrape_to_dir(fetcher: &PageFetcher, url: &str, dir: &Path) -> Result<ScrapeOutcome> {
    let html = fetcher.fetch(url).await?;
    let page = extract_page(&html);
    let path = save_text(dir, &page.title, &page.text)?;

    Ok(ScrapeOutcome {
        title: page.title,
        path,
    })
}
