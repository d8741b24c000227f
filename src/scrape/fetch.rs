//! Page download

use crate::error::{Error, Result};
use reqwest::Client;
use reqwest::header::USER_AGENT;
use tracing::debug;
use url::Url;

/// Desktop browser user agent; some sites refuse obvious bots
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Fetches HTML pages over HTTP(S)
pub struct PageFetcher {
    client: Client,
    user_agent: String,
}

impl PageFetcher {
    /// Create a fetcher sending the given user agent
    pub fn new(user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            user_agent: user_agent.to_string(),
        })
    }

    /// Download a page body as text
    ///
    /// Non-success statuses are errors.
    pub async fn fetch(&self, url: &str) -> Result<String> {
        let url = parse_page_url(url)?;

        debug!(%url, "fetching page");
        let response = self
            .client
            .get(url)
            .header(USER_AGENT, &self.user_agent)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Service {
                status: status.as_u16(),
                body: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        Ok(response.text().await?)
    }
}

fn parse_page_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).map_err(|e| Error::Config(format!("invalid URL {raw:?}: {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(Error::Config(format!(
            "unsupported URL scheme {other:?}; use http or https"
        ))),
    }
}
