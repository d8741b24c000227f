//! Error types for gh-batch-tools

use thiserror::Error;

/// Errors produced by the importer and the scraper
#[derive(Debug, Error)]
pub enum Error {
    /// Missing or unusable local configuration (input file, flags)
    #[error("configuration error: {0}")]
    Config(String),

    /// No usable credential, or the credential was rejected
    #[error("authentication error: {0}")]
    Auth(String),

    /// Network or protocol failure talking to a remote service
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with an unexpected status
    #[error("{status} - {body}")]
    Service {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// GitHub API error reported by octocrab
    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    /// A submission request failed validation
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Malformed CSV input
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Filesystem failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether the error stems from local setup rather than a remote call
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::Config(_) | Self::Auth(_))
    }
}

/// Result alias using the crate error type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_error_shows_status_and_body() {
        let err = Error::Service {
            status: 422,
            body: r#"{"message":"Validation Failed"}"#.to_string(),
        };
        assert_eq!(err.to_string(), r#"422 - {"message":"Validation Failed"}"#);
    }

    #[test]
    fn test_configuration_classification() {
        assert!(Error::Config("missing file".into()).is_configuration());
        assert!(Error::Auth("no token".into()).is_configuration());
        assert!(!Error::InvalidRequest("blank title".into()).is_configuration());
    }
}
