//! HTTP fetch utilities.
//!
//! Provides the blocking HTTP GET wrapper used to load remote documents and
//! `<link rel="stylesheet">` targets. Failures are fatal to the caller; there
//! is no retry.

use std::time::Duration;

use thiserror::Error;

/// User-Agent header sent with all requests.
///
/// Mimics a common desktop browser to avoid basic bot detection.
const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Default request timeout.
const TIMEOUT: Duration = Duration::from_secs(30);

/// Error returned when a remote resource cannot be loaded.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The HTTP client could not be constructed.
    #[error("failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    /// The request could not be sent or no response arrived.
    #[error("request to {url} failed: {source}")]
    Request {
        /// The requested URL.
        url: String,
        /// Underlying transport error.
        #[source]
        source: reqwest::Error,
    },
    /// The server answered with a non-success status.
    #[error("HTTP error {status} for {url}")]
    Status {
        /// The requested URL.
        url: String,
        /// The response status.
        status: reqwest::StatusCode,
    },
    /// The response body could not be decoded as text.
    #[error("failed to read response body from {url}: {source}")]
    Body {
        /// The requested URL.
        url: String,
        /// Underlying decode error.
        #[source]
        source: reqwest::Error,
    },
}

/// Returns `true` when `input` should be fetched rather than parsed as markup.
#[must_use]
pub fn is_remote(input: &str) -> bool {
    input.starts_with("http://") || input.starts_with("https://")
}

/// Fetch a URL and return its body as text.
///
/// # Errors
///
/// Returns a [`FetchError`] if the HTTP client cannot be created, the request
/// fails, the response has a non-success status, or the body cannot be decoded.
pub fn fetch_text(url: &str) -> Result<String, FetchError> {
    log::debug!("fetching {url}");

    let client = reqwest::blocking::Client::builder()
        .timeout(TIMEOUT)
        .build()
        .map_err(FetchError::Client)?;

    let response = client
        .get(url)
        .header("User-Agent", USER_AGENT)
        .send()
        .map_err(|source| FetchError::Request {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status,
        });
    }

    response.text().map_err(|source| FetchError::Body {
        url: url.to_string(),
        source,
    })
}
