//! HTTP fetcher for the remote hosts-file feed.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode, Url};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

#[cfg(test)]
use mockall::automock;

/// Feed downloaded when no `--url` is given.
pub const DEFAULT_FEED_URL: &str = "https://raw.githubusercontent.com/StevenBlack/hosts/master/hosts";

/// Sent with every request; some mirrors refuse unknown agents.
pub const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 6.1; WOW64; rv:59.0) Gecko/20100101 Firefox/59.0";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum feed size (64 MB)
/// The StevenBlack unified list with every extension is well under 10 MB
const MAX_FEED_SIZE: usize = 64 * 1024 * 1024;

/// Why a feed could not be retrieved. Every variant is recoverable.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("{0}")]
    InvalidUrl(String),

    #[error("HTTP status code: {0}")]
    Status(u16),

    #[error("Response too large: {size} bytes (max: {max} bytes)")]
    TooLarge { size: u64, max: usize },

    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}

impl FetchError {
    pub fn is_invalid_url(&self) -> bool {
        matches!(self, FetchError::InvalidUrl(_))
    }
}

/// Source of feed text, abstracted for tests.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetch the whole feed body as text.
    async fn fetch_feed(&self, url: &str) -> Result<String, FetchError>;
}

/// HTTP client for fetching the feed
pub struct Fetcher {
    timeout: Duration,
}

impl Fetcher {
    /// Create a fetcher whose single request gives up after `timeout`.
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Built per fetch; a build failure is reported as a retrieval error.
    fn client(&self) -> Result<Client, FetchError> {
        let client = Client::builder()
            .timeout(self.timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(client)
    }
}

/// Whether a declared or received body size is over [`MAX_FEED_SIZE`].
fn exceeds_max_size(size: u64) -> bool {
    size > MAX_FEED_SIZE as u64
}

#[async_trait]
impl FeedSource for Fetcher {
    async fn fetch_feed(&self, url: &str) -> Result<String, FetchError> {
        let url = Url::parse(url).map_err(|e| FetchError::InvalidUrl(format!("{}: {}", e, url)))?;
        info!("Fetching {}", url);

        let response = self.client()?.get(url).send().await?;
        if response.status() != StatusCode::OK {
            return Err(FetchError::Status(response.status().as_u16()));
        }

        if let Some(content_length) = response.content_length() {
            if exceeds_max_size(content_length) {
                return Err(FetchError::TooLarge {
                    size: content_length,
                    max: MAX_FEED_SIZE,
                });
            }
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        let body = response.bytes().await?;
        if exceeds_max_size(body.len() as u64) {
            return Err(FetchError::TooLarge {
                size: body.len() as u64,
                max: MAX_FEED_SIZE,
            });
        }

        debug!(
            "Downloaded {} bytes (Content-Type: {})",
            body.len(),
            content_type.as_deref().unwrap_or("none")
        );
        Ok(decode_body(&body, content_type.as_deref()))
    }
}

/// Whether the Content-Type declares UTF-8.
///
/// A plain substring test on the lower-cased header, not MIME parsing.
pub fn declares_utf8(content_type: Option<&str>) -> bool {
    content_type
        .map(|ct| ct.to_lowercase().contains("charset=utf-8"))
        .unwrap_or(false)
}

/// Decode a response body: UTF-8 when declared, ISO-8859-1 otherwise.
///
/// # Examples
/// ```
/// use unbound_blacklister::fetcher::decode_body;
/// assert_eq!(decode_body(b"caf\xe9", None), "café");
/// assert_eq!(decode_body("café".as_bytes(), Some("text/plain; charset=UTF-8")), "café");
/// ```
pub fn decode_body(body: &[u8], content_type: Option<&str>) -> String {
    if declares_utf8(content_type) {
        String::from_utf8_lossy(body).into_owned()
    } else {
        // Latin-1 maps every byte to the code point of the same value
        body.iter().map(|&b| char::from(b)).collect()
    }
}
