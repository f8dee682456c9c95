//! Ticket link shortening through the TinyURL API.

use stagewatch_error::{HttpError, StagewatchResult};
use tracing::{debug, instrument};

const TINYURL_API_URL: &str = "https://tinyurl.com/api-create.php";

/// TinyURL-backed link shortener.
///
/// The scraped ticket URLs carry long session-style query strings; the
/// shortened form keeps the announcement readable on small screens.
#[derive(Debug, Clone, Default)]
pub struct UrlShortener {
    client: reqwest::Client,
}

impl UrlShortener {
    /// Creates a shortener with its own HTTP client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorten one URL, returning the shortened form.
    #[instrument(skip(self))]
    pub async fn shorten(&self, url: &str) -> StagewatchResult<String> {
        let response = self
            .client
            .get(TINYURL_API_URL)
            .query(&[("url", url)])
            .send()
            .await
            .map_err(|e| HttpError::new(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(HttpError::new(format!("TinyURL returned status {}", status)).into());
        }

        let short = response
            .text()
            .await
            .map_err(|e| HttpError::new(e.to_string()))?
            .trim()
            .to_string();

        debug!(short = %short, "Shortened ticket link");
        Ok(short)
    }
}
