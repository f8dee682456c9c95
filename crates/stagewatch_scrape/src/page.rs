//! HTTP fetch of the schedule page.

use crate::{ShowSource, extract_shows};
use stagewatch_core::Extraction;
use stagewatch_error::{ExtractError, ExtractErrorKind, StagewatchResult};
use tracing::{debug, info, instrument};

/// The live schedule page, fetched over plain HTTP.
///
/// The table is server-rendered, so a GET plus host-side parsing replaces a
/// browser session. The `reqwest` client is shared across cycles; each
/// response is consumed within the fetch, so every exit path releases the
/// connection.
#[derive(Debug, Clone)]
pub struct SchedulePage {
    client: reqwest::Client,
    url: String,
}

impl SchedulePage {
    /// Create a page source for the given URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    /// The configured page URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch(&self) -> StagewatchResult<String> {
        debug!("Fetching schedule page");

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| ExtractError::new(ExtractErrorKind::Fetch(e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExtractError::new(ExtractErrorKind::Status(status.as_u16())).into());
        }

        response
            .text()
            .await
            .map_err(|e| ExtractError::new(ExtractErrorKind::Fetch(e.to_string())).into())
    }
}

#[async_trait::async_trait]
impl ShowSource for SchedulePage {
    #[instrument(skip(self), fields(url = %self.url))]
    async fn current_shows(&self) -> StagewatchResult<Extraction> {
        let body = self.fetch().await?;
        let extraction = extract_shows(&body)?;
        info!(shows = extraction.len(), "Extracted schedule");
        Ok(extraction)
    }
}
