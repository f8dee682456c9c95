//! Sequential best-effort delivery of a new-show batch.

use crate::message::format_announcement;
use crate::shorten::UrlShortener;
use crate::{ChatId, Messenger};
use stagewatch_core::ShowRecord;
use tracing::{error, info, instrument, warn};

const FALLBACK_TICKETS_LABEL: &str = "Tickets unavailable";

/// Outcome of one announcement pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeliveryReport {
    /// Messages delivered
    pub sent: usize,
    /// Messages that failed to deliver
    pub failed: usize,
}

/// Delivers announcements for newly discovered shows.
///
/// Iterates the batch in order and every subscriber per show. Failures are
/// logged and counted, never propagated: a dead chat or a flaky enrichment
/// call must not starve the rest of the batch, and the known set is never
/// rolled back on delivery failure — skipping duplicate spam outranks
/// guaranteed delivery.
pub struct ShowAnnouncer<M> {
    messenger: M,
    shortener: Option<UrlShortener>,
    headline: String,
}

impl<M: Messenger> ShowAnnouncer<M> {
    /// Creates an announcer with link shortening enabled.
    pub fn new(messenger: M, headline: impl Into<String>) -> Self {
        Self {
            messenger,
            shortener: Some(UrlShortener::new()),
            headline: headline.into(),
        }
    }

    /// Disable link shortening; announcements carry the raw ticket URL.
    pub fn without_link_shortening(mut self) -> Self {
        self.shortener = None;
        self
    }

    /// The messenger behind this announcer.
    pub fn messenger(&self) -> &M {
        &self.messenger
    }

    /// Announce every show in the batch to every subscriber.
    ///
    /// Completion means the last show of the batch has been processed,
    /// regardless of how many sends failed along the way.
    #[instrument(skip(self, batch, chats), fields(shows = batch.len(), chats = chats.len()))]
    pub async fn announce(&self, batch: &[ShowRecord], chats: &[ChatId]) -> DeliveryReport {
        let mut report = DeliveryReport::default();

        for show in batch {
            let text = self.compose(show).await;

            for &chat in chats {
                match self.messenger.send_message(chat, &text).await {
                    Ok(()) => report.sent += 1,
                    Err(e) => {
                        error!(chat, date = %show.date, error = %e, "Delivery failed");
                        report.failed += 1;
                    }
                }
            }
        }

        info!(sent = report.sent, failed = report.failed, "Announcement pass complete");
        report
    }

    /// Build the full message for one show, tickets line included.
    ///
    /// Enrichment is best-effort: a failed shortening falls back to the raw
    /// URL, and a show without a usable link gets the scraped cell text or a
    /// generic label.
    async fn compose(&self, show: &ShowRecord) -> String {
        let mut text = format_announcement(&self.headline, show);

        match show.ticket_url() {
            Some(url) => {
                let link = match &self.shortener {
                    Some(shortener) => match shortener.shorten(url).await {
                        Ok(short) => short,
                        Err(e) => {
                            warn!(date = %show.date, error = %e, "Link shortening failed, using raw URL");
                            url.to_string()
                        }
                    },
                    None => url.to_string(),
                };
                text.push_str(&format!("\nTickets: {}", link));
            }
            None => {
                let label = show
                    .link_text
                    .as_deref()
                    .unwrap_or(FALLBACK_TICKETS_LABEL);
                text.push_str(&format!("\n{}", label));
            }
        }

        text
    }
}
