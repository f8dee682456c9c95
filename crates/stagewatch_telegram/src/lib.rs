//! Telegram delivery for the Stagewatch show watcher.
//!
//! Talks to the Telegram Bot API directly over `reqwest`: `sendMessage` for
//! delivery and `getUpdates` for dynamic subscriber discovery. The
//! [`Messenger`] trait is the seam the cycle runner depends on, so delivery
//! logic is testable without the network. [`ShowAnnouncer`] layers message
//! formatting and ticket-link enrichment on top and delivers a batch
//! sequentially, best-effort per item.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod announcer;
mod client;
mod json_models;
mod message;
mod shorten;

pub use announcer::{DeliveryReport, ShowAnnouncer};
pub use client::TelegramClient;
pub use json_models::{ApiEnvelope, Chat, Update, UpdateMessage};
pub use message::format_announcement;
pub use shorten::UrlShortener;

use stagewatch_error::StagewatchResult;

/// Telegram chat identifier.
pub type ChatId = i64;

/// Outbound messaging boundary.
///
/// The production implementation is [`TelegramClient`]; tests substitute a
/// mock to exercise delivery ordering and failure policy.
#[async_trait::async_trait]
pub trait Messenger: Send + Sync {
    /// Deliver one text message to one chat.
    async fn send_message(&self, chat: ChatId, text: &str) -> StagewatchResult<()>;

    /// The chats currently subscribed to announcements.
    async fn subscribers(&self) -> StagewatchResult<Vec<ChatId>>;
}
