//! JSON deserialization models for the Telegram Bot API.
//!
//! Only the fields the watcher actually reads are modelled; everything else
//! in the API payloads is ignored on deserialization.

use serde::Deserialize;

/// The Bot API response envelope.
///
/// Every method returns `{"ok": bool, ...}` with either a `result` payload
/// or a human-readable `description` of the failure.
#[derive(Debug, Clone, Deserialize, derive_getters::Getters)]
pub struct ApiEnvelope<T> {
    /// Whether the call succeeded
    ok: bool,
    /// Method result, present when `ok` is true
    result: Option<T>,
    /// Failure description, present when `ok` is false
    #[serde(default)]
    description: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// Consume the envelope, yielding the result payload if any.
    pub fn into_result(self) -> Option<T> {
        self.result
    }
}

/// One entry from `getUpdates`.
#[derive(Debug, Clone, Deserialize, derive_getters::Getters)]
pub struct Update {
    /// Monotonic update identifier
    update_id: i64,
    /// The message that triggered the update, when there is one
    #[serde(default)]
    message: Option<UpdateMessage>,
}

/// The message payload of an update.
#[derive(Debug, Clone, Deserialize, derive_getters::Getters)]
pub struct UpdateMessage {
    /// The chat the message arrived from
    chat: Chat,
}

/// A Telegram chat.
#[derive(Debug, Clone, Deserialize, derive_getters::Getters)]
pub struct Chat {
    /// Chat identifier, usable as a `sendMessage` destination
    id: i64,
}
