//! Telegram Bot API client.

use crate::json_models::{ApiEnvelope, Update};
use crate::{ChatId, Messenger};
use serde::Serialize;
use stagewatch_error::{NotifyError, NotifyErrorKind, StagewatchResult};
use tracing::{debug, error, instrument};

const TELEGRAM_API_URL: &str = "https://api.telegram.org";

#[derive(Debug, Serialize)]
struct SendMessagePayload<'a> {
    chat_id: ChatId,
    text: &'a str,
}

/// Telegram Bot API client.
///
/// Holds the bot token and a shared `reqwest` client; one instance serves
/// the whole process lifetime.
#[derive(Debug, Clone)]
pub struct TelegramClient {
    client: reqwest::Client,
    token: String,
}

impl TelegramClient {
    /// Creates a new client for the given bot token.
    pub fn new(token: impl Into<String>) -> Self {
        debug!("Creating Telegram client");
        Self {
            client: reqwest::Client::new(),
            token: token.into(),
        }
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", TELEGRAM_API_URL, self.token, method)
    }

    /// Call one Bot API method and unwrap the response envelope.
    async fn call<T: serde::de::DeserializeOwned>(
        &self,
        method: &str,
        payload: Option<&(impl Serialize + Sync)>,
    ) -> StagewatchResult<T> {
        let mut request = self.client.post(self.method_url(method));
        if let Some(payload) = payload {
            request = request.json(payload);
        }

        let response = request.send().await.map_err(|e| {
            error!(method, error = ?e, "Failed to reach the Bot API");
            NotifyError::new(NotifyErrorKind::Request(e.to_string()))
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(method, status = %status, body = %body, "Bot API returned error");
            return Err(NotifyError::new(NotifyErrorKind::Api {
                status: status.as_u16(),
                message: body,
            })
            .into());
        }

        let envelope: ApiEnvelope<T> = response.json().await.map_err(|e| {
            NotifyError::new(NotifyErrorKind::Parse(format!("{}: {}", method, e)))
        })?;

        if !*envelope.ok() {
            let description = envelope
                .description()
                .clone()
                .unwrap_or_else(|| "no description".to_string());
            return Err(NotifyError::new(NotifyErrorKind::Envelope(description)).into());
        }

        envelope.into_result().ok_or_else(|| {
            NotifyError::new(NotifyErrorKind::Parse(format!(
                "{}: envelope ok but result missing",
                method
            )))
            .into()
        })
    }
}

#[async_trait::async_trait]
impl Messenger for TelegramClient {
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    async fn send_message(&self, chat: ChatId, text: &str) -> StagewatchResult<()> {
        let payload = SendMessagePayload { chat_id: chat, text };
        let _: serde_json::Value = self.call("sendMessage", Some(&payload)).await?;
        debug!(chat, "Delivered message");
        Ok(())
    }

    /// Collect subscriber chats from pending updates.
    ///
    /// Anyone who has messaged the bot shows up here; ids are deduplicated
    /// preserving first-seen order so delivery order is stable.
    #[instrument(skip(self))]
    async fn subscribers(&self) -> StagewatchResult<Vec<ChatId>> {
        let updates: Vec<Update> = self.call("getUpdates", None::<&()>).await?;

        let mut seen = std::collections::HashSet::new();
        let chats: Vec<ChatId> = updates
            .iter()
            .filter_map(|update| update.message().as_ref())
            .map(|message| *message.chat().id())
            .filter(|id| seen.insert(*id))
            .collect();

        debug!(subscribers = chats.len(), "Resolved subscribers from updates");
        Ok(chats)
    }
}
