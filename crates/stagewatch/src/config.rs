//! Configuration for the watcher process.

use serde::{Deserialize, Serialize};
use stagewatch_error::{ConfigError, StagewatchResult};
use stagewatch_telegram::ChatId;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable holding the bot credential.
pub const BOT_TOKEN_VAR: &str = "TELEGRAM_BOT_TOKEN";

/// Configuration for the watcher process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchConfig {
    /// Schedule page configuration
    pub page: PageConfig,
    /// Check cadence configuration
    pub schedule: ScheduleConfig,
    /// State persistence configuration
    pub state: StateConfig,
    /// Notification configuration
    pub notify: NotifyConfig,
}

impl WatchConfig {
    /// Load watcher configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> StagewatchResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)).into())
    }
}

/// Configuration for the schedule page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    /// URL of the page carrying the schedule table
    pub url: String,
}

/// Configuration for the check cadence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// How often to re-scrape the page (minutes)
    pub check_interval_minutes: u64,
}

impl ScheduleConfig {
    /// The check interval as a duration.
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.check_interval_minutes * 60)
    }
}

/// Configuration for state persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateConfig {
    /// Path of the known-shows JSON file
    pub path: PathBuf,
    /// Whether to write state at all; `false` makes every run a dry run
    #[serde(default = "default_persist")]
    pub persist: bool,
}

fn default_persist() -> bool {
    true
}

/// Configuration for notification delivery.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotifyConfig {
    /// First line of every announcement
    pub headline: String,
    /// How subscriber chats are resolved
    #[serde(default)]
    pub subscribers: SubscriberMode,
    /// Destination chats, used in `static` mode
    #[serde(default)]
    pub chat_ids: Vec<ChatId>,
}

/// How the set of destination chats is determined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriberMode {
    /// The fixed `chat_ids` list from the config file
    Static,
    /// Everyone who has messaged the bot, via `getUpdates`
    #[default]
    Updates,
}

/// Read the bot credential from the environment.
///
/// Missing credential is fatal at startup, before any scheduling begins.
pub fn bot_token() -> StagewatchResult<String> {
    std::env::var(BOT_TOKEN_VAR)
        .map_err(|_| ConfigError::new(format!("{} is not set", BOT_TOKEN_VAR)).into())
}
