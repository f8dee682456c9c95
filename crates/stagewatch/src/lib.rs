//! Stagewatch — watches a live-show schedule page and announces new shows.
//!
//! The binary wires together the focused crates of the workspace:
//!
//! - `stagewatch_core` — domain types and the reconciliation engine
//! - `stagewatch_scrape` — schedule page fetching and table extraction
//! - `stagewatch_store` — durable known-show state
//! - `stagewatch_telegram` — announcement formatting and delivery
//!
//! This crate adds the configuration surface, the metrics counters, and the
//! [`ShowWatcher`] loop that runs one cycle per tick: extract, reconcile,
//! persist, announce.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod metrics;
mod watcher;

pub use config::{
    BOT_TOKEN_VAR, NotifyConfig, PageConfig, ScheduleConfig, StateConfig, SubscriberMode,
    WatchConfig, bot_token,
};
pub use metrics::{MetricsSnapshot, WatchMetrics};
pub use watcher::ShowWatcher;
