//! Stagewatch binary.
//!
//! Watches a live-show schedule page on an interval and announces newly
//! published shows to Telegram subscribers.

use clap::Parser;
use stagewatch::{ShowWatcher, WatchConfig, bot_token};
use stagewatch_scrape::SchedulePage;
use stagewatch_store::StateStore;
use stagewatch_telegram::{ShowAnnouncer, TelegramClient};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "stagewatch", version, about = "Live-show schedule watcher")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "stagewatch.toml")]
    config: PathBuf,

    /// Run a single cycle and exit
    #[arg(long)]
    once: bool,

    /// Run without persisting state
    #[arg(long)]
    dry_run: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // A .env file is a development convenience; absence is fine.
    dotenvy::dotenv().ok();

    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    let mut config = WatchConfig::from_file(&cli.config)?;
    if cli.dry_run {
        config.state.persist = false;
    }

    // Fatal before any scheduling begins.
    let token = bot_token()?;

    let source = SchedulePage::new(&config.page.url);
    let store = StateStore::new(&config.state.path);
    let announcer = ShowAnnouncer::new(TelegramClient::new(token), config.notify.headline.as_str());

    let mut watcher = ShowWatcher::new(source, store, announcer, config).await;

    if cli.once {
        watcher.run_once().await;
    } else {
        watcher.run().await;
    }

    Ok(())
}
