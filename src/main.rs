use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::{eyre, Result};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use picrelay::application::{RelaySettings, RelayUseCase};
use picrelay::domain::classifier::MatchMode;
use picrelay::infrastructure::{
    AppConfig, CliArgs, StreamingFetcher, TelegramClient, UpdatePoller,
};

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

fn create_poller() -> Result<UpdatePoller> {
    let args = CliArgs::parse();
    let mut config = AppConfig::load(args.config.clone())?;
    config.merge_with_args(args);

    init_logging(&config)?;

    info!(version = picrelay::VERSION, "Starting picrelay");

    let token = config
        .token
        .as_deref()
        .ok_or_else(|| eyre!("no bot token: set BOT_TOKEN, --token, or the config file"))?;

    let client = match &config.api_base {
        Some(base) => TelegramClient::with_api_base(token, base)?,
        None => TelegramClient::new(token)?,
    };
    let client = Arc::new(client);

    let fetcher = Arc::new(StreamingFetcher::new()?);

    let settings = RelaySettings {
        match_mode: if config.lenient_urls {
            MatchMode::Lenient
        } else {
            MatchMode::Strict
        },
    };
    let relay = RelayUseCase::new(fetcher, client.clone(), settings);

    Ok(UpdatePoller::new(client, relay))
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();

    let poller = create_poller()?;
    poller.run().await;

    Ok(())
}
