//! Command line arguments.

use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

/// CLI arguments, merged over the config file values.
#[derive(Debug, Parser)]
#[command(
    name = "picrelay",
    version,
    about = "A Telegram bot that relays remote images back as photo attachments",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Bot API access token.
    #[arg(long, env = "BOT_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Accept URLs with image-like substrings, not only extension suffixes.
    #[arg(long)]
    pub lenient_urls: Option<bool>,

    /// Override the Bot API base URL (local Bot API servers).
    #[arg(long, value_name = "URL")]
    pub api_base: Option<String>,
}
