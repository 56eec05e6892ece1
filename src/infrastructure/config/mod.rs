mod app_config;
mod args;

pub use app_config::{AppConfig, ConfigError, LogLevel};
pub use args::CliArgs;
