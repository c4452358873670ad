//! Ledgerweb main entry point

use clap::Parser;
use ledgerweb_api::start_server;
use ledgerweb_config::{Config, ConfigError};
use ledgerweb_core::Ledger;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Parser, Debug)]
#[command(name = "ledgerweb")]
#[command(version = "0.1.0")]
#[command(about = "A lightweight REST API over a plain-text ledger file", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let (config, missing_config) = match Config::load(args.config.clone()) {
        Ok(config) => (config, None),
        Err(ConfigError::FileNotFound { path }) => (Config::default(), Some(path)),
        Err(err) => return Err(err.into()),
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.level.as_str()),
    )
    .init();

    if let Some(path) = missing_config {
        log::warn!("config file {} not found, using defaults", path);
    }
    log::info!(
        "serving ledger file {} via `{}`",
        config.ledger.file.display(),
        config.ledger.command
    );
    if !config.ledger.file.exists() {
        log::warn!(
            "ledger file {} does not exist yet; reads will fail until it is created",
            config.ledger.file.display()
        );
    }

    let ledger = Arc::new(RwLock::new(Ledger::new(config.clone())));
    start_server(config, ledger).await;

    Ok(())
}
