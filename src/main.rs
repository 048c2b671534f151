//! Storefront monitor service
//!
//! Runs the background health checks and serves the admin endpoints.

#![allow(missing_docs)]

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use storefront_monitor::{Config, server, utils::logging};
use tokio::sync::broadcast;
use tracing::{error, info};

#[derive(Debug, Parser)]
#[command(
    name = "storefront-monitor",
    version,
    about = "Storefront monitoring and alerting service"
)]
struct Args {
    /// Path to the YAML configuration file
    #[arg(short, long, env = "MONITOR_CONFIG", default_value = "config/monitor.yaml")]
    config: PathBuf,

    /// Validate the configuration and exit
    #[arg(long)]
    check_config: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    let config = load_config(&args).await?;
    logging::init_tracing(&config.logging).context("failed to initialize logging")?;

    if args.check_config {
        info!("Configuration at {} is valid", args.config.display());
        println!("Configuration OK");
        return Ok(());
    }

    let (shutdown_tx, _) = broadcast::channel(4);
    let signal_tx = shutdown_tx.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Shutdown signal received");
                let _ = signal_tx.send(());
            }
            Err(e) => error!("Failed to listen for shutdown signal: {}", e),
        }
    });

    server::builder::run_server(config, shutdown_tx)
        .await
        .context("monitor service failed")
}

async fn load_config(args: &Args) -> anyhow::Result<Config> {
    if args.config.exists() {
        Config::from_file(&args.config)
            .await
            .with_context(|| format!("failed to load {}", args.config.display()))
    } else {
        eprintln!(
            "Config file {} not found, using defaults and environment",
            args.config.display()
        );
        Config::from_env().context("invalid configuration from environment")
    }
}
