//! blipkin-sim - replay a JSON-lines transcript against the creature engine.
//!
//! Usage: `blipkin-sim [TRANSCRIPT]`. Reads stdin when no path is given and
//! writes one JSON result per command to stdout.

use std::fs::File;
use std::io::{self, BufReader};

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use blipkin_engine::infrastructure::config::AppConfig;
use blipkin_engine::replay::Replayer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("failed to load configuration")?;

    // Logs go to stderr; stdout carries results
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let mut replayer = Replayer::new(config.simulation);
    let stdout = io::stdout().lock();

    let summary = match std::env::args().nth(1) {
        Some(path) => {
            tracing::info!(path = %path, "Replaying transcript");
            let file = File::open(&path).with_context(|| format!("failed to open {path}"))?;
            replayer.replay(BufReader::new(file), stdout).await?
        }
        None => {
            tracing::info!("Replaying transcript from stdin");
            replayer.replay(io::stdin().lock(), stdout).await?
        }
    };

    tracing::info!(
        commands = summary.commands,
        failures = summary.failures,
        "Replay finished"
    );
    Ok(())
}
