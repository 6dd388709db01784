//! Entry point: check capabilities, parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use football_stats::{
    cli::{Commands, FootballStats},
    commands::{handle_run, handle_scrape, handle_serve},
    preflight, StatsError,
};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Run the CLI.
#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("football_stats=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(FootballStats::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            let code = err
                .downcast_ref::<StatsError>()
                .map_or(1, StatsError::exit_code);
            ExitCode::from(code)
        }
    }
}

async fn run(app: FootballStats) -> anyhow::Result<()> {
    let config = app.config();

    let capabilities = preflight::check(&config).context("startup check failed")?;
    tracing::info!(sqlite = %capabilities.sqlite_version, "startup check passed");

    match app.command() {
        Commands::Run => handle_run(&config).await.context("pipeline failed")?,
        Commands::Scrape { json } => {
            handle_scrape(&config, json)
                .await
                .context("scrape failed")?;
        }
        Commands::Serve => handle_serve(&config).await.context("dashboard failed")?,
    }

    Ok(())
}
