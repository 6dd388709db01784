//! CLI argument definitions and parsing.
//!
//! Every option has a default, so running the binary bare performs the full
//! scrape → store → dashboard pipeline.

use crate::config::{default_bind_addr, StatsConfig, DATABASE_FILE};
use clap::{Parser, Subcommand};
use std::{net::SocketAddr, path::PathBuf};

/// Premier League player stats: scrape, store, and explore in the browser.
#[derive(Debug, Parser)]
#[clap(name = "football-stats", version)]
pub struct FootballStats {
    #[clap(subcommand)]
    pub command: Option<Commands>,

    /// SQLite file holding the `players` table.
    #[clap(long, global = true, default_value = DATABASE_FILE)]
    pub db: PathBuf,

    /// Address the dashboard listens on.
    #[clap(long, global = true, default_value_t = default_bind_addr())]
    pub addr: SocketAddr,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Scrape, replace the stored table, then serve the dashboard (default).
    Run,

    /// Scrape and replace the stored table, then exit.
    Scrape {
        /// Print the stored records as JSON.
        #[clap(long)]
        json: bool,
    },

    /// Serve the dashboard over whatever the store currently holds.
    Serve,
}

impl FootballStats {
    /// Subcommand to run; `run` when none was given.
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Run)
    }

    pub fn config(&self) -> StatsConfig {
        StatsConfig::default()
            .with_db_path(self.db.clone())
            .with_bind_addr(self.addr)
    }
}
