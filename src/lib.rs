//! Premier League player stats pipeline
//!
//! Scrapes the fbref.com standard stats table, stores it in a local SQLite
//! table, and serves a small dashboard to browse it by team.
//!
//! ## Stages
//!
//! - **Extractor** ([`fbref`]): one GET, one HTML table, a flat list of
//!   [`PlayerRecord`]s
//! - **Store** ([`storage`]): full-replace writes and full-table reads of the
//!   `players` table in `football_stats.db`
//! - **Presenter** ([`dashboard`]): team dropdown, filtered table and a goals
//!   bar chart, re-evaluated on every request
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use football_stats::{commands, StatsConfig};
//!
//! # async fn example() -> football_stats::Result<()> {
//! let config = StatsConfig::default();
//! let records = commands::extract(&config).await?;
//! commands::persist(&config, &records)?;
//!
//! let stored = commands::load(&config)?;
//! let view = football_stats::dashboard::evaluate(&stored, None);
//! let html = football_stats::dashboard::render_page(&view)?;
//! # let _ = html;
//! # Ok(())
//! # }
//! ```
//!
//! ## Logging
//!
//! The binary logs through `tracing`; set `RUST_LOG` to change the filter
//! (default `football_stats=info`).

pub mod cli;
pub mod commands;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod fbref;
pub mod preflight;
pub mod storage;

// Re-export commonly used types
pub use config::StatsConfig;
pub use error::{Result, StatsError};
pub use storage::{PlayerRecord, StatsDatabase};
