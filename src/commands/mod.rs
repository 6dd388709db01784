//! Command implementations and the pipeline stages they chain.
//!
//! Each stage takes its inputs explicitly and returns its output, so stages
//! can be driven one at a time without the network or the dashboard.

pub mod scrape;
pub mod serve;


use crate::{config::StatsConfig, fbref, storage::PlayerRecord, storage::StatsDatabase, Result};

pub use scrape::handle_scrape;
pub use serve::{handle_run, handle_serve};

/// Stage 1: fetch the page and extract its records.
pub async fn extract(config: &StatsConfig) -> Result<Vec<PlayerRecord>> {
    Ok(fbref::scrape(config).await?.records)
}

/// Stage 2: replace the stored table with `records`.
pub fn persist(config: &StatsConfig, records: &[PlayerRecord]) -> Result<usize> {
    let mut db = StatsDatabase::open(&config.db_path)?;
    db.replace_all(records)
}

/// Read back the whole stored table for the dashboard.
pub fn load(config: &StatsConfig) -> Result<Vec<PlayerRecord>> {
    let db = StatsDatabase::open(&config.db_path)?;
    let records = db.read_all()?;
    if records.is_empty() {
        tracing::warn!(path = %config.db_path.display(), "store holds no player records");
    }
    Ok(records)
}
