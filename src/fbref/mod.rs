//! Extractor for the fbref.com standard stats table.
//!
//! - `http`: the single page request
//! - `parse`: HTML table → `PlayerRecord`s, with the short-row and count policies

pub mod http;
pub mod parse;

pub use http::{build_client, fetch_stats_page};
pub use parse::{extract_player_records, parse_count, Extraction, MIN_COLUMNS};

use crate::{config::StatsConfig, Result};

/// Fetch the configured page and extract its player records.
pub async fn scrape(config: &StatsConfig) -> Result<Extraction> {
    let client = build_client(&config.user_agent)?;
    let body = fetch_stats_page(&client, &config.source_url).await?;
    let extraction = extract_player_records(&body, &config.table_id)?;

    tracing::info!(
        records = extraction.records.len(),
        short_rows_skipped = extraction.short_rows_skipped,
        cells_normalized = extraction.cells_normalized,
        "extracted player records"
    );
    Ok(extraction)
}
