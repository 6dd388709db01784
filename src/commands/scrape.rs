//! Scrape command implementation

use super::{extract, load, persist};
use crate::{config::StatsConfig, Result};

/// Scrape the source page and replace the stored table.
///
/// Returns the number of rows written.
pub async fn handle_scrape(config: &StatsConfig, as_json: bool) -> Result<usize> {
    println!("Fetching player stats from {}...", config.source_url);
    let records = extract(config).await?;
    println!("✓ {} player records extracted", records.len());

    let written = persist(config, &records)?;
    println!(
        "✓ Saved {} rows to {} (table players)",
        written,
        config.db_path.display()
    );

    if as_json {
        let stored = load(config)?;
        println!("{}", serde_json::to_string_pretty(&stored)?);
    }

    Ok(written)
}
