//! Dashboard commands

use super::{handle_scrape, load};
use crate::{config::StatsConfig, dashboard, Result};

/// Serve the dashboard over the current contents of the store.
pub async fn handle_serve(config: &StatsConfig) -> Result<()> {
    let records = load(config)?;
    tracing::info!(records = records.len(), "loaded snapshot for dashboard");
    dashboard::serve(records, config.bind_addr).await
}

/// Full pipeline: scrape, store, then serve what was stored.
pub async fn handle_run(config: &StatsConfig) -> Result<()> {
    handle_scrape(config, false).await?;
    handle_serve(config).await
}
