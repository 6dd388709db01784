//! Startup capability check.
//!
//! Runs once before any stage and reports problems as
//! `StatsError::DependencyMissing` instead of exiting, so callers decide.

use crate::{config::StatsConfig, fbref::parse::table_selector, Result, StatsError};
use reqwest::Url;
use rusqlite::Connection;

/// What the check found usable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capabilities {
    pub sqlite_version: String,
}

pub fn check(config: &StatsConfig) -> Result<Capabilities> {
    check_source_url(&config.source_url)?;
    table_selector(&config.table_id).map_err(|_| missing("CSS selector for the stats table id"))?;
    check_db_directory(config)?;
    let sqlite_version = sqlite_version()?;

    tracing::debug!(sqlite_version = %sqlite_version, "preflight passed");
    Ok(Capabilities { sqlite_version })
}

fn check_source_url(url: &str) -> Result<()> {
    let parsed = Url::parse(url).map_err(|_| missing(format!("valid source URL ({url})")))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(missing(format!("http(s) source URL (got scheme {other:?})"))),
    }
}

fn check_db_directory(config: &StatsConfig) -> Result<()> {
    // A bare file name lives in the working directory
    let Some(parent) = config.db_path.parent().filter(|p| !p.as_os_str().is_empty()) else {
        return Ok(());
    };
    if parent.is_dir() {
        Ok(())
    } else {
        Err(missing(format!("database directory {}", parent.display())))
    }
}

fn sqlite_version() -> Result<String> {
    let conn = Connection::open_in_memory().map_err(|e| missing(format!("SQLite ({e})")))?;
    conn.query_row("SELECT sqlite_version()", [], |row| row.get(0))
        .map_err(|e| missing(format!("SQLite ({e})")))
}

fn missing(what: impl Into<String>) -> StatsError {
    StatsError::DependencyMissing { what: what.into() }
}

#[cfg(test)]
mod tests;
