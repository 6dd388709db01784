//! Runtime configuration for the pipeline.
//!
//! Every value has a fixed default; running the binary with no arguments uses
//! exactly these. The CLI can point the store and the dashboard elsewhere, and
//! library callers can swap the source URL (tests aim it at a mock server).

use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Page holding the Premier League standard stats table.
pub const SOURCE_URL: &str = "https://fbref.com/en/comps/9/Premier-League-Stats";

/// Element id of the stats table on the source page.
pub const STATS_TABLE_ID: &str = "stats_standard_9";

/// User-Agent sent with the single page request.
pub const USER_AGENT: &str = "Mozilla/5.0";

/// Default database file, relative to the working directory.
pub const DATABASE_FILE: &str = "football_stats.db";

/// Default dashboard port.
pub const DEFAULT_PORT: u16 = 8501;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsConfig {
    pub source_url: String,
    pub table_id: String,
    pub user_agent: String,
    pub db_path: PathBuf,
    pub bind_addr: SocketAddr,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            source_url: SOURCE_URL.to_string(),
            table_id: STATS_TABLE_ID.to_string(),
            user_agent: USER_AGENT.to_string(),
            db_path: PathBuf::from(DATABASE_FILE),
            bind_addr: default_bind_addr(),
        }
    }
}

impl StatsConfig {
    /// Point the extractor at a different page (used against mock servers).
    pub fn with_source_url(mut self, url: impl Into<String>) -> Self {
        self.source_url = url.into();
        self
    }

    pub fn with_db_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.db_path = path.into();
        self
    }

    pub fn with_bind_addr(mut self, addr: SocketAddr) -> Self {
        self.bind_addr = addr;
        self
    }
}

pub fn default_bind_addr() -> SocketAddr {
    SocketAddr::from((Ipv4Addr::LOCALHOST, DEFAULT_PORT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_uses_fixed_constants() {
        let config = StatsConfig::default();
        assert_eq!(config.source_url, SOURCE_URL);
        assert_eq!(config.table_id, "stats_standard_9");
        assert_eq!(config.user_agent, "Mozilla/5.0");
        assert_eq!(config.db_path, PathBuf::from("football_stats.db"));
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8501");
    }

    #[test]
    fn test_builder_overrides() {
        let addr: SocketAddr = "0.0.0.0:9000".parse().unwrap();
        let config = StatsConfig::default()
            .with_source_url("http://localhost:1234/stats")
            .with_db_path("/tmp/other.db")
            .with_bind_addr(addr);

        assert_eq!(config.source_url, "http://localhost:1234/stats");
        assert_eq!(config.db_path, PathBuf::from("/tmp/other.db"));
        assert_eq!(config.bind_addr, addr);
        // untouched fields keep their defaults
        assert_eq!(config.table_id, STATS_TABLE_ID);
    }
}
