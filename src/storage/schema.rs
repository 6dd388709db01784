//! Database schema and connection management

use crate::Result;
use rusqlite::Connection;
use std::path::Path;

/// Name of the single table holding the current snapshot.
pub const PLAYERS_TABLE: &str = "players";

/// Column layout shared by every (re)creation of the players table.
pub(crate) const CREATE_PLAYERS_TABLE: &str = "CREATE TABLE players (
    Player TEXT NOT NULL,
    Team TEXT NOT NULL,
    Goals INTEGER NOT NULL,
    Assists INTEGER NOT NULL
)";

/// Database connection manager for the stats snapshot.
///
/// Unlike a cache, the schema is not created on open: a database whose
/// `players` table has never been written is a valid, empty store.
pub struct StatsDatabase {
    pub(crate) conn: Connection,
}

impl StatsDatabase {
    /// Open (or create) the database file at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "opening stats database");
        let conn = Connection::open(path)?;
        Ok(Self { conn })
    }

    /// In-memory database, used by tests.
    pub fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    /// Whether the players table has been written at least once.
    pub fn table_exists(&self) -> Result<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?",
            [PLAYERS_TABLE],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }
}
