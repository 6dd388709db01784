//! Full-replace writes and full-table reads

use super::{models::PlayerRecord, schema::StatsDatabase, schema::CREATE_PLAYERS_TABLE};
use crate::Result;
use rusqlite::{params, Row};

impl StatsDatabase {
    /// Replace the players table with `records`.
    ///
    /// Drop, create and inserts run in one transaction: on any failure the
    /// transaction rolls back and the previous table is left as it was.
    /// Returns the number of rows written.
    pub fn replace_all(&mut self, records: &[PlayerRecord]) -> Result<usize> {
        let tx = self.conn.transaction()?;
        tx.execute("DROP TABLE IF EXISTS players", [])?;
        tx.execute(CREATE_PLAYERS_TABLE, [])?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO players (Player, Team, Goals, Assists) VALUES (?, ?, ?, ?)",
            )?;
            for record in records {
                stmt.execute(params![
                    record.player,
                    record.team,
                    record.goals,
                    record.assists
                ])?;
            }
        }
        tx.commit()?;

        tracing::info!(rows = records.len(), "replaced players table");
        Ok(records.len())
    }

    /// Every stored record in storage order.
    ///
    /// A store that was never written yields an empty vec.
    pub fn read_all(&self) -> Result<Vec<PlayerRecord>> {
        if !self.table_exists()? {
            tracing::debug!("players table does not exist yet");
            return Ok(Vec::new());
        }

        let mut stmt = self
            .conn
            .prepare("SELECT Player, Team, Goals, Assists FROM players ORDER BY rowid")?;
        let records = stmt
            .query_map([], row_to_record)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(records)
    }
}

fn row_to_record(row: &Row) -> rusqlite::Result<PlayerRecord> {
    Ok(PlayerRecord {
        player: row.get(0)?,
        team: row.get(1)?,
        goals: row.get(2)?,
        assists: row.get(3)?,
    })
}
