//! Data models for the storage layer

use serde::Serialize;

/// One row of extracted statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerRecord {
    pub player: String,
    pub team: String,
    pub goals: u32,
    pub assists: u32,
}

impl PlayerRecord {
    pub fn new(player: impl Into<String>, team: impl Into<String>, goals: u32, assists: u32) -> Self {
        Self {
            player: player.into(),
            team: team.into(),
            goals,
            assists,
        }
    }
}
