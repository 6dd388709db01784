//! Storage layer for football stats
//!
//! A thin abstraction over the SQLite file holding the latest scrape:
//! - `models`: the `PlayerRecord` row type
//! - `schema`: connection management and the `players` table definition
//! - `queries`: full-replace writes and full-table reads

pub mod models;
pub mod queries;
pub mod schema;


// Re-export the main types and database struct for easy access
pub use models::*;
pub use schema::{StatsDatabase, PLAYERS_TABLE};
