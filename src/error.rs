//! Error types for the football stats pipeline

use thiserror::Error;

pub type Result<T> = std::result::Result<T, StatsError>;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("Erro: dependência ausente: {what}")]
    DependencyMissing { what: String },

    #[error("Erro na requisição: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("Erro: Tabela de estatísticas não encontrada (id \"{table_id}\").")]
    Parse { table_id: String },

    #[error("Invalid table selector: {selector}")]
    InvalidSelector { selector: String },

    #[error("Database error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to render dashboard: {0}")]
    Render(#[from] askama::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl StatsError {
    /// Process exit code for this failure. Every pipeline error is fatal.
    pub fn exit_code(&self) -> u8 {
        1
    }
}
