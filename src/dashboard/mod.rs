//! Interactive dashboard over the stored snapshot.
//!
//! - `view`: pure evaluation of records + selection into a `DashboardView`
//! - `render`: HTML page with an inline SVG bar chart
//! - `server`: axum router that re-evaluates the view on every request

pub mod render;
pub mod server;
pub mod view;

pub use render::render_page;
pub use server::{router, serve};
pub use view::{evaluate, ChartState, DashboardView, TeamView};

pub const PAGE_TITLE: &str = "Estatísticas da Premier League";
pub const TEAM_SELECT_LABEL: &str = "Selecione um time";
pub const NO_DATA_MESSAGE: &str = "Nenhum dado disponível. Verifique a fonte dos dados.";
pub const NO_TEAM_DATA_WARNING: &str = "Nenhum dado disponível para este time.";
