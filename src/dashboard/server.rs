//! HTTP surface for the dashboard

use super::{render::render_page, view::evaluate};
use crate::{storage::PlayerRecord, Result};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use std::{net::SocketAddr, sync::Arc};

/// Immutable snapshot of the store, shared by every request.
#[derive(Clone)]
pub struct DashboardState {
    records: Arc<Vec<PlayerRecord>>,
}

#[derive(Debug, Deserialize)]
pub struct SelectionQuery {
    pub team: Option<String>,
}

pub fn router(records: Vec<PlayerRecord>) -> Router {
    let state = DashboardState {
        records: Arc::new(records),
    };

    Router::new()
        .route("/", get(dashboard_page))
        .with_state(state)
}

/// GET / - Evaluate and render the page for the requested team
async fn dashboard_page(
    State(state): State<DashboardState>,
    Query(params): Query<SelectionQuery>,
) -> Response {
    let view = evaluate(&state.records, params.team.as_deref());

    match render_page(&view) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("Unable to render dashboard: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "failed to render dashboard").into_response()
        }
    }
}

/// Serve the dashboard on `addr` until the process is stopped.
pub async fn serve(records: Vec<PlayerRecord>, addr: SocketAddr) -> Result<()> {
    let app = router(records);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Dashboard listening on http://{addr}");
    println!("✓ Dashboard available at http://{addr}");

    axum::serve(listener, app).await?;
    Ok(())
}
