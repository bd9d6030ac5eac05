//! Admin route handlers for the graphling data API

use super::server::AppState;
use axum::{extract::State, http::StatusCode, response::Json};
use graphling::api::{CleanResponse, ErrorResponse};
use log::info;

/// Wipe every node and relationship. Test harnesses call this between runs.
#[tracing::instrument(level = "debug", skip(app_state))]
pub async fn clean_database(
    State(app_state): State<AppState>,
) -> Result<Json<CleanResponse>, (StatusCode, Json<ErrorResponse>)> {
    let (nodes_removed, relationships_removed) = app_state.graph.clean();
    info!(
        "DELETE /db/data/cleandb - removed {nodes_removed} nodes, {relationships_removed} relationships"
    );
    Ok(Json(CleanResponse::new(
        nodes_removed,
        relationships_removed,
    )))
}
