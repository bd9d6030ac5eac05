//! Metadata route handlers for the graphling data API

use super::server::AppState;
use axum::{extract::State, http::StatusCode, response::Json};
use graphling::api::{ErrorResponse, GraphStatsResponse, HealthCheckResponse, ServiceRootResponse};
use log::trace;

pub async fn health_check(
    State(_app_state): State<AppState>,
) -> Result<Json<HealthCheckResponse>, (StatusCode, Json<ErrorResponse>)> {
    trace!("GET /health");
    Ok(Json(HealthCheckResponse {
        status: "healthy".to_string(),
        service: "graphling".to_string(),
        timestamp: std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_secs(),
    }))
}

/// Discovery document pointing at the node, relationship, and clean
/// endpoints, mirroring the service-root documents of graph REST APIs.
pub async fn service_root(
    State(app_state): State<AppState>,
) -> Result<Json<ServiceRootResponse>, (StatusCode, Json<ErrorResponse>)> {
    trace!("GET /db/data/");
    let data_url = &app_state.data_url;
    Ok(Json(ServiceRootResponse {
        node: format!("{data_url}node"),
        relationship: format!("{data_url}relationship"),
        clean: format!("{data_url}cleandb"),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}

pub async fn graph_stats(
    State(app_state): State<AppState>,
) -> Result<Json<GraphStatsResponse>, (StatusCode, Json<ErrorResponse>)> {
    trace!("GET /db/data/stats");
    Ok(Json(GraphStatsResponse {
        node_count: app_state.graph.node_count(),
        relationship_count: app_state.graph.relationship_count(),
    }))
}
