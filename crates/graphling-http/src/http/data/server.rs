//! HTTP server assembly for the graphling data API

use axum::http::StatusCode;
use graphling::GraphStore;
use log::info;
use std::sync::Arc;
use tokio::net::TcpListener;

pub use super::routes::create_router;

pub type AppState = Arc<AppStateInner>;

#[derive(Clone)]
pub struct AppStateInner {
    pub graph: Arc<GraphStore>,
    /// Service root ending in a slash, used to build `self` URIs.
    pub data_url: String,
}

pub fn error_to_status_code(error_code: &str) -> StatusCode {
    match error_code {
        "invalid_parameter" | "validation_error" => StatusCode::BAD_REQUEST,
        "node_not_found" | "relationship_not_found" => StatusCode::NOT_FOUND,
        "node_in_use" => StatusCode::CONFLICT,
        "internal_error" => StatusCode::INTERNAL_SERVER_ERROR,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub fn create_app_state(graph: Arc<GraphStore>, data_url: String) -> AppState {
    Arc::new(AppStateInner { graph, data_url })
}

/// Bind and serve the data API until the process exits. Bind failures are
/// propagated to the caller.
pub async fn start_server(host: &str, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let bind_address = format!("{host}:{port}");
    let listener = TcpListener::bind(&bind_address)
        .await
        .map_err(|e| format!("Failed to bind to address {bind_address}: {e}"))?;
    let local_addr = listener.local_addr()?;
    let data_url = format!("http://{host}:{}/db/data/", local_addr.port());
    let app_state = create_app_state(Arc::new(GraphStore::new()), data_url);
    let app = create_router(app_state);
    info!("graphling server starting on http://{local_addr}");
    axum::serve(listener, app)
        .await
        .map_err(|e| format!("Server failed to start: {e}"))?;
    Ok(())
}
