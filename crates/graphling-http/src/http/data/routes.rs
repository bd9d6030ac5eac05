//! Route configuration for the graphling data API

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::trace::TraceLayer;

use super::{admin, metadata, node, relationship, server::AppState};

/// Creates the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        // Metadata routes
        .route("/health", get(metadata::health_check))
        .route("/db/data/", get(metadata::service_root))
        .route("/db/data/stats", get(metadata::graph_stats))
        // Node routes
        .route("/db/data/node", post(node::create_node))
        .route("/db/data/node/{id}", get(node::get_node))
        .route("/db/data/node/{id}", delete(node::delete_node))
        .route(
            "/db/data/node/{id}/properties",
            get(node::get_node_properties),
        )
        .route(
            "/db/data/node/{id}/properties",
            put(node::set_node_properties),
        )
        // Relationship routes
        .route(
            "/db/data/node/{id}/relationships",
            post(relationship::create_relationship),
        )
        .route(
            "/db/data/node/{id}/relationships",
            get(relationship::list_node_relationships),
        )
        .route(
            "/db/data/relationship/{id}",
            get(relationship::get_relationship),
        )
        .route(
            "/db/data/relationship/{id}",
            delete(relationship::delete_relationship),
        )
        // Admin routes
        .route("/db/data/cleandb", delete(admin::clean_database))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
