//! Node route handlers for the graphling data API

use super::server::{AppState, error_to_status_code};
use crate::http::common::validate_properties;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use graphling::api::{
    CreateNodeRequest, ErrorResponse, NodeResponse, PropertiesResponse, UpdatePropertiesRequest,
};
use log::{error, trace};

#[tracing::instrument(level = "debug", skip(app_state, request))]
pub async fn create_node(
    State(app_state): State<AppState>,
    Json(request): Json<CreateNodeRequest>,
) -> Result<Json<NodeResponse>, (StatusCode, Json<ErrorResponse>)> {
    if let Err(error_response) = validate_properties(&request.properties) {
        error!(
            "POST /db/data/node validation failed: {}",
            error_response.message
        );
        return Err((
            error_to_status_code(&error_response.error),
            Json(error_response),
        ));
    }
    let node = app_state.graph.create_node(request.properties);
    trace!("POST /db/data/node - created node {}", node.id);
    Ok(Json(NodeResponse::from_node(node, &app_state.data_url)))
}

#[tracing::instrument(level = "debug", skip(app_state), fields(id = %id))]
pub async fn get_node(
    State(app_state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<NodeResponse>, (StatusCode, Json<ErrorResponse>)> {
    match app_state.graph.node(id) {
        Ok(node) => {
            trace!("GET /db/data/node/{id}");
            Ok(Json(NodeResponse::from_node(node, &app_state.data_url)))
        }
        Err(error) => {
            error!("GET /db/data/node/{id} failed: {error}");
            let error_response = ErrorResponse::from(error);
            Err((
                error_to_status_code(&error_response.error),
                Json(error_response),
            ))
        }
    }
}

#[tracing::instrument(level = "debug", skip(app_state), fields(id = %id))]
pub async fn delete_node(
    State(app_state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, (StatusCode, Json<ErrorResponse>)> {
    match app_state.graph.delete_node(id) {
        Ok(()) => {
            trace!("DELETE /db/data/node/{id}");
            Ok(StatusCode::NO_CONTENT)
        }
        Err(error) => {
            error!("DELETE /db/data/node/{id} failed: {error}");
            let error_response = ErrorResponse::from(error);
            Err((
                error_to_status_code(&error_response.error),
                Json(error_response),
            ))
        }
    }
}

#[tracing::instrument(level = "debug", skip(app_state), fields(id = %id))]
pub async fn get_node_properties(
    State(app_state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<PropertiesResponse>, (StatusCode, Json<ErrorResponse>)> {
    match app_state.graph.node_properties(id) {
        Ok(properties) => {
            trace!("GET /db/data/node/{id}/properties");
            Ok(Json(PropertiesResponse { properties }))
        }
        Err(error) => {
            error!("GET /db/data/node/{id}/properties failed: {error}");
            let error_response = ErrorResponse::from(error);
            Err((
                error_to_status_code(&error_response.error),
                Json(error_response),
            ))
        }
    }
}

#[tracing::instrument(level = "debug", skip(app_state, request), fields(id = %id))]
pub async fn set_node_properties(
    State(app_state): State<AppState>,
    Path(id): Path<u64>,
    Json(request): Json<UpdatePropertiesRequest>,
) -> Result<Json<NodeResponse>, (StatusCode, Json<ErrorResponse>)> {
    if let Err(error_response) = validate_properties(&request.properties) {
        error!(
            "PUT /db/data/node/{id}/properties validation failed: {}",
            error_response.message
        );
        return Err((
            error_to_status_code(&error_response.error),
            Json(error_response),
        ));
    }
    match app_state.graph.set_node_properties(id, request.properties) {
        Ok(node) => {
            trace!("PUT /db/data/node/{id}/properties");
            Ok(Json(NodeResponse::from_node(node, &app_state.data_url)))
        }
        Err(error) => {
            error!("PUT /db/data/node/{id}/properties failed: {error}");
            let error_response = ErrorResponse::from(error);
            Err((
                error_to_status_code(&error_response.error),
                Json(error_response),
            ))
        }
    }
}
