//! Relationship route handlers for the graphling data API

use super::server::{AppState, error_to_status_code};
use crate::http::common::{RelationshipsQuery, validate_properties, validate_relationship_type};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use graphling::api::{
    CreateRelationshipRequest, ErrorResponse, RelationshipResponse, RelationshipsResponse,
};
use log::{error, trace};

#[tracing::instrument(level = "debug", skip(app_state, request), fields(id = %id))]
pub async fn create_relationship(
    State(app_state): State<AppState>,
    Path(id): Path<u64>,
    Json(request): Json<CreateRelationshipRequest>,
) -> Result<Json<RelationshipResponse>, (StatusCode, Json<ErrorResponse>)> {
    if let Err(error_response) = validate_relationship_type(&request.rel_type) {
        error!(
            "POST /db/data/node/{id}/relationships type validation failed: {}",
            error_response.message
        );
        return Err((
            error_to_status_code(&error_response.error),
            Json(error_response),
        ));
    }
    if let Err(error_response) = validate_properties(&request.properties) {
        error!(
            "POST /db/data/node/{id}/relationships validation failed: {}",
            error_response.message
        );
        return Err((
            error_to_status_code(&error_response.error),
            Json(error_response),
        ));
    }
    match app_state
        .graph
        .create_relationship(id, request.to, request.rel_type, request.properties)
    {
        Ok(relationship) => {
            trace!(
                "POST /db/data/node/{id}/relationships - created relationship {}",
                relationship.id
            );
            Ok(Json(RelationshipResponse::from_relationship(
                relationship,
                &app_state.data_url,
            )))
        }
        Err(error) => {
            error!("POST /db/data/node/{id}/relationships failed: {error}");
            let error_response = ErrorResponse::from(error);
            Err((
                error_to_status_code(&error_response.error),
                Json(error_response),
            ))
        }
    }
}

#[tracing::instrument(level = "debug", skip(app_state, query), fields(id = %id))]
pub async fn list_node_relationships(
    State(app_state): State<AppState>,
    Path(id): Path<u64>,
    Query(query): Query<RelationshipsQuery>,
) -> Result<Json<RelationshipsResponse>, (StatusCode, Json<ErrorResponse>)> {
    let direction = match query.effective_direction() {
        Ok(direction) => direction,
        Err(error_response) => {
            error!(
                "GET /db/data/node/{id}/relationships query validation failed: {}",
                error_response.message
            );
            return Err((
                error_to_status_code(&error_response.error),
                Json(error_response),
            ));
        }
    };
    match app_state.graph.relationships_for(id, direction) {
        Ok(relationships) => {
            trace!(
                "GET /db/data/node/{id}/relationships - direction: {}, {} relationships returned",
                direction.as_str(),
                relationships.len()
            );
            let relationships = relationships
                .into_iter()
                .map(|r| RelationshipResponse::from_relationship(r, &app_state.data_url))
                .collect();
            Ok(Json(RelationshipsResponse { relationships }))
        }
        Err(error) => {
            error!("GET /db/data/node/{id}/relationships failed: {error}");
            let error_response = ErrorResponse::from(error);
            Err((
                error_to_status_code(&error_response.error),
                Json(error_response),
            ))
        }
    }
}

#[tracing::instrument(level = "debug", skip(app_state), fields(id = %id))]
pub async fn get_relationship(
    State(app_state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<RelationshipResponse>, (StatusCode, Json<ErrorResponse>)> {
    match app_state.graph.relationship(id) {
        Ok(relationship) => {
            trace!("GET /db/data/relationship/{id}");
            Ok(Json(RelationshipResponse::from_relationship(
                relationship,
                &app_state.data_url,
            )))
        }
        Err(error) => {
            error!("GET /db/data/relationship/{id} failed: {error}");
            let error_response = ErrorResponse::from(error);
            Err((
                error_to_status_code(&error_response.error),
                Json(error_response),
            ))
        }
    }
}

#[tracing::instrument(level = "debug", skip(app_state), fields(id = %id))]
pub async fn delete_relationship(
    State(app_state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, (StatusCode, Json<ErrorResponse>)> {
    match app_state.graph.delete_relationship(id) {
        Ok(()) => {
            trace!("DELETE /db/data/relationship/{id}");
            Ok(StatusCode::NO_CONTENT)
        }
        Err(error) => {
            error!("DELETE /db/data/relationship/{id} failed: {error}");
            let error_response = ErrorResponse::from(error);
            Err((
                error_to_status_code(&error_response.error),
                Json(error_response),
            ))
        }
    }
}
