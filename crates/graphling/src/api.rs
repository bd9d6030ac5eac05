//! REST API request and response types shared by the server and the client.

use crate::{GraphError, Node, PropertyMap, Relationship};
use serde::{Deserialize, Serialize};

// =============================================================================
// NODE API TYPES
// =============================================================================

#[derive(Serialize, Deserialize, Default)]
pub struct CreateNodeRequest {
    #[serde(default)]
    pub properties: PropertyMap,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NodeResponse {
    pub id: u64,
    #[serde(rename = "self")]
    pub self_uri: String,
    pub properties: PropertyMap,
}

impl NodeResponse {
    /// `data_url` is the service root ending in a slash, e.g.
    /// `http://localhost:7470/db/data/`.
    pub fn from_node(node: Node, data_url: &str) -> Self {
        Self {
            self_uri: format!("{data_url}node/{}", node.id),
            id: node.id,
            properties: node.properties,
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct UpdatePropertiesRequest {
    pub properties: PropertyMap,
}

#[derive(Serialize, Deserialize)]
pub struct PropertiesResponse {
    pub properties: PropertyMap,
}

// =============================================================================
// RELATIONSHIP API TYPES
// =============================================================================

#[derive(Serialize, Deserialize)]
pub struct CreateRelationshipRequest {
    /// Id of the node the relationship points to.
    pub to: u64,
    #[serde(rename = "type")]
    pub rel_type: String,
    #[serde(default)]
    pub properties: PropertyMap,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RelationshipResponse {
    pub id: u64,
    #[serde(rename = "self")]
    pub self_uri: String,
    pub start: u64,
    pub end: u64,
    #[serde(rename = "type")]
    pub rel_type: String,
    pub properties: PropertyMap,
}

impl RelationshipResponse {
    pub fn from_relationship(relationship: Relationship, data_url: &str) -> Self {
        Self {
            self_uri: format!("{data_url}relationship/{}", relationship.id),
            id: relationship.id,
            start: relationship.start,
            end: relationship.end,
            rel_type: relationship.rel_type,
            properties: relationship.properties,
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct RelationshipsResponse {
    pub relationships: Vec<RelationshipResponse>,
}

// =============================================================================
// ADMIN & METADATA API TYPES
// =============================================================================

#[derive(Serialize, Deserialize)]
pub struct CleanResponse {
    pub nodes_removed: u64,
    pub relationships_removed: u64,
    pub timestamp: String,
}

impl CleanResponse {
    pub fn new(nodes_removed: u64, relationships_removed: u64) -> Self {
        Self {
            nodes_removed,
            relationships_removed,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Discovery document served at the data root, advertising the endpoints a
/// client can reach from there.
#[derive(Serialize, Deserialize)]
pub struct ServiceRootResponse {
    pub node: String,
    pub relationship: String,
    pub clean: String,
    pub version: String,
}

#[derive(Serialize, Deserialize)]
pub struct GraphStatsResponse {
    pub node_count: u64,
    pub relationship_count: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    pub status: String,
    pub service: String,
    pub timestamp: u64,
}

// =============================================================================
// ERROR RESPONSE
// =============================================================================

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(error: &str, message: &str) -> Self {
        Self {
            error: error.to_string(),
            message: message.to_string(),
            details: None,
        }
    }
    pub fn with_details(error: &str, message: &str, details: serde_json::Value) -> Self {
        Self {
            error: error.to_string(),
            message: message.to_string(),
            details: Some(details),
        }
    }
    pub fn validation_error(message: &str) -> Self {
        Self::new("validation_error", message)
    }
    pub fn invalid_parameter(param_name: &str, message: &str) -> Self {
        Self::with_details(
            "invalid_parameter",
            message,
            serde_json::json!({ "parameter": param_name }),
        )
    }
    pub fn node_not_found(id: u64) -> Self {
        Self::with_details(
            "node_not_found",
            &format!("Node {id} not found"),
            serde_json::json!({ "id": id }),
        )
    }
    pub fn relationship_not_found(id: u64) -> Self {
        Self::with_details(
            "relationship_not_found",
            &format!("Relationship {id} not found"),
            serde_json::json!({ "id": id }),
        )
    }
    pub fn node_in_use(id: u64, relationship_count: usize) -> Self {
        Self::with_details(
            "node_in_use",
            &format!("Node {id} still has {relationship_count} relationship(s) attached"),
            serde_json::json!({ "id": id, "relationship_count": relationship_count }),
        )
    }
    pub fn internal_error(message: &str) -> Self {
        Self::new("internal_error", message)
    }
    pub fn invalid_relationship_type(rel_type: &str) -> Self {
        Self::with_details(
            "invalid_parameter",
            "Relationship type must contain only alphanumeric characters, dots, underscores, and hyphens",
            serde_json::json!({ "parameter": "type", "value": rel_type }),
        )
    }
}

impl From<GraphError> for ErrorResponse {
    fn from(err: GraphError) -> Self {
        match err {
            GraphError::NodeNotFound { id } => Self::node_not_found(id),
            GraphError::RelationshipNotFound { id } => Self::relationship_not_found(id),
            GraphError::NodeInUse {
                id,
                relationship_count,
            } => Self::node_in_use(id, relationship_count),
        }
    }
}
