//! HTTP request validation shared by the data API handlers.

use graphling::{Direction, PropertyMap, api::ErrorResponse};
use serde::{Deserialize, Serialize};

pub mod limits {
    pub const MAX_PROPERTIES_PER_ENTITY: usize = 128;
    pub const MAX_PROPERTY_KEY_SIZE: usize = 256;
    pub const MAX_STRING_VALUE_SIZE: usize = 65_536;
    pub const MAX_TYPE_SIZE: usize = 255;
}

#[derive(Serialize, Deserialize)]
pub struct RelationshipsQuery {
    pub direction: Option<String>,
}

impl RelationshipsQuery {
    pub fn effective_direction(&self) -> Result<Direction, ErrorResponse> {
        match &self.direction {
            None => Ok(Direction::All),
            Some(raw) => Direction::parse(raw).ok_or_else(|| {
                ErrorResponse::invalid_parameter(
                    "direction",
                    "direction must be one of 'in', 'out', or 'all'",
                )
            }),
        }
    }
}

pub fn validate_properties(properties: &PropertyMap) -> Result<(), ErrorResponse> {
    if properties.len() > limits::MAX_PROPERTIES_PER_ENTITY {
        return Err(ErrorResponse::with_details(
            "validation_error",
            &format!(
                "Property count exceeds maximum of {} (got {})",
                limits::MAX_PROPERTIES_PER_ENTITY,
                properties.len()
            ),
            serde_json::json!({
                "field": "properties",
                "max_size": limits::MAX_PROPERTIES_PER_ENTITY,
                "actual_size": properties.len()
            }),
        ));
    }
    for (key, value) in properties {
        if key.is_empty() {
            return Err(ErrorResponse::with_details(
                "validation_error",
                "Property keys must not be empty",
                serde_json::json!({ "field": "properties" }),
            ));
        }
        if key.len() > limits::MAX_PROPERTY_KEY_SIZE {
            return Err(ErrorResponse::with_details(
                "validation_error",
                &format!(
                    "Property key '{}' exceeds maximum length of {} characters (got {})",
                    key,
                    limits::MAX_PROPERTY_KEY_SIZE,
                    key.len()
                ),
                serde_json::json!({
                    "field": format!("properties['{}']", key),
                    "max_size": limits::MAX_PROPERTY_KEY_SIZE,
                    "actual_size": key.len()
                }),
            ));
        }
        if let serde_json::Value::String(s) = value {
            if s.len() > limits::MAX_STRING_VALUE_SIZE {
                return Err(ErrorResponse::with_details(
                    "validation_error",
                    &format!(
                        "Property '{}' value exceeds maximum length of {} characters (got {})",
                        key,
                        limits::MAX_STRING_VALUE_SIZE,
                        s.len()
                    ),
                    serde_json::json!({
                        "field": format!("properties['{}']", key),
                        "max_size": limits::MAX_STRING_VALUE_SIZE,
                        "actual_size": s.len()
                    }),
                ));
            }
        }
    }
    Ok(())
}

pub fn validate_relationship_type(rel_type: &str) -> Result<(), ErrorResponse> {
    if rel_type.is_empty() || rel_type.len() > limits::MAX_TYPE_SIZE {
        return Err(ErrorResponse::invalid_parameter(
            "type",
            &format!(
                "Relationship type must be between 1 and {} characters",
                limits::MAX_TYPE_SIZE
            ),
        ));
    }
    let chars: Vec<char> = rel_type.chars().collect();
    if !chars[0].is_alphanumeric() && chars[0] != '.' && chars[0] != '_' {
        return Err(ErrorResponse::invalid_relationship_type(rel_type));
    }
    for ch in chars.iter().skip(1) {
        if !ch.is_alphanumeric() && *ch != '.' && *ch != '_' && *ch != '-' {
            return Err(ErrorResponse::invalid_relationship_type(rel_type));
        }
    }
    Ok(())
}
