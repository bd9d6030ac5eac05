//! graphling client library.
//!
//! This crate provides [`RestGraphDatabase`], a typed client handle for a
//! graphling server's REST data API. Test code obtains one from the harness
//! and issues graph operations through it.

use graphling::{Direction, PropertyMap};
use graphling::api::{
    CleanResponse, ErrorResponse, GraphStatsResponse, HealthCheckResponse, NodeResponse,
    PropertiesResponse, RelationshipResponse, RelationshipsResponse, ServiceRootResponse,
    UpdatePropertiesRequest,
};
use serde::de::DeserializeOwned;
use std::fmt;

// =============================================================================
// ERRORS
// =============================================================================

#[derive(Debug)]
pub enum ClientError {
    /// Transport-level failure (connection refused, timeout, decode).
    Http(reqwest::Error),
    /// The server answered with a non-success status and an error body.
    Api { status: u16, response: ErrorResponse },
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Http(err) => write!(f, "HTTP transport error: {err}"),
            ClientError::Api { status, response } => {
                write!(f, "Server returned {status} ({}): {}", response.error, response.message)
            }
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClientError::Http(err) => Some(err),
            ClientError::Api { .. } => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Http(err)
    }
}

impl ClientError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::Api { status: 404, .. })
    }
}

// =============================================================================
// CLIENT HANDLE
// =============================================================================

/// Client handle for a graph database exposed over REST.
///
/// Construction performs no I/O; a handle pointed at a server that is not
/// running fails on first use.
#[derive(Clone)]
pub struct RestGraphDatabase {
    client: reqwest::Client,
    data_url: String,
}

impl RestGraphDatabase {
    /// Point a handle at a data root, e.g. `http://localhost:7470/db/data/`.
    /// A missing trailing slash is added.
    pub fn connect(data_url: impl Into<String>) -> Self {
        let mut data_url = data_url.into();
        if !data_url.ends_with('/') {
            data_url.push('/');
        }
        Self {
            client: reqwest::Client::new(),
            data_url,
        }
    }

    pub fn data_url(&self) -> &str {
        &self.data_url
    }

    /// Server root (the data URL with the `db/data/` suffix stripped), where
    /// the health endpoint lives.
    fn base_url(&self) -> &str {
        self.data_url
            .strip_suffix("db/data/")
            .unwrap_or(&self.data_url)
    }

    pub async fn health(&self) -> Result<HealthCheckResponse, ClientError> {
        let response = self
            .client
            .get(format!("{}health", self.base_url()))
            .send()
            .await?;
        Self::expect_json(response).await
    }

    pub async fn service_root(&self) -> Result<ServiceRootResponse, ClientError> {
        let response = self.client.get(&self.data_url).send().await?;
        Self::expect_json(response).await
    }

    pub async fn stats(&self) -> Result<GraphStatsResponse, ClientError> {
        let response = self
            .client
            .get(format!("{}stats", self.data_url))
            .send()
            .await?;
        Self::expect_json(response).await
    }

    pub async fn create_node(&self, properties: PropertyMap) -> Result<NodeResponse, ClientError> {
        let response = self
            .client
            .post(format!("{}node", self.data_url))
            .json(&serde_json::json!({ "properties": properties }))
            .send()
            .await?;
        Self::expect_json(response).await
    }

    pub async fn node(&self, id: u64) -> Result<NodeResponse, ClientError> {
        let response = self
            .client
            .get(format!("{}node/{id}", self.data_url))
            .send()
            .await?;
        Self::expect_json(response).await
    }

    pub async fn delete_node(&self, id: u64) -> Result<(), ClientError> {
        let response = self
            .client
            .delete(format!("{}node/{id}", self.data_url))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    pub async fn node_properties(&self, id: u64) -> Result<PropertyMap, ClientError> {
        let response = self
            .client
            .get(format!("{}node/{id}/properties", self.data_url))
            .send()
            .await?;
        let body: PropertiesResponse = Self::expect_json(response).await?;
        Ok(body.properties)
    }

    pub async fn set_node_properties(
        &self,
        id: u64,
        properties: PropertyMap,
    ) -> Result<NodeResponse, ClientError> {
        let response = self
            .client
            .put(format!("{}node/{id}/properties", self.data_url))
            .json(&UpdatePropertiesRequest { properties })
            .send()
            .await?;
        Self::expect_json(response).await
    }

    pub async fn create_relationship(
        &self,
        start: u64,
        to: u64,
        rel_type: &str,
        properties: PropertyMap,
    ) -> Result<RelationshipResponse, ClientError> {
        let response = self
            .client
            .post(format!("{}node/{start}/relationships", self.data_url))
            .json(&serde_json::json!({ "to": to, "type": rel_type, "properties": properties }))
            .send()
            .await?;
        Self::expect_json(response).await
    }

    pub async fn relationship(&self, id: u64) -> Result<RelationshipResponse, ClientError> {
        let response = self
            .client
            .get(format!("{}relationship/{id}", self.data_url))
            .send()
            .await?;
        Self::expect_json(response).await
    }

    pub async fn delete_relationship(&self, id: u64) -> Result<(), ClientError> {
        let response = self
            .client
            .delete(format!("{}relationship/{id}", self.data_url))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    pub async fn node_relationships(
        &self,
        id: u64,
        direction: Direction,
    ) -> Result<Vec<RelationshipResponse>, ClientError> {
        let response = self
            .client
            .get(format!("{}node/{id}/relationships", self.data_url))
            .query(&[("direction", direction.as_str())])
            .send()
            .await?;
        let body: RelationshipsResponse = Self::expect_json(response).await?;
        Ok(body.relationships)
    }

    /// Wipe all graph state on the server. Returns the removal counts.
    pub async fn clean(&self) -> Result<CleanResponse, ClientError> {
        let response = self
            .client
            .delete(format!("{}cleandb", self.data_url))
            .send()
            .await?;
        Self::expect_json(response).await
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let error_response = serde_json::from_str::<ErrorResponse>(&body)
            .unwrap_or_else(|_| ErrorResponse::new("unknown", body.trim()));
        Err(ClientError::Api {
            status: status.as_u16(),
            response: error_response,
        })
    }

    async fn expect_json<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let response = Self::check(response).await?;
        Ok(response.json::<T>().await?)
    }
}
