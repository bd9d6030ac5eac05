use graphling::GraphStore;
use graphling_http::{create_app_state, create_router};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

/// In-process test server bound to an OS-assigned port.
pub struct TestServer {
    pub addr: SocketAddr,
}

impl TestServer {
    pub async fn start() -> Result<Self, Box<dyn std::error::Error>> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let data_url = format!("http://{addr}/db/data/");
        let app_state = create_app_state(Arc::new(GraphStore::new()), data_url);
        let app = create_router(app_state);
        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                eprintln!("test server exited: {e}");
            }
        });
        Ok(TestServer { addr })
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn data_url(&self) -> String {
        format!("http://{}/db/data/", self.addr)
    }
}

// Helper struct for common test operations
pub struct TestClient {
    pub client: reqwest::Client,
    pub base_url: String,
    pub data_url: String,
}

#[allow(dead_code)]
impl TestClient {
    pub fn new(server: &TestServer) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: server.base_url(),
            data_url: server.data_url(),
        }
    }

    pub async fn health_check(&self) -> reqwest::Result<reqwest::Response> {
        self.client
            .get(format!("{}/health", self.base_url))
            .send()
            .await
    }

    pub async fn create_node(
        &self,
        properties: serde_json::Value,
    ) -> reqwest::Result<reqwest::Response> {
        self.client
            .post(format!("{}node", self.data_url))
            .json(&serde_json::json!({ "properties": properties }))
            .send()
            .await
    }

    /// Create a node and return its id, asserting success.
    pub async fn create_node_id(&self, properties: serde_json::Value) -> u64 {
        let response = self.create_node(properties).await.unwrap();
        assert_eq!(response.status(), 200);
        let body: serde_json::Value = response.json().await.unwrap();
        body["id"].as_u64().unwrap()
    }

    pub async fn get_node(&self, id: u64) -> reqwest::Result<reqwest::Response> {
        self.client
            .get(format!("{}node/{id}", self.data_url))
            .send()
            .await
    }

    pub async fn delete_node(&self, id: u64) -> reqwest::Result<reqwest::Response> {
        self.client
            .delete(format!("{}node/{id}", self.data_url))
            .send()
            .await
    }

    pub async fn create_relationship(
        &self,
        from: u64,
        to: u64,
        rel_type: &str,
    ) -> reqwest::Result<reqwest::Response> {
        self.client
            .post(format!("{}node/{from}/relationships", self.data_url))
            .json(&serde_json::json!({ "to": to, "type": rel_type }))
            .send()
            .await
    }

    pub async fn node_relationships(
        &self,
        id: u64,
        direction: Option<&str>,
    ) -> reqwest::Result<reqwest::Response> {
        let mut request = self
            .client
            .get(format!("{}node/{id}/relationships", self.data_url));
        if let Some(d) = direction {
            request = request.query(&[("direction", d)]);
        }
        request.send().await
    }

    pub async fn clean_db(&self) -> reqwest::Result<reqwest::Response> {
        self.client
            .delete(format!("{}cleandb", self.data_url))
            .send()
            .await
    }

    pub async fn stats(&self) -> reqwest::Result<reqwest::Response> {
        self.client
            .get(format!("{}stats", self.data_url))
            .send()
            .await
    }
}
