use super::test_utilities::{TestClient, TestServer};

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");
    let helper = TestClient::new(&server);

    let response = helper.health_check().await.unwrap();
    assert_eq!(response.status(), 200);

    let health_data: serde_json::Value = response.json().await.unwrap();
    assert_eq!(health_data["status"], "healthy");
    assert_eq!(health_data["service"], "graphling");
    assert!(health_data["timestamp"].as_u64().is_some());
}

#[tokio::test]
async fn test_service_root_discovery() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");
    let helper = TestClient::new(&server);

    let response = helper
        .client
        .get(server.data_url())
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let root: serde_json::Value = response.json().await.unwrap();
    assert_eq!(root["node"], format!("{}node", server.data_url()));
    assert_eq!(
        root["relationship"],
        format!("{}relationship", server.data_url())
    );
    assert_eq!(root["clean"], format!("{}cleandb", server.data_url()));
    assert_eq!(root["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_unknown_endpoint_returns_404() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");
    let helper = TestClient::new(&server);

    let response = helper
        .client
        .get(format!("{}/nonexistent-endpoint", helper.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
}
