use super::test_utilities::{TestClient, TestServer};
use serde_json::json;

#[tokio::test]
async fn test_clean_db_wipes_everything() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");
    let helper = TestClient::new(&server);

    let a = helper.create_node_id(json!({ "name": "a" })).await;
    let b = helper.create_node_id(json!({ "name": "b" })).await;
    helper.create_relationship(a, b, "KNOWS").await.unwrap();

    let response = helper.clean_db().await.unwrap();
    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["nodes_removed"], 2);
    assert_eq!(body["relationships_removed"], 1);
    // Timestamp is RFC 3339
    assert!(body["timestamp"].as_str().unwrap().contains("T"));

    let response = helper.stats().await.unwrap();
    assert_eq!(response.status(), 200);
    let stats: serde_json::Value = response.json().await.unwrap();
    assert_eq!(stats["node_count"], 0);
    assert_eq!(stats["relationship_count"], 0);
}

#[tokio::test]
async fn test_clean_db_on_empty_store_is_a_noop() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");
    let helper = TestClient::new(&server);

    let response = helper.clean_db().await.unwrap();
    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["nodes_removed"], 0);
    assert_eq!(body["relationships_removed"], 0);
}

#[tokio::test]
async fn test_ids_are_not_reused_after_clean() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");
    let helper = TestClient::new(&server);

    let first = helper.create_node_id(json!({})).await;
    helper.clean_db().await.unwrap();
    let second = helper.create_node_id(json!({})).await;
    assert!(second > first);
}
