use graphling_harness::{RestTestHarness, ServerConfig};
use serde_json::json;

fn props(value: serde_json::Value) -> graphling::PropertyMap {
    match value {
        serde_json::Value::Object(map) => map.into_iter().collect(),
        _ => panic!("expected a JSON object"),
    }
}

#[tokio::test]
async fn test_clean_db_between_test_runs() {
    let mut harness = RestTestHarness::with_config(ServerConfig::new("localhost", 0));
    harness
        .start_server()
        .await
        .expect("Failed to start test server");
    let db = harness.create_graph_database();

    // First "test run" populates the graph
    let a = db.create_node(props(json!({ "name": "a" }))).await.unwrap();
    let b = db.create_node(props(json!({ "name": "b" }))).await.unwrap();
    db.create_relationship(a.id, b.id, "KNOWS", Default::default())
        .await
        .unwrap();

    let (nodes_removed, relationships_removed) = harness.clean_db().unwrap();
    assert_eq!((nodes_removed, relationships_removed), (2, 1));

    // The next run sees an empty graph
    let stats = db.stats().await.unwrap();
    assert_eq!(stats.node_count, 0);
    assert_eq!(stats.relationship_count, 0);

    harness.shutdown_server().await.unwrap();
}

#[tokio::test]
async fn test_clean_on_empty_graph_is_a_noop() {
    let mut harness = RestTestHarness::with_config(ServerConfig::new("localhost", 0));
    harness
        .start_server()
        .await
        .expect("Failed to start test server");

    assert_eq!(harness.clean_db().unwrap(), (0, 0));
    assert_eq!(harness.clean_db().unwrap(), (0, 0));

    harness.shutdown_server().await.unwrap();
}

#[tokio::test]
async fn test_clean_through_the_client_handle() {
    let mut harness = RestTestHarness::with_config(ServerConfig::new("localhost", 0));
    harness
        .start_server()
        .await
        .expect("Failed to start test server");
    let db = harness.create_graph_database();

    db.create_node(Default::default()).await.unwrap();
    let clean = db.clean().await.unwrap();
    assert_eq!(clean.nodes_removed, 1);
    assert_eq!(clean.relationships_removed, 0);

    harness.shutdown_server().await.unwrap();
}
