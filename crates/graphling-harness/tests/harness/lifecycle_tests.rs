use graphling_harness::{HarnessError, RestTestHarness, ServerConfig};
use std::io::Write;

fn ephemeral_harness() -> RestTestHarness {
    // Port 0 so concurrently running suites never collide
    RestTestHarness::with_config(ServerConfig::new("localhost", 0))
}

#[tokio::test]
async fn test_start_server_then_create_graph_database() {
    let mut harness = ephemeral_harness();
    harness
        .start_server()
        .await
        .expect("Failed to start test server");

    let db = harness.create_graph_database();
    assert_eq!(db.data_url(), harness.server().unwrap().data_url());

    let health = db.health().await.unwrap();
    assert_eq!(health.status, "healthy");
    assert_eq!(health.service, "graphling");

    harness.shutdown_server().await.unwrap();
}

#[tokio::test]
async fn test_default_config_points_at_the_conventional_url() {
    let harness = RestTestHarness::new();
    // No server running; the handle points at the configured address
    let db = harness.create_graph_database();
    assert_eq!(db.data_url(), "http://localhost:7470/db/data/");
}

#[tokio::test]
async fn test_default_port_serves_the_conventional_url() {
    let mut harness = RestTestHarness::new();
    harness
        .start_server()
        .await
        .expect("Failed to start test server");

    let db = harness.create_graph_database();
    assert_eq!(db.data_url(), "http://localhost:7470/db/data/");
    assert_eq!(db.health().await.unwrap().status, "healthy");

    harness.shutdown_server().await.unwrap();
}

#[tokio::test]
async fn test_clean_db_before_start_fails_deterministically() {
    let harness = ephemeral_harness();
    let err = harness.clean_db().unwrap_err();
    assert!(err.is_not_started());
}

#[tokio::test]
async fn test_shutdown_clears_the_server_handle() {
    let mut harness = ephemeral_harness();
    harness
        .start_server()
        .await
        .expect("Failed to start test server");
    assert!(harness.is_running());

    harness.shutdown_server().await.unwrap();
    assert!(!harness.is_running());
    assert!(harness.server().is_none());

    // A second shutdown has nothing to stop
    let err = harness.shutdown_server().await.unwrap_err();
    assert_eq!(err, HarnessError::ServerNotStarted);
}

#[tokio::test]
async fn test_starting_twice_is_rejected() {
    let mut harness = ephemeral_harness();
    harness
        .start_server()
        .await
        .expect("Failed to start test server");

    let err = harness.start_server().await.unwrap_err();
    assert_eq!(err, HarnessError::AlreadyStarted);

    harness.shutdown_server().await.unwrap();
}

#[tokio::test]
async fn test_restart_leaves_no_residual_state() {
    let mut harness = ephemeral_harness();
    harness
        .start_server()
        .await
        .expect("Failed to start test server");

    let db = harness.create_graph_database();
    let node = db.create_node(Default::default()).await.unwrap();
    assert_eq!(node.id, 0);

    harness.shutdown_server().await.unwrap();
    harness
        .start_server()
        .await
        .expect("Failed to restart test server");

    // Fresh store on the second cycle: empty, ids start over
    let db = harness.create_graph_database();
    let stats = db.stats().await.unwrap();
    assert_eq!(stats.node_count, 0);
    assert_eq!(stats.relationship_count, 0);
    let node = db.create_node(Default::default()).await.unwrap();
    assert_eq!(node.id, 0);

    harness.shutdown_server().await.unwrap();
}

#[tokio::test]
async fn test_bind_conflict_is_propagated() {
    let mut first = ephemeral_harness();
    first
        .start_server()
        .await
        .expect("Failed to start test server");
    let taken_port = first.server().unwrap().addr().port();

    let mut second = RestTestHarness::with_config(ServerConfig::new("localhost", taken_port));
    let err = second.start_server().await.unwrap_err();
    assert!(matches!(err, HarnessError::Bind { .. }));

    first.shutdown_server().await.unwrap();
}

#[tokio::test]
async fn test_properties_file_overrides_are_applied_at_startup() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "# harness overrides").unwrap();
    writeln!(file, "host = localhost").unwrap();
    writeln!(file, "port = 0").unwrap();

    let config = ServerConfig::default().with_properties_file(file.path());
    let mut harness = RestTestHarness::with_config(config);
    harness
        .start_server()
        .await
        .expect("Failed to start test server");

    // The file's port override (0, OS-assigned) took effect instead of the
    // configured default
    assert_ne!(harness.server().unwrap().addr().port(), 7470);

    harness.shutdown_server().await.unwrap();
}

#[tokio::test]
async fn test_malformed_properties_file_fails_startup() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "port = not-a-port").unwrap();

    let config = ServerConfig::default().with_properties_file(file.path());
    let mut harness = RestTestHarness::with_config(config);
    let err = harness.start_server().await.unwrap_err();
    assert!(matches!(err, HarnessError::Config { .. }));
    assert!(!harness.is_running());
}
