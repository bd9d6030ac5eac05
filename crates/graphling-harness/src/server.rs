//! In-process lifecycle management for a local graphling test server.

use crate::config::ServerConfig;
use crate::error::HarnessError;
use graphling::GraphStore;
use graphling_client::RestGraphDatabase;
use graphling_http::{create_app_state, create_router};
use log::{debug, warn};
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::sleep;

pub fn get_timeout_config() -> (u32, u64) {
    // Returns (max_attempts, sleep_ms)
    if env::var("CI").is_ok() {
        (50, 200) // 10 seconds total in CI
    } else {
        (25, 200) // 5 seconds locally
    }
}

/// A graphling server running on a background task, bound to a local port.
///
/// Obtained from [`LocalTestServer::start`]; stopped explicitly with
/// [`LocalTestServer::stop`] or aborted on drop as a safety net.
pub struct LocalTestServer {
    graph: Arc<GraphStore>,
    addr: SocketAddr,
    host: String,
    shutdown: Option<oneshot::Sender<()>>,
    serve_task: Option<JoinHandle<()>>,
}

impl LocalTestServer {
    /// Load the configuration (applying properties-file overrides), bind the
    /// listener, serve the data API on a background task, and wait until the
    /// server answers health checks. Bind failures are propagated unmodified.
    pub async fn start(config: &ServerConfig) -> Result<Self, HarnessError> {
        let config = config.load()?;
        let bind_address = config.bind_address();
        let listener = TcpListener::bind(&bind_address)
            .await
            .map_err(|e| HarnessError::Bind {
                addr: bind_address.clone(),
                reason: e.to_string(),
            })?;
        let addr = listener.local_addr().map_err(|e| HarnessError::Bind {
            addr: bind_address,
            reason: e.to_string(),
        })?;

        let graph = Arc::new(GraphStore::new());
        let data_url = format!("http://{}:{}/db/data/", config.host, addr.port());
        let app_state = create_app_state(graph.clone(), data_url);
        let app = create_router(app_state);

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let serve_task = tokio::spawn(async move {
            let serve = axum::serve(listener, app).with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            });
            if let Err(e) = serve.await {
                warn!("graphling test server exited with error: {e}");
            }
        });

        let mut server = LocalTestServer {
            graph,
            addr,
            host: config.host,
            shutdown: Some(shutdown_tx),
            serve_task: Some(serve_task),
        };

        // Wait for the server to start answering health checks
        let (max_attempts, sleep_ms) = get_timeout_config();
        let db = RestGraphDatabase::connect(server.data_url());
        for attempt in 0..max_attempts {
            match db.health().await {
                Ok(_) => {
                    debug!(
                        "graphling test server ready on {} after {} attempts",
                        server.addr,
                        attempt + 1
                    );
                    return Ok(server);
                }
                Err(e) => {
                    debug!("health check attempt {} failed: {e}", attempt + 1);
                    sleep(Duration::from_millis(sleep_ms)).await;
                }
            }
        }

        let _ = server.shutdown_and_wait().await;
        Err(HarnessError::StartupTimeout {
            attempts: max_attempts,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.addr.port())
    }

    /// The data-API root of the running server, e.g.
    /// `http://localhost:7470/db/data/`.
    pub fn data_url(&self) -> String {
        format!("{}/db/data/", self.base_url())
    }

    /// Wipe all graph state, returning `(nodes_removed,
    /// relationships_removed)`. Direct delegation to the store's clean
    /// operation.
    pub fn clean_db(&self) -> (u64, u64) {
        self.graph.clean()
    }

    /// Signal graceful shutdown and wait for the serve task to finish.
    pub async fn stop(mut self) -> Result<(), HarnessError> {
        self.shutdown_and_wait().await
    }

    async fn shutdown_and_wait(&mut self) -> Result<(), HarnessError> {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        if let Some(task) = self.serve_task.take() {
            task.await.map_err(|e| HarnessError::Shutdown {
                reason: e.to_string(),
            })?;
        }
        Ok(())
    }
}

impl Drop for LocalTestServer {
    fn drop(&mut self) {
        // Safety net for servers that were never stopped explicitly
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        if let Some(task) = self.serve_task.take() {
            task.abort();
        }
    }
}
