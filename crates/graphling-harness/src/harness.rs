//! The test-session harness: server lifecycle, client handles, and cleanup.

use crate::config::ServerConfig;
use crate::error::HarnessError;
use crate::server::LocalTestServer;
use graphling_client::RestGraphDatabase;

/// Owns at most one [`LocalTestServer`] for the duration of a test session.
///
/// The server handle lives on the harness instance rather than in
/// process-global state, so concurrent test suites can each run their own
/// server (use port `0` in the config to avoid collisions).
pub struct RestTestHarness {
    config: ServerConfig,
    server: Option<LocalTestServer>,
}

impl Default for RestTestHarness {
    fn default() -> Self {
        Self::new()
    }
}

impl RestTestHarness {
    pub fn new() -> Self {
        Self::with_config(ServerConfig::default())
    }

    pub fn with_config(config: ServerConfig) -> Self {
        RestTestHarness {
            config,
            server: None,
        }
    }

    /// Configure logging and start the test server.
    pub async fn start_server(&mut self) -> Result<(), HarnessError> {
        if self.server.is_some() {
            return Err(HarnessError::AlreadyStarted);
        }
        graphling::telemetry::init();
        let server = LocalTestServer::start(&self.config).await?;
        self.server = Some(server);
        Ok(())
    }

    /// A client handle pointed at the running server, or at the configured
    /// address when no server is running. Construction never fails; a handle
    /// without a server behind it fails on first use.
    pub fn create_graph_database(&self) -> RestGraphDatabase {
        match &self.server {
            Some(server) => RestGraphDatabase::connect(server.data_url()),
            None => RestGraphDatabase::connect(self.config.data_url()),
        }
    }

    /// Wipe all graph state on the running server, returning the removal
    /// counts. Calling this before `start_server` is a deterministic
    /// [`HarnessError::ServerNotStarted`].
    pub fn clean_db(&self) -> Result<(u64, u64), HarnessError> {
        match &self.server {
            Some(server) => Ok(server.clean_db()),
            None => Err(HarnessError::ServerNotStarted),
        }
    }

    /// Stop the server and clear the held handle.
    pub async fn shutdown_server(&mut self) -> Result<(), HarnessError> {
        match self.server.take() {
            Some(server) => server.stop().await,
            None => Err(HarnessError::ServerNotStarted),
        }
    }

    pub fn is_running(&self) -> bool {
        self.server.is_some()
    }

    pub fn server(&self) -> Option<&LocalTestServer> {
        self.server.as_ref()
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}
