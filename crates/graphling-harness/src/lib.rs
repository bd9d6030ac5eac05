//! Test-support utilities for integration tests against a graphling server.
//!
//! The entry point is [`RestTestHarness`]: it boots a [`LocalTestServer`]
//! from a [`ServerConfig`], hands out
//! [`RestGraphDatabase`](graphling_client::RestGraphDatabase) client handles,
//! and clears database state between test runs.
//!
//! ```no_run
//! # async fn example() -> Result<(), graphling_harness::HarnessError> {
//! use graphling_harness::{RestTestHarness, ServerConfig};
//!
//! let mut harness = RestTestHarness::with_config(ServerConfig::new("localhost", 0));
//! harness.start_server().await?;
//! let db = harness.create_graph_database();
//! // ... run the test against `db` ...
//! harness.clean_db()?;
//! harness.shutdown_server().await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod harness;
pub mod server;

pub use config::ServerConfig;
pub use error::HarnessError;
pub use harness::RestTestHarness;
pub use server::LocalTestServer;
