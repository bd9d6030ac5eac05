//! HTTP surface for the graphling graph test double.
//!
//! Exposes the in-memory [`graphling::GraphStore`] as a REST data API rooted
//! at `/db/data/`, plus the `graphling-server` binary.

pub mod http;

pub use http::common::*;
pub use http::data::server::{AppState, create_app_state, create_router, start_server};
