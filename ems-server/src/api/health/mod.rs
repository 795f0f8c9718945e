//! Health API Module

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Health router
pub fn router() -> Router<ServerState> {
    Router::new().route("/check", get(check))
}

/// Liveness probe
async fn check() -> &'static str {
    "Server is running"
}
