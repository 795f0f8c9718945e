//! API routing
//!
//! # Structure
//!
//! - [`employees`] - employee CRUD endpoints
//! - [`health`] - liveness probe
//!
//! [`build_app`] stacks the shared middleware (CORS, compression,
//! tracing, request ids, concurrency cap) on top of the routes.

pub mod employees;
pub mod health;

use axum::{Json, Router};
use http::{HeaderName, HeaderValue, Method, StatusCode, header};
use serde_json::json;
use tower::limit::GlobalConcurrencyLimitLayer;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::core::ServerState;

/// Custom request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        Some(RequestId::new(HeaderValue::from_str(&id).unwrap()))
    }
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(employees::router())
        .merge(health::router())
        .fallback(route_not_found)
}

/// Unknown routes return 404 with a JSON body
async fn route_not_found() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "message": "Route not found" })),
    )
}

/// Build a fully configured application with all middleware
pub fn build_app(state: &ServerState) -> Router<ServerState> {
    build_router()
        // ========== Tower HTTP Middleware ==========
        // CORS - restricted to the configured frontend origin
        .layer(cors_layer(state))
        // Compression - Gzip compress responses
        .layer(CompressionLayer::new())
        // Trace - request tracing (logs at INFO level)
        .layer(TraceLayer::new_for_http())
        // Request ID - generate and propagate a unique ID per request
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static("x-request-id"),
            XRequestId,
        ))
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            "x-request-id",
        )))
        // Cap in-flight requests across all connections
        .layer(GlobalConcurrencyLimitLayer::new(
            state.config.max_connections as usize,
        ))
}

/// CORS restricted to the configured frontend origin; permissive when no
/// origin is configured (development).
fn cors_layer(state: &ServerState) -> CorsLayer {
    match state
        .config
        .frontend_url
        .as_deref()
        .and_then(|u| u.parse::<HeaderValue>().ok())
    {
        Some(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers([header::CONTENT_TYPE])
            .allow_credentials(true),
        None => CorsLayer::permissive(),
    }
}
