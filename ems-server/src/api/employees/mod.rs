//! Employee API Module

mod handler;

use axum::{
    Router,
    routing::{get, put},
};

use crate::core::ServerState;

/// Employee router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/v1/employee", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        // DELETE without an id still routes, so the handler can report
        // the missing id instead of a generic 404
        .route(
            "/",
            get(handler::list)
                .post(handler::create)
                .delete(handler::delete_missing_id),
        )
        .route("/{id}", put(handler::update).delete(handler::delete))
}
