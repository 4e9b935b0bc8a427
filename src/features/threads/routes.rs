use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::threads::handlers;
use crate::features::threads::services::ThreadService;

/// Create routes for the threads feature
pub fn routes(service: Arc<ThreadService>) -> Router {
    Router::new()
        .route(
            "/api/threads",
            get(handlers::list_threads).post(handlers::create_thread),
        )
        .route("/api/threads/{id}", get(handlers::get_thread))
        .with_state(service)
}
