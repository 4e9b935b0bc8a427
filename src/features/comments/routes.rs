use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, routing::post, Router};

use crate::features::comments::handlers;
use crate::features::comments::services::CommentService;
use crate::shared::constants::{MAX_IMAGE_SIZE, MULTIPART_OVERHEAD};

/// Create routes for the comments feature
pub fn routes(service: Arc<CommentService>) -> Router {
    Router::new()
        .route(
            "/api/threads/{id}/comments",
            post(handlers::create_comment),
        )
        .layer(DefaultBodyLimit::max(MAX_IMAGE_SIZE + MULTIPART_OVERHEAD))
        .with_state(service)
}
