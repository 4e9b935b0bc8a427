use axum::{extract::DefaultBodyLimit, http::StatusCode, routing::get, Router};
use std::sync::Arc;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::core::config::Config;
use crate::core::middleware;
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::features::categories::routes as categories_routes;
use crate::features::comments::{routes as comments_routes, CommentService};
use crate::features::threads::{routes as threads_routes, ThreadService};

/// Services shared by the HTTP layer
pub struct AppServices {
    pub threads: Arc<ThreadService>,
    pub comments: Arc<CommentService>,
}

async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Assemble the full application router with its middleware stack
pub fn build_router(config: &Config, services: AppServices) -> Router {
    let swagger_modifier = SwaggerInfoModifier {
        title: config.swagger.title.clone(),
        version: config.swagger.version.clone(),
        description: config.swagger.description.clone(),
    };

    let mut openapi = ApiDoc::openapi();
    swagger_modifier.modify(&mut openapi);

    let swagger =
        Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi));

    let api_routes = Router::new()
        .merge(threads_routes::routes(services.threads))
        .merge(comments_routes::routes(services.comments))
        .merge(categories_routes::routes());

    Router::new()
        .merge(swagger)
        .merge(api_routes)
        .route("/health", get(health_check))
        .nest_service(
            &config.uploads.url_prefix,
            ServeDir::new(&config.uploads.dir),
        )
        .layer(DefaultBodyLimit::max(config.app.max_request_body_size))
        .layer(middleware::cors_layer(&config.app.cors_allowed_origins))
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid))
}
