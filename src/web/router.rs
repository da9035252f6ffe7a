//! Router configuration for the HTTP API.

use std::any::Any;
use std::path::Path;
use std::sync::Arc;

use axum::{
    handler::HandlerWithoutStateExt,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{catch_panic::CatchPanicLayer, services::ServeDir, trace::TraceLayer};

use super::error::{ApiError, SERVER_ERROR};
use super::handlers::{
    admin_login, admin_signup, health_check, user_login, user_signup, AppState,
};
use super::middleware::create_cors_layer;
use super::openapi::openapi_json;
use crate::config::ServerConfig;

/// Message for requests that match no route and no static file.
pub const NOT_FOUND: &str = "Not found";

/// Create the main router.
///
/// Unmatched paths fall through to the static directory when static
/// serving is enabled and the directory exists, and otherwise get a 404
/// envelope.
pub fn create_router(app_state: Arc<AppState>, config: &ServerConfig) -> Router {
    let user_routes = Router::new()
        .route("/signup", post(user_signup))
        .route("/login", post(user_login));

    let admin_routes = Router::new()
        .route("/login", post(admin_login))
        .route("/signup", post(admin_signup));

    let api_routes = Router::new()
        .nest("/user", user_routes)
        .nest("/admin", admin_routes)
        .route("/health", get(health_check))
        .route("/openapi.json", get(openapi_json));

    let router = Router::new().nest("/api", api_routes);

    let router = match static_dir(config) {
        Some(dir) => {
            tracing::info!("Serving static files from {}", dir);
            router.fallback_service(ServeDir::new(dir).not_found_service(not_found.into_service()))
        }
        None => router.fallback(not_found),
    };

    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(create_cors_layer(&config.cors_origins))
                .layer(CatchPanicLayer::custom(handle_panic)),
        )
        .with_state(app_state)
}

fn static_dir(config: &ServerConfig) -> Option<&str> {
    if !config.serve_static {
        return None;
    }
    if Path::new(&config.static_path).is_dir() {
        Some(config.static_path.as_str())
    } else {
        tracing::warn!(
            "Static path {} is not a directory; static serving disabled",
            config.static_path
        );
        None
    }
}

async fn not_found() -> ApiError {
    ApiError::not_found(NOT_FOUND)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic"
    };
    tracing::error!("Handler panicked: {}", detail);
    ApiError::internal(SERVER_ERROR).into_response()
}
