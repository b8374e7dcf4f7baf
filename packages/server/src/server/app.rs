//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        Method, StatusCode,
    },
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use keywords::ExtractorRegistry;
use serde_json::json;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::server::routes::{
    extract_all_handler, extract_handler, health_handler, landing_handler, models_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<ExtractorRegistry>,
}

/// JSON 404 for unmatched paths
async fn not_found_handler() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Endpoint not found" })),
    )
}

/// JSON 500 for panicking handlers
fn panic_response(_err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "Internal server error" })),
    )
        .into_response()
}

/// Build the Axum application router
///
/// The registry is created by the caller and shared read-only across all
/// requests; handlers hold no mutable state.
pub fn build_app(registry: Arc<ExtractorRegistry>) -> Router {
    let app_state = AppState { registry };

    // CORS configuration - browser clients call the API directly
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    Router::new()
        .route("/", get(landing_handler))
        .route("/api/health", get(health_handler))
        .route("/api/extract", post(extract_handler))
        .route("/api/extract/all", post(extract_all_handler))
        .route("/api/models", get(models_handler))
        .fallback(not_found_handler)
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(Extension(app_state))
        .layer(cors)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
}
