use axum::{extract::Extension, Json};
use serde::Serialize;

use crate::server::app::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    message: String,
    models: Vec<&'static str>,
}

/// Health check endpoint
///
/// The extractor registry is built before the router, so a serving process
/// always has a ready gateway; the answer is static, idempotent, and has
/// no side effects.
pub async fn health_handler(Extension(state): Extension<AppState>) -> Json<HealthResponse> {
    let models = state
        .registry
        .methods()
        .iter()
        .map(|method| method.as_str())
        .collect();

    Json(HealthResponse {
        status: "healthy".to_string(),
        message: "Keyword Extraction API is running".to_string(),
        models,
    })
}
