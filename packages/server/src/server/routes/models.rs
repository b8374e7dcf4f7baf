use axum::{extract::Extension, Json};
use keywords::BackendInfo;
use serde::Serialize;

use crate::server::app::AppState;

#[derive(Serialize)]
pub struct ModelsResponse {
    models: Vec<BackendInfo>,
}

/// Catalog of the distinct registered extraction backends.
pub async fn models_handler(Extension(state): Extension<AppState>) -> Json<ModelsResponse> {
    Json(ModelsResponse {
        models: state.registry.catalog(),
    })
}
