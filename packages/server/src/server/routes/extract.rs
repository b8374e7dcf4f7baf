//! Keyword extraction endpoints.

use std::time::Instant;

use axum::body::Bytes;
use axum::extract::Extension;
use axum::Json;
use indexmap::IndexMap;
use keywords::{KeywordExtractor, ScoredKeyword};
use serde::Serialize;

use crate::server::app::AppState;
use crate::server::error::ApiError;
use crate::server::request::{normalize, parse_params, COMPARE_TOP_N_CAP, EXTRACT_TOP_N_CAP};

#[derive(Serialize)]
pub struct ExtractResponse {
    success: bool,
    method: &'static str,
    keywords: Vec<ScoredKeyword>,
    count: usize,
    processing_time: f64,
}

#[derive(Serialize)]
pub struct CompareResponse {
    success: bool,
    results: IndexMap<String, Vec<ScoredKeyword>>,
    processing_time: f64,
}

/// Extract keywords from text.
///
/// `POST /api/extract` with `{text, method?, top_n?, diversity?}`. The
/// validated method selects the backend through the registry.
pub async fn extract_handler(
    Extension(state): Extension<AppState>,
    body: Bytes,
) -> Result<Json<ExtractResponse>, ApiError> {
    let request = normalize(parse_params(&body)?, EXTRACT_TOP_N_CAP)?;

    let started = Instant::now();
    let keywords = state
        .registry
        .extract(request.method, &request.text, &request.options())
        .await?;
    let processing_time = round_secs(started.elapsed().as_secs_f64());

    tracing::info!(
        method = %request.method,
        count = keywords.len(),
        processing_time,
        "extraction complete"
    );

    Ok(Json(ExtractResponse {
        success: true,
        method: request.method.as_str(),
        count: keywords.len(),
        keywords,
        processing_time,
    }))
}

/// Extract keywords using all backends for comparison.
///
/// `POST /api/extract/all` with `{text, top_n?}`. Runs every distinct
/// registered backend over the same text; the request's `method` field is
/// ignored. Result keys are backend ids in registration order.
pub async fn extract_all_handler(
    Extension(state): Extension<AppState>,
    body: Bytes,
) -> Result<Json<CompareResponse>, ApiError> {
    let request = normalize(parse_params(&body)?, COMPARE_TOP_N_CAP)?;
    let options = request.options();

    let started = Instant::now();
    let mut results = IndexMap::new();
    for backend in state.registry.backends() {
        let keywords = backend.extract(&request.text, &options).await?;
        results.insert(backend.name().to_string(), keywords);
    }
    let processing_time = round_secs(started.elapsed().as_secs_f64());

    Ok(Json(CompareResponse {
        success: true,
        results,
        processing_time,
    }))
}

/// Round wall-clock seconds to 3 decimals for the response envelope.
fn round_secs(secs: f64) -> f64 {
    (secs * 1000.0).round() / 1000.0
}
