//! Request validation and normalization.
//!
//! Raw bodies pass through two stages: bytes to [`ExtractParams`] (shape
//! checks), then [`normalize`] (defaults, bounds, method fallback). Every
//! malformed-input shape maps to one deterministic [`ApiError`].

use keywords::{ExtractOptions, Method};
use serde::Deserialize;
use serde_json::Value;

use crate::server::error::ApiError;

/// Default number of keywords when the caller does not ask for one.
pub const DEFAULT_TOP_N: usize = 10;

/// Upper bound on `top_n` for single-method extraction.
pub const EXTRACT_TOP_N_CAP: usize = 50;

/// Upper bound on `top_n` for the all-methods comparison.
pub const COMPARE_TOP_N_CAP: usize = 30;

/// Minimum length of `text` after trimming, in characters.
pub const MIN_TEXT_CHARS: usize = 10;

/// Default diversity when the caller does not supply one.
pub const DEFAULT_DIVERSITY: f64 = 0.5;

/// Raw fields of an extraction request body.
#[derive(Debug, Default, Deserialize)]
pub struct ExtractParams {
    pub text: Option<String>,
    pub method: Option<String>,
    pub top_n: Option<f64>,
    pub diversity: Option<f64>,
}

/// A validated, normalized extraction request.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionRequest {
    pub text: String,
    pub method: Method,
    pub top_n: usize,
    pub diversity: f64,
}

impl ExtractionRequest {
    /// Backend options for this request.
    pub fn options(&self) -> ExtractOptions {
        ExtractOptions::new(self.top_n).with_diversity(self.diversity)
    }
}

/// Parse raw body bytes into [`ExtractParams`].
///
/// An empty or non-object body counts as a missing payload; bytes that are
/// not JSON keep the original contract's 500 status (see [`ApiError`]).
pub fn parse_params(body: &[u8]) -> Result<ExtractParams, ApiError> {
    if body.is_empty() {
        return Err(ApiError::MissingText);
    }
    let value: Value = serde_json::from_slice(body).map_err(|_| ApiError::MalformedBody)?;
    if !value.is_object() {
        return Err(ApiError::MissingText);
    }
    serde_json::from_value(value).map_err(|_| ApiError::InvalidBody)
}

/// Validate and normalize request fields.
///
/// `cap` is the endpoint-specific upper bound on `top_n`. Unknown method
/// names fall back to the documented default instead of erroring.
pub fn normalize(params: ExtractParams, cap: usize) -> Result<ExtractionRequest, ApiError> {
    let text = params.text.ok_or(ApiError::MissingText)?;
    let text = text.trim().to_string();
    if text.chars().count() < MIN_TEXT_CHARS {
        return Err(ApiError::TextTooShort);
    }

    let method = match params.method.as_deref() {
        None => Method::default(),
        Some(name) => Method::parse(name).unwrap_or_else(|| {
            tracing::debug!(requested = name, "unknown method, using default");
            Method::default()
        }),
    };

    let top_n = clamp_top_n(params.top_n, cap);
    let diversity = params.diversity.unwrap_or(DEFAULT_DIVERSITY).clamp(0.0, 1.0);

    Ok(ExtractionRequest {
        text,
        method,
        top_n,
        diversity,
    })
}

fn clamp_top_n(requested: Option<f64>, cap: usize) -> usize {
    let requested = requested.unwrap_or(DEFAULT_TOP_N as f64);
    // f64-to-i64 casts truncate and saturate, so huge values clamp cleanly
    (requested as i64).clamp(1, cap as i64) as usize
}
