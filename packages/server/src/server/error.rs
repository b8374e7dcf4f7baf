//! API error type and its HTTP mapping.
//!
//! Client-visible failures map to a closed set of messages; internal
//! detail goes to the log, never to the response body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Failures surfaced to API clients.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Body missing, not a JSON object, or without a `text` field
    #[error("No text provided")]
    MissingText,

    /// `text` shorter than the 10-character minimum after trimming
    #[error("Text too short. Please provide at least 10 characters.")]
    TextTooShort,

    /// Fields present but with the wrong JSON types
    #[error("Invalid request body")]
    InvalidBody,

    /// Body bytes that are not JSON at all
    #[error("Request body is not valid JSON")]
    MalformedBody,

    /// Extraction backend failure
    #[error("Keyword extraction failed")]
    Extraction(#[source] keywords::ExtractionError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::MissingText | Self::TextTooShort | Self::InvalidBody => StatusCode::BAD_REQUEST,
            // Callers depend on unparseable bodies surfacing as a handled 500
            Self::MalformedBody => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Extraction(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<keywords::ExtractionError> for ApiError {
    fn from(err: keywords::ExtractionError) -> Self {
        Self::Extraction(err)
    }
}

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Extraction(ref source) = self {
            tracing::error!(error = %source, "extraction failed");
        }
        let body = ErrorBody {
            success: false,
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
