//! Typed errors for the keywords library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.

use thiserror::Error;

use crate::types::Method;

/// Errors that can occur while talking to an extraction backend.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// Backend rejected or failed the request
    #[error("backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// HTTP transport to a remote backend failed
    #[error("HTTP error: {0}")]
    Http(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Backend returned a payload we could not understand
    #[error("invalid backend response: {reason}")]
    InvalidResponse { reason: String },

    /// No backend registered for the requested method
    #[error("no backend registered for method: {0}")]
    MethodNotRegistered(Method),
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;
