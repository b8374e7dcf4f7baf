//! Keyword Extraction Gateway Library
//!
//! Wraps keyword-extraction capabilities behind a single async trait so the
//! API layer can dispatch by method name without knowing which backend does
//! the work. The actual extraction algorithms (YAKE, KeyBERT, RAKE) live
//! behind this boundary: a remote model service, an in-process statistical
//! scorer, or a test double all look the same to callers.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use keywords::{ExtractOptions, ExtractorRegistry, Method, StatisticalExtractor};
//!
//! let registry = ExtractorRegistry::single_backend(Arc::new(StatisticalExtractor::new()));
//! let keywords = registry
//!     .extract(Method::Yake, "some text to analyze", &ExtractOptions::new(10))
//!     .await?;
//! ```
//!
//! # Modules
//!
//! - [`extractor`] - The [`KeywordExtractor`] trait
//! - [`registry`] - Method-to-backend dispatch table
//! - [`backends`] - Backend implementations (remote, statistical, mock)
//! - [`types`] - Shared data types
//! - [`error`] - Typed errors

pub mod backends;
pub mod error;
pub mod extractor;
pub mod registry;
pub mod types;

// Re-export core types at crate root
pub use backends::{MockExtractor, RecordedCall, RemoteExtractor, StatisticalExtractor};
pub use error::{ExtractionError, Result};
pub use extractor::KeywordExtractor;
pub use registry::ExtractorRegistry;
pub use types::{BackendInfo, ExtractOptions, Method, ScoredKeyword};
