//! Mock extraction backend for testing.
//!
//! Provides a configurable mock implementation of the KeywordExtractor
//! trait with canned results and call recording.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::error::{ExtractionError, Result};
use crate::extractor::KeywordExtractor;
use crate::types::{BackendInfo, ExtractOptions, ScoredKeyword};

/// A recorded call to [`MockExtractor::extract`].
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub text: String,
    pub options: ExtractOptions,
}

/// Mock extraction backend.
///
/// Returns canned keywords (truncated to the requested `top_n`), records
/// every call for verification, and can be told to fail.
///
/// # Example
///
/// ```rust,ignore
/// use keywords::{MockExtractor, ScoredKeyword};
///
/// let mock = MockExtractor::new()
///     .with_keywords(vec![ScoredKeyword::new("rust", 0.9)]);
/// ```
pub struct MockExtractor {
    keywords: Arc<RwLock<Vec<ScoredKeyword>>>,
    calls: Arc<RwLock<Vec<RecordedCall>>>,
    failure: Arc<RwLock<Option<String>>>,
    info: BackendInfo,
}

impl MockExtractor {
    /// Create a mock with no canned keywords.
    pub fn new() -> Self {
        Self {
            keywords: Arc::new(RwLock::new(Vec::new())),
            calls: Arc::new(RwLock::new(Vec::new())),
            failure: Arc::new(RwLock::new(None)),
            info: BackendInfo {
                id: "mock".to_string(),
                name: "Mock".to_string(),
                description: "Canned keywords for tests".to_string(),
                best_for: "Testing".to_string(),
                speed: "Instant".to_string(),
            },
        }
    }

    /// Set the backend id and name (builder pattern).
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.info.id = name.clone();
        self.info.name = name;
        self
    }

    /// Set the canned keywords (builder pattern).
    pub fn with_keywords(self, keywords: Vec<ScoredKeyword>) -> Self {
        *self.keywords.write().unwrap() = keywords;
        self
    }

    /// Append a canned keyword.
    pub fn add_keyword(&self, keyword: impl Into<String>, score: f64) {
        self.keywords
            .write()
            .unwrap()
            .push(ScoredKeyword::new(keyword, score));
    }

    /// Make every subsequent call fail with `message`.
    pub fn fail_with(&self, message: impl Into<String>) {
        *self.failure.write().unwrap() = Some(message.into());
    }

    /// Clear an injected failure.
    pub fn clear_failure(&self) {
        *self.failure.write().unwrap() = None;
    }

    /// Number of extract calls recorded.
    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }

    /// Recorded extract calls.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.read().unwrap().clone()
    }

    /// Clear recorded calls.
    pub fn reset_calls(&self) {
        self.calls.write().unwrap().clear();
    }
}

impl Default for MockExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for MockExtractor {
    fn clone(&self) -> Self {
        Self {
            keywords: Arc::clone(&self.keywords),
            calls: Arc::clone(&self.calls),
            failure: Arc::clone(&self.failure),
            info: self.info.clone(),
        }
    }
}

#[async_trait]
impl KeywordExtractor for MockExtractor {
    async fn extract(&self, text: &str, options: &ExtractOptions) -> Result<Vec<ScoredKeyword>> {
        self.calls.write().unwrap().push(RecordedCall {
            text: text.to_string(),
            options: options.clone(),
        });

        if let Some(message) = self.failure.read().unwrap().clone() {
            return Err(ExtractionError::Backend(Box::new(std::io::Error::new(
                std::io::ErrorKind::Other,
                message,
            ))));
        }

        let mut keywords = self.keywords.read().unwrap().clone();
        keywords.truncate(options.top_n);
        Ok(keywords)
    }

    fn info(&self) -> BackendInfo {
        self.info.clone()
    }

    fn name(&self) -> &str {
        &self.info.id
    }
}
