//! HTTP-backed extraction backend.
//!
//! Delegates extraction to a remote model service speaking a small JSON
//! contract: `POST {base}/extract` with `{text, top_n, diversity}`,
//! answered by `{keywords: [{keyword, score}]}`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{ExtractionError, Result};
use crate::extractor::KeywordExtractor;
use crate::types::{BackendInfo, ExtractOptions, ScoredKeyword};

/// Extraction request sent to the remote service.
#[derive(Debug, Serialize)]
struct WireRequest<'a> {
    text: &'a str,
    top_n: usize,
    diversity: f64,
}

/// Extraction response returned by the remote service.
#[derive(Debug, Deserialize)]
struct WireResponse {
    keywords: Vec<ScoredKeyword>,
}

/// Backend that calls a remote extraction service over HTTP.
pub struct RemoteExtractor {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    info: BackendInfo,
}

impl RemoteExtractor {
    /// Create a backend for the service at `base_url`.
    ///
    /// The catalog entry defaults to the statistical model; override it
    /// with [`RemoteExtractor::with_info`] when the service runs a
    /// different one.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: None,
            info: BackendInfo::statistical(),
        }
    }

    /// Authenticate requests with a bearer key.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the catalog entry for the remote model.
    pub fn with_info(mut self, info: BackendInfo) -> Self {
        self.info = info;
        self
    }
}

#[async_trait]
impl KeywordExtractor for RemoteExtractor {
    async fn extract(&self, text: &str, options: &ExtractOptions) -> Result<Vec<ScoredKeyword>> {
        let request = WireRequest {
            text,
            top_n: options.top_n,
            diversity: options.diversity,
        };

        let mut builder = self
            .client
            .post(format!("{}/extract", self.base_url))
            .header("Content-Type", "application/json")
            .json(&request);
        if let Some(key) = &self.api_key {
            builder = builder.header("Authorization", format!("Bearer {}", key));
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ExtractionError::Http(Box::new(e)))?;

        if !response.status().is_success() {
            return Err(ExtractionError::Backend(Box::new(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("extraction service returned {}", response.status()),
            ))));
        }

        let wire: WireResponse = response
            .json()
            .await
            .map_err(|e| ExtractionError::InvalidResponse {
                reason: e.to_string(),
            })?;

        // The service contract caps results at top_n; enforce it locally too
        let mut keywords = wire.keywords;
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_normalized() {
        let remote = RemoteExtractor::new("http://localhost:9000/");
        assert_eq!(remote.base_url, "http://localhost:9000");
    }

    #[test]
    fn default_catalog_entry_is_statistical() {
        let remote = RemoteExtractor::new("http://localhost:9000");
        assert_eq!(remote.name(), "yake");
        assert_eq!(remote.info(), BackendInfo::statistical());
    }
}
