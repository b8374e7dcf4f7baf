//! The extraction gateway trait.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{BackendInfo, ExtractOptions, ScoredKeyword};

/// A keyword extraction backend.
///
/// Implementations wrap a specific extraction capability (a remote model
/// service, an in-process scorer, a test double) and produce a
/// relevance-ordered keyword list for a text. Implementations must be
/// thread-safe; the registry shares them read-only across requests.
#[async_trait]
pub trait KeywordExtractor: Send + Sync {
    /// Extract up to `options.top_n` keywords from `text`.
    ///
    /// The returned list is in relevance order, best first. Fewer than
    /// `top_n` entries is valid; more is not.
    async fn extract(&self, text: &str, options: &ExtractOptions) -> Result<Vec<ScoredKeyword>>;

    /// Catalog entry describing this backend.
    fn info(&self) -> BackendInfo;

    /// Short identifier for this backend.
    ///
    /// Used as the result key in comparison runs and to deduplicate a
    /// backend that serves several methods.
    fn name(&self) -> &str;
}
