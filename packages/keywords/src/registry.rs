//! Method-to-backend dispatch table.

use std::collections::HashSet;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::error::{ExtractionError, Result};
use crate::extractor::KeywordExtractor;
use crate::types::{BackendInfo, ExtractOptions, Method, ScoredKeyword};

/// Maps each [`Method`] to the backend that serves it.
///
/// Backends may be shared between methods. [`ExtractorRegistry::backends`]
/// deduplicates by backend name so comparison runs and the catalog see each
/// underlying backend exactly once.
pub struct ExtractorRegistry {
    entries: IndexMap<Method, Arc<dyn KeywordExtractor>>,
}

impl ExtractorRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Bind one gateway to every method.
    ///
    /// This is the production wiring when a single extraction backend
    /// serves all method names.
    pub fn single_backend(gateway: Arc<dyn KeywordExtractor>) -> Self {
        let mut registry = Self::new();
        for method in Method::ALL {
            registry.register(method, gateway.clone());
        }
        registry
    }

    /// Bind a backend to a method, replacing any previous binding.
    pub fn register(&mut self, method: Method, backend: Arc<dyn KeywordExtractor>) {
        self.entries.insert(method, backend);
    }

    /// Look up the backend bound to a method.
    pub fn get(&self, method: Method) -> Option<&Arc<dyn KeywordExtractor>> {
        self.entries.get(&method)
    }

    /// Dispatch an extraction call to the backend bound to `method`.
    pub async fn extract(
        &self,
        method: Method,
        text: &str,
        options: &ExtractOptions,
    ) -> Result<Vec<ScoredKeyword>> {
        let backend = self
            .entries
            .get(&method)
            .ok_or(ExtractionError::MethodNotRegistered(method))?;
        tracing::debug!(
            method = %method,
            backend = backend.name(),
            top_n = options.top_n,
            "dispatching extraction"
        );
        backend.extract(text, options).await
    }

    /// Distinct backends in registration order, deduplicated by name.
    pub fn backends(&self) -> Vec<Arc<dyn KeywordExtractor>> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut distinct = Vec::new();
        for backend in self.entries.values() {
            if seen.insert(backend.name()) {
                distinct.push(Arc::clone(backend));
            }
        }
        distinct
    }

    /// Catalog entries for the distinct registered backends.
    pub fn catalog(&self) -> Vec<BackendInfo> {
        self.backends().iter().map(|b| b.info()).collect()
    }

    /// Methods with a registered backend, in registration order.
    pub fn methods(&self) -> Vec<Method> {
        self.entries.keys().copied().collect()
    }
}

impl Default for ExtractorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
