//! Shared data types for extraction backends and their callers.

use serde::{Deserialize, Serialize};

/// Extraction method selectable by API callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    Keybert,
    Yake,
    Rake,
    Ensemble,
}

impl Method {
    /// All methods, in catalog order.
    pub const ALL: [Method; 4] = [
        Method::Keybert,
        Method::Yake,
        Method::Rake,
        Method::Ensemble,
    ];

    /// Parse a method name, case-insensitively.
    ///
    /// Returns `None` for names outside the fixed set; callers decide
    /// whether that is an error or a fallback to the default.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "keybert" => Some(Self::Keybert),
            "yake" => Some(Self::Yake),
            "rake" => Some(Self::Rake),
            "ensemble" => Some(Self::Ensemble),
            _ => None,
        }
    }

    /// Wire name of this method.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Keybert => "keybert",
            Self::Yake => "yake",
            Self::Rake => "rake",
            Self::Ensemble => "ensemble",
        }
    }
}

impl Default for Method {
    fn default() -> Self {
        Self::Ensemble
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A keyword with its relevance score.
///
/// Ordering within a result list is relevance order as produced by the
/// backend. Keyword text uniqueness is not enforced at this layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredKeyword {
    pub keyword: String,
    pub score: f64,
}

impl ScoredKeyword {
    /// Create a new scored keyword.
    pub fn new(keyword: impl Into<String>, score: f64) -> Self {
        Self {
            keyword: keyword.into(),
            score,
        }
    }
}

/// Options passed to a backend for a single extraction call.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractOptions {
    /// Maximum number of keywords to return.
    pub top_n: usize,

    /// Result diversity in `[0, 1]`.
    ///
    /// Embedding-based backends use this to trade relevance against
    /// variety; backends without a diversity notion ignore it.
    pub diversity: f64,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            top_n: 10,
            diversity: 0.5,
        }
    }
}

impl ExtractOptions {
    /// Create options requesting `top_n` keywords.
    pub fn new(top_n: usize) -> Self {
        Self {
            top_n,
            ..Self::default()
        }
    }

    /// Set the diversity.
    pub fn with_diversity(mut self, diversity: f64) -> Self {
        self.diversity = diversity;
        self
    }
}

/// Catalog entry a backend describes itself with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendInfo {
    pub id: String,
    pub name: String,
    pub description: String,
    pub best_for: String,
    pub speed: String,
}

impl BackendInfo {
    /// Catalog entry for the statistical (YAKE-family) backend.
    pub fn statistical() -> Self {
        Self {
            id: "yake".to_string(),
            name: "YAKE".to_string(),
            description: "Statistical keyword extraction - Lightweight & Fast".to_string(),
            best_for: "Fast extraction, no GPU needed".to_string(),
            speed: "Very Fast".to_string(),
        }
    }
}
