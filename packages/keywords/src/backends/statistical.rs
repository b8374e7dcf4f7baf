//! In-process statistical extraction backend.
//!
//! A lightweight unsupervised scorer over candidate terms: frequency
//! weighted with first-occurrence position, stopwords removed. It is the
//! fallback gateway when no remote extraction service is configured, and
//! fills the statistical (YAKE-family) slot in the backend catalog. It does
//! not reproduce any published algorithm.

use async_trait::async_trait;
use indexmap::IndexMap;

use crate::error::Result;
use crate::extractor::KeywordExtractor;
use crate::types::{BackendInfo, ExtractOptions, ScoredKeyword};

/// English stopwords excluded from candidate terms.
const STOPWORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "all", "also", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each", "few", "for",
    "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers", "him",
    "his", "how", "i", "if", "in", "into", "is", "it", "its", "just", "me", "more", "most",
    "my", "no", "nor", "not", "now", "of", "off", "on", "once", "only", "or", "other", "our",
    "out", "over", "own", "same", "she", "should", "so", "some", "such", "than", "that", "the",
    "their", "theirs", "them", "then", "there", "these", "they", "this", "those", "through",
    "to", "too", "under", "until", "up", "very", "was", "we", "were", "what", "when", "where",
    "which", "while", "who", "whom", "why", "will", "with", "would", "you", "your", "yours",
];

/// Relative weight of term frequency vs first-occurrence position.
const FREQUENCY_WEIGHT: f64 = 0.6;
const POSITION_WEIGHT: f64 = 0.4;

/// Statistical keyword extractor.
///
/// Candidates are lower-cased alphanumeric tokens (and, optionally,
/// consecutive-token bigrams) that are not stopwords, not single
/// characters, and not purely numeric. Each candidate is scored by
/// normalized frequency blended with how early it first appears; scores
/// land in `[0, 1]`.
pub struct StatisticalExtractor {
    bigrams: bool,
}

impl StatisticalExtractor {
    /// Create an extractor with bigram candidates enabled.
    pub fn new() -> Self {
        Self { bigrams: true }
    }

    /// Enable or disable bigram candidates.
    pub fn with_bigrams(mut self, bigrams: bool) -> Self {
        self.bigrams = bigrams;
        self
    }

    fn is_candidate(token: &str) -> bool {
        token.chars().count() > 1
            && !token.chars().all(|c| c.is_ascii_digit())
            && !STOPWORDS.contains(&token)
    }

    /// Score all candidates in `text` and return the top `top_n`.
    fn score_text(&self, text: &str, top_n: usize) -> Vec<ScoredKeyword> {
        let tokens: Vec<String> = text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
            .map(|t| t.to_lowercase())
            .collect();
        if tokens.is_empty() {
            return Vec::new();
        }

        let total = tokens.len() as f64;

        // candidate -> (occurrence count, first position)
        let mut candidates: IndexMap<String, (usize, usize)> = IndexMap::new();
        for (pos, token) in tokens.iter().enumerate() {
            if Self::is_candidate(token) {
                let entry = candidates.entry(token.clone()).or_insert((0, pos));
                entry.0 += 1;
            }
        }
        if self.bigrams {
            for (pos, pair) in tokens.windows(2).enumerate() {
                if Self::is_candidate(&pair[0]) && Self::is_candidate(&pair[1]) {
                    let phrase = format!("{} {}", pair[0], pair[1]);
                    let entry = candidates.entry(phrase).or_insert((0, pos));
                    entry.0 += 1;
                }
            }
        }

        let max_count = candidates.values().map(|(count, _)| *count).max().unwrap_or(1) as f64;

        let mut scored: Vec<ScoredKeyword> = candidates
            .into_iter()
            .map(|(term, (count, first))| {
                let frequency = count as f64 / max_count;
                let position = 1.0 - first as f64 / total;
                ScoredKeyword::new(term, FREQUENCY_WEIGHT * frequency + POSITION_WEIGHT * position)
            })
            .collect();

        // Stable sort keeps earlier candidates first on score ties
        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(top_n);
        scored
    }
}

impl Default for StatisticalExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KeywordExtractor for StatisticalExtractor {
    async fn extract(&self, text: &str, options: &ExtractOptions) -> Result<Vec<ScoredKeyword>> {
        // Diversity has no meaning for frequency scoring; ignored
        Ok(self.score_text(text, options.top_n))
    }

    fn info(&self) -> BackendInfo {
        BackendInfo::statistical()
    }

    fn name(&self) -> &str {
        "yake"
    }
}
