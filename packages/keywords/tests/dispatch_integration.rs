//! Integration tests for method dispatch through the registry.
//!
//! These tests verify the full gateway workflow:
//! 1. Register backends per method
//! 2. Dispatch by validated method
//! 3. Enumerate distinct backends for comparison runs
//! 4. Surface backend failures as typed errors

use std::sync::Arc;

use keywords::{
    ExtractOptions, ExtractionError, ExtractorRegistry, KeywordExtractor, Method, MockExtractor,
    ScoredKeyword, StatisticalExtractor,
};

/// Helper to build a mock seeded with a recognizable keyword.
fn seeded_mock(name: &str) -> MockExtractor {
    MockExtractor::new()
        .with_name(name)
        .with_keywords(vec![ScoredKeyword::new(format!("{}-keyword", name), 0.9)])
}

#[tokio::test]
async fn dispatch_reaches_the_backend_bound_to_the_method() {
    let yake = seeded_mock("yake-backend");
    let rake = seeded_mock("rake-backend");

    let mut registry = ExtractorRegistry::new();
    registry.register(Method::Yake, Arc::new(yake.clone()));
    registry.register(Method::Rake, Arc::new(rake.clone()));

    let keywords = registry
        .extract(Method::Rake, "dispatch target text", &ExtractOptions::new(5))
        .await
        .unwrap();

    assert_eq!(keywords[0].keyword, "rake-backend-keyword");
    assert_eq!(rake.call_count(), 1);
    assert_eq!(yake.call_count(), 0);
    assert_eq!(rake.calls()[0].text, "dispatch target text");
}

#[tokio::test]
async fn options_are_threaded_through_to_the_backend() {
    let mock = seeded_mock("probe");
    let registry = ExtractorRegistry::single_backend(Arc::new(mock.clone()));

    registry
        .extract(
            Method::Keybert,
            "diversity carrying text",
            &ExtractOptions::new(25).with_diversity(0.8),
        )
        .await
        .unwrap();

    let call = &mock.calls()[0];
    assert_eq!(call.options.top_n, 25);
    assert!((call.options.diversity - 0.8).abs() < f64::EPSILON);
}

#[tokio::test]
async fn shared_backend_is_listed_once() {
    let shared = Arc::new(seeded_mock("shared"));
    let distinct = Arc::new(seeded_mock("distinct"));

    let mut registry = ExtractorRegistry::new();
    registry.register(Method::Keybert, shared.clone());
    registry.register(Method::Yake, shared.clone());
    registry.register(Method::Rake, distinct.clone());
    registry.register(Method::Ensemble, shared);

    let backends = registry.backends();
    assert_eq!(backends.len(), 2);
    assert_eq!(backends[0].name(), "shared");
    assert_eq!(backends[1].name(), "distinct");

    let catalog = registry.catalog();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog[0].id, "shared");
}

#[tokio::test]
async fn backend_failure_propagates_as_typed_error() {
    let mock = seeded_mock("flaky");
    mock.fail_with("model crashed");
    let registry = ExtractorRegistry::single_backend(Arc::new(mock));

    let err = registry
        .extract(Method::Ensemble, "some text", &ExtractOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ExtractionError::Backend(_)));
}

#[tokio::test]
async fn statistical_backend_extracts_through_the_registry() {
    let registry = ExtractorRegistry::single_backend(Arc::new(StatisticalExtractor::new()));

    let keywords = registry
        .extract(
            Method::Yake,
            "Borrow checking makes Rust memory safety practical; borrow checking is static.",
            &ExtractOptions::new(5),
        )
        .await
        .unwrap();

    assert!(!keywords.is_empty());
    assert!(keywords.len() <= 5);
    for pair in keywords.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}
