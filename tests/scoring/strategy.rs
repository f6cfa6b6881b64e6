//! Scorer selection and the IDF overlap strategy.

use std::sync::Arc;

use alignqa::{classic_idf, PassageScorer, QaError, ScorerKind};

use crate::common::{geography_store, idf_index, token_set};

#[test]
fn test_alignment_needs_store() {
    let err = PassageScorer::from_kind(ScorerKind::Alignment, None, Some(idf_index()), false)
        .unwrap_err();
    assert!(matches!(err, QaError::Config(_)));
}

#[test]
fn test_weighting_needs_idf() {
    let store = Some(Arc::new(geography_store()));
    let err = PassageScorer::from_kind(ScorerKind::Alignment, store, None, true).unwrap_err();
    assert!(matches!(err, QaError::Config(_)));
}

#[test]
fn test_idf_strategy_needs_idf() {
    let store = Some(Arc::new(geography_store()));
    let err = PassageScorer::from_kind(ScorerKind::Idf, store, None, false).unwrap_err();
    assert!(matches!(err, QaError::Config(_)));
}

#[test]
fn test_kind_round_trips() {
    let store = Some(Arc::new(geography_store()));
    let alignment =
        PassageScorer::from_kind(ScorerKind::Alignment, store, None, false).unwrap();
    assert_eq!(alignment.kind(), ScorerKind::Alignment);
    let idf = PassageScorer::from_kind(ScorerKind::Idf, None, Some(idf_index()), false).unwrap();
    assert_eq!(idf.kind(), ScorerKind::Idf);
}

#[test]
fn test_idf_overlap_sums_shared_terms() {
    let scorer = PassageScorer::from_kind(ScorerKind::Idf, None, Some(idf_index()), false).unwrap();
    let question = token_set(&["capital", "france", "river"]);

    let score = scorer
        .score(&question, &token_set(&["paris", "capital", "france"]))
        .unwrap();
    assert!((score - 2.0 * classic_idf(2, 4)).abs() < 1e-9);

    let none = scorer.score(&question, &token_set(&["berlin"])).unwrap();
    assert_eq!(none, 0.0);
}

#[test]
fn test_scorer_kind_names() {
    let kind: ScorerKind = serde_json::from_str("\"idf\"").unwrap();
    assert_eq!(kind, ScorerKind::Idf);
    assert_eq!(serde_json::to_string(&ScorerKind::Alignment).unwrap(), "\"alignment\"");
}
