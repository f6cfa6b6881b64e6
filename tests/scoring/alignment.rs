//! Alignment distance against on-disk and in-memory dictionaries.

use std::sync::Arc;

use alignqa::testing::store_from;
use alignqa::{classic_idf, AlignmentScorer, EmbeddingStore, InvalidInput, QaError};

use crate::common::{
    alignment_scorer, linguistic_tokenizer, store_without_unk, token_set, weighted_scorer,
    write_dictionary,
};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// ============================================================================
// END-TO-END
// ============================================================================

#[test]
fn test_paris_france_from_dictionary_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tiny.tsv");
    std::fs::write(&path, "term\tvector\nparis\t0,0\nfrance\t1,0\nunk\t0.5,0.5\n").unwrap();

    let scorer = AlignmentScorer::new(Arc::new(EmbeddingStore::load(&path).unwrap()));
    let result = scorer
        .align(&token_set(&["paris"]), &token_set(&["france"]))
        .unwrap();
    assert!(close(result.distance, 1.0));
    assert!(close(result.score(), -1.0));
}

#[test]
fn test_linguistic_question_against_passage() {
    let dir = tempfile::tempdir().unwrap();
    let store = EmbeddingStore::load(write_dictionary(dir.path())).unwrap();
    let scorer = AlignmentScorer::new(Arc::new(store));
    let tokenizer = linguistic_tokenizer();

    let question = tokenizer.token_set("What is the capital of France?");
    assert_eq!(question.as_slice(), &["capital", "france"]);

    let near = scorer
        .score(&question, &tokenizer.token_set("Paris is a city in France."))
        .unwrap();
    let far = scorer
        .score(&question, &tokenizer.token_set("Berlin, Germany."))
        .unwrap();
    assert!(near > far, "near={} far={}", near, far);
    // capital → city (0.5), france → france (0)
    assert!(close(near, -0.5));
}

// ============================================================================
// IDENTITY AND OOV
// ============================================================================

#[test]
fn test_identical_sets_score_zero() {
    let store = store_from(&[("cat", &[0.2, 0.9, 0.1]), ("dog", &[0.3, 0.8, 0.4])]);
    let scorer = AlignmentScorer::new(Arc::new(store));
    let set = token_set(&["cat", "dog"]);
    let result = scorer.align(&set, &set).unwrap();
    assert_eq!(result.distance, 0.0);
    assert_eq!(result.score(), 0.0);
}

#[test]
fn test_oov_question_term_without_unk_is_finite() {
    let scorer = AlignmentScorer::new(Arc::new(store_without_unk()));
    let result = scorer
        .align(&token_set(&["zanzibar", "paris"]), &token_set(&["france"]))
        .unwrap();
    assert!(result.distance.is_finite());
    assert!(close(result.distance, 1.0));
    assert_eq!(result.unresolved().collect::<Vec<_>>(), vec!["zanzibar"]);
}

#[test]
fn test_oov_question_term_uses_unk() {
    let result = alignment_scorer()
        .align(&token_set(&["rome"]), &token_set(&["paris"]))
        .unwrap();
    assert!(close(result.distance, 18f64.sqrt()));
    assert_eq!(result.unresolved().count(), 0);
}

#[test]
fn test_oov_exact_match_is_free() {
    let result = alignment_scorer()
        .align(&token_set(&["rome"]), &token_set(&["paris", "rome"]))
        .unwrap();
    assert_eq!(result.distance, 0.0);
}

#[test]
fn test_oov_candidate_terms_are_ignored() {
    let scorer = alignment_scorer();
    let plain = scorer
        .score(&token_set(&["paris"]), &token_set(&["france"]))
        .unwrap();
    let noisy = scorer
        .score(&token_set(&["paris"]), &token_set(&["france", "qwerty"]))
        .unwrap();
    assert_eq!(plain, noisy);
}

#[test]
fn test_strict_term_distance_reports_missing_terms() {
    let scorer = alignment_scorer();
    assert!(close(scorer.term_distance("paris", "france").unwrap(), 1.0));
    assert_eq!(scorer.term_distance("paris", "paris").unwrap(), 0.0);
    assert!(matches!(
        scorer.term_distance("paris", "atlantis"),
        Err(QaError::TermNotFound(ref t)) if t == "atlantis"
    ));
}

// ============================================================================
// IDF WEIGHTING
// ============================================================================

#[test]
fn test_idf_weights_each_term() {
    let result = weighted_scorer()
        .align(&token_set(&["capital", "france"]), &token_set(&["paris"]))
        .unwrap();
    // both terms sit 1.0 from paris and occur in 2 of 4 reference docs
    let weight = classic_idf(2, 4);
    assert!(close(result.distance, 2.0 * weight));
    assert!(result.terms.iter().all(|t| close(t.weight, weight)));
}

#[test]
fn test_unweighted_terms_weigh_one() {
    let result = alignment_scorer()
        .align(&token_set(&["capital", "france"]), &token_set(&["paris"]))
        .unwrap();
    assert!(close(result.distance, 2.0));
    assert!(result.terms.iter().all(|t| t.weight == 1.0));
}

// ============================================================================
// INVALID INPUT
// ============================================================================

#[test]
fn test_empty_inputs_are_rejected() {
    let scorer = alignment_scorer();
    let empty = token_set(&[]);
    let some = token_set(&["paris"]);
    assert!(matches!(
        scorer.align(&empty, &some),
        Err(QaError::InvalidInput(InvalidInput::EmptyQuestion))
    ));
    assert!(matches!(
        scorer.align(&some, &empty),
        Err(QaError::InvalidInput(InvalidInput::EmptyCandidate))
    ));
}
