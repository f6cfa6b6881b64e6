//! Shared test utilities and fixtures.

#![allow(dead_code, unused_imports)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use alignqa::testing::geography_dictionary;
use alignqa::{AlignmentScorer, CorpusFrequencies, EmbeddingStore, TermIdfIndex};

// Re-export canonical test utilities from alignqa::testing
pub use alignqa::testing::{
    geography_store, linguistic_tokenizer, passage, token_set, whitespace_tokenizer,
};

/// Reference collection the IDF fixtures are counted over.
pub const REFERENCE_DOCS: &[&str] = &[
    "paris is the capital of france",
    "berlin is the capital of germany",
    "the city of paris",
    "france borders germany",
];

// ============================================================================
// ON-DISK FIXTURES
// ============================================================================

/// Write the geography dictionary into `dir` and return its path.
pub fn write_dictionary(dir: &Path) -> PathBuf {
    let path = dir.join("vectors.tsv");
    fs::write(&path, geography_dictionary()).expect("write dictionary");
    path
}

/// Write a small paired corpus (two questions, five answers) into `dir`.
pub fn write_paired_corpus(dir: &Path) -> PathBuf {
    fs::write(
        dir.join("a.toks"),
        "capital france\ncapital france\ncapital france\ncapital germany\ncapital germany\n",
    )
    .expect("write a.toks");
    fs::write(
        dir.join("b.toks"),
        "paris\nberlin germany\nfrance city\nberlin\nparis\n",
    )
    .expect("write b.toks");
    fs::write(dir.join("id.txt"), "1\n1\n1\n2\n2\n").expect("write id.txt");
    dir.to_path_buf()
}

// ============================================================================
// SCORERS
// ============================================================================

pub fn idf_index() -> Arc<TermIdfIndex> {
    let freqs = CorpusFrequencies::from_texts(REFERENCE_DOCS, &whitespace_tokenizer());
    Arc::new(TermIdfIndex::new(freqs))
}

pub fn alignment_scorer() -> AlignmentScorer {
    AlignmentScorer::new(Arc::new(geography_store()))
}

pub fn weighted_scorer() -> AlignmentScorer {
    alignment_scorer().with_idf(idf_index())
}

/// Store without an `unk` entry.
pub fn store_without_unk() -> EmbeddingStore {
    alignqa::testing::store_from(&[("paris", &[0.0, 0.0]), ("france", &[1.0, 0.0])])
}
