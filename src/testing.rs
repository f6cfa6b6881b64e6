// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! Always compiled, hidden from documentation. These are the canonical
//! fixtures; tests should build stores and passages through here rather than
//! rolling their own.

#![doc(hidden)]

use std::sync::Arc;

use crate::embedding::{EmbeddingStore, EmbeddingStoreBuilder};
use crate::pipeline::RetrievedPassage;
use crate::text::{Stopwords, TokenSet, Tokenizer, TokenizerConfig};

/// Build a store from `(term, vector)` pairs.
///
/// Panics on a malformed fixture (mixed dimensions, duplicates).
pub fn store_from(entries: &[(&str, &[f32])]) -> EmbeddingStore {
    let mut builder = EmbeddingStoreBuilder::new();
    for &(term, vector) in entries {
        if let Err(e) = builder.insert(term, vector) {
            panic!("bad fixture entry '{}': {}", term, e);
        }
    }
    builder.build()
}

/// A small two-dimensional store: capitals near their countries, plus `unk`.
pub fn geography_store() -> EmbeddingStore {
    store_from(&[
        ("paris", &[0.0, 0.0]),
        ("france", &[1.0, 0.0]),
        ("capital", &[0.0, 1.0]),
        ("city", &[0.0, 1.5]),
        ("berlin", &[5.0, 5.0]),
        ("germany", &[6.0, 5.0]),
        ("unk", &[3.0, 3.0]),
    ])
}

/// The same store as a dictionary file body (header line included).
pub fn geography_dictionary() -> String {
    let mut text = String::from("term\tvector\n");
    for (term, vector) in [
        ("paris", "0.0,0.0"),
        ("france", "1.0,0.0"),
        ("capital", "0.0,1.0"),
        ("city", "0.0,1.5"),
        ("berlin", "5.0,5.0"),
        ("germany", "6.0,5.0"),
        ("unk", "3.0,3.0"),
    ] {
        text.push_str(term);
        text.push('\t');
        text.push_str(vector);
        text.push('\n');
    }
    text
}

/// Token set straight from already-tokenized terms.
pub fn token_set(terms: &[&str]) -> TokenSet {
    terms.iter().copied().collect()
}

/// Whitespace tokenizer with no stop words.
pub fn whitespace_tokenizer() -> Tokenizer {
    Tokenizer::new(TokenizerConfig::whitespace(), Arc::new(Stopwords::empty()))
}

/// Linguistic tokenizer with the bundled English stop words.
pub fn linguistic_tokenizer() -> Tokenizer {
    Tokenizer::new(TokenizerConfig::linguistic(), Arc::new(Stopwords::english()))
}

/// Create a retrieved passage with a zero retrieval score.
pub fn passage(id: &str, text: &str) -> RetrievedPassage {
    RetrievedPassage {
        id: id.to_string(),
        text: text.to_string(),
        retrieval_score: 0.0,
    }
}
