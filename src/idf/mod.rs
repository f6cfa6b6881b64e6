// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Inverse document frequency against a reference collection.
//!
//! The reference index is an external collaborator; all we need from it is
//! two numbers, captured by [`DocumentFrequencySource`]. [`CorpusFrequencies`]
//! is the in-process implementation: count it from raw texts, or load a table
//! exported by the search engine.
//!
//! IDF is the classic Lucene formula:
//!
//! ```text
//! idf(t) = 1 + ln((N + 1) / (df(t) + 1))
//! ```
//!
//! It is at least 1 whenever df ≤ N, and finite for every input, including
//! unseen terms (df = 0) and an empty collection (N = 0).

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::text::Tokenizer;

/// Anything that can answer document-frequency questions for a term.
pub trait DocumentFrequencySource: Send + Sync {
    /// Number of documents containing `term` at least once.
    fn document_frequency(&self, term: &str) -> u64;

    /// Number of documents in the collection.
    fn total_document_count(&self) -> u64;
}

/// Classic IDF: `1 + ln((N + 1) / (df + 1))`.
#[inline]
pub fn classic_idf(doc_freq: u64, total_docs: u64) -> f64 {
    1.0 + ((total_docs as f64 + 1.0) / (doc_freq as f64 + 1.0)).ln()
}

/// IDF lookups over a shared frequency source.
pub struct TermIdfIndex {
    source: Box<dyn DocumentFrequencySource>,
}

impl TermIdfIndex {
    pub fn new(source: impl DocumentFrequencySource + 'static) -> Self {
        TermIdfIndex {
            source: Box::new(source),
        }
    }

    /// IDF of `term`. The term must already be tokenized the way the
    /// reference collection was.
    pub fn idf(&self, term: &str) -> f64 {
        classic_idf(
            self.source.document_frequency(term),
            self.source.total_document_count(),
        )
    }

    pub fn document_frequency(&self, term: &str) -> u64 {
        self.source.document_frequency(term)
    }

    pub fn total_document_count(&self) -> u64 {
        self.source.total_document_count()
    }
}

impl std::fmt::Debug for TermIdfIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TermIdfIndex")
            .field("total_docs", &self.source.total_document_count())
            .finish()
    }
}

/// Document frequencies held in memory.
///
/// JSON shape: `{ "total_docs": 3, "doc_freqs": { "paris": 2 } }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CorpusFrequencies {
    pub total_docs: u64,
    #[serde(default)]
    pub doc_freqs: HashMap<String, u64>,
}

impl CorpusFrequencies {
    /// Count document frequencies over `texts`, each document counting a
    /// term once.
    pub fn from_texts<S>(texts: &[S], tokenizer: &Tokenizer) -> Self
    where
        S: AsRef<str> + Sync,
    {
        let distinct =
            |text: &S| -> HashSet<String> { tokenizer.tokens(text.as_ref()).collect() };

        #[cfg(feature = "parallel")]
        let per_doc: Vec<HashSet<String>> = texts.par_iter().map(distinct).collect();
        #[cfg(not(feature = "parallel"))]
        let per_doc: Vec<HashSet<String>> = texts.iter().map(distinct).collect();

        let mut doc_freqs: HashMap<String, u64> = HashMap::new();
        for terms in per_doc {
            for term in terms {
                *doc_freqs.entry(term).or_insert(0) += 1;
            }
        }

        CorpusFrequencies {
            total_docs: texts.len() as u64,
            doc_freqs,
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let table: CorpusFrequencies = serde_json::from_str(&fs::read_to_string(path)?)?;
        info!(
            path = %path.display(),
            terms = table.doc_freqs.len(),
            total_docs = table.total_docs,
            "loaded document frequencies"
        );
        Ok(table)
    }

    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
        fs::write(path, serde_json::to_string(self)?)?;
        Ok(())
    }
}

impl DocumentFrequencySource for CorpusFrequencies {
    fn document_frequency(&self, term: &str) -> u64 {
        self.doc_freqs.get(term).copied().unwrap_or(0)
    }

    fn total_document_count(&self) -> u64 {
        self.total_docs
    }
}
