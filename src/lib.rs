// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Passage scoring and ranking for question answering.
//!
//! Given a question and candidate passages already retrieved from a full-text
//! index, this crate scores each passage by how closely its words align with
//! the question's words in an embedding space, optionally weighting question
//! terms by inverse document frequency, and keeps the best `k`.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌────────────────┐
//! │  embedding   │   │     text     │   │      idf       │
//! │ (store, L2)  │   │ (tokenizer,  │   │ (df source,    │
//! │              │   │  stop words) │   │  classic idf)  │
//! └──────┬───────┘   └──────┬───────┘   └───────┬────────┘
//!        │                  │                   │
//!        ▼                  ▼                   ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                      scoring                        │
//! │  alignment · overlap · strategy · ranking (top-k)   │
//! └──────────────────────────┬──────────────────────────┘
//!                            ▼
//! ┌─────────────────────┐   ┌──────────────────────────┐
//! │      pipeline       │──▶│           eval           │
//! │ (retrieve → rank)   │   │ (run files, pairs, p@k)  │
//! └─────────────────────┘   └──────────────────────────┘
//! ```
//!
//! Stores, stop word lists and IDF tables are built once and then shared
//! read-only (`Arc`), so candidates can be scored from many threads with no
//! locking.
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//! use alignqa::{AlignmentScorer, EmbeddingStore, QaPipeline, RetrievedPassage};
//! use alignqa::text::{Stopwords, Tokenizer, TokenizerConfig};
//!
//! let dictionary = "term\tvector\nparis\t0,0\nfrance\t1,0\nberlin\t5,5\n";
//! let store = EmbeddingStore::from_reader(dictionary.as_bytes(), "inline").unwrap();
//! let tokenizer = Tokenizer::new(TokenizerConfig::whitespace(), Arc::new(Stopwords::empty()));
//! let scorer = AlignmentScorer::new(Arc::new(store));
//! let pipeline = QaPipeline::new(tokenizer, scorer.into(), 1);
//!
//! let candidates = vec![
//!     RetrievedPassage { id: "d1".into(), text: "berlin".into(), retrieval_score: 0.0 },
//!     RetrievedPassage { id: "d2".into(), text: "france".into(), retrieval_score: 0.0 },
//! ];
//! let ranked = pipeline.rank("paris", &candidates).unwrap();
//! assert_eq!(ranked.best().unwrap().id, "d2");
//! ```

pub mod config;
pub mod embedding;
pub mod error;
pub mod eval;
pub mod idf;
pub mod pipeline;
pub mod scoring;
pub mod testing;
pub mod text;

pub use config::QaConfig;
pub use embedding::{
    euclidean_distance, EmbeddingStore, EmbeddingStoreBuilder, TermVector, UNK_TERM,
};
pub use error::{InvalidInput, QaError, Result};
pub use eval::{jaccard, precision_at_k, score_pairs, PairedCorpus, Qrels, RunLine};
pub use idf::{classic_idf, CorpusFrequencies, DocumentFrequencySource, TermIdfIndex};
pub use pipeline::{
    PassageRetriever, QaPipeline, QueryOutcome, Question, RetrievedPassage, StaticRetriever,
};
pub use scoring::{
    compare_scored, extract_top_k, AlignmentResult, AlignmentScorer, IdfOverlapScorer,
    PassageScorer, RankedResult, ScoredPassage, ScorerKind, TermAlignment,
};
pub use text::{normalize_term, Stopwords, TokenSet, Tokenizer, TokenizerConfig, TokenizerMode};
