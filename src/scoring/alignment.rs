// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Word-level alignment distance between a question and a passage.
//!
//! For every distinct question term `q`:
//!
//! ```text
//! minDist(q) = min over candidate terms c of ‖vec(q) − vec(c)‖
//! distance   = Σ_q minDist(q) × weight(q)      weight = idf(q), or 1
//! score      = −distance                      higher is better
//! ```
//!
//! The direction matters: it is question → passage. Every question term looks
//! for its nearest passage term, passage terms nobody picks cost nothing.
//!
//! # Out-of-vocabulary terms
//!
//! Lookups that miss never fail a query. For one (q, c) pair:
//!
//! | q in vocab | c in vocab | pair distance                           |
//! |------------|------------|-----------------------------------------|
//! | yes        | yes        | ‖vec(q) − vec(c)‖                       |
//! | yes        | no         | pair skipped                            |
//! | no         | —          | 0 if q == c                             |
//! | no         | yes        | ‖vec(unk) − vec(c)‖, skipped without unk |
//! | no         | no         | pair skipped (unless q == c)            |
//!
//! A question term with no usable pair at all is *unresolved*: it is left out
//! of the sum and reported with `min_distance: None`. Because the sum is
//! additive, leaving it out and charging it zero are the same number; there is
//! exactly one rule, not two.

use std::sync::Arc;

use crate::embedding::{euclidean_distance, EmbeddingStore, TermVector, UNK_TERM};
use crate::error::{InvalidInput, Result};
use crate::idf::TermIdfIndex;
use crate::text::TokenSet;

/// Best alignment found for one question term.
#[derive(Debug, Clone, PartialEq)]
pub struct TermAlignment {
    pub term: String,
    /// `None` when no candidate term could be compared with this one.
    pub min_distance: Option<f64>,
    /// IDF of the term when weighting is on, otherwise 1.
    pub weight: f64,
}

impl TermAlignment {
    /// What this term adds to the total distance.
    pub fn contribution(&self) -> f64 {
        self.min_distance.map_or(0.0, |d| d * self.weight)
    }
}

/// Outcome of aligning one question against one passage.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignmentResult {
    /// Total alignment distance. Lower is more similar.
    pub distance: f64,
    /// Per question term breakdown, in question order.
    pub terms: Vec<TermAlignment>,
}

impl AlignmentResult {
    /// Relevance score: the negated distance.
    pub fn score(&self) -> f64 {
        // subtraction, not negation: a perfect match is 0, never -0
        0.0 - self.distance
    }

    /// Question terms that were left out of the sum.
    pub fn unresolved(&self) -> impl Iterator<Item = &str> {
        self.terms
            .iter()
            .filter(|t| t.min_distance.is_none())
            .map(|t| t.term.as_str())
    }
}

/// Scores passages by embedding alignment distance.
#[derive(Debug, Clone)]
pub struct AlignmentScorer {
    store: Arc<EmbeddingStore>,
    idf: Option<Arc<TermIdfIndex>>,
}

impl AlignmentScorer {
    pub fn new(store: Arc<EmbeddingStore>) -> Self {
        AlignmentScorer { store, idf: None }
    }

    /// Weight each question term's contribution by its IDF.
    pub fn with_idf(mut self, idf: Arc<TermIdfIndex>) -> Self {
        self.idf = Some(idf);
        self
    }

    pub fn store(&self) -> &EmbeddingStore {
        &self.store
    }

    pub fn is_idf_weighted(&self) -> bool {
        self.idf.is_some()
    }

    /// Distance between two in-vocabulary terms. Fails with `TermNotFound`
    /// when either is missing; this is the raw metric, no fallbacks.
    pub fn term_distance(&self, a: &str, b: &str) -> Result<f64> {
        euclidean_distance(self.store.lookup(a)?, self.store.lookup(b)?)
    }

    /// Full alignment with the per-term breakdown.
    pub fn align(&self, question: &TokenSet, candidate: &TokenSet) -> Result<AlignmentResult> {
        if question.is_empty() {
            return Err(InvalidInput::EmptyQuestion.into());
        }
        if candidate.is_empty() {
            return Err(InvalidInput::EmptyCandidate.into());
        }

        let unk = self.store.lookup(UNK_TERM).ok();
        let resolved: Vec<(&str, Option<&TermVector>)> = candidate
            .iter()
            .map(|c| (c, self.store.lookup(c).ok()))
            .collect();

        let mut distance = 0.0;
        let mut terms = Vec::with_capacity(question.len());
        for q in question.iter() {
            let min_distance = self.min_distance(q, &resolved, unk)?;
            let weight = self.idf.as_ref().map_or(1.0, |idf| idf.idf(q));
            let alignment = TermAlignment {
                term: q.to_string(),
                min_distance,
                weight,
            };
            distance += alignment.contribution();
            terms.push(alignment);
        }

        Ok(AlignmentResult { distance, terms })
    }

    /// Relevance score only (negated alignment distance).
    pub fn score(&self, question: &TokenSet, candidate: &TokenSet) -> Result<f64> {
        Ok(self.align(question, candidate)?.score())
    }

    fn min_distance(
        &self,
        q: &str,
        candidate: &[(&str, Option<&TermVector>)],
        unk: Option<&TermVector>,
    ) -> Result<Option<f64>> {
        let q_vec = self.store.lookup(q).ok();
        let mut best: Option<f64> = None;

        for &(c, c_vec) in candidate {
            let d = match (q_vec, c_vec) {
                (Some(qv), Some(cv)) => euclidean_distance(qv, cv)?,
                (None, _) if q == c => 0.0,
                (None, Some(cv)) => match unk {
                    Some(u) => euclidean_distance(u, cv)?,
                    None => continue,
                },
                (_, None) => continue,
            };
            best = Some(best.map_or(d, |b: f64| b.min(d)));
            if d == 0.0 {
                break;
            }
        }

        Ok(best)
    }
}
