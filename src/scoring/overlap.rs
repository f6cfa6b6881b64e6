// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! IDF-only scoring: reward passages that share rare words with the question.
//!
//! ```text
//! score = Σ idf(q)  over question terms q that also occur in the passage
//! ```
//!
//! No embeddings involved, so this is the fallback when no dictionary is
//! available, and a useful baseline next to alignment scoring.

use std::sync::Arc;

use crate::error::{InvalidInput, Result};
use crate::idf::TermIdfIndex;
use crate::text::TokenSet;

#[derive(Debug, Clone)]
pub struct IdfOverlapScorer {
    idf: Arc<TermIdfIndex>,
}

impl IdfOverlapScorer {
    pub fn new(idf: Arc<TermIdfIndex>) -> Self {
        IdfOverlapScorer { idf }
    }

    pub fn score(&self, question: &TokenSet, candidate: &TokenSet) -> Result<f64> {
        if question.is_empty() {
            return Err(InvalidInput::EmptyQuestion.into());
        }
        if candidate.is_empty() {
            return Err(InvalidInput::EmptyCandidate.into());
        }

        Ok(question
            .iter()
            .filter(|q| candidate.contains(q))
            .map(|q| self.idf.idf(q))
            .sum())
    }
}
