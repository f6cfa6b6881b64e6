// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Top-k extraction: how scored passages get their order.
//!
//! Sort order:
//! 1. **Score** - descending (higher wins)
//! 2. **Input position** - the earlier candidate wins an exact tie
//!
//! The second rule comes for free from a stable sort, and it is what makes
//! evaluation runs reproducible: the same candidates in the same order always
//! produce the same ranking, byte for byte.
//!
//! NaN scores sort after every real score. Nothing in this crate produces
//! them, but a custom retriever score fed straight through could.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// A passage paired with its relevance score.
///
/// `position` is the passage's index in the candidate list it was scored
/// from. Sorting never changes it, so a ranked passage can still be traced
/// back to the candidate (and the document id judgments use for it).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredPassage {
    pub id: String,
    pub text: String,
    pub score: f64,
    #[serde(default)]
    pub position: usize,
}

impl ScoredPassage {
    pub fn new(id: impl Into<String>, text: impl Into<String>, score: f64) -> Self {
        ScoredPassage {
            id: id.into(),
            text: text.into(),
            score,
            position: 0,
        }
    }

    pub fn with_position(mut self, position: usize) -> Self {
        self.position = position;
        self
    }
}

/// Compare two scored passages for ranking.
///
/// Higher score sorts first. Equal scores compare `Equal`, so a stable sort
/// keeps their input order.
pub fn compare_scored(a: &ScoredPassage, b: &ScoredPassage) -> Ordering {
    match b.score.partial_cmp(&a.score) {
        Some(ord) => ord,
        // At least one NaN: real scores first, NaNs tie with each other
        None => a.score.is_nan().cmp(&b.score.is_nan()),
    }
}

/// Sort `passages` by [`compare_scored`] and keep the first `k`.
///
/// `k == 0` gives an empty result. `k` larger than the input returns
/// everything, sorted, with no padding.
pub fn extract_top_k(mut passages: Vec<ScoredPassage>, k: usize) -> RankedResult {
    if k == 0 {
        return RankedResult::default();
    }
    passages.sort_by(compare_scored);
    passages.truncate(k);
    RankedResult { passages }
}

/// Ranked passages for one query, best first.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RankedResult {
    passages: Vec<ScoredPassage>,
}

impl RankedResult {
    pub fn len(&self) -> usize {
        self.passages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passages.is_empty()
    }

    pub fn as_slice(&self) -> &[ScoredPassage] {
        &self.passages
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScoredPassage> {
        self.passages.iter()
    }

    pub fn best(&self) -> Option<&ScoredPassage> {
        self.passages.first()
    }

    pub fn into_vec(self) -> Vec<ScoredPassage> {
        self.passages
    }
}

impl<'a> IntoIterator for &'a RankedResult {
    type Item = &'a ScoredPassage;
    type IntoIter = std::slice::Iter<'a, ScoredPassage>;

    fn into_iter(self) -> Self::IntoIter {
        self.passages.iter()
    }
}
