// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scorer selection over a closed set of strategies.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::embedding::EmbeddingStore;
use crate::error::{QaError, Result};
use crate::idf::TermIdfIndex;
use crate::text::TokenSet;

use super::alignment::AlignmentScorer;
use super::overlap::IdfOverlapScorer;

/// Which scoring strategy to run. Selected by configuration.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ScorerKind {
    /// Embedding alignment distance, optionally IDF-weighted.
    #[default]
    Alignment,
    /// Sum of IDF over shared terms.
    Idf,
}

/// A ready-to-use scorer. Higher scores are always better.
#[derive(Debug, Clone)]
pub enum PassageScorer {
    Alignment(AlignmentScorer),
    IdfOverlap(IdfOverlapScorer),
}

impl PassageScorer {
    /// Build the scorer for `kind` from whatever resources were loaded.
    ///
    /// Fails with `Config` when the strategy needs something that is missing:
    /// alignment needs an embedding store (and an IDF index if
    /// `idf_weighting`), IDF overlap needs an IDF index.
    pub fn from_kind(
        kind: ScorerKind,
        store: Option<Arc<EmbeddingStore>>,
        idf: Option<Arc<TermIdfIndex>>,
        idf_weighting: bool,
    ) -> Result<Self> {
        match kind {
            ScorerKind::Alignment => {
                let store = store.ok_or_else(|| {
                    QaError::Config("alignment scoring needs an embedding dictionary".into())
                })?;
                let scorer = AlignmentScorer::new(store);
                if !idf_weighting {
                    return Ok(PassageScorer::Alignment(scorer));
                }
                let idf = idf.ok_or_else(|| {
                    QaError::Config("IDF weighting needs a document frequency index".into())
                })?;
                Ok(PassageScorer::Alignment(scorer.with_idf(idf)))
            }
            ScorerKind::Idf => {
                let idf = idf.ok_or_else(|| {
                    QaError::Config("IDF scoring needs a document frequency index".into())
                })?;
                Ok(PassageScorer::IdfOverlap(IdfOverlapScorer::new(idf)))
            }
        }
    }

    pub fn kind(&self) -> ScorerKind {
        match self {
            PassageScorer::Alignment(_) => ScorerKind::Alignment,
            PassageScorer::IdfOverlap(_) => ScorerKind::Idf,
        }
    }

    pub fn score(&self, question: &TokenSet, candidate: &TokenSet) -> Result<f64> {
        match self {
            PassageScorer::Alignment(scorer) => scorer.score(question, candidate),
            PassageScorer::IdfOverlap(scorer) => scorer.score(question, candidate),
        }
    }
}

impl From<AlignmentScorer> for PassageScorer {
    fn from(scorer: AlignmentScorer) -> Self {
        PassageScorer::Alignment(scorer)
    }
}

impl From<IdfOverlapScorer> for PassageScorer {
    fn from(scorer: IdfOverlapScorer) -> Self {
        PassageScorer::IdfOverlap(scorer)
    }
}
