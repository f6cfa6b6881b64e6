// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Question answering over retrieved passages.
//!
//! Call order for one question:
//!
//! ```text
//! retrieve(question, hits) → tokenize question → tokenize + score each
//! candidate → extract_top_k(k)
//! ```
//!
//! One [`Tokenizer`] is applied to the question and to every candidate of a
//! query. Scores from differently tokenized inputs are not comparable, so the
//! pipeline owns exactly one and there is no way to pass another in.
//!
//! Failure granularity: a candidate with no tokens is skipped, a question
//! with no tokens (or a retrieval failure) fails that query, and a failed
//! query never stops a batch.

mod retrieval;

pub use retrieval::*;

use std::fs;
use std::path::Path;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{InvalidInput, Result};
use crate::scoring::{extract_top_k, PassageScorer, RankedResult, ScoredPassage};
use crate::text::{TokenSet, Tokenizer};

/// A question with the identifier used in run files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub text: String,
}

impl Question {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Question {
            id: id.into(),
            text: text.into(),
        }
    }

    /// Parse a topics file: one `<id>\t<question>` per line.
    ///
    /// Blank lines are ignored. A line without a tab is skipped with a
    /// warning.
    pub fn parse_topics(text: &str) -> Vec<Question> {
        text.lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .filter_map(|(i, line)| match line.split_once('\t') {
                Some((id, question)) => Some(Question::new(id.trim(), question.trim())),
                None => {
                    warn!(line = i + 1, "topic line has no tab separator, skipped");
                    None
                }
            })
            .collect()
    }

    pub fn load_topics(path: impl AsRef<Path>) -> Result<Vec<Question>> {
        Ok(Self::parse_topics(&fs::read_to_string(path)?))
    }
}

/// How one question of a batch went.
#[derive(Debug)]
pub struct QueryOutcome {
    pub question: Question,
    pub result: Result<RankedResult>,
}

impl QueryOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Tokenizer + scorer + cutoff, applied question by question.
#[derive(Debug, Clone)]
pub struct QaPipeline {
    tokenizer: Tokenizer,
    scorer: PassageScorer,
    top_k: usize,
}

impl QaPipeline {
    pub fn new(tokenizer: Tokenizer, scorer: PassageScorer, top_k: usize) -> Self {
        QaPipeline {
            tokenizer,
            scorer,
            top_k,
        }
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    pub fn scorer(&self) -> &PassageScorer {
        &self.scorer
    }

    pub fn top_k(&self) -> usize {
        self.top_k
    }

    /// Score and rank `candidates` for `question`.
    ///
    /// Candidates are scored independently (in parallel with the `parallel`
    /// feature); the result order only depends on scores and input order.
    pub fn rank(&self, question: &str, candidates: &[RetrievedPassage]) -> Result<RankedResult> {
        let question = self.tokenizer.token_set(question);
        if question.is_empty() {
            return Err(InvalidInput::EmptyQuestion.into());
        }

        #[cfg(feature = "parallel")]
        let scored: Vec<Option<ScoredPassage>> = candidates
            .par_iter()
            .enumerate()
            .map(|(position, candidate)| self.score_candidate(&question, position, candidate))
            .collect::<Result<_>>()?;
        #[cfg(not(feature = "parallel"))]
        let scored: Vec<Option<ScoredPassage>> = candidates
            .iter()
            .enumerate()
            .map(|(position, candidate)| self.score_candidate(&question, position, candidate))
            .collect::<Result<_>>()?;

        Ok(extract_top_k(scored.into_iter().flatten().collect(), self.top_k))
    }

    /// Retrieve up to `hits` candidates for `question`, then [`rank`](Self::rank) them.
    pub fn answer<R>(&self, retriever: &R, question: &str, hits: usize) -> Result<RankedResult>
    where
        R: PassageRetriever + ?Sized,
    {
        let candidates = retriever.retrieve(question, hits)?;
        debug!(candidates = candidates.len(), "retrieved");
        self.rank(question, &candidates)
    }

    /// Answer every question, recording failures instead of stopping.
    pub fn answer_batch<R>(
        &self,
        retriever: &R,
        questions: &[Question],
        hits: usize,
    ) -> Vec<QueryOutcome>
    where
        R: PassageRetriever + ?Sized,
    {
        questions
            .iter()
            .map(|question| {
                let result = self.answer(retriever, &question.text, hits);
                if let Err(e) = &result {
                    warn!(question = %question.id, error = %e, "query failed");
                }
                QueryOutcome {
                    question: question.clone(),
                    result,
                }
            })
            .collect()
    }

    /// `Ok(None)` for a candidate that tokenizes to nothing.
    fn score_candidate(
        &self,
        question: &TokenSet,
        position: usize,
        candidate: &RetrievedPassage,
    ) -> Result<Option<ScoredPassage>> {
        let terms = self.tokenizer.token_set(&candidate.text);
        match self.scorer.score(question, &terms) {
            Ok(score) => Ok(Some(
                ScoredPassage::new(candidate.id.clone(), candidate.text.clone(), score)
                    .with_position(position),
            )),
            Err(e) if e.is_empty_candidate() => {
                debug!(passage = %candidate.id, "candidate has no terms, skipped");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}
