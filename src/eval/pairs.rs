// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Batch scoring of a paired corpus.
//!
//! A corpus directory holds three line-aligned files:
//!
//! - `a.toks`: questions
//! - `b.toks`: candidate answers
//! - `id.txt`: question ids
//!
//! Line `n` of each file is one (question, answer) pair. Reading stops at the
//! first file that runs out.

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::error::Result;
use crate::scoring::PassageScorer;
use crate::text::Tokenizer;

use super::run_file::RunLine;

pub const QUESTIONS_FILE: &str = "a.toks";
pub const ANSWERS_FILE: &str = "b.toks";
pub const IDS_FILE: &str = "id.txt";

/// One line of a paired corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QaPair {
    pub id: String,
    pub question: String,
    pub answer: String,
}

/// A loaded paired corpus.
#[derive(Debug, Clone, Default)]
pub struct PairedCorpus {
    pairs: Vec<QaPair>,
}

impl PairedCorpus {
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let questions = fs::read_to_string(dir.join(QUESTIONS_FILE))?;
        let answers = fs::read_to_string(dir.join(ANSWERS_FILE))?;
        let ids = fs::read_to_string(dir.join(IDS_FILE))?;
        let corpus = Self::from_lines(&questions, &answers, &ids);
        info!(dir = %dir.display(), pairs = corpus.len(), "loaded paired corpus");
        Ok(corpus)
    }

    /// Zip three line-aligned texts, stopping at the shortest.
    pub fn from_lines(questions: &str, answers: &str, ids: &str) -> Self {
        let pairs = questions
            .lines()
            .zip(answers.lines())
            .zip(ids.lines())
            .map(|((question, answer), id)| QaPair {
                id: id.trim().to_string(),
                question: question.to_string(),
                answer: answer.to_string(),
            })
            .collect();
        PairedCorpus { pairs }
    }

    pub fn pairs(&self) -> &[QaPair] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Score every pair of `corpus` into run lines.
///
/// The rank column counts pairs from 0 across the whole corpus, or per
/// question id when `reset_rank_per_query` is set (WikiQA layout). A pair
/// that cannot be scored is logged and left out, but still uses up its rank,
/// so ranks keep matching candidate positions.
pub fn score_pairs(
    tokenizer: &Tokenizer,
    scorer: &PassageScorer,
    corpus: &PairedCorpus,
    run_tag: &str,
    reset_rank_per_query: bool,
) -> Vec<RunLine> {
    score_pairs_with_progress(tokenizer, scorer, corpus, run_tag, reset_rank_per_query, || {})
}

/// [`score_pairs`], calling `tick` once per pair.
pub fn score_pairs_with_progress(
    tokenizer: &Tokenizer,
    scorer: &PassageScorer,
    corpus: &PairedCorpus,
    run_tag: &str,
    reset_rank_per_query: bool,
    mut tick: impl FnMut(),
) -> Vec<RunLine> {
    let mut lines = Vec::with_capacity(corpus.len());
    let mut rank = 0;
    let mut current_id: Option<&str> = None;
    let mut skipped = 0usize;

    for (n, pair) in corpus.pairs().iter().enumerate() {
        if reset_rank_per_query && current_id != Some(pair.id.as_str()) {
            current_id = Some(pair.id.as_str());
            rank = 0;
        }

        let question = tokenizer.token_set(&pair.question);
        let answer = tokenizer.token_set(&pair.answer);
        match scorer.score(&question, &answer) {
            Ok(score) => lines.push(RunLine::new(pair.id.as_str(), rank, score, run_tag)),
            Err(e) => {
                warn!(line = n + 1, question = %pair.id, error = %e, "pair skipped");
                skipped += 1;
            }
        }
        rank += 1;
        tick();
    }

    info!(scored = lines.len(), skipped, "scored paired corpus");
    lines
}
