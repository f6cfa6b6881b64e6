// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Judging helpers: relevance judgments, precision at k, token overlap.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{QaError, Result};
use crate::text::TokenSet;

use super::run_file::RunLine;

/// Jaccard similarity of two token sets: |a ∩ b| / |a ∪ b|.
///
/// Two empty sets score 0.
pub fn jaccard(a: &TokenSet, b: &TokenSet) -> f64 {
    let shared = a.iter().filter(|t| b.contains(t)).count();
    let union = a.len() + b.len() - shared;
    if union == 0 {
        0.0
    } else {
        shared as f64 / union as f64
    }
}

/// Relevance judgments: query id → document id → label.
///
/// Parsed from `<qid> 0 <docid> <label>` lines. A label above zero means
/// relevant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Qrels {
    judgments: HashMap<String, HashMap<String, i32>>,
}

impl Qrels {
    pub fn parse(text: &str) -> Result<Self> {
        let mut judgments: HashMap<String, HashMap<String, i32>> = HashMap::new();
        for (n, line) in text.lines().enumerate() {
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.is_empty() {
                continue;
            }
            let [qid, _, docid, label] = fields[..] else {
                return Err(QaError::Config(format!(
                    "qrels line {}: expected 4 fields, found {}",
                    n + 1,
                    fields.len()
                )));
            };
            let label: i32 = label.parse().map_err(|_| {
                QaError::Config(format!("qrels line {}: bad label '{}'", n + 1, label))
            })?;
            judgments
                .entry(qid.to_string())
                .or_default()
                .insert(docid.to_string(), label);
        }
        Ok(Qrels { judgments })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::parse(&fs::read_to_string(path)?)
    }

    /// `None` when the document was never judged for this query.
    pub fn label(&self, query_id: &str, doc_id: &str) -> Option<i32> {
        self.judgments.get(query_id)?.get(doc_id).copied()
    }

    pub fn is_relevant(&self, query_id: &str, doc_id: &str) -> bool {
        self.label(query_id, doc_id).is_some_and(|l| l > 0)
    }

    pub fn has_query(&self, query_id: &str) -> bool {
        self.judgments.contains_key(query_id)
    }

    /// Number of judged queries.
    pub fn len(&self) -> usize {
        self.judgments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.judgments.is_empty()
    }
}

/// Ranked document ids per query, best first.
pub type Rankings = HashMap<String, Vec<String>>;

/// Group run lines into per-query rankings.
///
/// Each query's lines are ordered by descending score (stable, so file order
/// breaks ties) and the rank column is taken as the document id.
pub fn rankings_from_run(lines: &[RunLine]) -> Rankings {
    let mut grouped: HashMap<String, Vec<&RunLine>> = HashMap::new();
    for line in lines {
        grouped.entry(line.query_id.clone()).or_default().push(line);
    }
    grouped
        .into_iter()
        .map(|(qid, mut lines)| {
            lines.sort_by(|a, b| b.score.total_cmp(&a.score));
            let docs = lines.iter().map(|l| l.rank.to_string()).collect();
            (qid, docs)
        })
        .collect()
}

/// Precision at `k` over every judged query that appears in `rankings`.
///
/// Each such query contributes `k` slots; relevant documents in its top `k`
/// are hits. Unjudged documents, and slots a short ranking leaves empty,
/// count as misses. Returns 0 when no query qualifies or `k` is 0.
pub fn precision_at_k(qrels: &Qrels, rankings: &Rankings, k: usize) -> f64 {
    let mut hits = 0usize;
    let mut slots = 0usize;
    for (qid, docs) in rankings {
        if !qrels.has_query(qid) {
            continue;
        }
        slots += k;
        hits += docs
            .iter()
            .take(k)
            .filter(|doc| qrels.is_relevant(qid, doc))
            .count();
    }
    if slots == 0 {
        0.0
    } else {
        hits as f64 / slots as f64
    }
}
