// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The retrieval boundary.
//!
//! Candidate passages come from a full-text index this crate does not own.
//! All the pipeline needs is [`PassageRetriever`]: a query and a hit count in,
//! an ordered list of passages out.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{QaError, Result};

/// One hit from the retrieval collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetrievedPassage {
    pub id: String,
    pub text: String,
    /// Score assigned by the retriever (BM25 or similar). Carried through,
    /// never used for ranking here.
    #[serde(default)]
    pub retrieval_score: f64,
}

/// Anything that can turn a query into candidate passages.
pub trait PassageRetriever: Send + Sync {
    /// Up to `hits` passages for `query`, best retrieval match first.
    ///
    /// Fails with [`QaError::RetrievalUnavailable`] when the collaborator
    /// cannot answer.
    fn retrieve(&self, query: &str, hits: usize) -> Result<Vec<RetrievedPassage>>;
}

/// Retrieval results recorded ahead of time, keyed by exact query text.
///
/// JSON shape: `{ "<query>": [ { "id": ..., "text": ..., "retrievalScore": ... } ] }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StaticRetriever {
    runs: HashMap<String, Vec<RetrievedPassage>>,
}

impl StaticRetriever {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, query: impl Into<String>, passages: Vec<RetrievedPassage>) {
        self.runs.insert(query.into(), passages);
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let retriever: StaticRetriever = serde_json::from_str(&fs::read_to_string(path)?)?;
        info!(
            path = %path.display(),
            queries = retriever.len(),
            "loaded recorded retrieval runs"
        );
        Ok(retriever)
    }

    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }
}

impl PassageRetriever for StaticRetriever {
    fn retrieve(&self, query: &str, hits: usize) -> Result<Vec<RetrievedPassage>> {
        let passages = self
            .runs
            .get(query)
            .ok_or_else(|| QaError::RetrievalUnavailable {
                query: query.to_string(),
                reason: "no recorded results".to_string(),
            })?;
        Ok(passages.iter().take(hits).cloned().collect())
    }
}
