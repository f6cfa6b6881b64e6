// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Run configuration.
//!
//! Every field has a default, so `{}` is a valid config file. Command-line
//! flags are applied on top by the binary.
//!
//! ```json
//! {
//!   "tokenizer": { "mode": "linguistic", "removeStopwords": true },
//!   "scorer": "alignment",
//!   "idfWeighting": true,
//!   "topK": 5,
//!   "hits": 200,
//!   "runTag": "wmdbaseline",
//!   "stopwords": "data/english-stoplist.txt",
//!   "resetRankPerQuery": false
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{QaError, Result};
use crate::scoring::ScorerKind;
use crate::text::{Stopwords, Tokenizer, TokenizerConfig};

pub const DEFAULT_RUN_TAG: &str = "alignqa";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QaConfig {
    pub tokenizer: TokenizerConfig,
    pub scorer: ScorerKind,
    pub idf_weighting: bool,
    /// Passages kept per question.
    pub top_k: usize,
    /// Candidates requested from retrieval per question.
    pub hits: usize,
    pub run_tag: String,
    /// Stop word list; the bundled English list when unset.
    pub stopwords: Option<PathBuf>,
    /// Restart run-file ranks whenever the question id changes.
    pub reset_rank_per_query: bool,
}

impl Default for QaConfig {
    fn default() -> Self {
        QaConfig {
            tokenizer: TokenizerConfig::default(),
            scorer: ScorerKind::default(),
            idf_weighting: false,
            top_k: 1,
            hits: 100,
            run_tag: DEFAULT_RUN_TAG.to_string(),
            stopwords: None,
            reset_rank_per_query: false,
        }
    }
}

impl QaConfig {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config: QaConfig = serde_json::from_str(&fs::read_to_string(path)?)?;
        config.validate()?;
        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.run_tag.trim().is_empty() || self.run_tag.contains(char::is_whitespace) {
            return Err(QaError::Config(format!(
                "run tag must be a single non-empty word, got '{}'",
                self.run_tag
            )));
        }
        Ok(())
    }

    /// Load the configured stop word list.
    pub fn load_stopwords(&self) -> Result<Stopwords> {
        match &self.stopwords {
            Some(path) => Stopwords::from_path(path),
            None => Ok(Stopwords::english()),
        }
    }

    /// The tokenizer every question and passage of a run goes through.
    pub fn build_tokenizer(&self) -> Result<Tokenizer> {
        Ok(Tokenizer::new(self.tokenizer, Arc::new(self.load_stopwords()?)))
    }
}
