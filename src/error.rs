// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for alignqa.
//!
//! Four failure families, and they are handled very differently:
//!
//! | Variant                | Severity           | Who deals with it            |
//! |------------------------|--------------------|------------------------------|
//! | `DictionaryLoad`       | fatal, startup     | the binary aborts            |
//! | `TermNotFound`         | expected           | absorbed inside the scorers  |
//! | `InvalidInput`         | fatal per query    | the pipeline skips the query |
//! | `RetrievalUnavailable` | fatal per query    | the pipeline skips the query |
//!
//! `TermNotFound` only ever comes out of [`EmbeddingStore::lookup`]. No scoring
//! call returns it.
//!
//! [`EmbeddingStore::lookup`]: crate::EmbeddingStore::lookup

use std::path::PathBuf;
use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, QaError>;

/// Main error type for alignqa operations.
#[derive(Error, Debug)]
pub enum QaError {
    /// The embedding dictionary could not be read or is malformed.
    #[error("failed to load dictionary {}{}: {reason}", path.display(), fmt_line(*line))]
    DictionaryLoad {
        path: PathBuf,
        /// 1-based line number, when the failure is tied to one line.
        line: Option<usize>,
        reason: String,
    },

    /// A term has no vector in the embedding dictionary.
    #[error("term not found: {0}")]
    TermNotFound(String),

    /// A query cannot be scored.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),

    /// The retrieval collaborator could not produce candidates.
    #[error("retrieval unavailable for '{query}': {reason}")]
    RetrievalUnavailable { query: String, reason: String },

    /// Missing resource or inconsistent configuration.
    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Why a (question, candidate) pair could not be scored.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidInput {
    /// The question produced no tokens.
    #[error("question has no terms")]
    EmptyQuestion,
    /// The candidate passage produced no tokens.
    #[error("candidate passage has no terms")]
    EmptyCandidate,
    /// Two vectors of different length met in a distance computation.
    /// Only a corrupt store can cause this.
    #[error("vector dimension {found} != {expected}")]
    DimensionMismatch { expected: usize, found: usize },
}

impl QaError {
    pub(crate) fn dictionary(
        path: impl Into<PathBuf>,
        line: Option<usize>,
        reason: impl Into<String>,
    ) -> Self {
        QaError::DictionaryLoad {
            path: path.into(),
            line,
            reason: reason.into(),
        }
    }

    /// True for the per-candidate condition the pipeline recovers from.
    pub fn is_empty_candidate(&self) -> bool {
        matches!(self, QaError::InvalidInput(InvalidInput::EmptyCandidate))
    }
}

fn fmt_line(line: Option<usize>) -> String {
    match line {
        Some(n) => format!(":{}", n),
        None => String::new(),
    }
}
