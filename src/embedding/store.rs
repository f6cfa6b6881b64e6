// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The term → vector dictionary.
//!
//! # File format
//!
//! ```text
//! term<TAB>vector              <- header, skipped
//! paris<TAB>0.12 -0.40 0.88
//! france<TAB>0.10,-0.38,0.91   <- commas work too
//! ```
//!
//! Exactly two tab-separated columns per line. Components are separated by
//! whitespace or commas and must be finite (`NaN` and `inf` fail the load).
//! Every vector must have the same number of
//! components; the first entry fixes the dimension and any later entry that
//! disagrees fails the load. A term may appear only once.
//!
//! Lookups are case-sensitive, exactly as stored. Dictionaries in this domain
//! are usually lower-cased, so tokenize with case folding on.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info};

use crate::error::{QaError, Result};

/// Reserved term whose vector stands in for out-of-vocabulary question terms.
pub const UNK_TERM: &str = "unk";

/// Immutable embedding vector for one term.
///
/// Cloning is cheap (the components live behind an `Arc`).
#[derive(Debug, Clone, PartialEq)]
pub struct TermVector(Arc<[f32]>);

impl TermVector {
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.0.len()
    }
}

impl From<Vec<f32>> for TermVector {
    fn from(components: Vec<f32>) -> Self {
        TermVector(components.into())
    }
}

impl From<&[f32]> for TermVector {
    fn from(components: &[f32]) -> Self {
        TermVector(components.into())
    }
}

/// Collects entries and checks the store invariants as they arrive.
///
/// `build()` consumes the builder, so nothing can be added after the store is
/// handed out.
#[derive(Debug, Default)]
pub struct EmbeddingStoreBuilder {
    vectors: HashMap<String, TermVector>,
    dimension: Option<usize>,
}

impl EmbeddingStoreBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one entry. Rejects empty or non-finite vectors, duplicate terms
    /// and vectors whose dimension differs from the first entry.
    pub fn insert(
        &mut self,
        term: impl Into<String>,
        vector: impl Into<TermVector>,
    ) -> Result<()> {
        self.try_insert(term.into(), vector.into())
            .map_err(|reason| QaError::dictionary("<memory>", None, reason))
    }

    fn try_insert(&mut self, term: String, vector: TermVector) -> std::result::Result<(), String> {
        if vector.dimension() == 0 {
            return Err(format!("term '{}' has an empty vector", term));
        }
        if !vector.as_slice().iter().all(|c| c.is_finite()) {
            return Err(format!("term '{}' has a non-finite component", term));
        }
        match self.dimension {
            Some(dim) if dim != vector.dimension() => {
                return Err(format!(
                    "term '{}' has {} components, expected {}",
                    term,
                    vector.dimension(),
                    dim
                ));
            }
            Some(_) => {}
            None => self.dimension = Some(vector.dimension()),
        }
        if self.vectors.contains_key(&term) {
            return Err(format!("duplicate term '{}'", term));
        }
        self.vectors.insert(term, vector);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    pub fn build(self) -> EmbeddingStore {
        EmbeddingStore {
            vectors: self.vectors,
            dimension: self.dimension.unwrap_or(0),
        }
    }
}

/// Read-only term → vector dictionary.
#[derive(Debug, Clone)]
pub struct EmbeddingStore {
    vectors: HashMap<String, TermVector>,
    dimension: usize,
}

impl EmbeddingStore {
    /// Load a dictionary file (see module docs for the format).
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| QaError::dictionary(path, None, e.to_string()))?;
        let store = Self::from_reader(BufReader::new(file), path)?;
        info!(
            path = %path.display(),
            terms = store.len(),
            dimension = store.dimension(),
            "loaded embedding dictionary"
        );
        Ok(store)
    }

    /// Parse a dictionary from any buffered reader. `origin` only labels errors.
    pub fn from_reader<R: BufRead>(reader: R, origin: impl AsRef<Path>) -> Result<Self> {
        let origin = origin.as_ref();
        let mut builder = EmbeddingStoreBuilder::new();

        for (idx, line) in reader.lines().enumerate() {
            let line_no = idx + 1;
            let line =
                line.map_err(|e| QaError::dictionary(origin, Some(line_no), e.to_string()))?;
            if line_no == 1 {
                continue;
            }
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let (term, vector) = parse_entry(line)
                .map_err(|reason| QaError::dictionary(origin, Some(line_no), reason))?;
            builder
                .try_insert(term.to_string(), vector)
                .map_err(|reason| QaError::dictionary(origin, Some(line_no), reason))?;
        }

        debug!(entries = builder.len(), "parsed dictionary");
        Ok(builder.build())
    }

    /// Vector for `term`, or `TermNotFound`. Callers are expected to recover.
    pub fn lookup(&self, term: &str) -> Result<&TermVector> {
        self.vectors
            .get(term)
            .ok_or_else(|| QaError::TermNotFound(term.to_string()))
    }

    #[inline]
    pub fn contains(&self, term: &str) -> bool {
        self.vectors.contains_key(term)
    }

    /// Dimension shared by every vector (0 for an empty store).
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Whether the `"unk"` fallback vector is present.
    pub fn has_unk(&self) -> bool {
        self.contains(UNK_TERM)
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.vectors.keys().map(String::as_str)
    }
}

fn parse_entry(line: &str) -> std::result::Result<(&str, TermVector), String> {
    let columns: Vec<&str> = line.split('\t').collect();
    if columns.len() != 2 {
        return Err(format!("expected 2 columns, found {}", columns.len()));
    }
    let term = columns[0].trim();
    if term.is_empty() {
        return Err("empty term".to_string());
    }

    let components = columns[1]
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(|s| match s.parse::<f32>() {
            Ok(c) if c.is_finite() => Ok(c),
            Ok(_) => Err(format!("non-finite component '{}' for term '{}'", s, term)),
            Err(_) => Err(format!("invalid component '{}' for term '{}'", s, term)),
        })
        .collect::<std::result::Result<Vec<f32>, String>>()?;

    Ok((term, TermVector::from(components)))
}
