// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Stop word lists.
//!
//! A list is a newline-delimited file; lines beginning with `#` are comments
//! and blank lines are ignored. The bundled English list is compiled into the
//! binary. Build one `Stopwords` at startup and share it through an `Arc`;
//! nothing in the crate keeps a process-wide copy.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::Result;

const ENGLISH_STOPLIST: &str = include_str!("../../data/english-stoplist.txt");

/// An immutable set of stop words.
#[derive(Debug, Clone, Default)]
pub struct Stopwords {
    words: HashSet<String>,
}

impl Stopwords {
    /// An empty list: nothing is filtered.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The bundled English list.
    pub fn english() -> Self {
        Self::parse(ENGLISH_STOPLIST)
    }

    /// Parse list text. Words are stored trimmed and lower-cased, since they
    /// are compared against folded linguistic tokens.
    pub fn parse(text: &str) -> Self {
        let words = text
            .lines()
            .filter(|line| !line.starts_with('#'))
            .map(|line| line.trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();
        Stopwords { words }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let list = Self::parse(&text);
        debug!(path = %path.display(), words = list.len(), "loaded stop words");
        Ok(list)
    }

    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Stopwords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Stopwords {
            words: iter
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }
}
