// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tokenization policies.
//!
//! Two modes:
//!
//! - **whitespace**: split on runs of whitespace, keep tokens verbatim. No case
//!   folding, no stop word removal (the flag is ignored).
//! - **linguistic**: segment into word-like runs (letters and digits, with
//!   inner hyphens and apostrophes kept, and `3.14`/`1,000` kept whole), fold
//!   case with [`normalize_term`], optionally drop stop words.
//!
//! With `split_hyphenated`, a token containing `-` is emitted as itself *and*
//! as each hyphen-delimited part:
//!
//! ```text
//! "state-of-the-art" → state-of-the-art, state, of, the, art
//! ```
//!
//! This is a union, not a replacement. Scores computed against dictionaries
//! that contain both forms depend on it.

use std::collections::{HashSet, VecDeque};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::normalize::normalize_term;
use super::stopwords::Stopwords;

/// How raw text is cut into tokens.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum TokenizerMode {
    #[default]
    Whitespace,
    Linguistic,
}

/// Tokenizer options. Serialized in camelCase inside the JSON config.
///
/// `remove_stopwords` defaults to true and only has an effect in linguistic
/// mode, so switching modes never needs to touch it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TokenizerConfig {
    pub mode: TokenizerMode,
    pub remove_stopwords: bool,
    pub split_hyphenated: bool,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        TokenizerConfig {
            mode: TokenizerMode::Whitespace,
            remove_stopwords: true,
            split_hyphenated: false,
        }
    }
}

impl TokenizerConfig {
    pub fn whitespace() -> Self {
        Self::default()
    }

    pub fn linguistic() -> Self {
        Self::default().with_mode(TokenizerMode::Linguistic)
    }

    pub fn with_mode(mut self, mode: TokenizerMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_split_hyphenated(mut self, split: bool) -> Self {
        self.split_hyphenated = split;
        self
    }

    pub fn with_remove_stopwords(mut self, remove: bool) -> Self {
        self.remove_stopwords = remove;
        self
    }
}

/// A configured tokenizer. Cheap to clone; the stop word list is shared.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    config: TokenizerConfig,
    stopwords: Arc<Stopwords>,
}

impl Tokenizer {
    pub fn new(config: TokenizerConfig, stopwords: Arc<Stopwords>) -> Self {
        Tokenizer { config, stopwords }
    }

    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    /// Lazy token stream over `text`. Call again (or clone the stream) to
    /// start over.
    pub fn tokens<'t>(&'t self, text: &'t str) -> Tokens<'t> {
        Tokens {
            tokenizer: self,
            segments: Segments {
                rest: text,
                mode: self.config.mode,
            },
            pending: VecDeque::new(),
        }
    }

    /// Tokenize and collapse duplicates, keeping first-seen order.
    pub fn token_set(&self, text: &str) -> TokenSet {
        self.tokens(text).collect()
    }

    fn expand(&self, segment: &str, out: &mut VecDeque<String>) {
        let term = match self.config.mode {
            TokenizerMode::Whitespace => segment.to_string(),
            TokenizerMode::Linguistic => normalize_term(segment),
        };

        if self.config.split_hyphenated && term.contains('-') {
            let parts: Vec<String> = term
                .split('-')
                .filter(|part| !part.is_empty())
                .map(str::to_string)
                .collect();
            self.keep(term, out);
            for part in parts {
                self.keep(part, out);
            }
        } else {
            self.keep(term, out);
        }
    }

    fn keep(&self, term: String, out: &mut VecDeque<String>) {
        let filtered = self.config.mode == TokenizerMode::Linguistic
            && self.config.remove_stopwords
            && self.stopwords.contains(&term);
        if !filtered {
            out.push_back(term);
        }
    }
}

/// Token stream produced by [`Tokenizer::tokens`].
#[derive(Debug, Clone)]
pub struct Tokens<'t> {
    tokenizer: &'t Tokenizer,
    segments: Segments<'t>,
    pending: VecDeque<String>,
}

impl Iterator for Tokens<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            if let Some(term) = self.pending.pop_front() {
                return Some(term);
            }
            let segment = self.segments.next()?;
            self.tokenizer.expand(segment, &mut self.pending);
        }
    }
}

/// Raw segments of the input, before folding and filtering.
#[derive(Debug, Clone)]
struct Segments<'t> {
    rest: &'t str,
    mode: TokenizerMode,
}

impl<'t> Iterator for Segments<'t> {
    type Item = &'t str;

    fn next(&mut self) -> Option<&'t str> {
        match self.mode {
            TokenizerMode::Whitespace => {
                let trimmed = self.rest.trim_start();
                if trimmed.is_empty() {
                    self.rest = trimmed;
                    return None;
                }
                let end = trimmed.find(char::is_whitespace).unwrap_or(trimmed.len());
                let (segment, rest) = trimmed.split_at(end);
                self.rest = rest;
                Some(segment)
            }
            TokenizerMode::Linguistic => {
                let Some(start) = self.rest.find(char::is_alphanumeric) else {
                    self.rest = "";
                    return None;
                };
                let word = &self.rest[start..];
                let end = word_end(word);
                self.rest = &word[end..];
                Some(&word[..end])
            }
        }
    }
}

/// Byte length of the word at the start of `word` (which starts alphanumeric).
fn word_end(word: &str) -> usize {
    let mut end = 0;
    let mut prev: Option<char> = None;
    let mut chars = word.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        let next = chars.peek().map(|&(_, n)| n);
        let keep = if c.is_alphanumeric() {
            true
        } else {
            match (c, prev, next) {
                ('-' | '\'' | '\u{2019}', Some(p), Some(n)) => {
                    p.is_alphanumeric() && n.is_alphanumeric()
                }
                ('.' | ',', Some(p), Some(n)) => p.is_ascii_digit() && n.is_ascii_digit(),
                _ => false,
            }
        };
        if !keep {
            break;
        }
        end = i + c.len_utf8();
        prev = Some(c);
    }
    end
}

/// Distinct terms of one text, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSet {
    terms: Vec<String>,
}

impl TokenSet {
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn contains(&self, term: &str) -> bool {
        self.terms.iter().any(|t| t == term)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.terms
    }
}

impl<S: Into<String>> FromIterator<S> for TokenSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut seen = HashSet::new();
        let mut terms = Vec::new();
        for term in iter {
            let term = term.into();
            if seen.insert(term.clone()) {
                terms.push(term);
            }
        }
        TokenSet { terms }
    }
}

impl<'a> IntoIterator for &'a TokenSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}
