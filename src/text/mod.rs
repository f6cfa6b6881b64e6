// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turning raw text into terms.
//!
//! The question and every candidate passage of one query must go through the
//! same `Tokenizer`. Distances between terms tokenized under different
//! policies are not comparable, so the pipeline owns exactly one tokenizer.

pub mod normalize;
pub mod stopwords;
pub mod tokenizer;

pub use normalize::normalize_term;
pub use stopwords::Stopwords;
pub use tokenizer::*;
