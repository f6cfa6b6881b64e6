// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Case folding for linguistic tokens.
//!
//! This works on a single token after segmentation. Whitespace handling is
//! the segmenter's job, so unlike a whole-text normalizer nothing here trims
//! or collapses spaces, and the result stays a valid dictionary key.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Fold a token for dictionary lookup: lowercase and strip diacritics.
///
/// - "Café" → "cafe"
/// - "naïve" → "naive"
///
/// With the `unicode-normalization` feature the token is NFD-decomposed and
/// combining marks are dropped before lowercasing. Without it this is plain
/// lowercasing, which is fine for ASCII dictionaries.
#[cfg(feature = "unicode-normalization")]
pub fn normalize_term(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

#[cfg(not(feature = "unicode-normalization"))]
pub fn normalize_term(value: &str) -> String {
    value.to_lowercase()
}

/// Combining diacritical marks (Unicode category Mn, the Latin-script ranges).
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1AB0}'..='\u{1AFF}' |  // Combining Diacritical Marks Extended
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}
