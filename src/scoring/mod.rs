// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how candidate passages get their numbers.
//!
//! Two strategies, one convention: a higher score is a better answer.
//! Alignment scoring reports a negated distance (so the best possible score
//! is 0), IDF overlap reports a positive sum. Never mix the two in one
//! ranking.

pub mod alignment;
pub mod overlap;
pub mod ranking;
pub mod strategy;

pub use alignment::*;
pub use overlap::*;
pub use ranking::*;
pub use strategy::*;
