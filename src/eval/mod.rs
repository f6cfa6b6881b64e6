// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Evaluation glue: run files, paired-corpus batches, judgments.

pub mod judge;
pub mod pairs;
pub mod run_file;

pub use judge::{jaccard, precision_at_k, rankings_from_run, Qrels, Rankings};
pub use pairs::{score_pairs, score_pairs_with_progress, PairedCorpus, QaPair};
pub use run_file::{parse_run, run_lines, write_run, RunLine};
