// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the alignqa command-line interface.
//!
//! Four subcommands: `score-pairs` scores a paired corpus into a run file,
//! `answer` ranks recorded retrieval results for a topics file, `inspect`
//! looks inside an embedding dictionary (and optionally explains one
//! alignment), and `judge` computes precision at k for a run.
//!
//! Flags override whatever `--config` loaded.

pub mod display;

use std::path::PathBuf;

use alignqa::{QaConfig, ScorerKind, TokenizerConfig, TokenizerMode};
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "alignqa",
    about = "Embedding alignment scoring and passage ranking for question answering",
    version
)]
pub struct Cli {
    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// JSON config file; flags override its values
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score every (question, answer) pair of a corpus into a run file
    ScorePairs {
        /// Directory holding a.toks, b.toks and id.txt
        #[arg(long)]
        corpus: PathBuf,

        /// Run file to write
        #[arg(short, long)]
        output: PathBuf,

        /// Restart ranks whenever the question id changes (WikiQA layout)
        #[arg(long)]
        reset_rank_per_query: bool,

        #[command(flatten)]
        scoring: ScoringArgs,
    },

    /// Rank recorded retrieval results for each question of a topics file
    Answer {
        /// Topics file, one `<id>\t<question>` per line
        #[arg(long)]
        topics: PathBuf,

        /// Recorded retrieval results (JSON, query text → passages)
        #[arg(long)]
        retrieval: PathBuf,

        /// Passages kept per question
        #[arg(short = 'k', long)]
        top_k: Option<usize>,

        /// Candidates requested per question
        #[arg(long)]
        hits: Option<usize>,

        /// Also write the rankings as a run file
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        scoring: ScoringArgs,
    },

    /// Summarize an embedding dictionary
    Inspect {
        /// Embedding dictionary
        embeddings: PathBuf,

        /// Explain the alignment of this question...
        #[arg(long, requires = "passage")]
        question: Option<String>,

        /// ...against this passage
        #[arg(long, requires = "question")]
        passage: Option<String>,

        /// Tokenizer mode for --question/--passage
        #[arg(long, value_enum)]
        tokenizer: Option<TokenizerMode>,
    },

    /// Precision at k of a run file against relevance judgments
    Judge {
        /// Run file (`<qid> 0 <rank> 0 <score> <tag>`)
        run: PathBuf,

        /// Qrels file (`<qid> 0 <docid> <label>`)
        #[arg(long)]
        qrels: PathBuf,

        /// Cutoff
        #[arg(short, long, default_value = "1")]
        k: usize,
    },
}

/// Resources and scoring knobs shared by the scoring subcommands.
#[derive(Args, Debug, Clone, Default)]
pub struct ScoringArgs {
    /// Embedding dictionary (tab-separated, header line first)
    #[arg(short, long)]
    pub embeddings: Option<PathBuf>,

    /// Document frequency table (JSON `{ total_docs, doc_freqs }`)
    #[arg(long)]
    pub idf_table: Option<PathBuf>,

    /// Scoring strategy
    #[arg(long, value_enum)]
    pub scorer: Option<ScorerKind>,

    /// Weight alignment distances by IDF (needs --idf-table)
    #[arg(long)]
    pub idf: bool,

    /// Tokenizer mode
    #[arg(long, value_enum)]
    pub tokenizer: Option<TokenizerMode>,

    /// Also emit the parts of hyphenated tokens
    #[arg(long)]
    pub split_hyphenated: bool,

    /// Keep stop words in linguistic mode
    #[arg(long)]
    pub keep_stopwords: bool,

    /// Stop word list (default: bundled English list)
    #[arg(long)]
    pub stopwords: Option<PathBuf>,

    /// Tag written in the last run-file column
    #[arg(long)]
    pub run_tag: Option<String>,
}

impl ScoringArgs {
    /// Fold the flags that were given into `config`.
    pub fn apply(&self, config: &mut QaConfig) {
        if let Some(scorer) = self.scorer {
            config.scorer = scorer;
        }
        if self.idf {
            config.idf_weighting = true;
        }
        if let Some(mode) = self.tokenizer {
            apply_tokenizer_mode(&mut config.tokenizer, mode);
        }
        if self.split_hyphenated {
            config.tokenizer.split_hyphenated = true;
        }
        if self.keep_stopwords {
            config.tokenizer.remove_stopwords = false;
        }
        if let Some(path) = &self.stopwords {
            config.stopwords = Some(path.clone());
        }
        if let Some(tag) = &self.run_tag {
            config.run_tag = tag.clone();
        }
    }
}

/// Switch the mode only; stop word and hyphen settings from the config stay.
pub fn apply_tokenizer_mode(tokenizer: &mut TokenizerConfig, mode: TokenizerMode) {
    *tokenizer = tokenizer.with_mode(mode);
}
