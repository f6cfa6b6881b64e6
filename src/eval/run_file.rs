// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Run files in the whitespace-delimited layout IR evaluation tools read:
//!
//! ```text
//! <queryId> 0 <rank> 0 <score> <runTag>
//! 32.1 0 0 0 -0.62 alignqa
//! ```
//!
//! The rank column is the candidate's position within its question's
//! candidate list, which is also the document id the qrels refer to. Line
//! order and score carry the ranking.

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use crate::error::QaError;
use crate::scoring::RankedResult;

/// One line of a run file.
#[derive(Debug, Clone, PartialEq)]
pub struct RunLine {
    pub query_id: String,
    pub rank: usize,
    pub score: f64,
    pub run_tag: String,
}

impl RunLine {
    pub fn new(
        query_id: impl Into<String>,
        rank: usize,
        score: f64,
        run_tag: impl Into<String>,
    ) -> Self {
        RunLine {
            query_id: query_id.into(),
            rank,
            score,
            run_tag: run_tag.into(),
        }
    }
}

impl fmt::Display for RunLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} 0 {} 0 {} {}",
            self.query_id, self.rank, self.score, self.run_tag
        )
    }
}

impl FromStr for RunLine {
    type Err = QaError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        let [query_id, _, rank, _, score, run_tag] = fields[..] else {
            return Err(QaError::Config(format!(
                "run line needs 6 fields, found {}: '{}'",
                fields.len(),
                line
            )));
        };
        let rank: usize = rank
            .parse()
            .map_err(|_| QaError::Config(format!("bad rank '{}' in run line", rank)))?;
        let score: f64 = score
            .parse()
            .map_err(|_| QaError::Config(format!("bad score '{}' in run line", score)))?;
        Ok(RunLine::new(query_id, rank, score, run_tag))
    }
}

/// One run-file line per ranked passage, best first.
///
/// The rank column holds each passage's candidate position, so the lines of a
/// reranked query still name the candidates they score.
pub fn run_lines(ranked: &RankedResult, query_id: &str, run_tag: &str) -> Vec<RunLine> {
    ranked
        .iter()
        .map(|p| RunLine::new(query_id, p.position, p.score, run_tag))
        .collect()
}

/// Parse a whole run file, ignoring blank lines.
pub fn parse_run(text: &str) -> crate::error::Result<Vec<RunLine>> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::parse)
        .collect()
}

/// Write `lines`, one per line.
pub fn write_run<'a, W, I>(mut out: W, lines: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a RunLine>,
{
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    out.flush()
}
