// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display for the alignqa CLI.
//!
//! OneDark on dark terminals, One Light on light ones. `ALIGNQA_THEME` picks
//! explicitly, otherwise `COLORFGBG` is consulted, otherwise dark. Colour is
//! only emitted when stdout is a TTY and `NO_COLOR` is unset, so piping a
//! ranking into a file gives plain text.

use std::sync::OnceLock;

use alignqa::{AlignmentResult, EmbeddingStore, RankedResult};

/// Width between the box borders.
pub const BOX_WIDTH: usize = 78;

/// Passage text longer than this is cut with an ellipsis.
const PASSAGE_PREVIEW: usize = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("ALIGNQA_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // "fg;bg": background 7 and up (except 8) is a light terminal
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(Ok(bg)) = colorfgbg.split(';').next_back().map(str::parse::<u8>) {
            if bg >= 7 && bg != 8 {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

/// Palette entry as (OneDark, One Light) RGB.
#[derive(Debug, Clone, Copy)]
pub struct Hue((u8, u8, u8), (u8, u8, u8));

pub const RED: Hue = Hue((224, 108, 117), (228, 86, 73));
pub const GREEN: Hue = Hue((152, 195, 121), (80, 161, 79));
pub const YELLOW: Hue = Hue((229, 192, 123), (193, 132, 1));
pub const BLUE: Hue = Hue((97, 175, 239), (64, 120, 242));
pub const CYAN: Hue = Hue((86, 182, 194), (1, 132, 188));
pub const GRAY: Hue = Hue((92, 99, 112), (160, 161, 167));

impl Hue {
    fn escape(self) -> String {
        let (r, g, b) = match theme() {
            Theme::Dark => self.0,
            Theme::Light => self.1,
        };
        format!("\x1b[38;2;{};{};{}m", r, g, b)
    }
}

pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Paint `text` when colours are on, with optional extra styles.
pub fn paint(hue: Hue, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), hue.escape(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Visible length, ignoring ANSI escapes.
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Cut `text` to at most `max` characters, ending in `…` when cut.
pub fn preview(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

fn border(s: &str) -> String {
    paint(GRAY, &[], s)
}

/// │ content          │
pub fn row(content: &str) {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content) + 1);
    println!("{} {}{}{}", border("│"), content, " ".repeat(pad), border("│"));
}

/// ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    section_edge('┌', '┐', label);
}

/// ├─ LABEL ──────────┤
pub fn section_mid(label: &str) {
    section_edge('├', '┤', label);
}

/// └──────────────────┘
pub fn section_bot() {
    println!("{}", border(&format!("└{}┘", "─".repeat(BOX_WIDTH))));
}

fn section_edge(left: char, right: char, label: &str) {
    let label = paint(CYAN, &[BOLD], label);
    let rule = BOX_WIDTH.saturating_sub(visible_len(&label) + 3);
    println!(
        "{}{} {}",
        border(&format!("{}─", left)),
        label,
        border(&format!("{}{}", "─".repeat(rule), right))
    );
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Alignment scores are ≤ 0: the closer to 0 the greener.
pub fn score_value(score: f64) -> String {
    let text = format!("{:>10.4}", score);
    if score.is_nan() {
        paint(GRAY, &[], &text)
    } else if score >= -1.0 {
        paint(GREEN, &[BOLD], &text)
    } else if score >= -5.0 {
        paint(YELLOW, &[], &text)
    } else {
        paint(RED, &[], &text)
    }
}

pub fn print_ranking(question_id: &str, question: &str, ranked: &RankedResult) {
    section_top(&format!("{} {}", question_id, preview(question, 50)));
    if ranked.is_empty() {
        row(&paint(GRAY, &[DIM], "no scorable candidates"));
    }
    for (rank, passage) in ranked.iter().enumerate() {
        row(&format!(
            "{:>3}  {}  {:<10} {}",
            rank + 1,
            score_value(passage.score),
            preview(&passage.id, 10),
            preview(&passage.text, PASSAGE_PREVIEW - 12)
        ));
    }
    section_bot();
}

pub fn print_failure(question_id: &str, error: &str) {
    println!(
        "{} {} {}",
        paint(RED, &[BOLD], "✗"),
        question_id,
        paint(GRAY, &[], error)
    );
}

pub fn print_store_summary(path: &str, store: &EmbeddingStore) {
    section_top("EMBEDDINGS");
    row(&format!("{:<12}{}", "file", path));
    row(&format!("{:<12}{}", "terms", store.len()));
    row(&format!("{:<12}{}", "dimension", store.dimension()));
    let unk = if store.has_unk() {
        paint(GREEN, &[], "present")
    } else {
        paint(YELLOW, &[], "missing (OOV terms that match nothing go unresolved)")
    };
    row(&format!("{:<12}{}", "unk vector", unk));
    section_bot();
}

pub fn print_alignment(result: &AlignmentResult) {
    section_top("ALIGNMENT");
    row(&paint(
        GRAY,
        &[DIM],
        &format!("{:<24}{:>12}{:>10}{:>14}", "term", "min dist", "weight", "contribution"),
    ));
    for term in &result.terms {
        let min = match term.min_distance {
            Some(d) => format!("{:>12.4}", d),
            None => paint(YELLOW, &[], &format!("{:>12}", "unresolved")),
        };
        row(&format!(
            "{:<24}{}{:>10.3}{:>14.4}",
            preview(&term.term, 23),
            min,
            term.weight,
            term.contribution()
        ));
    }
    section_mid("TOTAL");
    row(&format!("distance {:.4}   score {}", result.distance, score_value(result.score())));
    section_bot();
}

pub fn print_precision(k: usize, precision: f64, judged_queries: usize) {
    println!(
        "{} {}  ({} judged queries)",
        paint(BLUE, &[BOLD], &format!("P@{}", k)),
        paint(GREEN, &[BOLD], &format!("{:.4}", precision)),
        judged_queries
    );
}
