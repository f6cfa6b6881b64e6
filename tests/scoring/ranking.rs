//! Top-k extraction over real scores.

use alignqa::eval::run_lines;
use alignqa::{extract_top_k, ScoredPassage};

use crate::common::{alignment_scorer, token_set};

fn scored(entries: &[(&str, f64)]) -> Vec<ScoredPassage> {
    entries
        .iter()
        .map(|&(id, score)| ScoredPassage::new(id, id, score))
        .collect()
}

fn ids(passages: &[ScoredPassage]) -> Vec<&str> {
    passages.iter().map(|p| p.id.as_str()).collect()
}

#[test]
fn test_rank_by_alignment_score() {
    let scorer = alignment_scorer();
    let question = token_set(&["capital", "france"]);
    let candidates = [
        ("berlin", vec!["berlin", "germany"]),
        ("paris", vec!["paris", "france"]),
        ("city", vec!["city"]),
    ];
    let passages: Vec<ScoredPassage> = candidates
        .iter()
        .map(|(id, terms)| {
            let score = scorer.score(&question, &token_set(terms)).unwrap();
            ScoredPassage::new(*id, terms.join(" "), score)
        })
        .collect();

    let top = extract_top_k(passages, 2);
    assert_eq!(ids(top.as_slice()), vec!["paris", "city"]);
}

#[test]
fn test_k_beyond_length_keeps_everything_sorted() {
    let top = extract_top_k(scored(&[("a", -2.0), ("b", -1.0), ("c", -2.0), ("d", 0.0)]), 10);
    assert_eq!(ids(top.as_slice()), vec!["d", "b", "a", "c"]);
}

#[test]
fn test_rerank_is_identical() {
    let first = extract_top_k(scored(&[("a", -3.0), ("b", -1.0), ("c", -1.0)]), 2);
    let second = extract_top_k(first.clone().into_vec(), 2);
    assert_eq!(first, second);
}

#[test]
fn test_run_lines_follow_ranking() {
    let candidates = scored(&[("a", -3.5), ("b", -1.25)])
        .into_iter()
        .enumerate()
        .map(|(i, p)| p.with_position(i))
        .collect();
    let top = extract_top_k(candidates, 2);
    let lines: Vec<String> = run_lines(&top, "Q7", "wmd")
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(lines, vec!["Q7 0 1 0 -1.25 wmd", "Q7 0 0 0 -3.5 wmd"]);
}
