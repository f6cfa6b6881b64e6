//! Answering questions over recorded retrieval results.

use std::fs::{self, File};
use std::sync::Arc;

use alignqa::eval::{parse_run, rankings_from_run, run_lines, write_run};
use alignqa::{
    precision_at_k, AlignmentScorer, EmbeddingStore, PassageScorer, QaConfig, QaError,
    QaPipeline, Qrels, Question, StaticRetriever, TokenizerMode,
};

use crate::common::{alignment_scorer, passage, whitespace_tokenizer, write_dictionary};

const RETRIEVAL_JSON: &str = r#"{
  "What is the capital of France?": [
    {"id": "d3", "text": "Berlin is the capital of Germany.", "retrievalScore": 9.1},
    {"id": "d1", "text": "Paris is the capital of France.", "retrievalScore": 8.7},
    {"id": "d2", "text": "...", "retrievalScore": 1.0},
    {"id": "d4", "text": "Paris, France.", "retrievalScore": 0.5}
  ],
  "Where is Berlin?": [
    {"id": "d3", "text": "Berlin is the capital of Germany.", "retrievalScore": 4.0}
  ]
}"#;

const TOPICS: &str = "q1\tWhat is the capital of France?\nq2\tWhere is Berlin?\nq3\tWho?\n";

fn linguistic_pipeline(top_k: usize) -> (tempfile::TempDir, QaPipeline) {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.json");
    fs::write(
        &config_path,
        format!(
            r#"{{"tokenizer": {{"mode": "linguistic", "removeStopwords": true}}, "topK": {}}}"#,
            top_k
        ),
    )
    .unwrap();
    let config = QaConfig::from_path(&config_path).unwrap();
    assert_eq!(config.tokenizer.mode, TokenizerMode::Linguistic);

    let store = Arc::new(EmbeddingStore::load(write_dictionary(dir.path())).unwrap());
    let scorer = PassageScorer::from_kind(config.scorer, Some(store), None, false).unwrap();
    let pipeline = QaPipeline::new(config.build_tokenizer().unwrap(), scorer, config.top_k);
    (dir, pipeline)
}

#[test]
fn test_answer_reranks_retrieval() {
    let (_dir, pipeline) = linguistic_pipeline(2);
    let retriever: StaticRetriever = serde_json::from_str(RETRIEVAL_JSON).unwrap();

    let ranked = pipeline
        .answer(&retriever, "What is the capital of France?", 100)
        .unwrap();
    let ids: Vec<&str> = ranked.iter().map(|p| p.id.as_str()).collect();
    // d2 has no terms and is skipped; d1 aligns exactly, d4 misses by 1
    assert_eq!(ids, vec!["d1", "d4"]);
    assert_eq!(ranked.best().map(|p| p.score), Some(0.0));
}

#[test]
fn test_hits_limits_candidates() {
    let (_dir, pipeline) = linguistic_pipeline(5);
    let retriever: StaticRetriever = serde_json::from_str(RETRIEVAL_JSON).unwrap();
    let ranked = pipeline
        .answer(&retriever, "What is the capital of France?", 1)
        .unwrap();
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked.as_slice()[0].id, "d3");
}

#[test]
fn test_batch_over_topics_file() {
    let (dir, pipeline) = linguistic_pipeline(1);
    let retrieval_path = dir.path().join("retrieval.json");
    let topics_path = dir.path().join("topics.tsv");
    fs::write(&retrieval_path, RETRIEVAL_JSON).unwrap();
    fs::write(&topics_path, TOPICS).unwrap();

    let retriever = StaticRetriever::from_path(&retrieval_path).unwrap();
    let questions = Question::load_topics(&topics_path).unwrap();
    let outcomes = pipeline.answer_batch(&retriever, &questions, 100);

    assert_eq!(outcomes.len(), 3);
    let best: Vec<Option<String>> = outcomes
        .iter()
        .map(|o| {
            o.result
                .as_ref()
                .ok()
                .and_then(|r| r.best().map(|p| p.id.clone()))
        })
        .collect();
    assert_eq!(best, vec![Some("d1".into()), Some("d3".into()), None]);
    assert!(matches!(
        outcomes[2].result,
        Err(QaError::RetrievalUnavailable { .. })
    ));
}

#[test]
fn test_run_lines_for_answers() {
    let pipeline = QaPipeline::new(whitespace_tokenizer(), alignment_scorer().into(), 2);
    let ranked = pipeline
        .rank(
            "paris",
            &[passage("a", "berlin"), passage("b", "paris"), passage("c", "france")],
        )
        .unwrap();
    let lines: Vec<String> = run_lines(&ranked, "7", "alignqa")
        .iter()
        .map(ToString::to_string)
        .collect();
    // rank column names the candidate: b is position 1, c is position 2
    assert_eq!(lines, vec!["7 0 1 0 0 alignqa", "7 0 2 0 -1 alignqa"]);
}

#[test]
fn test_answer_run_judges_reranked_candidates() {
    let dir = tempfile::tempdir().unwrap();
    let pipeline = QaPipeline::new(whitespace_tokenizer(), alignment_scorer().into(), 2);
    let ranked = pipeline
        .rank(
            "capital france",
            &[passage("0", "berlin germany"), passage("1", "paris france")],
        )
        .unwrap();
    assert_eq!(ranked.best().map(|p| p.id.as_str()), Some("1"));

    let run_path = dir.path().join("run.txt");
    write_run(
        File::create(&run_path).unwrap(),
        &run_lines(&ranked, "q1", "t"),
    )
    .unwrap();
    let text = fs::read_to_string(&run_path).unwrap();
    assert!(text.starts_with("q1 0 1 0 "));

    let rankings = rankings_from_run(&parse_run(&text).unwrap());
    assert_eq!(rankings["q1"], vec!["1", "0"]);
    let qrels = Qrels::parse("q1 0 1 1\nq1 0 0 0\n").unwrap();
    assert_eq!(precision_at_k(&qrels, &rankings, 1), 1.0);
}

#[test]
fn test_pipeline_is_shareable_across_threads() {
    let pipeline = Arc::new(QaPipeline::new(
        whitespace_tokenizer(),
        AlignmentScorer::new(Arc::new(crate::common::geography_store())).into(),
        1,
    ));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let pipeline = Arc::clone(&pipeline);
            std::thread::spawn(move || {
                pipeline
                    .rank("capital", &[passage("x", "city"), passage("y", "berlin")])
                    .map(|r| r.best().map(|p| p.id.clone()))
            })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap().unwrap(), Some("x".to_string()));
    }
}
