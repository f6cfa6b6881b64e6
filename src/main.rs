// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::sync::Arc;

use alignqa::eval::{parse_run, rankings_from_run, run_lines, write_run};
use alignqa::{
    precision_at_k, CorpusFrequencies, EmbeddingStore, PairedCorpus, PassageScorer, QaConfig,
    QaPipeline, Qrels, Question, StaticRetriever, TermIdfIndex,
};
use anyhow::{Context, Result};
use clap::Parser;
#[cfg(feature = "parallel")]
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

mod cli;
use cli::{display, Cli, Commands, ScoringArgs};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    let mut config = match &cli.config {
        Some(path) => QaConfig::from_path(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => QaConfig::default(),
    };

    match cli.command {
        Commands::ScorePairs {
            corpus,
            output,
            reset_rank_per_query,
            scoring,
        } => {
            scoring.apply(&mut config);
            config.reset_rank_per_query |= reset_rank_per_query;
            run_score_pairs(&config, &scoring, &corpus, &output)
        }
        Commands::Answer {
            topics,
            retrieval,
            top_k,
            hits,
            output,
            scoring,
        } => {
            scoring.apply(&mut config);
            if let Some(k) = top_k {
                config.top_k = k;
            }
            if let Some(hits) = hits {
                config.hits = hits;
            }
            run_answer(&config, &scoring, &topics, &retrieval, output.as_deref())
        }
        Commands::Inspect {
            embeddings,
            question,
            passage,
            tokenizer,
        } => {
            if let Some(mode) = tokenizer {
                cli::apply_tokenizer_mode(&mut config.tokenizer, mode);
            }
            run_inspect(&config, &embeddings, question.as_deref(), passage.as_deref())
        }
        Commands::Judge { run, qrels, k } => run_judge(&run, &qrels, k),
    }
}

/// Load whatever the selected strategy needs and build the scorer.
fn load_scorer(config: &QaConfig, scoring: &ScoringArgs) -> Result<PassageScorer> {
    config.validate()?;
    let store = scoring
        .embeddings
        .as_ref()
        .map(|path| {
            EmbeddingStore::load(path)
                .with_context(|| format!("Failed to load embeddings {}", path.display()))
        })
        .transpose()?
        .map(Arc::new);
    let idf = scoring
        .idf_table
        .as_ref()
        .map(|path| {
            CorpusFrequencies::from_path(path)
                .with_context(|| format!("Failed to load IDF table {}", path.display()))
        })
        .transpose()?
        .map(|table| Arc::new(TermIdfIndex::new(table)));

    Ok(PassageScorer::from_kind(
        config.scorer,
        store,
        idf,
        config.idf_weighting,
    )?)
}

fn run_score_pairs(
    config: &QaConfig,
    scoring: &ScoringArgs,
    corpus_dir: &Path,
    output: &Path,
) -> Result<()> {
    let scorer = load_scorer(config, scoring)?;
    let tokenizer = config.build_tokenizer()?;
    let corpus = PairedCorpus::load(corpus_dir)
        .with_context(|| format!("Failed to read corpus {}", corpus_dir.display()))?;

    #[cfg(feature = "parallel")]
    let lines = {
        let pb = ProgressBar::new(corpus.len() as u64);
        pb.set_style(progress_style());
        pb.set_prefix("Scoring");
        let lines = alignqa::eval::score_pairs_with_progress(
            &tokenizer,
            &scorer,
            &corpus,
            &config.run_tag,
            config.reset_rank_per_query,
            || pb.inc(1),
        );
        pb.finish_with_message(format!("{} pairs", lines.len()));
        lines
    };
    #[cfg(not(feature = "parallel"))]
    let lines = alignqa::score_pairs(
        &tokenizer,
        &scorer,
        &corpus,
        &config.run_tag,
        config.reset_rank_per_query,
    );

    let file = File::create(output)
        .with_context(|| format!("Failed to create {}", output.display()))?;
    write_run(BufWriter::new(file), &lines)?;
    info!(path = %output.display(), lines = lines.len(), "wrote run file");
    Ok(())
}

fn run_answer(
    config: &QaConfig,
    scoring: &ScoringArgs,
    topics: &Path,
    retrieval: &Path,
    output: Option<&Path>,
) -> Result<()> {
    let scorer = load_scorer(config, scoring)?;
    let pipeline = QaPipeline::new(config.build_tokenizer()?, scorer, config.top_k);
    let questions = Question::load_topics(topics)
        .with_context(|| format!("Failed to read topics {}", topics.display()))?;
    let retriever = StaticRetriever::from_path(retrieval)
        .with_context(|| format!("Failed to read retrieval runs {}", retrieval.display()))?;

    let outcomes = pipeline.answer_batch(&retriever, &questions, config.hits);

    let mut lines = Vec::new();
    let mut failed = 0;
    for outcome in &outcomes {
        match &outcome.result {
            Ok(ranked) => {
                display::print_ranking(&outcome.question.id, &outcome.question.text, ranked);
                lines.extend(run_lines(ranked, &outcome.question.id, &config.run_tag));
            }
            Err(e) => {
                display::print_failure(&outcome.question.id, &e.to_string());
                failed += 1;
            }
        }
    }
    if failed > 0 {
        warn!(failed, total = outcomes.len(), "some questions could not be answered");
    }

    if let Some(path) = output {
        let file =
            File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
        write_run(BufWriter::new(file), &lines)?;
        info!(path = %path.display(), lines = lines.len(), "wrote run file");
    }
    Ok(())
}

fn run_inspect(
    config: &QaConfig,
    embeddings: &Path,
    question: Option<&str>,
    passage: Option<&str>,
) -> Result<()> {
    let store = Arc::new(
        EmbeddingStore::load(embeddings)
            .with_context(|| format!("Failed to load embeddings {}", embeddings.display()))?,
    );
    display::print_store_summary(&embeddings.display().to_string(), &store);

    if let (Some(question), Some(passage)) = (question, passage) {
        let tokenizer = config.build_tokenizer()?;
        let scorer = alignqa::AlignmentScorer::new(store);
        let result = scorer.align(&tokenizer.token_set(question), &tokenizer.token_set(passage))?;
        display::print_alignment(&result);
    }
    Ok(())
}

fn run_judge(run: &Path, qrels: &Path, k: usize) -> Result<()> {
    let text = std::fs::read_to_string(run)
        .with_context(|| format!("Failed to read run {}", run.display()))?;
    let rankings = rankings_from_run(&parse_run(&text)?);
    let qrels = Qrels::from_path(qrels)
        .with_context(|| format!("Failed to read qrels {}", qrels.display()))?;

    let judged = rankings.keys().filter(|qid| qrels.has_query(qid)).count();
    display::print_precision(k, precision_at_k(&qrels, &rankings, k), judged);
    Ok(())
}

#[cfg(feature = "parallel")]
fn progress_style() -> ProgressStyle {
    ProgressStyle::with_template(
        "{spinner:.cyan} {prefix:<12} [{bar:40.cyan/dim}] {pos}/{len} {msg}",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar())
    .progress_chars("━━╸")
}
