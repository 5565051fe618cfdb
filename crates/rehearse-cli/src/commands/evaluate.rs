//! The `rehearse evaluate` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use rehearse_core::model::{Answer, AnswerRequest, Evaluation};
use rehearse_core::tokenizer::word_count;
use rehearse_providers::config::{build_evaluator, load_config_from};

pub fn execute(
    answer: Option<String>,
    answer_file: Option<PathBuf>,
    keywords: Option<String>,
    ideal_word_count: Option<u32>,
    format: String,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let evaluator = build_evaluator(&config)?;

    let text = match (answer, answer_file) {
        (Some(text), _) => Some(text),
        (None, Some(path)) => Some(
            std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read answer file: {}", path.display()))?,
        ),
        (None, None) => None,
    };

    let keywords = keywords.map(|k| {
        k.split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
    });

    let answer = Answer::try_from(AnswerRequest {
        answer: text,
        keywords,
        ideal_word_count: ideal_word_count
            .filter(|&n| n > 0)
            .or(Some(config.ideal_word_count)),
    })?;

    tracing::debug!(
        provider = evaluator.provider_name(),
        words = word_count(&answer.text),
        "evaluating single answer"
    );
    let evaluation = evaluator.evaluate_answer(&answer);

    match format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&evaluation)?),
        "text" => print_evaluation(&evaluation),
        other => anyhow::bail!("unknown format: {other} (expected text or json)"),
    }

    Ok(())
}

fn print_evaluation(evaluation: &Evaluation) {
    use comfy_table::{Cell, Table};

    let s = &evaluation.scores;
    let mut table = Table::new();
    table.set_header(vec![
        "Relevance",
        "Clarity",
        "Completeness",
        "Confidence",
        "Overall",
    ]);
    table.add_row(vec![
        Cell::new(s.relevance),
        Cell::new(s.clarity),
        Cell::new(s.completeness),
        Cell::new(s.confidence),
        Cell::new(s.overall),
    ]);
    println!("{table}");

    println!("\n{}", evaluation.feedback);

    if !evaluation.keyword_matches.is_empty() {
        let (found, missing): (Vec<_>, Vec<_>) =
            evaluation.keyword_matches.iter().partition(|m| m.found);
        let names = |v: &[&rehearse_core::model::KeywordMatch]| {
            v.iter().map(|m| m.keyword.as_str()).collect::<Vec<_>>().join(", ")
        };
        println!("\nKeywords found:   {}", names(&found));
        println!("Keywords missing: {}", names(&missing));
    }

    println!("\nStrengths:");
    for item in &evaluation.strengths {
        println!("  + {item}");
    }
    println!("\nImprovements:");
    for item in &evaluation.improvements {
        println!("  - {item}");
    }

    println!(
        "\n{} words | sentiment {:+} ({:.2} per word)",
        evaluation.word_count, evaluation.sentiment.score, evaluation.sentiment.comparative
    );
}
