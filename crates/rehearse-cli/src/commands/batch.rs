//! The `rehearse batch` command.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;

use rehearse_core::engine::{BatchEngine, BatchEngineConfig, ProgressReporter};
use rehearse_core::model::Evaluation;
use rehearse_core::parser;
use rehearse_core::report::SessionReport;
use rehearse_providers::config::{build_evaluator, load_config_from};
use rehearse_report::html::write_html_report;

/// Console progress reporter.
struct ConsoleReporter;

impl ProgressReporter for ConsoleReporter {
    fn on_answer_complete(&self, index: usize, evaluation: &Evaluation) {
        eprintln!(
            "  Scored answer #{}: overall {} ({} words)",
            index + 1,
            evaluation.scores.overall,
            evaluation.word_count
        );
    }

    fn on_batch_complete(&self, total: usize, elapsed: Duration) {
        eprintln!(
            "\nComplete: {total} answer(s) scored ({:.2}s)",
            elapsed.as_secs_f64()
        );
    }
}

pub async fn execute(
    input: PathBuf,
    questions: Option<PathBuf>,
    output: PathBuf,
    format: String,
    parallelism: Option<usize>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let parallelism = parallelism.unwrap_or(config.parallelism);
    anyhow::ensure!(parallelism >= 1, "parallelism must be at least 1");

    let formats: Vec<&str> = if format == "all" {
        vec!["json", "html"]
    } else {
        format.split(',').map(str::trim).collect()
    };
    if let Some(bad) = formats.iter().find(|f| !matches!(**f, "json" | "html")) {
        anyhow::bail!("unknown format: {bad} (expected json, html, or all)");
    }

    let bank = questions
        .as_deref()
        .map(parser::load_questions)
        .transpose()?;
    let sheet = parser::load_answers(&input, bank.as_ref())?;
    anyhow::ensure!(
        !sheet.answers.is_empty(),
        "no answers to evaluate in {}",
        input.display()
    );

    let evaluator = build_evaluator(&config)?;
    eprintln!(
        "rehearse v{} - Scoring {} answer(s) from '{}' with the {} provider",
        env!("CARGO_PKG_VERSION"),
        sheet.answers.len(),
        sheet.name,
        evaluator.provider_name()
    );
    eprintln!();

    let engine = BatchEngine::new(evaluator, BatchEngineConfig { parallelism });
    let outcome = engine.run(&sheet.answers, &ConsoleReporter).await?;
    let report = SessionReport::new(sheet.name, sheet.answers, outcome)?;

    print_summary(&report);

    std::fs::create_dir_all(&output)?;
    let timestamp = report.created_at.format("%Y-%m-%dT%H%M%S");

    for fmt in &formats {
        match *fmt {
            "json" => {
                let path = output.join(format!("session-{timestamp}.json"));
                report.save_json(&path)?;
                eprintln!("Results saved to: {}", path.display());
            }
            "html" => {
                let path = output.join(format!("session-{timestamp}.html"));
                write_html_report(&report, &path)?;
                eprintln!("HTML report: {}", path.display());
            }
            _ => {}
        }
    }

    Ok(())
}

fn print_summary(report: &SessionReport) {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec![
        "#",
        "Question",
        "Relevance",
        "Clarity",
        "Completeness",
        "Confidence",
        "Overall",
    ]);

    for (i, scored) in report.answers.iter().enumerate() {
        let s = &scored.evaluation.scores;
        let question = match (&scored.question, scored.question_id) {
            (Some(q), _) => truncate(q, 48),
            (None, Some(id)) => format!("Q{id}"),
            (None, None) => "-".to_string(),
        };
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(question),
            Cell::new(s.relevance),
            Cell::new(s.clarity),
            Cell::new(s.completeness),
            Cell::new(s.confidence),
            Cell::new(s.overall),
        ]);
    }

    let summary = &report.summary;
    let avg = &summary.average_scores;
    table.add_row(vec![
        Cell::new(""),
        Cell::new("Session average"),
        Cell::new(avg.relevance),
        Cell::new(avg.clarity),
        Cell::new(avg.completeness),
        Cell::new(avg.confidence),
        Cell::new(summary.overall_score),
    ]);

    eprintln!("\n{table}");

    eprintln!("\nStrengths:");
    for item in &summary.strengths {
        eprintln!("  + {item}");
    }
    eprintln!("Improvements:");
    for item in &summary.improvements {
        eprintln!("  - {item}");
    }
    eprintln!();
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_chars - 3).collect();
        format!("{head}...")
    }
}
