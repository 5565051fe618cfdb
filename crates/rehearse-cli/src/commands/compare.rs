//! The `rehearse compare` command.

use std::path::PathBuf;

use anyhow::Result;

use rehearse_core::report::SessionReport;

pub fn execute(
    baseline_path: PathBuf,
    current_path: PathBuf,
    threshold: f64,
    fail_on_regression: bool,
    format: String,
) -> Result<()> {
    anyhow::ensure!(threshold >= 0.0, "threshold must not be negative");

    let baseline = SessionReport::load_json(&baseline_path)?;
    let current = SessionReport::load_json(&current_path)?;

    let report = current.compare(&baseline, threshold);

    match format.as_str() {
        "markdown" | "md" => {
            println!("{}", report.to_markdown());
        }
        "json" => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        _ => {
            println!(
                "Overall: {} -> {} ({:+})",
                report.baseline_overall,
                report.current_overall,
                i32::from(report.current_overall) - i32::from(report.baseline_overall)
            );
            println!(
                "Comparison: {} regressions, {} improvements, {} unchanged",
                report.regressions.len(),
                report.improvements.len(),
                report.unchanged
            );

            for (title, changes) in [
                ("Regressions", &report.regressions),
                ("Improvements", &report.improvements),
            ] {
                if changes.is_empty() {
                    continue;
                }
                println!("\n{title}:");
                for c in changes {
                    println!(
                        "  {} {} -> {} ({:+})",
                        c.key, c.baseline_score, c.current_score, c.delta
                    );
                }
            }

            if report.new_answers > 0 {
                println!("\n{} new answer(s)", report.new_answers);
            }
            if report.removed_answers > 0 {
                println!("{} removed answer(s)", report.removed_answers);
            }
        }
    }

    if fail_on_regression && report.has_regressions() {
        anyhow::bail!("{} regression(s) found", report.regressions.len());
    }

    Ok(())
}
