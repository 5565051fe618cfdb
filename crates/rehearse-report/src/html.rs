//! HTML feedback page generator.
//!
//! Produces a self-contained HTML file with all CSS/JS inlined.

use anyhow::{Context, Result};
use std::path::Path;

use rehearse_core::model::{AverageScores, DimensionScores, Evaluation};
use rehearse_core::report::{ScoredAnswer, SessionReport};

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// CSS class for a 0-100 score.
fn score_class(score: u8) -> &'static str {
    if score >= 75 {
        "good"
    } else if score >= 50 {
        "fair"
    } else {
        "weak"
    }
}

/// Generate the feedback page for a session report.
pub fn generate_html(report: &SessionReport) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!(
        "<title>rehearse feedback - {}</title>\n",
        html_escape(&report.session.name)
    ));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    // Header
    html.push_str("<header>\n");
    html.push_str("<h1>Interview practice feedback</h1>\n");
    html.push_str(&format!(
        "<p class=\"meta\">Session: <strong>{}</strong> | {} answers | {}</p>\n",
        html_escape(&report.session.name),
        report.session.answer_count,
        report.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    html.push_str("</header>\n");

    // Summary
    let summary = &report.summary;
    html.push_str("<section class=\"dashboard\">\n");
    html.push_str("<h2>Summary</h2>\n");
    html.push_str(&format!(
        "<p class=\"overall {}\">Overall score: <strong>{}</strong>/100</p>\n",
        score_class(summary.overall_score),
        summary.overall_score
    ));

    html.push_str("<table class=\"summary\">\n");
    html.push_str("<thead><tr><th>Dimension</th><th>Average</th></tr></thead>\n");
    html.push_str("<tbody>\n");
    for (label, score) in dimensions(&summary.average_scores) {
        html.push_str(&format!(
            "<tr><td>{label}</td><td class=\"{}\">{score}</td></tr>\n",
            score_class(score)
        ));
    }
    html.push_str("</tbody></table>\n");
    html.push_str(&generate_bar_chart(&dimensions(&summary.average_scores)));

    html.push_str("<div class=\"lists\">\n");
    push_list(&mut html, "Strengths", &summary.strengths);
    push_list(&mut html, "Areas to improve", &summary.improvements);
    html.push_str("</div>\n");
    html.push_str("</section>\n");

    // Per-answer cards
    html.push_str("<section class=\"answers\">\n");
    html.push_str("<h2>Answers</h2>\n");
    for (i, scored) in report.answers.iter().enumerate() {
        push_answer_card(&mut html, i + 1, scored);
    }
    html.push_str("</section>\n");

    // Raw JSON
    html.push_str("<section class=\"raw-data\">\n");
    html.push_str("<details>\n<summary>Raw JSON Data</summary>\n");
    html.push_str("<pre><code>");
    html.push_str(
        &serde_json::to_string_pretty(report)
            .unwrap_or_default()
            .replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;"),
    );
    html.push_str("</code></pre>\n");
    html.push_str("</details>\n</section>\n");

    html.push_str("<script>\n");
    html.push_str(JS);
    html.push_str("</script>\n");

    html.push_str("</body>\n</html>");
    html
}

/// Write the feedback page to a file.
pub fn write_html_report(report: &SessionReport, path: &Path) -> Result<()> {
    let html = generate_html(report);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)
        .with_context(|| format!("failed to write HTML report to {}", path.display()))?;
    Ok(())
}

fn dimensions(scores: &AverageScores) -> [(&'static str, u8); 4] {
    [
        ("Relevance", scores.relevance),
        ("Clarity", scores.clarity),
        ("Completeness", scores.completeness),
        ("Confidence", scores.confidence),
    ]
}

fn answer_dimensions(scores: &DimensionScores) -> [(&'static str, u8); 5] {
    [
        ("Relevance", scores.relevance),
        ("Clarity", scores.clarity),
        ("Completeness", scores.completeness),
        ("Confidence", scores.confidence),
        ("Overall", scores.overall),
    ]
}

fn push_list(html: &mut String, title: &str, items: &[String]) {
    html.push_str(&format!("<div>\n<h3>{title}</h3>\n<ul>\n"));
    for item in items {
        html.push_str(&format!("<li>{}</li>\n", html_escape(item)));
    }
    html.push_str("</ul>\n</div>\n");
}

fn push_answer_card(html: &mut String, number: usize, scored: &ScoredAnswer) {
    let evaluation: &Evaluation = &scored.evaluation;

    html.push_str("<article class=\"card\">\n");
    let heading = match (&scored.question, scored.question_id) {
        (Some(q), _) => html_escape(q),
        (None, Some(id)) => format!("Question {id}"),
        (None, None) => format!("Answer {number}"),
    };
    html.push_str(&format!(
        "<h3><span class=\"num\">#{number}</span> {heading}</h3>\n"
    ));
    html.push_str(&format!(
        "<blockquote>{}</blockquote>\n",
        html_escape(&scored.answer.text)
    ));

    html.push_str("<table class=\"scores\"><tr>");
    for (label, score) in answer_dimensions(&evaluation.scores) {
        html.push_str(&format!(
            "<td class=\"{}\"><span>{label}</span><strong>{score}</strong></td>",
            score_class(score)
        ));
    }
    html.push_str("</tr></table>\n");

    if !evaluation.keyword_matches.is_empty() {
        html.push_str("<p class=\"chips\">");
        for m in &evaluation.keyword_matches {
            let class = if m.found { "found" } else { "missing" };
            html.push_str(&format!(
                "<span class=\"chip {class}\">{}</span>",
                html_escape(&m.keyword)
            ));
        }
        html.push_str("</p>\n");
    }

    html.push_str(&format!(
        "<p class=\"feedback\">{}</p>\n",
        html_escape(&evaluation.feedback)
    ));
    html.push_str(&format!(
        "<p class=\"meta\">{} words | sentiment {:+} ({:.2} per word)</p>\n",
        evaluation.word_count, evaluation.sentiment.score, evaluation.sentiment.comparative
    ));
    html.push_str("</article>\n");
}

fn generate_bar_chart(bars: &[(&str, u8)]) -> String {
    let bar_height = 30;
    let max_width = 400;
    let padding = 10;
    let label_width = 140;

    let total_height = bars.len() * (bar_height + padding) + padding;

    let mut svg = format!(
        "<svg width=\"{}\" height=\"{}\" xmlns=\"http://www.w3.org/2000/svg\">\n",
        label_width + max_width + 60,
        total_height
    );

    for (i, (label, score)) in bars.iter().enumerate() {
        let y = i * (bar_height + padding) + padding;
        let width = usize::from(*score) * max_width / 100;

        let color = match score_class(*score) {
            "good" => "#22c55e",
            "fair" => "#eab308",
            _ => "#ef4444",
        };

        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"14\" fill=\"currentColor\" text-anchor=\"end\" dominant-baseline=\"middle\">{}</text>\n",
            label_width - 10,
            y + bar_height / 2,
            html_escape(label)
        ));
        svg.push_str(&format!(
            "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" rx=\"4\"/>\n",
            label_width, y, width, bar_height, color
        ));
        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"12\" fill=\"currentColor\" dominant-baseline=\"middle\">{}</text>\n",
            label_width + width + 8,
            y + bar_height / 2,
            score
        ));
    }

    svg.push_str("</svg>\n");
    svg
}

const CSS: &str = r#"
:root { --bg: #fff; --fg: #1a1a1a; --border: #e5e7eb; --good: #dcfce7; --fair: #fef9c3; --weak: #fde2e2; }
@media (prefers-color-scheme: dark) {
  :root { --bg: #111827; --fg: #f9fafb; --border: #374151; --good: #064e3b; --fair: #713f12; --weak: #7f1d1d; }
}
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 0; padding: 2rem; background: var(--bg); color: var(--fg); max-width: 60rem; }
h1, h2 { margin-top: 2rem; }
.meta { color: #6b7280; }
.overall { font-size: 1.4rem; padding: 0.5rem 1rem; border-radius: 8px; display: inline-block; }
table { border-collapse: collapse; width: 100%; margin: 1rem 0; }
th, td { border: 1px solid var(--border); padding: 0.5rem 1rem; text-align: left; }
th { background: var(--border); }
.good { background: var(--good); }
.fair { background: var(--fair); }
.weak { background: var(--weak); }
.lists { display: flex; gap: 2rem; flex-wrap: wrap; }
.card { border: 1px solid var(--border); border-radius: 8px; padding: 1rem 1.5rem; margin: 1rem 0; }
.card .num { color: #6b7280; margin-right: 0.5rem; }
.scores td span { display: block; font-size: 0.75rem; color: #6b7280; }
blockquote { border-left: 4px solid var(--border); margin: 0.5rem 0; padding-left: 1rem; white-space: pre-wrap; }
.chip { display: inline-block; padding: 0.1rem 0.6rem; margin: 0 0.3rem 0.3rem 0; border-radius: 999px; font-size: 0.85rem; }
.chip.found { background: var(--good); }
.chip.missing { background: var(--weak); text-decoration: line-through; }
pre { overflow-x: auto; padding: 1rem; background: var(--border); border-radius: 8px; }
code { font-family: 'JetBrains Mono', 'Fira Code', monospace; font-size: 0.85rem; }
details { margin: 1rem 0; }
summary { cursor: pointer; font-weight: bold; }
svg { margin: 1rem 0; }
"#;

const JS: &str = r#"
document.querySelectorAll('.card blockquote').forEach(q => {
  if (q.textContent.length > 600) {
    q.dataset.full = q.textContent;
    q.textContent = q.textContent.slice(0, 600) + '...';
    q.style.cursor = 'pointer';
    q.title = 'Click to expand';
    q.addEventListener('click', () => { q.textContent = q.dataset.full; q.style.cursor = ''; });
  }
});
"#;
