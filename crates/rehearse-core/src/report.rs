//! Session report types with JSON persistence and progress comparison.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::engine::BatchOutcome;
use crate::error::EvalError;
use crate::model::{Answer, Evaluation, SessionSummary, SubmittedAnswer};

/// Default score-point threshold for [`SessionReport::compare`].
pub const DEFAULT_COMPARE_THRESHOLD: f64 = 5.0;

/// A complete practice-session report.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    pub session: SessionInfo,
    /// Scored answers in submission order.
    pub answers: Vec<ScoredAnswer>,
    pub summary: SessionSummary,
    /// Total wall-clock duration in milliseconds.
    pub duration_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    pub name: String,
    pub answer_count: usize,
}

/// One answer and its evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredAnswer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    pub answer: Answer,
    pub evaluation: Evaluation,
}

impl SessionReport {
    /// Build a report from a finished batch. An empty batch has nothing to
    /// summarize and is rejected.
    pub fn new(
        name: impl Into<String>,
        submitted: Vec<SubmittedAnswer>,
        outcome: BatchOutcome,
    ) -> Result<Self, EvalError> {
        let summary = outcome.summary.ok_or(EvalError::EmptyAggregateInput)?;
        let answers: Vec<ScoredAnswer> = submitted
            .into_iter()
            .zip(outcome.evaluations)
            .map(|(s, evaluation)| ScoredAnswer {
                question_id: s.question_id,
                question: s.question,
                answer: s.answer,
                evaluation,
            })
            .collect();

        Ok(Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            session: SessionInfo {
                name: name.into(),
                answer_count: answers.len(),
            },
            answers,
            summary,
            duration_ms: duration_ms(outcome.elapsed),
        })
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: SessionReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }

    /// Compare this session against a baseline session.
    ///
    /// Answers are paired by question id when they have one, otherwise by
    /// position. A change larger than `threshold` score points in either
    /// direction counts as a regression or improvement.
    pub fn compare(&self, baseline: &SessionReport, threshold: f64) -> ProgressReport {
        let baseline_scores = score_map(baseline);
        let current_scores = score_map(self);

        let mut regressions = Vec::new();
        let mut improvements = Vec::new();
        let mut unchanged = 0usize;
        let mut new_answers = 0usize;

        for (key, &current) in &current_scores {
            let Some(&baseline_score) = baseline_scores.get(key) else {
                new_answers += 1;
                continue;
            };
            let change = ScoreChange {
                key: *key,
                baseline_score,
                current_score: current,
                delta: i32::from(current) - i32::from(baseline_score),
            };
            if f64::from(change.delta) < -threshold {
                regressions.push(change);
            } else if f64::from(change.delta) > threshold {
                improvements.push(change);
            } else {
                unchanged += 1;
            }
        }

        let removed_answers = baseline_scores
            .keys()
            .filter(|k| !current_scores.contains_key(k))
            .count();

        ProgressReport {
            baseline_overall: baseline.summary.overall_score,
            current_overall: self.summary.overall_score,
            regressions,
            improvements,
            unchanged,
            new_answers,
            removed_answers,
        }
    }
}

fn duration_ms(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

/// Overall score per answer. A repeated question keeps its first answer.
fn score_map(report: &SessionReport) -> BTreeMap<AnswerKey, u8> {
    let mut map = BTreeMap::new();
    for (position, scored) in report.answers.iter().enumerate() {
        let key = match scored.question_id {
            Some(id) => AnswerKey::Question(id),
            None => AnswerKey::Position(position + 1),
        };
        map.entry(key).or_insert(scored.evaluation.scores.overall);
    }
    map
}

/// How an answer is paired across two sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "by", content = "value")]
pub enum AnswerKey {
    Question(u32),
    /// 1-based position in the session.
    Position(usize),
}

impl fmt::Display for AnswerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerKey::Question(id) => write!(f, "question {id}"),
            AnswerKey::Position(n) => write!(f, "answer #{n}"),
        }
    }
}

/// Result of comparing two sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressReport {
    pub baseline_overall: u8,
    pub current_overall: u8,
    /// Answers whose overall score went down.
    pub regressions: Vec<ScoreChange>,
    /// Answers whose overall score went up.
    pub improvements: Vec<ScoreChange>,
    /// Answers with no significant change.
    pub unchanged: usize,
    /// Answers in current but not baseline.
    pub new_answers: usize,
    /// Answers in baseline but not current.
    pub removed_answers: usize,
}

/// A per-answer overall-score change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreChange {
    pub key: AnswerKey,
    pub baseline_score: u8,
    pub current_score: u8,
    pub delta: i32,
}

impl ProgressReport {
    /// Format the comparison as markdown.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        md.push_str(&format!(
            "**Overall:** {} -> {} ({:+})\n\n",
            self.baseline_overall,
            self.current_overall,
            i32::from(self.current_overall) - i32::from(self.baseline_overall)
        ));
        md.push_str(&format!(
            "**Summary:** {} regressions, {} improvements, {} unchanged\n\n",
            self.regressions.len(),
            self.improvements.len(),
            self.unchanged
        ));

        for (title, changes) in [
            ("Regressions", &self.regressions),
            ("Improvements", &self.improvements),
        ] {
            if changes.is_empty() {
                continue;
            }
            md.push_str(&format!("### {title}\n\n"));
            md.push_str("| Answer | Baseline | Current | Delta |\n");
            md.push_str("|--------|----------|---------|-------|\n");
            for c in changes {
                md.push_str(&format!(
                    "| {} | {} | {} | {:+} |\n",
                    c.key, c.baseline_score, c.current_score, c.delta
                ));
            }
            md.push('\n');
        }

        md
    }

    /// Returns true if there are any regressions.
    pub fn has_regressions(&self) -> bool {
        !self.regressions.is_empty()
    }
}
