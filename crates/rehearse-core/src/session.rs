//! Session aggregation: one summary over a finished list of evaluations.

use std::collections::HashSet;

use crate::error::EvalError;
use crate::model::{AverageScores, DimensionScores, Evaluation, SessionSummary};

/// Maximum strengths or improvements carried into a session summary.
pub const SUMMARY_LIST_CAP: usize = 5;

/// Summarize a session. Fails on an empty slice.
pub fn summarize(evaluations: &[Evaluation]) -> Result<SessionSummary, EvalError> {
    if evaluations.is_empty() {
        return Err(EvalError::EmptyAggregateInput);
    }

    let mean = |dimension: fn(&DimensionScores) -> u8| -> u8 {
        let total: u64 = evaluations
            .iter()
            .map(|e| u64::from(dimension(&e.scores)))
            .sum();
        (total as f64 / evaluations.len() as f64).round() as u8
    };

    Ok(SessionSummary {
        overall_score: mean(|s| s.overall),
        average_scores: AverageScores {
            relevance: mean(|s| s.relevance),
            clarity: mean(|s| s.clarity),
            completeness: mean(|s| s.completeness),
            confidence: mean(|s| s.confidence),
        },
        strengths: dedup_capped(evaluations.iter().flat_map(|e| &e.strengths)),
        improvements: dedup_capped(evaluations.iter().flat_map(|e| &e.improvements)),
    })
}

/// First-seen order, duplicates dropped, at most `SUMMARY_LIST_CAP` items.
fn dedup_capped<'a>(items: impl Iterator<Item = &'a String>) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .filter(|&item| seen.insert(item.as_str()))
        .take(SUMMARY_LIST_CAP)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SentimentResult;

    fn evaluation(scores: DimensionScores, strengths: &[&str], improvements: &[&str]) -> Evaluation {
        Evaluation {
            scores,
            sentiment: SentimentResult::default(),
            feedback: String::new(),
            strengths: strengths.iter().map(|s| s.to_string()).collect(),
            improvements: improvements.iter().map(|s| s.to_string()).collect(),
            word_count: 0,
            keyword_matches: vec![],
        }
    }

    fn with_overall(overall: u8) -> Evaluation {
        evaluation(DimensionScores::new(overall, overall, overall, overall), &[], &[])
    }

    #[test]
    fn empty_input_is_an_error() {
        assert_eq!(summarize(&[]), Err(EvalError::EmptyAggregateInput));
    }

    #[test]
    fn single_evaluation_summarizes_to_itself() {
        let scores = DimensionScores::new(90, 71, 88, 40);
        let e = evaluation(scores, &["a"], &["b"]);
        let summary = summarize(std::slice::from_ref(&e)).unwrap();
        assert_eq!(summary.overall_score, scores.overall);
        assert_eq!(
            summary.average_scores,
            AverageScores {
                relevance: 90,
                clarity: 71,
                completeness: 88,
                confidence: 40,
            }
        );
        assert_eq!(summary.strengths, vec!["a"]);
        assert_eq!(summary.improvements, vec!["b"]);
    }

    #[test]
    fn overall_score_is_mean_of_overalls() {
        let summary = summarize(&[with_overall(80), with_overall(60)]).unwrap();
        assert_eq!(summary.overall_score, 70);
    }

    #[test]
    fn averages_round_half_up() {
        let a = evaluation(DimensionScores::new(50, 0, 0, 0), &[], &[]);
        let b = evaluation(DimensionScores::new(51, 0, 0, 1), &[], &[]);
        let summary = summarize(&[a, b]).unwrap();
        assert_eq!(summary.average_scores.relevance, 51); // 50.5
        assert_eq!(summary.average_scores.confidence, 1); // 0.5
    }

    #[test]
    fn lists_are_deduplicated_in_first_seen_order_and_capped() {
        let a = evaluation(DimensionScores::default(), &["x", "y", "x"], &["1", "2", "3"]);
        let b = evaluation(DimensionScores::default(), &["z", "y"], &["3", "4", "5", "6", "7"]);
        let summary = summarize(&[a, b]).unwrap();
        assert_eq!(summary.strengths, vec!["x", "y", "z"]);
        assert_eq!(summary.improvements, vec!["1", "2", "3", "4", "5"]);
    }
}
