//! Keyword relevance: how well an answer covers the rubric's expected terms.
//!
//! Relevance credits each keyword once for a verbatim (case-insensitive)
//! substring hit, or half a point per near-miss word within edit distance 2.
//! `matches` only reports the verbatim hits. A keyword that earns partial
//! credit therefore raises relevance while still showing `found: false`.

use crate::model::KeywordMatch;
use crate::tokenizer::tokenize_lower;

/// Score returned when no keywords were supplied.
pub const NEUTRAL_RELEVANCE: u8 = 50;

const MAX_EDIT_DISTANCE: usize = 2;
/// Near-miss tokens must be longer than this (in characters).
const MIN_FUZZY_TOKEN_LEN: usize = 3;
const PARTIAL_CREDIT: f64 = 0.5;

/// Relevance of `answer` to `keywords`, in `0..=100`.
pub fn relevance<S: AsRef<str>>(answer: &str, keywords: &[S]) -> u8 {
    if answer.is_empty() {
        return 0;
    }
    if keywords.is_empty() {
        return NEUTRAL_RELEVANCE;
    }

    let answer_lower = answer.to_lowercase();
    let tokens = tokenize_lower(answer);

    let credit: f64 = keywords
        .iter()
        .map(|keyword| {
            let keyword = keyword.as_ref().to_lowercase();
            if answer_lower.contains(&keyword) {
                1.0
            } else {
                tokens
                    .iter()
                    .filter(|token| {
                        token.chars().count() > MIN_FUZZY_TOKEN_LEN
                            && levenshtein(token, &keyword) <= MAX_EDIT_DISTANCE
                    })
                    .count() as f64
                    * PARTIAL_CREDIT
            }
        })
        .sum();

    let score = (100.0 * credit / keywords.len() as f64).min(100.0);
    score.round() as u8
}

/// Verbatim presence of each keyword, in input order.
pub fn matches<S: AsRef<str>>(answer: &str, keywords: &[S]) -> Vec<KeywordMatch> {
    let answer_lower = answer.to_lowercase();
    keywords
        .iter()
        .map(|keyword| {
            let keyword = keyword.as_ref();
            KeywordMatch {
                keyword: keyword.to_string(),
                found: answer_lower.contains(&keyword.to_lowercase()),
            }
        })
        .collect()
}

/// Levenshtein edit distance over Unicode scalar values.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Single-row dynamic programming.
    let mut row: Vec<usize> = (0..=b.len()).collect();
    for (i, ca) in a.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = diagonal + usize::from(ca != cb);
            diagonal = row[j + 1];
            row[j + 1] = substitution.min(row[j] + 1).min(row[j + 1] + 1);
        }
    }
    row[b.len()]
}
