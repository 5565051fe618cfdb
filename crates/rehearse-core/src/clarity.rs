//! Clarity: sentence-structure quality from sentence lengths and fillers.
//!
//! Fillers are counted on whole tokens, so "like" never matches inside
//! "likely".

use crate::lexicon::Lexicon;
use crate::tokenizer::{count_phrase, split_sentences, tokenize_lower};

const BASELINE: f64 = 50.0;
/// Score for text that has words or symbols but no detectable sentence.
const UNSTRUCTURED_FLOOR: u8 = 20;

const GOOD_SENTENCE_WORDS: std::ops::RangeInclusive<f64> = 10.0..=30.0;
const GOOD_LENGTH_BONUS: f64 = 20.0;
const TOO_SHORT_WORDS: f64 = 5.0;
const TOO_LONG_WORDS: f64 = 50.0;
const BAD_LENGTH_PENALTY: f64 = 15.0;

/// Well-formed sentences must be longer than this many characters.
const MIN_WELL_FORMED_CHARS: usize = 10;
const WELL_FORMED_MAX_BONUS: f64 = 20.0;

/// Fillers are only penalised once they exceed this count.
const FILLER_TOLERANCE: usize = 5;
const FILLER_PENALTY_EACH: f64 = 2.0;
const FILLER_PENALTY_CAP: f64 = 20.0;

/// Clarity of `answer`, in `0..=100`.
pub fn clarity(answer: &str, lexicon: &Lexicon) -> u8 {
    if answer.is_empty() {
        return 0;
    }

    let sentences = split_sentences(answer);
    if sentences.is_empty() {
        return UNSTRUCTURED_FLOOR;
    }

    let tokens = tokenize_lower(answer);
    let mut score = BASELINE;

    let avg_words = tokens.len() as f64 / sentences.len() as f64;
    if GOOD_SENTENCE_WORDS.contains(&avg_words) {
        score += GOOD_LENGTH_BONUS;
    } else if avg_words < TOO_SHORT_WORDS || avg_words > TOO_LONG_WORDS {
        score -= BAD_LENGTH_PENALTY;
    }

    let well_formed = sentences
        .iter()
        .filter(|s| is_well_formed(s))
        .count();
    score += well_formed as f64 / sentences.len() as f64 * WELL_FORMED_MAX_BONUS;

    let fillers = filler_count(&tokens, lexicon);
    if fillers > FILLER_TOLERANCE {
        score -= (fillers as f64 * FILLER_PENALTY_EACH).min(FILLER_PENALTY_CAP);
    }

    score.round().clamp(0.0, 100.0) as u8
}

fn is_well_formed(sentence: &str) -> bool {
    sentence.chars().count() > MIN_WELL_FORMED_CHARS && sentence.ends_with(['.', '!', '?'])
}

/// Total occurrences of every filler word or phrase.
pub fn filler_count(tokens: &[String], lexicon: &Lexicon) -> usize {
    lexicon
        .filler_words
        .iter()
        .map(|filler| count_phrase(tokens, filler))
        .sum()
}
