//! Confidence: assertiveness from cue phrases and concrete detail.

use crate::lexicon::{CuePhrase, Lexicon};
use crate::tokenizer::{contains_any, count_phrase, tokenize_lower};

const BASELINE: i32 = 50;
const DIGIT_BONUS: i32 = 10;
const EXAMPLE_BONUS: i32 = 15;
const VERB_BONUS: i32 = 10;

/// Confidence of `answer`, in `0..=100`.
///
/// `verbs` are the verbs a lexical provider detected in the answer; an empty
/// slice means none were found or the provider was unavailable.
pub fn confidence<S: AsRef<str>>(answer: &str, lexicon: &Lexicon, verbs: &[S]) -> u8 {
    if answer.is_empty() {
        return 0;
    }

    let tokens = tokenize_lower(answer);
    let mut score = BASELINE;

    score += cue_adjustment(&tokens, &lexicon.assertive);
    score += cue_adjustment(&tokens, &lexicon.hedging);

    if answer.chars().any(|c| c.is_ascii_digit()) {
        score += DIGIT_BONUS;
    }
    if contains_any(&tokens, &lexicon.example_cues) {
        score += EXAMPLE_BONUS;
    }
    if !verbs.is_empty() {
        score += VERB_BONUS;
    }

    score.clamp(0, 100) as u8
}

/// Sum of `weight * occurrences` over a cue table.
fn cue_adjustment(tokens: &[String], cues: &[CuePhrase]) -> i32 {
    cues.iter()
        .map(|cue| cue.weight * count_phrase(tokens, &cue.phrase) as i32)
        .sum()
}
