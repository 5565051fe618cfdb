//! Completeness: answer depth from word count relative to an ideal target.

use crate::jitter::BandJitter;
use crate::tokenizer::word_count;

const SHORT_ANSWER_WORDS: usize = 20;
const SHORT_ANSWER_MAX: f64 = 30.0;

const IDEAL_BAND_WORDS: std::ops::RangeInclusive<usize> = 50..=200;
const IDEAL_BAND_FLOOR: f64 = 85.0;
const IDEAL_BAND_SPAN: f64 = 15.0;

const VERBOSE_WORDS: usize = 300;
const VERBOSE_PENALTY_PER_WORD: f64 = 0.1;
const PROPORTIONAL_FLOOR: f64 = 30.0;

/// Completeness of `answer` against `ideal_word_count`, in `0..=100`.
pub fn completeness(answer: &str, ideal_word_count: u32, jitter: &dyn BandJitter) -> u8 {
    if answer.is_empty() {
        return 0;
    }

    let words = word_count(answer);

    if words < SHORT_ANSWER_WORDS {
        let ramp = words as f64 / SHORT_ANSWER_WORDS as f64 * SHORT_ANSWER_MAX;
        return ramp.round() as u8;
    }

    if IDEAL_BAND_WORDS.contains(&words) {
        let bonus = jitter.bonus(answer, IDEAL_BAND_SPAN).clamp(0.0, IDEAL_BAND_SPAN);
        return (IDEAL_BAND_FLOOR + bonus).round().min(100.0) as u8;
    }

    // An ideal of zero means any length satisfies the target.
    let ratio = words as f64 / ideal_word_count as f64;
    let mut score = 100.0 * ratio.min(1.0);
    if words > VERBOSE_WORDS {
        score -= (words - VERBOSE_WORDS) as f64 * VERBOSE_PENALTY_PER_WORD;
    }

    score.round().clamp(PROPORTIONAL_FLOOR, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jitter::{NoJitter, SeededJitter};

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn empty_answer_scores_zero() {
        assert_eq!(completeness("", 100, &NoJitter), 0);
        assert_eq!(completeness("   ", 100, &NoJitter), 0);
    }

    #[test]
    fn short_answers_ramp_to_30() {
        assert_eq!(completeness(&words(1), 100, &NoJitter), 2); // 1.5 rounds up
        assert_eq!(completeness(&words(10), 100, &NoJitter), 15);
        assert_eq!(completeness(&words(19), 100, &NoJitter), 29);
    }

    #[test]
    fn punctuation_only_has_no_words() {
        assert_eq!(completeness("?!", 100, &NoJitter), 0);
    }

    #[test]
    fn ideal_band_without_jitter_is_85() {
        assert_eq!(completeness(&words(50), 100, &NoJitter), 85);
        assert_eq!(completeness(&words(200), 100, &NoJitter), 85);
    }

    #[test]
    fn ideal_band_with_seeded_jitter_stays_in_band() {
        let jitter = SeededJitter::new();
        for n in [50, 60, 120, 200] {
            let score = completeness(&words(n), 100, &jitter);
            assert!((85..=100).contains(&score), "{n} words scored {score}");
            assert_eq!(score, completeness(&words(n), 100, &jitter));
        }
    }

    #[test]
    fn between_short_and_ideal_is_proportional() {
        // 30 / 100 -> 30; 40 / 100 -> 40; 40 / 40 -> 100.
        assert_eq!(completeness(&words(30), 100, &NoJitter), 30);
        assert_eq!(completeness(&words(40), 100, &NoJitter), 40);
        assert_eq!(completeness(&words(40), 40, &NoJitter), 100);
        // Floor of 30 applies: 20 / 100 = 20 -> 30.
        assert_eq!(completeness(&words(20), 100, &NoJitter), 30);
    }

    #[test]
    fn long_answers_are_penalised_past_300() {
        assert_eq!(completeness(&words(250), 100, &NoJitter), 100);
        assert_eq!(completeness(&words(400), 100, &NoJitter), 90);
        assert_eq!(completeness(&words(1500), 100, &NoJitter), 30);
    }

    #[test]
    fn zero_ideal_counts_as_met() {
        assert_eq!(completeness(&words(30), 0, &NoJitter), 100);
    }
}
