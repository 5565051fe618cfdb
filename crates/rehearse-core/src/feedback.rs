//! Feedback text, strengths, and improvement suggestions from scores.
//!
//! Every message is a fixed template picked by score thresholds, so the
//! output for a given set of scores is always the same.

use crate::lexicon::Lexicon;
use crate::model::DimensionScores;
use crate::tokenizer::{contains_any, tokenize_lower, word_count};

/// Scores at or above this get the "strong" feedback sentence.
const HIGH_BAND: u8 = 75;
/// Scores at or above this (and below `HIGH_BAND`) get the "fair" sentence.
const MID_BAND: u8 = 50;
const STRENGTH_THRESHOLD: u8 = 70;
const IMPROVEMENT_THRESHOLD: u8 = 60;
const TOO_SHORT_WORDS: usize = 30;
const TOO_LONG_WORDS: usize = 250;

/// The sentences for one dimension, from best band to worst.
struct FeedbackBands {
    high: &'static str,
    mid: &'static str,
    low: &'static str,
}

impl FeedbackBands {
    fn pick(&self, score: u8) -> &'static str {
        if score >= HIGH_BAND {
            self.high
        } else if score >= MID_BAND {
            self.mid
        } else {
            self.low
        }
    }
}

const RELEVANCE_FEEDBACK: FeedbackBands = FeedbackBands {
    high: "Excellent relevance! You addressed all key points effectively.",
    mid: "Good relevance, but try to incorporate more key concepts from the question.",
    low: "Focus more on the core topic and use relevant keywords.",
};

const CLARITY_FEEDBACK: FeedbackBands = FeedbackBands {
    high: "Very clear and well-structured answer.",
    mid: "Fairly clear, but work on sentence structure and reduce filler words.",
    low: "Improve clarity by using shorter, more focused sentences.",
};

const COMPLETENESS_FEEDBACK: FeedbackBands = FeedbackBands {
    high: "Comprehensive answer with good detail.",
    mid: "Add more examples or specifics to make your answer more complete.",
    low: "Your answer needs more depth and detail.",
};

const CONFIDENCE_FEEDBACK: FeedbackBands = FeedbackBands {
    high: "You demonstrated strong confidence in your response.",
    mid: "Your delivery was reasonably confident; commit to your points with fewer hedges.",
    low: "Try to sound more confident by using assertive language and specific examples.",
};

pub const STRENGTH_RELEVANCE: &str = "Strong understanding of the topic";
pub const STRENGTH_CLARITY: &str = "Clear and articulate communication";
pub const STRENGTH_COMPLETENESS: &str = "Comprehensive and detailed response";
pub const STRENGTH_CONFIDENCE: &str = "Confident delivery";
pub const STRENGTH_EXAMPLES: &str = "Good use of examples";
pub const STRENGTH_STRUCTURE: &str = "Well-structured answer";
pub const STRENGTH_FALLBACK: &str = "Provided an answer to the question";

pub const IMPROVE_RELEVANCE: &str = "Focus more on key concepts and relevant topics";
pub const IMPROVE_CLARITY: &str = "Improve sentence structure and reduce filler words";
pub const IMPROVE_COMPLETENESS: &str = "Provide more detailed and comprehensive answers";
pub const IMPROVE_CONFIDENCE: &str = "Use more confident and assertive language";
pub const IMPROVE_TOO_SHORT: &str = "Expand your answers with more detail";
pub const IMPROVE_TOO_LONG: &str = "Be more concise in your responses";
pub const IMPROVE_FALLBACK: &str = "Continue practicing to refine your interview skills";

/// One sentence per dimension, in relevance, clarity, completeness,
/// confidence order, joined by spaces.
pub fn feedback(scores: &DimensionScores) -> String {
    [
        RELEVANCE_FEEDBACK.pick(scores.relevance),
        CLARITY_FEEDBACK.pick(scores.clarity),
        COMPLETENESS_FEEDBACK.pick(scores.completeness),
        CONFIDENCE_FEEDBACK.pick(scores.confidence),
    ]
    .join(" ")
}

/// What the answer did well. Never empty.
pub fn strengths(answer: &str, scores: &DimensionScores, lexicon: &Lexicon) -> Vec<String> {
    let tokens = tokenize_lower(answer);
    let candidates = [
        (scores.relevance >= STRENGTH_THRESHOLD, STRENGTH_RELEVANCE),
        (scores.clarity >= STRENGTH_THRESHOLD, STRENGTH_CLARITY),
        (scores.completeness >= STRENGTH_THRESHOLD, STRENGTH_COMPLETENESS),
        (scores.confidence >= STRENGTH_THRESHOLD, STRENGTH_CONFIDENCE),
        (contains_any(&tokens, &lexicon.example_cues), STRENGTH_EXAMPLES),
        (contains_any(&tokens, &lexicon.enumeration_cues), STRENGTH_STRUCTURE),
    ];

    with_fallback(collect_triggered(&candidates), STRENGTH_FALLBACK)
}

/// What the answer should work on. Never empty.
pub fn improvements(answer: &str, scores: &DimensionScores) -> Vec<String> {
    let words = word_count(answer);
    let candidates = [
        (scores.relevance < IMPROVEMENT_THRESHOLD, IMPROVE_RELEVANCE),
        (scores.clarity < IMPROVEMENT_THRESHOLD, IMPROVE_CLARITY),
        (scores.completeness < IMPROVEMENT_THRESHOLD, IMPROVE_COMPLETENESS),
        (scores.confidence < IMPROVEMENT_THRESHOLD, IMPROVE_CONFIDENCE),
        (words < TOO_SHORT_WORDS, IMPROVE_TOO_SHORT),
        (words > TOO_LONG_WORDS, IMPROVE_TOO_LONG),
    ];

    with_fallback(collect_triggered(&candidates), IMPROVE_FALLBACK)
}

fn collect_triggered(candidates: &[(bool, &str)]) -> Vec<String> {
    candidates
        .iter()
        .filter(|(triggered, _)| *triggered)
        .map(|(_, phrase)| phrase.to_string())
        .collect()
}

fn with_fallback(mut items: Vec<String>, fallback: &str) -> Vec<String> {
    if items.is_empty() {
        items.push(fallback.to_string());
    }
    items
}
