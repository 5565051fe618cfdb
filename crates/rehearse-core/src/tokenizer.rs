//! Word and sentence splitting shared by every scorer.

use once_cell::sync::Lazy;
use regex::Regex;

static WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\p{L}\p{N}]+").expect("word pattern is valid"));

/// A sentence is a run of non-terminal characters plus any terminal punctuation.
static SENTENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^.!?]+[.!?]*").expect("sentence pattern is valid"));

/// Split text into word tokens: contiguous alphanumeric runs, case preserved.
pub fn tokenize(text: &str) -> Vec<&str> {
    WORD_RE.find_iter(text).map(|m| m.as_str()).collect()
}

/// Lowercased word tokens, for case-insensitive matching.
pub fn tokenize_lower(text: &str) -> Vec<String> {
    WORD_RE
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}

/// Number of word tokens in `text`.
pub fn word_count(text: &str) -> usize {
    WORD_RE.find_iter(text).count()
}

/// Split text into trimmed sentences, keeping their terminal punctuation.
pub fn split_sentences(text: &str) -> Vec<&str> {
    SENTENCE_RE
        .find_iter(text)
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Count non-overlapping occurrences of `phrase` in a lowercase token stream.
///
/// The phrase is tokenized the same way as the answer, so "you know" matches
/// the tokens `["you", "know"]` and never the inside of a longer word.
pub fn count_phrase(tokens: &[String], phrase: &str) -> usize {
    let needle = tokenize_lower(phrase);
    if needle.is_empty() || needle.len() > tokens.len() {
        return 0;
    }

    let mut count = 0;
    let mut i = 0;
    while i + needle.len() <= tokens.len() {
        if tokens[i..i + needle.len()] == needle[..] {
            count += 1;
            i += needle.len();
        } else {
            i += 1;
        }
    }
    count
}

/// Whether any of `phrases` occurs in the token stream.
pub fn contains_any<S: AsRef<str>>(tokens: &[String], phrases: &[S]) -> bool {
    phrases.iter().any(|p| count_phrase(tokens, p.as_ref()) > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_discards_punctuation() {
        assert_eq!(
            tokenize("Hello, world! It's 2024..."),
            vec!["Hello", "world", "It", "s", "2024"]
        );
    }

    #[test]
    fn tokenize_blank_is_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \n\t ").is_empty());
        assert!(tokenize("?!...").is_empty());
    }

    #[test]
    fn tokenize_keeps_unicode_letters() {
        assert_eq!(tokenize("naïve café"), vec!["naïve", "café"]);
    }

    #[test]
    fn split_sentences_keeps_terminal_punctuation() {
        let sentences = split_sentences("One thing. Two things!  Three? trailing");
        assert_eq!(
            sentences,
            vec!["One thing.", "Two things!", "Three?", "trailing"]
        );
    }

    #[test]
    fn split_sentences_drops_empty_fragments() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("  ").is_empty());
        assert_eq!(split_sentences("Wait... what?!"), vec!["Wait...", "what?!"]);
    }

    #[test]
    fn count_phrase_is_token_aligned() {
        let tokens = tokenize_lower("You know, I like it. You KNOW what? Likely.");
        assert_eq!(count_phrase(&tokens, "you know"), 2);
        assert_eq!(count_phrase(&tokens, "like"), 1);
        assert_eq!(count_phrase(&tokens, ""), 0);
        assert!(contains_any(&tokens, &["missing", "what"]));
    }
}
