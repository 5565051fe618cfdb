//! Sentiment extraction through a `LexicalProvider`.
//!
//! The polarity algorithm belongs to the provider. This module fixes the
//! shape of the result: empty answers are neutral, provider failures degrade
//! to neutral, and `comparative` is always `score / wordCount` over the
//! core tokenizer's word count.

use crate::model::SentimentResult;
use crate::tokenizer::word_count;
use crate::traits::LexicalProvider;

/// Sentiment profile of `answer`, never failing.
pub fn analyze_sentiment(provider: &dyn LexicalProvider, answer: &str) -> SentimentResult {
    if answer.is_empty() {
        return SentimentResult::default();
    }

    let analysis = match provider.analyze(answer) {
        Ok(analysis) => analysis,
        Err(e) => {
            tracing::warn!(
                "sentiment provider '{}' failed, using neutral result: {e}",
                provider.name()
            );
            return SentimentResult::default();
        }
    };

    let words = word_count(answer);
    let comparative = if words > 0 {
        analysis.score as f64 / words as f64
    } else {
        0.0
    };

    SentimentResult {
        score: analysis.score,
        comparative,
        positive: analysis.positive,
        negative: analysis.negative,
    }
}

/// Verbs in `answer`, or none if the provider cannot say.
pub fn detect_verbs(provider: &dyn LexicalProvider, answer: &str) -> Vec<String> {
    if answer.is_empty() {
        return Vec::new();
    }
    provider.verbs_of(answer).unwrap_or_else(|e| {
        tracing::warn!(
            "verb detection by '{}' failed, treating verb list as empty: {e}",
            provider.name()
        );
        Vec::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProviderError;
    use crate::traits::{NeutralProvider, SentimentAnalysis};

    struct Fixed;

    impl LexicalProvider for Fixed {
        fn name(&self) -> &str {
            "fixed"
        }

        fn analyze(&self, _text: &str) -> Result<SentimentAnalysis, ProviderError> {
            Ok(SentimentAnalysis {
                score: 6,
                comparative: 99.0,
                positive: vec!["great".into(), "love".into()],
                negative: vec![],
            })
        }

        fn verbs_of(&self, _text: &str) -> Result<Vec<String>, ProviderError> {
            Ok(vec!["love".into()])
        }
    }

    struct Broken;

    impl LexicalProvider for Broken {
        fn name(&self) -> &str {
            "broken"
        }

        fn analyze(&self, _text: &str) -> Result<SentimentAnalysis, ProviderError> {
            Err(ProviderError::Unavailable("offline".into()))
        }

        fn verbs_of(&self, _text: &str) -> Result<Vec<String>, ProviderError> {
            Err(ProviderError::Failed("boom".into()))
        }
    }

    #[test]
    fn comparative_uses_core_word_count() {
        let result = analyze_sentiment(&Fixed, "I love this great team");
        assert_eq!(result.score, 6);
        assert!((result.comparative - 1.2).abs() < 1e-9);
        assert_eq!(result.positive, vec!["great", "love"]);
    }

    #[test]
    fn empty_answer_is_neutral_without_calling_provider() {
        assert_eq!(analyze_sentiment(&Broken, ""), SentimentResult::default());
        assert!(detect_verbs(&Fixed, "").is_empty());
    }

    #[test]
    fn whitespace_answer_reaches_the_provider() {
        let result = analyze_sentiment(&Fixed, "   ");
        assert_eq!(result.score, 6);
        assert_eq!(result.comparative, 0.0);
        assert_eq!(detect_verbs(&Fixed, "   "), vec!["love"]);
    }

    #[test]
    fn punctuation_only_answer_has_zero_comparative() {
        let result = analyze_sentiment(&Fixed, "!!!");
        assert_eq!(result.score, 6);
        assert_eq!(result.comparative, 0.0);
    }

    #[test]
    fn provider_failure_degrades_to_neutral() {
        assert_eq!(
            analyze_sentiment(&Broken, "I love it"),
            SentimentResult::default()
        );
        assert!(detect_verbs(&Broken, "I love it").is_empty());
    }

    #[test]
    fn neutral_provider_yields_zero_result() {
        let result = analyze_sentiment(&NeutralProvider, "Fantastic work");
        assert_eq!(result, SentimentResult::default());
    }
}
