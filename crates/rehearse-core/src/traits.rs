//! Trait definitions for external lexical capabilities.
//!
//! The evaluator consumes one external capability: a provider that can score
//! sentiment and, optionally, find verbs. Implementations live in the
//! `rehearse-providers` crate; `NeutralProvider` here is the fallback used
//! when nothing else is configured.

use serde::{Deserialize, Serialize};

use crate::error::ProviderError;

// ---------------------------------------------------------------------------
// Lexical provider trait
// ---------------------------------------------------------------------------

/// A lexical/sentiment analysis backend.
///
/// Implementations must be pure with respect to their input and safe to call
/// from many threads at once.
pub trait LexicalProvider: Send + Sync {
    /// Human-readable provider name (e.g. "lexicon").
    fn name(&self) -> &str;

    /// Score the polarity of `text`.
    fn analyze(&self, text: &str) -> Result<SentimentAnalysis, ProviderError>;

    /// Verbs detected in `text`.
    fn verbs_of(&self, _text: &str) -> Result<Vec<String>, ProviderError> {
        Err(ProviderError::Unsupported("verbs_of"))
    }
}

/// Raw output of a provider's sentiment analysis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentAnalysis {
    /// Sum of word polarities.
    pub score: i32,
    /// Score normalised by the provider's own token count. Advisory only:
    /// evaluations recompute it over the core word count.
    pub comparative: f64,
    /// Words that contributed positively.
    pub positive: Vec<String>,
    /// Words that contributed negatively.
    pub negative: Vec<String>,
}

// ---------------------------------------------------------------------------
// Neutral provider
// ---------------------------------------------------------------------------

/// Provider that finds no sentiment and no verbs.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeutralProvider;

impl LexicalProvider for NeutralProvider {
    fn name(&self) -> &str {
        "neutral"
    }

    fn analyze(&self, _text: &str) -> Result<SentimentAnalysis, ProviderError> {
        Ok(SentimentAnalysis::default())
    }

    fn verbs_of(&self, _text: &str) -> Result<Vec<String>, ProviderError> {
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct SentimentOnly;

    impl LexicalProvider for SentimentOnly {
        fn name(&self) -> &str {
            "sentiment-only"
        }

        fn analyze(&self, _text: &str) -> Result<SentimentAnalysis, ProviderError> {
            Ok(SentimentAnalysis {
                score: 1,
                ..Default::default()
            })
        }
    }

    #[test]
    fn verbs_of_defaults_to_unsupported() {
        assert_eq!(
            SentimentOnly.verbs_of("I ran"),
            Err(ProviderError::Unsupported("verbs_of"))
        );
    }

    #[test]
    fn neutral_provider_is_empty() {
        assert_eq!(
            NeutralProvider.analyze("wonderful").unwrap(),
            SentimentAnalysis::default()
        );
        assert!(NeutralProvider.verbs_of("I ran").unwrap().is_empty());
    }
}
