//! Error types for the evaluation pipeline.
//!
//! Scoring itself never fails. These errors cover the two places a caller
//! can misuse the core (missing answer text, aggregating nothing) and the
//! failure modes of an external lexical provider. `ProviderError` is defined
//! here rather than in `rehearse-providers` so the evaluator can classify it
//! and fall back without string matching.

use thiserror::Error;

/// Errors surfaced to callers of the evaluation core.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EvalError {
    /// The request did not carry usable answer text.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// `summarize` was called with zero evaluations.
    #[error("cannot summarize an empty list of evaluations")]
    EmptyAggregateInput,
}

/// Errors reported by a lexical/sentiment provider.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// The provider could not be reached or loaded.
    #[error("provider unavailable: {0}")]
    Unavailable(String),

    /// The provider ran but failed on this input.
    #[error("provider failed: {0}")]
    Failed(String),

    /// The provider does not implement the requested capability.
    #[error("capability not supported: {0}")]
    Unsupported(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        assert_eq!(
            EvalError::InvalidInput("answer text is required".into()).to_string(),
            "invalid input: answer text is required"
        );
        assert_eq!(
            ProviderError::Unsupported("verbs_of").to_string(),
            "capability not supported: verbs_of"
        );
    }
}
