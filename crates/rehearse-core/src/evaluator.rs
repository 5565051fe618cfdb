//! Evaluation orchestrator: runs every scorer over one answer.

use std::sync::Arc;

use crate::clarity::clarity;
use crate::completeness::completeness;
use crate::confidence::confidence;
use crate::feedback::{feedback, improvements, strengths};
use crate::jitter::{BandJitter, SeededJitter};
use crate::keywords::{matches, relevance};
use crate::lexicon::Lexicon;
use crate::model::{Answer, DimensionScores, Evaluation};
use crate::sentiment::{analyze_sentiment, detect_verbs};
use crate::tokenizer::word_count;
use crate::traits::{LexicalProvider, NeutralProvider};

/// Scores answers. Holds only read-only configuration, so one instance can
/// be shared across threads and reused for any number of answers.
#[derive(Clone)]
pub struct Evaluator {
    lexicon: Arc<Lexicon>,
    provider: Arc<dyn LexicalProvider>,
    jitter: Arc<dyn BandJitter>,
}

impl Evaluator {
    pub fn new(
        lexicon: Lexicon,
        provider: Arc<dyn LexicalProvider>,
        jitter: Arc<dyn BandJitter>,
    ) -> Self {
        Self {
            lexicon: Arc::new(lexicon),
            provider,
            jitter,
        }
    }

    /// Replace the lexical provider.
    pub fn with_provider(mut self, provider: Arc<dyn LexicalProvider>) -> Self {
        self.provider = provider;
        self
    }

    /// Replace the completeness jitter source.
    pub fn with_jitter(mut self, jitter: Arc<dyn BandJitter>) -> Self {
        self.jitter = jitter;
        self
    }

    /// Replace the cue-phrase lexicon.
    pub fn with_lexicon(mut self, lexicon: Lexicon) -> Self {
        self.lexicon = Arc::new(lexicon);
        self
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Evaluate one answer text against its rubric.
    pub fn evaluate<S: AsRef<str>>(
        &self,
        text: &str,
        keywords: &[S],
        ideal_word_count: u32,
    ) -> Evaluation {
        let verbs = detect_verbs(self.provider.as_ref(), text);

        let scores = DimensionScores::new(
            relevance(text, keywords),
            clarity(text, &self.lexicon),
            completeness(text, ideal_word_count, self.jitter.as_ref()),
            confidence(text, &self.lexicon, &verbs),
        );
        let sentiment = analyze_sentiment(self.provider.as_ref(), text);

        tracing::debug!(
            relevance = scores.relevance,
            clarity = scores.clarity,
            completeness = scores.completeness,
            confidence = scores.confidence,
            overall = scores.overall,
            "answer scored"
        );

        Evaluation {
            scores,
            sentiment,
            feedback: feedback(&scores),
            strengths: strengths(text, &scores, &self.lexicon),
            improvements: improvements(text, &scores),
            word_count: word_count(text),
            keyword_matches: matches(text, keywords),
        }
    }

    /// Evaluate a validated `Answer`.
    pub fn evaluate_answer(&self, answer: &Answer) -> Evaluation {
        self.evaluate(
            &answer.text,
            &answer.expected_keywords,
            answer.ideal_word_count,
        )
    }
}

impl Default for Evaluator {
    /// Default lexicon, no sentiment or verb provider, text-seeded jitter.
    fn default() -> Self {
        Self::new(
            Lexicon::default(),
            Arc::new(NeutralProvider),
            Arc::new(SeededJitter::new()),
        )
    }
}

impl std::fmt::Debug for Evaluator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Evaluator")
            .field("lexicon", &self.lexicon)
            .field("provider", &self.provider.name())
            .finish_non_exhaustive()
    }
}
