//! Mock provider for testing.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use rehearse_core::error::ProviderError;
use rehearse_core::traits::{LexicalProvider, SentimentAnalysis};

/// A mock lexical provider for exercising the evaluator without a real
/// word list. Returns a fixed result (or a fixed error) for every call.
pub struct MockProvider {
    analysis: Result<SentimentAnalysis, ProviderError>,
    verbs: Result<Vec<String>, ProviderError>,
    /// Number of calls made.
    call_count: AtomicU32,
    /// Last text received.
    last_text: Mutex<Option<String>>,
}

impl MockProvider {
    /// A provider that always returns `analysis` and `verbs`.
    pub fn with_fixed_response(analysis: SentimentAnalysis, verbs: Vec<String>) -> Self {
        Self {
            analysis: Ok(analysis),
            verbs: Ok(verbs),
            call_count: AtomicU32::new(0),
            last_text: Mutex::new(None),
        }
    }

    /// A provider whose every call fails with `error`.
    pub fn failing(error: ProviderError) -> Self {
        Self {
            analysis: Err(error.clone()),
            verbs: Err(error),
            call_count: AtomicU32::new(0),
            last_text: Mutex::new(None),
        }
    }

    /// Get the number of calls made to this provider.
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }

    /// Get the last text passed to this provider.
    pub fn last_text(&self) -> Option<String> {
        self.last_text.lock().unwrap().clone()
    }

    fn record(&self, text: &str) {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        *self.last_text.lock().unwrap() = Some(text.to_string());
    }
}

impl LexicalProvider for MockProvider {
    fn name(&self) -> &str {
        "mock"
    }

    fn analyze(&self, text: &str) -> Result<SentimentAnalysis, ProviderError> {
        self.record(text);
        self.analysis.clone()
    }

    fn verbs_of(&self, text: &str) -> Result<Vec<String>, ProviderError> {
        self.record(text);
        self.verbs.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_response() {
        let provider = MockProvider::with_fixed_response(
            SentimentAnalysis {
                score: 4,
                ..Default::default()
            },
            vec!["ran".into()],
        );

        assert_eq!(provider.analyze("anything").unwrap().score, 4);
        assert_eq!(provider.verbs_of("we ran").unwrap(), vec!["ran"]);
        assert_eq!(provider.call_count(), 2);
        assert_eq!(provider.last_text().as_deref(), Some("we ran"));
    }

    #[test]
    fn failing_response() {
        let provider = MockProvider::failing(ProviderError::Unavailable("offline".into()));
        assert!(provider.analyze("x").is_err());
        assert_eq!(
            provider.verbs_of("x"),
            Err(ProviderError::Unavailable("offline".into()))
        );
        assert_eq!(provider.call_count(), 2);
    }
}
