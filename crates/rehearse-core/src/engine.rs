//! Batch evaluation engine.
//!
//! Scores many answers concurrently with bounded parallelism and returns the
//! evaluations in submission order, together with the session summary.

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use futures::stream::{FuturesUnordered, StreamExt};
use tokio::sync::Semaphore;

use crate::evaluator::Evaluator;
use crate::model::{Evaluation, SessionSummary, SubmittedAnswer};
use crate::session::summarize;

/// Configuration for the batch engine.
#[derive(Debug, Clone)]
pub struct BatchEngineConfig {
    /// Maximum answers scored at once.
    pub parallelism: usize,
}

impl Default for BatchEngineConfig {
    fn default() -> Self {
        Self { parallelism: 4 }
    }
}

/// Progress reporting trait.
pub trait ProgressReporter: Send + Sync {
    fn on_answer_complete(&self, index: usize, evaluation: &Evaluation);
    fn on_batch_complete(&self, total: usize, elapsed: Duration);
}

/// No-op progress reporter.
pub struct NoopReporter;

impl ProgressReporter for NoopReporter {
    fn on_answer_complete(&self, _: usize, _: &Evaluation) {}
    fn on_batch_complete(&self, _: usize, _: Duration) {}
}

/// Everything a batch run produces.
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    /// One evaluation per submitted answer, in submission order.
    pub evaluations: Vec<Evaluation>,
    /// `None` when the batch was empty.
    pub summary: Option<SessionSummary>,
    pub elapsed: Duration,
}

/// Runs an `Evaluator` over a batch of answers.
pub struct BatchEngine {
    evaluator: Evaluator,
    config: BatchEngineConfig,
}

impl BatchEngine {
    pub fn new(evaluator: Evaluator, config: BatchEngineConfig) -> Self {
        Self { evaluator, config }
    }

    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    /// Score every answer. Fails only if a scoring task panics or is cancelled.
    pub async fn run(
        &self,
        answers: &[SubmittedAnswer],
        progress: &dyn ProgressReporter,
    ) -> Result<BatchOutcome> {
        let start = Instant::now();
        let semaphore = Arc::new(Semaphore::new(self.config.parallelism.max(1)));

        let mut futures = FuturesUnordered::new();

        for (index, submitted) in answers.iter().enumerate() {
            let evaluator = self.evaluator.clone();
            let semaphore = Arc::clone(&semaphore);
            let answer = submitted.answer.clone();

            futures.push(async move {
                let inner = async move {
                    let _permit = semaphore
                        .acquire_owned()
                        .await
                        .map_err(|_| anyhow::anyhow!("semaphore closed"))?;

                    // Scoring is CPU-bound; keep it off the async workers.
                    let evaluation =
                        tokio::task::spawn_blocking(move || evaluator.evaluate_answer(&answer))
                            .await
                            .map_err(|e| anyhow::anyhow!("scoring task failed: {e}"))?;
                    anyhow::Ok(evaluation)
                };
                (index, inner.await)
            });
        }

        let mut slots: Vec<Option<Evaluation>> = vec![None; answers.len()];

        while let Some((index, result)) = futures.next().await {
            match result {
                Ok(evaluation) => {
                    progress.on_answer_complete(index, &evaluation);
                    slots[index] = Some(evaluation);
                }
                Err(e) => {
                    tracing::error!("answer #{} failed: {e:#}", index + 1);
                    return Err(e);
                }
            }
        }

        let evaluations = slots
            .into_iter()
            .enumerate()
            .map(|(i, slot)| slot.ok_or_else(|| anyhow::anyhow!("answer #{} was not scored", i + 1)))
            .collect::<Result<Vec<_>>>()?;

        let summary = summarize(&evaluations).ok();
        let elapsed = start.elapsed();
        progress.on_batch_complete(evaluations.len(), elapsed);

        tracing::info!(
            answers = evaluations.len(),
            elapsed_ms = elapsed.as_millis() as u64,
            "batch evaluated"
        );

        Ok(BatchOutcome {
            evaluations,
            summary,
            elapsed,
        })
    }
}
