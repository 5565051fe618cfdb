//! rehearse-core: Answer scoring, session aggregation, and reports.
//!
//! This crate holds the deterministic evaluation pipeline (tokenizer,
//! per-dimension scorers, feedback synthesis), the session aggregator, the
//! question bank model, and the batch engine that the rest of rehearse
//! builds on.

pub mod clarity;
pub mod completeness;
pub mod confidence;
pub mod engine;
pub mod error;
pub mod evaluator;
pub mod feedback;
pub mod jitter;
pub mod keywords;
pub mod lexicon;
pub mod model;
pub mod parser;
pub mod report;
pub mod sentiment;
pub mod session;
pub mod tokenizer;
pub mod traits;

pub use error::{EvalError, ProviderError};
pub use evaluator::Evaluator;
pub use model::{Answer, Evaluation, SessionSummary};
pub use session::summarize;
