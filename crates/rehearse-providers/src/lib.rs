//! rehearse-providers: Lexical providers and configuration.
//!
//! Implements the `LexicalProvider` trait with a word-list sentiment scorer
//! and dictionary verb detector, and turns a `rehearse.toml` into a
//! configured `Evaluator`.

pub mod afinn;
pub mod config;
pub mod mock;
pub mod verbs;

pub use afinn::AfinnProvider;
pub use rehearse_core::error::ProviderError;
pub use config::{
    build_evaluator, create_provider, load_config, load_config_from, ProviderConfig,
    RehearseConfig,
};
