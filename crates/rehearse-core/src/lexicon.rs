//! Cue-phrase and filler-word tables used by the heuristic scorers.
//!
//! The tables are plain data so a locale or interview domain can ship its
//! own lexicon as TOML without touching scoring code. Any table omitted from
//! a TOML file keeps its built-in English default.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// A phrase and the score adjustment applied per occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CuePhrase {
    pub phrase: String,
    pub weight: i32,
}

impl CuePhrase {
    pub fn new(phrase: impl Into<String>, weight: i32) -> Self {
        Self {
            phrase: phrase.into(),
            weight,
        }
    }
}

/// Lexical signals consulted by the clarity, confidence, and feedback stages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Lexicon {
    /// Disfluencies that lower clarity when overused.
    pub filler_words: Vec<String>,
    /// Phrases that signal assertiveness.
    pub assertive: Vec<CuePhrase>,
    /// Phrases that signal hedging. Weights are negative.
    pub hedging: Vec<CuePhrase>,
    /// Phrases that introduce a concrete example.
    pub example_cues: Vec<String>,
    /// Phrases that enumerate the steps of a structured answer.
    pub enumeration_cues: Vec<String>,
}

const ASSERTIVE_WEIGHT: i32 = 10;
const HEDGING_WEIGHT: i32 = -8;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            filler_words: strings(&[
                "um",
                "uh",
                "like",
                "you know",
                "actually",
                "basically",
                "literally",
            ]),
            assertive: [
                "i believe",
                "i am confident",
                "certainly",
                "definitely",
                "absolutely",
            ]
            .iter()
            .map(|p| CuePhrase::new(*p, ASSERTIVE_WEIGHT))
            .collect(),
            hedging: [
                "maybe",
                "perhaps",
                "i think",
                "i guess",
                "not sure",
                "probably",
            ]
            .iter()
            .map(|p| CuePhrase::new(*p, HEDGING_WEIGHT))
            .collect(),
            example_cues: strings(&["for example", "for instance", "such as"]),
            enumeration_cues: strings(&[
                "first", "firstly", "second", "secondly", "third", "thirdly", "finally",
            ]),
        }
    }
}

impl Lexicon {
    /// Parse a lexicon from TOML; missing tables keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("failed to parse lexicon TOML")
    }

    /// Load a lexicon from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read lexicon file: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("invalid lexicon file: {}", path.display()))
    }
}
