//! Word-list sentiment provider.
//!
//! Scores text by summing per-word polarities from an AFINN-style table
//! (integers in `-5..=5`). A word directly preceded by a negator ("not",
//! "never", "don't", ...) has its polarity flipped. Verb detection is
//! delegated to [`VerbDetector`].

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use rehearse_core::error::ProviderError;
use rehearse_core::traits::{LexicalProvider, SentimentAnalysis};

use crate::verbs::VerbDetector;

static TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\p{L}\p{N}]+").expect("token pattern is valid"));

/// Built-in word polarities.
const WORD_SCORES: &[(&str, i32)] = &[
    ("able", 1),
    ("accomplish", 2),
    ("accomplished", 2),
    ("achieve", 2),
    ("achieved", 2),
    ("achievement", 2),
    ("admire", 3),
    ("advantage", 2),
    ("agree", 1),
    ("amazing", 4),
    ("appreciate", 2),
    ("appreciated", 2),
    ("awesome", 4),
    ("benefit", 2),
    ("best", 3),
    ("better", 2),
    ("brilliant", 4),
    ("calm", 2),
    ("capable", 1),
    ("care", 2),
    ("celebrate", 3),
    ("clear", 1),
    ("collaborate", 2),
    ("comfortable", 2),
    ("committed", 1),
    ("confident", 2),
    ("creative", 2),
    ("dedicated", 2),
    ("delighted", 3),
    ("eager", 2),
    ("easy", 1),
    ("effective", 2),
    ("efficient", 2),
    ("encourage", 2),
    ("energetic", 2),
    ("enjoy", 2),
    ("enjoyed", 2),
    ("enthusiastic", 3),
    ("excellent", 3),
    ("excited", 3),
    ("exciting", 3),
    ("fantastic", 4),
    ("favorite", 2),
    ("fine", 2),
    ("fun", 4),
    ("glad", 3),
    ("good", 3),
    ("great", 3),
    ("grow", 1),
    ("growth", 2),
    ("happy", 3),
    ("help", 2),
    ("helped", 2),
    ("helpful", 2),
    ("honest", 2),
    ("hope", 2),
    ("ideal", 2),
    ("impressive", 3),
    ("improve", 2),
    ("improved", 2),
    ("improvement", 2),
    ("innovative", 2),
    ("inspired", 2),
    ("interested", 2),
    ("interesting", 2),
    ("like", 2),
    ("love", 3),
    ("loved", 3),
    ("lucky", 3),
    ("motivated", 2),
    ("nice", 3),
    ("opportunity", 2),
    ("optimistic", 2),
    ("passionate", 2),
    ("perfect", 3),
    ("positive", 2),
    ("proud", 2),
    ("reliable", 2),
    ("resolved", 2),
    ("respect", 2),
    ("reward", 2),
    ("rewarding", 2),
    ("satisfied", 2),
    ("skilled", 2),
    ("smart", 1),
    ("solid", 2),
    ("solution", 1),
    ("solved", 1),
    ("strong", 2),
    ("succeed", 3),
    ("succeeded", 3),
    ("success", 2),
    ("successful", 3),
    ("successfully", 3),
    ("support", 2),
    ("supported", 2),
    ("thank", 2),
    ("thanks", 2),
    ("thrilled", 5),
    ("trust", 1),
    ("useful", 2),
    ("valuable", 2),
    ("welcome", 2),
    ("win", 4),
    ("won", 3),
    ("wonderful", 4),
    ("worth", 2),
    // negative
    ("afraid", -2),
    ("angry", -3),
    ("annoyed", -2),
    ("annoying", -2),
    ("anxious", -2),
    ("awful", -3),
    ("bad", -3),
    ("blame", -2),
    ("bored", -2),
    ("boring", -3),
    ("broke", -1),
    ("broken", -1),
    ("bug", -2),
    ("bugs", -2),
    ("careless", -2),
    ("chaos", -2),
    ("complain", -2),
    ("complaint", -2),
    ("confused", -2),
    ("confusing", -2),
    ("conflict", -2),
    ("crisis", -3),
    ("critical", -2),
    ("damage", -3),
    ("delay", -1),
    ("delayed", -1),
    ("difficult", -1),
    ("disagree", -2),
    ("disappointed", -2),
    ("disappointing", -2),
    ("disaster", -2),
    ("dislike", -2),
    ("doubt", -1),
    ("fail", -2),
    ("failed", -2),
    ("failing", -2),
    ("failure", -2),
    ("fear", -2),
    ("fired", -2),
    ("frustrated", -2),
    ("frustrating", -2),
    ("frustration", -2),
    ("hard", -1),
    ("hate", -3),
    ("hated", -3),
    ("hurt", -2),
    ("ignore", -1),
    ("ignored", -2),
    ("impossible", -2),
    ("issue", -1),
    ("lack", -2),
    ("lazy", -1),
    ("lose", -3),
    ("lost", -3),
    ("mess", -2),
    ("miss", -2),
    ("missed", -2),
    ("mistake", -2),
    ("mistakes", -2),
    ("nervous", -2),
    ("pain", -2),
    ("panic", -3),
    ("poor", -2),
    ("pressure", -1),
    ("problem", -2),
    ("problems", -2),
    ("quit", -1),
    ("regret", -2),
    ("reject", -1),
    ("rejected", -1),
    ("risk", -2),
    ("sad", -2),
    ("scared", -2),
    ("stress", -1),
    ("stressed", -2),
    ("stressful", -2),
    ("struggle", -2),
    ("struggled", -2),
    ("stuck", -2),
    ("terrible", -3),
    ("tired", -2),
    ("trouble", -2),
    ("ugly", -3),
    ("unfortunately", -2),
    ("unhappy", -2),
    ("upset", -2),
    ("weak", -2),
    ("weakness", -2),
    ("worried", -3),
    ("worry", -3),
    ("worse", -3),
    ("worst", -3),
    ("wrong", -2),
];

/// Words that flip the polarity of the next word. Apostrophes are removed
/// before lookup, so "don't" is matched as "dont".
const NEGATORS: &[&str] = &[
    "arent", "cannot", "cant", "couldnt", "didnt", "doesnt", "dont", "hadnt", "hasnt",
    "havent", "isnt", "neither", "never", "no", "nobody", "none", "nor", "not", "nothing",
    "shouldnt", "wasnt", "werent", "without", "wont", "wouldnt",
];

/// User-supplied word table, merged over the built-in one.
#[derive(Debug, Deserialize)]
struct WordTableFile {
    #[serde(default)]
    words: HashMap<String, i32>,
}

/// Sentiment and verb provider backed by static word lists.
#[derive(Debug, Clone)]
pub struct AfinnProvider {
    scores: HashMap<String, i32>,
    verbs: VerbDetector,
}

impl AfinnProvider {
    pub fn new() -> Self {
        Self {
            scores: WORD_SCORES
                .iter()
                .map(|(w, s)| ((*w).to_string(), *s))
                .collect(),
            verbs: VerbDetector::default(),
        }
    }

    /// Add or override word polarities.
    pub fn with_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = (S, i32)>,
        S: Into<String>,
    {
        for (word, score) in words {
            self.scores.insert(word.into().to_lowercase(), score.clamp(-5, 5));
        }
        self
    }

    /// Load extra polarities from a TOML file with a `[words]` table.
    pub fn with_word_file(self, path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read word list: {}", path.display()))?;
        let table: WordTableFile = toml::from_str(&content)
            .with_context(|| format!("failed to parse word list: {}", path.display()))?;
        tracing::debug!(
            count = table.words.len(),
            "loaded word polarities from {}",
            path.display()
        );
        Ok(self.with_words(table.words))
    }

    /// Recognise additional base-form verbs.
    pub fn with_extra_verbs<I, S>(mut self, verbs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.verbs = self.verbs.with_extra(verbs);
        self
    }

    pub fn word_score(&self, word: &str) -> Option<i32> {
        self.scores.get(&word.to_lowercase()).copied()
    }
}

impl Default for AfinnProvider {
    fn default() -> Self {
        Self::new()
    }
}

/// Lowercase tokens with apostrophes removed.
fn tokens(text: &str) -> Vec<String> {
    let cleaned = text.to_lowercase().replace(['\'', '\u{2019}'], "");
    TOKEN_RE
        .find_iter(&cleaned)
        .map(|m| m.as_str().to_string())
        .collect()
}

impl LexicalProvider for AfinnProvider {
    fn name(&self) -> &str {
        "lexicon"
    }

    fn analyze(&self, text: &str) -> Result<SentimentAnalysis, ProviderError> {
        let tokens = tokens(text);
        let mut analysis = SentimentAnalysis::default();

        for (i, token) in tokens.iter().enumerate() {
            let Some(&base) = self.scores.get(token) else {
                continue;
            };
            let negated = i > 0 && NEGATORS.contains(&tokens[i - 1].as_str());
            let score = if negated { -base } else { base };

            analysis.score += score;
            if score > 0 {
                analysis.positive.push(token.clone());
            } else if score < 0 {
                analysis.negative.push(token.clone());
            }
        }

        if !tokens.is_empty() {
            analysis.comparative = analysis.score as f64 / tokens.len() as f64;
        }
        Ok(analysis)
    }

    fn verbs_of(&self, text: &str) -> Result<Vec<String>, ProviderError> {
        Ok(self.verbs.detect(&tokens(text)))
    }
}
