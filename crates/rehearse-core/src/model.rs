//! Core data model types for rehearse.
//!
//! The evaluation types (`Evaluation`, `DimensionScores`, `SessionSummary`)
//! define the JSON wire contract consumed by callers, so their field names
//! are camelCase and must not change. The question-bank types describe the
//! interview questions answers are graded against.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::EvalError;

/// Ideal answer length used when a request does not specify one.
pub const DEFAULT_IDEAL_WORD_COUNT: u32 = 100;

/// One free-text response to one interview question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub text: String,
    #[serde(default)]
    pub expected_keywords: Vec<String>,
    #[serde(default = "default_ideal_word_count")]
    pub ideal_word_count: u32,
}

impl Answer {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            expected_keywords: Vec::new(),
            ideal_word_count: DEFAULT_IDEAL_WORD_COUNT,
        }
    }

    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expected_keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_ideal_word_count(mut self, count: u32) -> Self {
        self.ideal_word_count = count;
        self
    }
}

fn default_ideal_word_count() -> u32 {
    DEFAULT_IDEAL_WORD_COUNT
}

/// An answer as submitted over the wire, before validation.
///
/// Mirrors the request body the HTTP layer accepts: `answer` is required,
/// the rest fall back to defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRequest {
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub keywords: Option<Vec<String>>,
    #[serde(default)]
    pub ideal_word_count: Option<u32>,
}

impl TryFrom<AnswerRequest> for Answer {
    type Error = EvalError;

    fn try_from(request: AnswerRequest) -> Result<Self, Self::Error> {
        let text = request
            .answer
            .ok_or_else(|| EvalError::InvalidInput("answer text is required".into()))?;
        let ideal_word_count = match request.ideal_word_count {
            Some(0) | None => DEFAULT_IDEAL_WORD_COUNT,
            Some(n) => n,
        };
        Ok(Answer {
            text,
            expected_keywords: request.keywords.unwrap_or_default(),
            ideal_word_count,
        })
    }
}

/// An answer together with the question it responds to, if known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedAnswer {
    #[serde(default)]
    pub question_id: Option<u32>,
    #[serde(default)]
    pub question: Option<String>,
    pub answer: Answer,
}

/// A named sequence of answers from one practice attempt.
#[derive(Debug, Clone)]
pub struct AnswerSheet {
    pub name: String,
    pub answers: Vec<SubmittedAnswer>,
}

/// Per-dimension scores for one answer, each in `0..=100`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionScores {
    pub relevance: u8,
    pub clarity: u8,
    pub completeness: u8,
    pub confidence: u8,
    pub overall: u8,
}

impl DimensionScores {
    /// Build scores from the four dimensions; `overall` is their rounded mean.
    pub fn new(relevance: u8, clarity: u8, completeness: u8, confidence: u8) -> Self {
        let sum = relevance as f64 + clarity as f64 + completeness as f64 + confidence as f64;
        Self {
            relevance,
            clarity,
            completeness,
            confidence,
            overall: (sum / 4.0).round() as u8,
        }
    }
}

/// Whether an expected keyword appears verbatim in the answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordMatch {
    pub keyword: String,
    pub found: bool,
}

/// Polarity profile of an answer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub score: i32,
    /// `score / wordCount`, or 0 for an answer without words.
    pub comparative: f64,
    pub positive: Vec<String>,
    pub negative: Vec<String>,
}

/// The full scored result for one answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    pub scores: DimensionScores,
    pub sentiment: SentimentResult,
    pub feedback: String,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub word_count: usize,
    pub keyword_matches: Vec<KeywordMatch>,
}

/// Mean dimension scores across a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AverageScores {
    pub relevance: u8,
    pub clarity: u8,
    pub completeness: u8,
    pub confidence: u8,
}

/// Session-level aggregate of a sequence of evaluations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub overall_score: u8,
    pub average_scores: AverageScores,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
}

// ---------------------------------------------------------------------------
// Question bank
// ---------------------------------------------------------------------------

/// Interview domain a question belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Domain {
    #[serde(rename = "HR", alias = "hr")]
    Hr,
    #[serde(alias = "technical")]
    Technical,
    #[serde(alias = "behavioral")]
    Behavioral,
    #[serde(alias = "coding")]
    Coding,
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Domain::Hr => write!(f, "HR"),
            Domain::Technical => write!(f, "Technical"),
            Domain::Behavioral => write!(f, "Behavioral"),
            Domain::Coding => write!(f, "Coding"),
        }
    }
}

impl FromStr for Domain {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hr" => Ok(Domain::Hr),
            "technical" | "tech" => Ok(Domain::Technical),
            "behavioral" | "behavioural" => Ok(Domain::Behavioral),
            "coding" => Ok(Domain::Coding),
            other => Err(format!("unknown domain: {other}")),
        }
    }
}

/// Question difficulty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    #[serde(alias = "easy")]
    Easy,
    #[default]
    #[serde(alias = "medium")]
    Medium,
    #[serde(alias = "hard")]
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty: {other}")),
        }
    }
}

/// A single interview question and its grading rubric.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub domain: Domain,
    /// The question text shown to the candidate.
    pub question: String,
    /// Reference answer, shown to candidates after they respond.
    #[serde(default)]
    pub ideal_answer: Option<String>,
    /// Concepts a good answer is expected to mention.
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Suggested time limit for a spoken answer.
    #[serde(default = "default_time_limit")]
    pub time_limit_secs: u32,
}

fn default_time_limit() -> u32 {
    120
}

/// A named collection of questions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionSet {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl QuestionSet {
    pub fn get(&self, id: u32) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// Questions matching the optional domain and difficulty filters.
    pub fn filter(&self, domain: Option<Domain>, difficulty: Option<Difficulty>) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|q| domain.map_or(true, |d| q.domain == d))
            .filter(|q| difficulty.map_or(true, |d| q.difficulty == d))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overall_is_rounded_mean() {
        let scores = DimensionScores::new(100, 70, 85, 60);
        assert_eq!(scores.overall, 79); // 78.75
        let scores = DimensionScores::new(1, 0, 0, 1);
        assert_eq!(scores.overall, 1); // 0.5 rounds up
        assert_eq!(DimensionScores::new(0, 0, 0, 0).overall, 0);
    }

    #[test]
    fn answer_request_requires_text() {
        let err = Answer::try_from(AnswerRequest::default()).unwrap_err();
        assert_eq!(err, EvalError::InvalidInput("answer text is required".into()));
    }

    #[test]
    fn answer_request_defaults() {
        let request: AnswerRequest =
            serde_json::from_str(r#"{"answer": "", "idealWordCount": 0}"#).unwrap();
        let answer = Answer::try_from(request).unwrap();
        assert_eq!(answer.text, "");
        assert!(answer.expected_keywords.is_empty());
        assert_eq!(answer.ideal_word_count, DEFAULT_IDEAL_WORD_COUNT);
    }

    #[test]
    fn evaluation_wire_shape_is_camel_case() {
        let evaluation = Evaluation {
            scores: DimensionScores::new(50, 50, 50, 50),
            sentiment: SentimentResult::default(),
            feedback: String::new(),
            strengths: vec![],
            improvements: vec![],
            word_count: 3,
            keyword_matches: vec![KeywordMatch {
                keyword: "rust".into(),
                found: true,
            }],
        };
        let value = serde_json::to_value(&evaluation).unwrap();
        for field in [
            "scores",
            "sentiment",
            "feedback",
            "strengths",
            "improvements",
            "wordCount",
            "keywordMatches",
        ] {
            assert!(value.get(field).is_some(), "missing field {field}");
        }
        assert_eq!(value["scores"]["overall"], 50);
        assert_eq!(value["keywordMatches"][0]["found"], true);
    }

    #[test]
    fn domain_and_difficulty_parse() {
        assert_eq!("hr".parse::<Domain>().unwrap(), Domain::Hr);
        assert_eq!("Behavioural".parse::<Domain>().unwrap(), Domain::Behavioral);
        assert!("sales".parse::<Domain>().is_err());
        assert_eq!("HARD".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert_eq!(Domain::Hr.to_string(), "HR");
    }

    #[test]
    fn question_set_filter() {
        let q = |id, domain, difficulty| Question {
            id,
            domain,
            question: format!("q{id}"),
            ideal_answer: None,
            keywords: vec![],
            difficulty,
            category: None,
            tags: vec![],
            time_limit_secs: 120,
        };
        let set = QuestionSet {
            id: "s".into(),
            name: "S".into(),
            description: String::new(),
            questions: vec![
                q(1, Domain::Hr, Difficulty::Easy),
                q(2, Domain::Technical, Difficulty::Easy),
                q(3, Domain::Technical, Difficulty::Hard),
            ],
        };
        assert_eq!(set.filter(Some(Domain::Technical), None).len(), 2);
        assert_eq!(set.filter(None, Some(Difficulty::Easy)).len(), 2);
        assert_eq!(set.filter(Some(Domain::Hr), Some(Difficulty::Hard)).len(), 0);
        assert_eq!(set.get(3).map(|q| q.question.as_str()), Some("q3"));
    }
}
