//! Question bank and answer sheet loading.
//!
//! Question banks are TOML files (`[question_set]` plus `[[questions]]`).
//! Answers arrive either as a TOML answer sheet that references a bank by
//! question id, or as the JSON batch payload `{ "answers": [...] }`.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::error::EvalError;
use crate::model::{Answer, AnswerRequest, AnswerSheet, Question, QuestionSet, SubmittedAnswer};

/// Intermediate TOML structure for question bank files.
#[derive(Debug, Deserialize)]
struct TomlQuestionFile {
    question_set: TomlQuestionSetHeader,
    #[serde(default)]
    questions: Vec<Question>,
}

#[derive(Debug, Deserialize)]
struct TomlQuestionSetHeader {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
}

/// Parse a single question bank file.
pub fn parse_question_set(path: &Path) -> Result<QuestionSet> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read question set file: {}", path.display()))?;

    parse_question_set_str(&content, path)
}

/// Parse a question bank from a TOML string.
pub fn parse_question_set_str(content: &str, source_path: &Path) -> Result<QuestionSet> {
    let parsed: TomlQuestionFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    Ok(QuestionSet {
        id: parsed.question_set.id,
        name: parsed.question_set.name,
        description: parsed.question_set.description,
        questions: parsed.questions,
    })
}

/// Recursively load all `.toml` question banks from a directory.
pub fn load_question_directory(dir: &Path) -> Result<Vec<QuestionSet>> {
    let mut sets = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    let mut entries = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
        .collect::<std::io::Result<Vec<_>>>()?;
    entries.sort_by_key(|e| e.path());

    for entry in entries {
        let path = entry.path();

        if path.is_dir() {
            sets.extend(load_question_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_question_set(&path) {
                Ok(set) => sets.push(set),
                Err(e) => {
                    tracing::warn!("skipping {}: {:#}", path.display(), e);
                }
            }
        }
    }

    Ok(sets)
}

/// Load a question bank from a file, or merge every bank in a directory.
pub fn load_questions(path: &Path) -> Result<QuestionSet> {
    if !path.is_dir() {
        return parse_question_set(path);
    }

    let sets = load_question_directory(path)?;
    anyhow::ensure!(
        !sets.is_empty(),
        "no question sets found in {}",
        path.display()
    );
    let mut merged = QuestionSet {
        id: "merged".into(),
        name: sets
            .iter()
            .map(|s| s.name.as_str())
            .collect::<Vec<_>>()
            .join(" + "),
        description: String::new(),
        questions: Vec::new(),
    };
    for set in sets {
        merged.questions.extend(set.questions);
    }
    Ok(merged)
}

/// A warning from question set validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The question ID (if applicable).
    pub question_id: Option<u32>,
    /// Warning message.
    pub message: String,
}

/// Validate a question set for common authoring mistakes.
pub fn validate_question_set(set: &QuestionSet) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if set.questions.is_empty() {
        warnings.push(ValidationWarning {
            question_id: None,
            message: "question set has no questions".into(),
        });
    }

    let mut seen_ids = HashSet::new();
    for q in &set.questions {
        if !seen_ids.insert(q.id) {
            warnings.push(ValidationWarning {
                question_id: Some(q.id),
                message: format!("duplicate question ID: {}", q.id),
            });
        }
    }

    for q in &set.questions {
        if q.question.trim().is_empty() {
            warnings.push(ValidationWarning {
                question_id: Some(q.id),
                message: "question text is empty".into(),
            });
        }

        if q.keywords.is_empty() {
            warnings.push(ValidationWarning {
                question_id: Some(q.id),
                message: "no keywords; relevance will always score 50".into(),
            });
        }

        let mut seen_keywords = HashSet::new();
        for keyword in &q.keywords {
            if keyword.trim().is_empty() {
                warnings.push(ValidationWarning {
                    question_id: Some(q.id),
                    message: "empty keyword matches every answer".into(),
                });
            } else if !seen_keywords.insert(keyword.to_lowercase()) {
                warnings.push(ValidationWarning {
                    question_id: Some(q.id),
                    message: format!("duplicate keyword: {keyword}"),
                });
            }
        }
    }

    warnings
}

// ---------------------------------------------------------------------------
// Answers
// ---------------------------------------------------------------------------

/// Intermediate TOML structure for answer sheets.
#[derive(Debug, Deserialize)]
struct TomlAnswerSheet {
    #[serde(default)]
    session: TomlSessionHeader,
    #[serde(default)]
    answers: Vec<TomlAnswerEntry>,
}

#[derive(Debug, Default, Deserialize)]
struct TomlSessionHeader {
    #[serde(default)]
    name: Option<String>,
    /// Question bank path, relative to the sheet.
    #[serde(default)]
    question_set: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TomlAnswerEntry {
    #[serde(default)]
    question_id: Option<u32>,
    #[serde(default)]
    answer: Option<String>,
    #[serde(default)]
    keywords: Option<Vec<String>>,
    #[serde(default)]
    ideal_word_count: Option<u32>,
}

/// One element of the JSON batch payload.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsonBatchEntry {
    #[serde(default)]
    question_id: Option<u32>,
    #[serde(default)]
    question: Option<String>,
    #[serde(flatten)]
    request: AnswerRequest,
}

/// Parse the JSON batch payload `{ "answers": [ { "answer": ... }, ... ] }`.
pub fn parse_batch_json(content: &str) -> Result<Vec<SubmittedAnswer>> {
    let value: serde_json::Value =
        serde_json::from_str(content).context("failed to parse batch JSON")?;

    let Some(items) = value.get("answers").and_then(|a| a.as_array()) else {
        return Err(EvalError::InvalidInput("answers must be an array".into()).into());
    };

    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let entry: JsonBatchEntry = serde_json::from_value(item.clone())
                .with_context(|| format!("answer #{}: malformed entry", i + 1))?;
            let answer = Answer::try_from(entry.request)
                .with_context(|| format!("answer #{}", i + 1))?;
            Ok(SubmittedAnswer {
                question_id: entry.question_id,
                question: entry.question,
                answer,
            })
        })
        .collect()
}

/// Parse a TOML answer sheet, resolving question ids against `bank`.
pub fn parse_answer_sheet_str(
    content: &str,
    source_path: &Path,
    bank: Option<&QuestionSet>,
) -> Result<AnswerSheet> {
    let parsed: TomlAnswerSheet = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    // A sheet may name its own bank; an explicit one wins.
    let own_bank = match (&parsed.session.question_set, bank) {
        (Some(rel), None) => {
            let base = source_path.parent().unwrap_or_else(|| Path::new("."));
            Some(load_questions(&base.join(rel))?)
        }
        _ => None,
    };
    let bank = bank.or(own_bank.as_ref());

    let answers = parsed
        .answers
        .into_iter()
        .enumerate()
        .map(|(i, entry)| resolve_entry(entry, bank).with_context(|| format!("answer #{}", i + 1)))
        .collect::<Result<Vec<_>>>()?;

    Ok(AnswerSheet {
        name: parsed
            .session
            .name
            .unwrap_or_else(|| file_stem(source_path)),
        answers,
    })
}

fn resolve_entry(entry: TomlAnswerEntry, bank: Option<&QuestionSet>) -> Result<SubmittedAnswer> {
    let question: Option<&Question> = match entry.question_id {
        Some(id) => {
            let bank = bank.ok_or_else(|| {
                anyhow::anyhow!("question_id {id} given but no question set is loaded")
            })?;
            Some(
                bank.get(id)
                    .ok_or_else(|| anyhow::anyhow!("unknown question id: {id}"))?,
            )
        }
        None => None,
    };

    let keywords = entry
        .keywords
        .or_else(|| question.map(|q| q.keywords.clone()));
    let answer = Answer::try_from(AnswerRequest {
        answer: entry.answer,
        keywords,
        ideal_word_count: entry.ideal_word_count,
    })?;

    Ok(SubmittedAnswer {
        question_id: entry.question_id,
        question: question.map(|q| q.question.clone()),
        answer,
    })
}

/// Load answers from a `.json` batch payload or a TOML answer sheet.
pub fn load_answers(path: &Path, bank: Option<&QuestionSet>) -> Result<AnswerSheet> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read answers file: {}", path.display()))?;

    if path.extension().is_some_and(|ext| ext == "json") {
        let mut answers = parse_batch_json(&content)
            .with_context(|| format!("invalid batch file: {}", path.display()))?;
        if let Some(bank) = bank {
            fill_from_bank(&mut answers, bank);
        }
        Ok(AnswerSheet {
            name: file_stem(path),
            answers,
        })
    } else {
        parse_answer_sheet_str(&content, path, bank)
    }
}

/// Fill in question text and missing keywords for answers that carry an id.
fn fill_from_bank(answers: &mut [SubmittedAnswer], bank: &QuestionSet) {
    for submitted in answers {
        let Some(question) = submitted.question_id.and_then(|id| bank.get(id)) else {
            continue;
        };
        if submitted.question.is_none() {
            submitted.question = Some(question.question.clone());
        }
        if submitted.answer.expected_keywords.is_empty() {
            submitted.answer.expected_keywords = question.keywords.clone();
        }
    }
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "session".into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Difficulty, Domain};
    use std::path::PathBuf;

    const VALID_TOML: &str = r#"
[question_set]
id = "hr-basics"
name = "HR Basics"
description = "Common opening questions"

[[questions]]
id = 1
domain = "HR"
question = "Tell me about yourself and your background."
ideal_answer = "Give a brief overview of your education, experience, and goals."
keywords = ["background", "experience", "education", "skills", "career", "goals"]
difficulty = "Easy"

[[questions]]
id = 6
domain = "Technical"
question = "Explain closures in JavaScript."
keywords = ["function", "scope", "variable"]
"#;

    #[test]
    fn parse_valid_toml() {
        let set = parse_question_set_str(VALID_TOML, &PathBuf::from("hr.toml")).unwrap();
        assert_eq!(set.id, "hr-basics");
        assert_eq!(set.questions.len(), 2);
        assert_eq!(set.questions[0].domain, Domain::Hr);
        assert_eq!(set.questions[0].difficulty, Difficulty::Easy);
        assert_eq!(set.questions[1].difficulty, Difficulty::Medium);
        assert_eq!(set.questions[1].time_limit_secs, 120);
        assert!(set.questions[1].ideal_answer.is_none());
    }

    #[test]
    fn parse_malformed_toml() {
        let result = parse_question_set_str("not [valid toml }{", &PathBuf::from("bad.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn validate_flags_authoring_mistakes() {
        let toml = r#"
[question_set]
id = "dupes"
name = "Dupes"

[[questions]]
id = 1
domain = "HR"
question = "  "
keywords = ["Growth", "growth"]

[[questions]]
id = 1
domain = "HR"
question = "Second"
"#;
        let set = parse_question_set_str(toml, &PathBuf::from("d.toml")).unwrap();
        let warnings = validate_question_set(&set);
        let messages: Vec<_> = warnings.iter().map(|w| w.message.as_str()).collect();
        assert!(messages.iter().any(|m| m.contains("duplicate question ID")));
        assert!(messages.iter().any(|m| m.contains("question text is empty")));
        assert!(messages.iter().any(|m| m.contains("duplicate keyword")));
        assert!(messages.iter().any(|m| m.contains("no keywords")));
    }

    #[test]
    fn valid_set_has_no_warnings() {
        let set = parse_question_set_str(VALID_TOML, &PathBuf::from("hr.toml")).unwrap();
        assert!(validate_question_set(&set).is_empty());
    }

    #[test]
    fn load_directory_skips_bad_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("good.toml"), VALID_TOML).unwrap();
        std::fs::write(dir.path().join("bad.toml"), "nope = [").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let sets = load_question_directory(dir.path()).unwrap();
        assert_eq!(sets.len(), 1);
        assert_eq!(sets[0].id, "hr-basics");

        let merged = load_questions(dir.path()).unwrap();
        assert_eq!(merged.questions.len(), 2);
    }

    #[test]
    fn batch_json_requires_an_array() {
        let err = parse_batch_json(r#"{"answers": "nope"}"#).unwrap_err();
        assert_eq!(
            err.downcast_ref::<EvalError>(),
            Some(&EvalError::InvalidInput("answers must be an array".into()))
        );
        assert!(parse_batch_json(r#"{}"#).is_err());
    }

    #[test]
    fn batch_json_entries_need_answer_text() {
        let err = parse_batch_json(r#"{"answers": [{"keywords": ["a"]}]}"#).unwrap_err();
        let root = err.root_cause().downcast_ref::<EvalError>();
        assert!(matches!(root, Some(EvalError::InvalidInput(_))));
    }

    #[test]
    fn batch_json_parses_entries() {
        let json = r#"{"answers": [
            {"answer": "First answer", "keywords": ["first"], "idealWordCount": 80},
            {"answer": "", "questionId": 6, "question": "Closures?"}
        ]}"#;
        let answers = parse_batch_json(json).unwrap();
        assert_eq!(answers.len(), 2);
        assert_eq!(answers[0].answer.expected_keywords, vec!["first"]);
        assert_eq!(answers[0].answer.ideal_word_count, 80);
        assert_eq!(answers[1].question_id, Some(6));
        assert_eq!(answers[1].answer.ideal_word_count, 100);
    }

    #[test]
    fn answer_sheet_resolves_question_ids() {
        let bank = parse_question_set_str(VALID_TOML, &PathBuf::from("hr.toml")).unwrap();
        let sheet = r#"
[session]
name = "Monday practice"

[[answers]]
question_id = 1
answer = "I studied physics and now build data pipelines."

[[answers]]
answer = "Closures capture variables."
keywords = ["capture"]
ideal_word_count = 40
"#;
        let parsed =
            parse_answer_sheet_str(sheet, &PathBuf::from("sheet.toml"), Some(&bank)).unwrap();
        assert_eq!(parsed.name, "Monday practice");
        assert_eq!(parsed.answers[0].answer.expected_keywords.len(), 6);
        assert_eq!(
            parsed.answers[0].question.as_deref(),
            Some("Tell me about yourself and your background.")
        );
        assert_eq!(parsed.answers[1].answer.expected_keywords, vec!["capture"]);
        assert_eq!(parsed.answers[1].answer.ideal_word_count, 40);
    }

    #[test]
    fn answer_sheet_rejects_unknown_question() {
        let bank = parse_question_set_str(VALID_TOML, &PathBuf::from("hr.toml")).unwrap();
        let sheet = "[[answers]]\nquestion_id = 99\nanswer = \"x\"\n";
        let err = parse_answer_sheet_str(sheet, &PathBuf::from("s.toml"), Some(&bank)).unwrap_err();
        assert!(format!("{err:#}").contains("unknown question id: 99"));
    }

    #[test]
    fn answer_sheet_loads_its_own_bank() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("bank.toml"), VALID_TOML).unwrap();
        let sheet_path = dir.path().join("practice.toml");
        std::fs::write(
            &sheet_path,
            "[session]\nquestion_set = \"bank.toml\"\n\n[[answers]]\nquestion_id = 6\nanswer = \"A function keeps its scope.\"\n",
        )
        .unwrap();

        let sheet = load_answers(&sheet_path, None).unwrap();
        assert_eq!(sheet.name, "practice");
        assert_eq!(
            sheet.answers[0].answer.expected_keywords,
            vec!["function", "scope", "variable"]
        );
    }

    #[test]
    fn json_answers_pick_up_bank_keywords() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("batch.json");
        std::fs::write(&path, r#"{"answers": [{"answer": "hi", "questionId": 1}]}"#).unwrap();
        let bank = parse_question_set_str(VALID_TOML, &PathBuf::from("hr.toml")).unwrap();

        let sheet = load_answers(&path, Some(&bank)).unwrap();
        assert_eq!(sheet.name, "batch");
        assert_eq!(sheet.answers[0].answer.expected_keywords.len(), 6);
        assert!(sheet.answers[0].question.is_some());
    }
}
