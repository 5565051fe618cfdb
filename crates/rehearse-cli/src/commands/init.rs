//! The `rehearse init` command.

use std::path::Path;

use anyhow::Result;

pub fn execute() -> Result<()> {
    if Path::new("rehearse.toml").exists() {
        println!("rehearse.toml already exists, skipping.");
    } else {
        std::fs::write("rehearse.toml", SAMPLE_CONFIG)?;
        println!("Created rehearse.toml");
    }

    std::fs::create_dir_all("questions")?;
    let bank_path = Path::new("questions/sample.toml");
    if bank_path.exists() {
        println!("questions/sample.toml already exists, skipping.");
    } else {
        std::fs::write(bank_path, SAMPLE_QUESTIONS)?;
        println!("Created questions/sample.toml");
    }

    let sheet_path = Path::new("practice.toml");
    if sheet_path.exists() {
        println!("practice.toml already exists, skipping.");
    } else {
        std::fs::write(sheet_path, SAMPLE_ANSWER_SHEET)?;
        println!("Created practice.toml");
    }

    println!("\nNext steps:");
    println!("  1. Run: rehearse validate --questions questions/sample.toml");
    println!("  2. Write your answers into practice.toml");
    println!("  3. Run: rehearse batch --input practice.toml --format all");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# rehearse configuration

# Ideal answer length used by `rehearse evaluate` when none is given.
ideal_word_count = 100

# Answers scored concurrently by `rehearse batch`.
parallelism = 4

# Completeness jitter: "none", "seeded" (stable per answer), or "random".
jitter = "seeded"

# Replace the built-in filler/hedging/assertive phrase tables.
# lexicon_path = "lexicon.toml"

[provider]
type = "lexicon"
# Extra word polarities as a [words] table, e.g. refactor = 2
# afinn_path = "${HOME}/.config/rehearse/words.toml"
extra_verbs = []
"#;

const SAMPLE_QUESTIONS: &str = r#"[question_set]
id = "sample"
name = "Sample Questions"
description = "A few questions to get started"

[[questions]]
id = 1
domain = "HR"
question = "Tell me about yourself and your background."
ideal_answer = "Give a brief overview of your education, experience, key skills, and career goals."
keywords = ["background", "experience", "education", "skills", "career", "goals"]
difficulty = "Easy"

[[questions]]
id = 2
domain = "Behavioral"
question = "Describe a time when you had to meet a tight deadline."
ideal_answer = "Use the STAR method: situation, task, action, result."
keywords = ["deadline", "pressure", "time management", "priority", "result"]
difficulty = "Medium"

[[questions]]
id = 3
domain = "Technical"
question = "What is the difference between HTTP and HTTPS?"
ideal_answer = "HTTPS is HTTP over TLS, which encrypts traffic between client and server."
keywords = ["encryption", "security", "TLS", "secure", "protocol"]
difficulty = "Easy"
"#;

const SAMPLE_ANSWER_SHEET: &str = r#"[session]
name = "First practice"
question_set = "questions/sample.toml"

[[answers]]
question_id = 1
answer = """
I studied computer science and have spent four years building backend services.
I enjoy turning vague requirements into reliable systems, and my goal is to grow into a technical lead.
"""

[[answers]]
question_id = 3
answer = "HTTPS adds TLS encryption on top of HTTP, so traffic cannot be read or modified in transit."
"#;
