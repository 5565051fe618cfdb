//! The `rehearse questions` command.

use std::path::PathBuf;

use anyhow::Result;

use rehearse_core::model::{Difficulty, Domain};
use rehearse_core::parser::load_questions;

pub fn execute(
    questions_path: PathBuf,
    domain: Option<String>,
    difficulty: Option<String>,
) -> Result<()> {
    use comfy_table::{Cell, Table};

    let domain = domain
        .map(|d| d.parse::<Domain>())
        .transpose()
        .map_err(anyhow::Error::msg)?;
    let difficulty = difficulty
        .map(|d| d.parse::<Difficulty>())
        .transpose()
        .map_err(anyhow::Error::msg)?;

    let set = load_questions(&questions_path)?;
    let selected = set.filter(domain, difficulty);

    let mut table = Table::new();
    table.set_header(vec!["ID", "Domain", "Difficulty", "Question", "Keywords"]);
    for q in &selected {
        table.add_row(vec![
            Cell::new(q.id),
            Cell::new(q.domain),
            Cell::new(q.difficulty),
            Cell::new(&q.question),
            Cell::new(q.keywords.join(", ")),
        ]);
    }

    println!("{table}");
    println!("{} of {} question(s)", selected.len(), set.questions.len());

    Ok(())
}
