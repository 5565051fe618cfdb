//! rehearse CLI: score interview practice answers from the command line.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "rehearse", version, about = "Interview answer evaluation and feedback")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a single answer
    Evaluate {
        /// Answer text
        #[arg(long, conflicts_with = "answer_file", required_unless_present = "answer_file")]
        answer: Option<String>,

        /// Read the answer text from a file
        #[arg(long)]
        answer_file: Option<PathBuf>,

        /// Expected keywords (comma-separated)
        #[arg(long)]
        keywords: Option<String>,

        /// Ideal answer length in words
        #[arg(long)]
        ideal_word_count: Option<u32>,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Evaluate a session of answers and write a report
    Batch {
        /// Answers: a `.json` batch payload or a TOML answer sheet
        #[arg(long)]
        input: PathBuf,

        /// Question bank file or directory, for answers that reference question ids
        #[arg(long)]
        questions: Option<PathBuf>,

        /// Output directory
        #[arg(long, default_value = "./rehearse-results")]
        output: PathBuf,

        /// Output format: json, html, all
        #[arg(long, default_value = "json")]
        format: String,

        /// Max answers scored concurrently
        #[arg(long)]
        parallelism: Option<usize>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List questions in a question bank
    Questions {
        /// Question bank file or directory
        #[arg(long)]
        questions: PathBuf,

        /// Only this domain (HR, Technical, Behavioral, Coding)
        #[arg(long)]
        domain: Option<String>,

        /// Only this difficulty (Easy, Medium, Hard)
        #[arg(long)]
        difficulty: Option<String>,
    },

    /// Validate question bank TOML files
    Validate {
        /// Question bank file or directory
        #[arg(long)]
        questions: PathBuf,
    },

    /// Compare two session reports
    Compare {
        /// Baseline report JSON
        #[arg(long)]
        baseline: PathBuf,

        /// Current report JSON
        #[arg(long)]
        current: PathBuf,

        /// Change in overall score (points) that counts as significant
        #[arg(long, default_value = "5")]
        threshold: f64,

        /// Exit code 1 if regressions found
        #[arg(long)]
        fail_on_regression: bool,

        /// Output format: text, json, markdown
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Create starter config and sample question bank
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("rehearse=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Evaluate {
            answer,
            answer_file,
            keywords,
            ideal_word_count,
            format,
            config,
        } => commands::evaluate::execute(
            answer,
            answer_file,
            keywords,
            ideal_word_count,
            format,
            config,
        ),
        Commands::Batch {
            input,
            questions,
            output,
            format,
            parallelism,
            config,
        } => commands::batch::execute(input, questions, output, format, parallelism, config).await,
        Commands::Questions {
            questions,
            domain,
            difficulty,
        } => commands::questions::execute(questions, domain, difficulty),
        Commands::Validate { questions } => commands::validate::execute(questions),
        Commands::Compare {
            baseline,
            current,
            threshold,
            fail_on_regression,
            format,
        } => commands::compare::execute(baseline, current, threshold, fail_on_regression, format),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
