use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(propagate_version = true, version, about, long_about = Some(
"quiz - take multiple-choice quizzes written as plain text\n\
--------------------------------------------------------\n\
Questions start with \"Q:\" (or end with \"?\"), answers start with \"- \",\n\
and the single correct answer is written as \"- *Correct answer\"."
))]
pub struct Cli {
    /// whether to enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Take a quiz interactively
    Take {
        /// The quiz file
        file: PathBuf,
    },
    /// Take a quiz from a share link (or its bare payload)
    Open {
        link: String,
    },
    /// Validate a quiz and print a summary
    Check {
        /// The quiz file, or "-" for stdin
        source: PathBuf,
        /// Print the parsed quiz as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the quiz text with asterisk bullets rewritten to dashes
    Normalize {
        /// The quiz file, or "-" for stdin
        source: PathBuf,
    },
    /// Print a share link carrying the quiz text
    Share {
        /// The quiz file, or "-" for stdin
        source: PathBuf,
        /// Base URL of the link (defaults to QUIZ_SHARE_BASE_URL)
        #[arg(long)]
        base_url: Option<String>,
    },
    /// Print the instruction prompt for an AI quiz generator
    Prompt {
        /// Number of questions to ask for
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=50))]
        questions: Option<u32>,
        /// Number of answer options per question
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(2..=3))]
        options: Option<u32>,
    },
    /// Print an example quiz
    Example,
}

impl Cli {
    pub fn get() -> Cli {
        Cli::parse()
    }
}
