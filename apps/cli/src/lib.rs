//! Command line front end for quiz-core: loads quiz text, runs interactive
//! sessions in the terminal, and produces share links and authoring
//! prompts.

pub mod cli;
pub mod config;
pub mod error;
pub mod prompt;
pub mod render;
pub mod runner;
pub mod session;
pub mod share;

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Context;
use quiz_core::{normalize, parse, ParseError, Quiz};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::runner::Runner;
use crate::session::Session;

pub fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::get();
    let config = Config::from_env()?;

    let filter = if cli.verbose {
        "debug".to_string()
    } else {
        config.log_filter.clone()
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    execute(cli.command, &config, io::stdin().lock(), io::stdout().lock())
}

/// Run one command against the given input and output.
pub fn execute<R: BufRead, W: Write>(
    command: Command,
    config: &Config,
    mut input: R,
    mut output: W,
) -> anyhow::Result<()> {
    match command {
        Command::Take { file } => {
            let text = fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            start_session(&text, input, output)
                .with_context(|| format!("Failed to run quiz from {}", file.display()))?;
        }
        Command::Open { link } => {
            let text = share::extract_encoded(&link)
                .and_then(|payload| share::decode_quiz(&payload))
                .context("Could not read the quiz from the link")?;
            start_session(&text, input, output)?;
        }
        Command::Check { source, json } => {
            let text = read_source(&source, &mut input)?;
            let parsed = parse(&normalize(&text));
            if json {
                let report = CheckReport::new(&parsed);
                writeln!(output, "{}", serde_json::to_string_pretty(&report)?)?;
            }
            let quiz = parsed?;
            if !json {
                writeln!(
                    output,
                    "OK: \"{}\" with {} questions",
                    quiz.title(),
                    quiz.len()
                )?;
            }
        }
        Command::Normalize { source } => {
            let text = read_source(&source, &mut input)?;
            writeln!(output, "{}", normalize(&text))?;
        }
        Command::Share { source, base_url } => {
            let text = read_source(&source, &mut input)?;
            let base_url = base_url.as_deref().unwrap_or(&config.share_base_url);
            writeln!(output, "{}", share::share_link(base_url, &text)?)?;
        }
        Command::Prompt { questions, options } => {
            let prompt = prompt::build_prompt(
                questions.unwrap_or(config.default_questions),
                options.unwrap_or(config.default_options),
            )?;
            writeln!(output, "{}", prompt)?;
        }
        Command::Example => {
            writeln!(output, "{}", prompt::EXAMPLE_QUIZ)?;
        }
    }
    Ok(())
}

fn start_session<R: BufRead, W: Write>(text: &str, input: R, output: W) -> anyhow::Result<()> {
    let mut session = Session::new();
    session.load(text)?;
    Runner::new(input, output).run(&mut session)
}

/// Read quiz text from a file, or from `input` when the path is `-`.
fn read_source<R: BufRead>(source: &Path, input: &mut R) -> anyhow::Result<String> {
    if source == Path::new("-") {
        let mut text = String::new();
        input
            .read_to_string(&mut text)
            .context("Failed to read quiz text from stdin")?;
        return Ok(text);
    }
    fs::read_to_string(source).with_context(|| format!("Failed to read {}", source.display()))
}

/// JSON body printed by `quiz check --json`.
#[derive(Serialize)]
struct CheckReport<'a> {
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    quiz: Option<&'a Quiz>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<'a> CheckReport<'a> {
    fn new(parsed: &'a Result<Quiz, ParseError>) -> Self {
        match parsed {
            Ok(quiz) => Self {
                valid: true,
                quiz: Some(quiz),
                error: None,
            },
            Err(e) => Self {
                valid: false,
                quiz: None,
                error: Some(e.to_string()),
            },
        }
    }
}
