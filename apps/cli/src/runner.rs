//! Interactive terminal loop: show the quiz, collect answers, grade, and
//! offer another round.

use crate::render::{QuizView, ResultView};
use crate::session::Session;
use quiz_core::Quiz;
use std::fs;
use std::io::{self, BufRead, Write};

/// What to do after a graded round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Redo,
    PracticeMissed,
    New,
    Quit,
}

/// Drives a [`Session`] over line-based input and output.
pub struct Runner<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Runner<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Run rounds on the session's current view until the user quits or
    /// input ends.
    pub fn run(&mut self, session: &mut Session) -> anyhow::Result<()> {
        loop {
            let Some(view) = session.view() else {
                return Ok(());
            };
            writeln!(self.output, "{}", QuizView(view))?;

            let Some(selections) = self.collect_answers(view)? else {
                tracing::debug!("Input ended while answering");
                return Ok(());
            };

            session.submit(&selections)?;
            if let (Some(view), Some(result)) = (session.view(), session.last_grade()) {
                writeln!(self.output, "\n{}\n", ResultView { quiz: view, result })?;
            }

            match self.next_action(session.can_practice_missed())? {
                Action::Redo => {
                    session.redo()?;
                }
                Action::PracticeMissed => {
                    session.practice_missed()?;
                }
                Action::New => {
                    session.reset();
                    if !self.load_new(session)? {
                        return Ok(());
                    }
                }
                Action::Quit => return Ok(()),
            }
            writeln!(self.output)?;
        }
    }

    /// Ask every question in turn. `None` when input ends first.
    fn collect_answers(&mut self, quiz: &Quiz) -> io::Result<Option<Vec<Option<usize>>>> {
        writeln!(
            self.output,
            "Answer with the option number, or press Enter to skip."
        )?;

        let mut selections = Vec::with_capacity(quiz.len());
        for (qi, question) in quiz.questions().iter().enumerate() {
            let count = question.options().len();
            loop {
                write!(self.output, "Question {} [1-{}]: ", qi + 1, count)?;
                self.output.flush()?;

                let Some(line) = self.read_line()? else {
                    return Ok(None);
                };
                if line.is_empty() {
                    selections.push(None);
                    break;
                }
                match line.parse::<usize>() {
                    Ok(n) if (1..=count).contains(&n) => {
                        selections.push(Some(n - 1));
                        break;
                    }
                    _ => writeln!(
                        self.output,
                        "Please enter a number from 1 to {}, or press Enter to skip.",
                        count
                    )?,
                }
            }
        }
        Ok(Some(selections))
    }

    fn next_action(&mut self, can_practice_missed: bool) -> io::Result<Action> {
        loop {
            if can_practice_missed {
                write!(self.output, "[r] redo  [m] practice missed  [n] new  [q] quit: ")?;
            } else {
                write!(self.output, "[r] redo  [n] new  [q] quit: ")?;
            }
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(Action::Quit);
            };
            match line.to_ascii_lowercase().as_str() {
                "r" => return Ok(Action::Redo),
                "m" if can_practice_missed => return Ok(Action::PracticeMissed),
                "m" => writeln!(self.output, "Nothing to practice: every answer was correct.")?,
                "n" => return Ok(Action::New),
                "q" => return Ok(Action::Quit),
                other => writeln!(self.output, "Unknown choice \"{}\".", other)?,
            }
        }
    }

    /// Ask for a quiz file until one loads. `false` when the user gives up
    /// with an empty line or input ends.
    fn load_new(&mut self, session: &mut Session) -> anyhow::Result<bool> {
        loop {
            write!(self.output, "New quiz file (Enter to quit): ")?;
            self.output.flush()?;

            let Some(path) = self.read_line()? else {
                return Ok(false);
            };
            if path.is_empty() {
                return Ok(false);
            }

            let loaded = fs::read_to_string(&path)
                .map_err(anyhow::Error::from)
                .and_then(|text| session.load(&text).map(|_| ()).map_err(Into::into));
            match loaded {
                Ok(()) => return Ok(true),
                Err(e) => {
                    tracing::debug!("Failed to load {}: {}", path, e);
                    writeln!(self.output, "Could not load {}: {}", path, e)?;
                }
            }
        }
    }

    /// Next trimmed input line, `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Consume the runner, returning its output sink.
    pub fn into_output(self) -> W {
        self.output
    }
}
