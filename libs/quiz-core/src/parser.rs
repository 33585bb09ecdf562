//! Line-oriented parser for quiz text.
//!
//! # Format
//! ```text
//! TEST: Geography
//!
//! Q: What covers about 70 percent of the Earth's surface?
//! - Land
//! - *Sea
//! - Ice
//!
//! Which planet is largest?
//! 1) - Mars
//! 2) - *Jupiter
//! ```
//!
//! - The optional first line `TEST:<title>` names the quiz.
//! - A question starts with `Q:` or is any line ending in `?`.
//! - Each option may carry an ordinal (`1.` / `1)`) and a bullet
//!   (`-`, `•`, `–`, `—`). A `*` right after the bullet marks the single
//!   correct option.
//!
//! Markers are matched case-insensitively. Blank lines are ignored
//! everywhere, so they never separate sections.

use crate::error::{ParseError, Result};
use crate::normalize::unify_line_endings;
use crate::types::{Question, Quiz, DEFAULT_TITLE, MAX_OPTIONS, MIN_OPTIONS};

const TITLE_MARKER: &str = "TEST:";
const QUESTION_MARKER: &str = "Q:";
const BULLETS: [char; 4] = ['-', '•', '–', '—'];
const CORRECT_MARKER: char = '*';

/// Parse quiz text into a validated [`Quiz`].
///
/// Fails on the first violated rule; a partial quiz is never returned.
pub fn parse(content: &str) -> Result<Quiz> {
    let content = unify_line_endings(content);
    let lines: Vec<Line<'_>> = content
        .split('\n')
        .enumerate()
        .map(|(idx, raw)| Line {
            number: idx + 1,
            text: raw.trim(),
        })
        .filter(|line| !line.text.is_empty())
        .collect();

    let Some(first) = lines.first() else {
        return Err(ParseError::EmptyInput);
    };

    let mut parser = Parser::new();
    let body = match title_text(first.text) {
        Some(title) => {
            if !title.is_empty() {
                parser.title = title.to_string();
            }
            &lines[1..]
        }
        None => &lines[..],
    };

    for line in body {
        parser.process_line(*line)?;
    }

    parser.finish()
}

#[derive(Debug, Clone, Copy)]
struct Line<'a> {
    number: usize,
    text: &'a str,
}

enum LineType<'a> {
    Question(&'a str),
    Title,
    Answer,
}

impl<'a> LineType<'a> {
    fn classify(text: &'a str) -> Self {
        if let Some(question) = question_text(text) {
            LineType::Question(question)
        } else if title_text(text).is_some() {
            LineType::Title
        } else {
            LineType::Answer
        }
    }
}

/// Remainder of a `TEST:` line, trimmed.
fn title_text(line: &str) -> Option<&str> {
    strip_marker(line, TITLE_MARKER).map(str::trim)
}

/// Question text if the line starts a question.
fn question_text(line: &str) -> Option<&str> {
    match strip_marker(line, QUESTION_MARKER) {
        Some(rest) => Some(rest.trim()),
        None if line.ends_with('?') => Some(line),
        None => None,
    }
}

fn strip_marker<'a>(line: &'a str, marker: &str) -> Option<&'a str> {
    let head = line.get(..marker.len())?;
    if head.eq_ignore_ascii_case(marker) {
        Some(&line[marker.len()..])
    } else {
        None
    }
}

/// Split an option line into its correctness flag and trimmed text.
fn option_text(line: &str) -> (bool, &str) {
    let rest = strip_ordinal(line);
    if let Some(after_bullet) = rest.strip_prefix(&BULLETS[..]) {
        let after_bullet = after_bullet.trim_start();
        if let Some(text) = after_bullet.strip_prefix(CORRECT_MARKER) {
            return (true, text.trim());
        }
        return (false, after_bullet.trim());
    }
    (false, rest.trim())
}

/// Drop a leading `12.` or `12)` followed by whitespace.
fn strip_ordinal(line: &str) -> &str {
    let digits = line.len() - line.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 {
        return line;
    }
    match line[digits..].strip_prefix(&['.', ')'][..]) {
        Some(rest) if rest.starts_with(char::is_whitespace) => rest.trim_start(),
        _ => line,
    }
}

struct QuestionBuilder {
    text: String,
    line: usize,
    options: Vec<String>,
    correct_index: Option<usize>,
}

impl QuestionBuilder {
    fn start(text: &str, line: usize) -> Result<Self> {
        if text.is_empty() {
            return Err(ParseError::EmptyQuestionText { line });
        }
        Ok(Self {
            text: text.to_string(),
            line,
            options: Vec::with_capacity(MAX_OPTIONS),
            correct_index: None,
        })
    }

    fn add_option(&mut self, line: Line<'_>) -> Result<()> {
        let (is_correct, text) = option_text(line.text);
        if text.is_empty() {
            return Err(ParseError::EmptyOptionText {
                line: line.number,
                question: self.text.clone(),
            });
        }

        if is_correct {
            if self.correct_index.is_some() {
                return Err(ParseError::AmbiguousCorrectness {
                    line: line.number,
                    question: self.text.clone(),
                });
            }
            self.correct_index = Some(self.options.len());
        }

        self.options.push(text.to_string());
        Ok(())
    }

    fn build(self) -> Result<Question> {
        let correct_index = self.correct_index.ok_or_else(|| ParseError::MissingCorrectness {
            line: self.line,
            question: self.text.clone(),
        })?;

        let count = self.options.len();
        if !(MIN_OPTIONS..=MAX_OPTIONS).contains(&count) {
            return Err(ParseError::OptionCountOutOfRange {
                line: self.line,
                question: self.text,
                count,
            });
        }

        Ok(Question::new(self.text, self.options, correct_index))
    }
}

enum State {
    ExpectQuestion,
    ExpectOptionOrNextQuestion(QuestionBuilder),
}

struct Parser {
    title: String,
    state: State,
    questions: Vec<Question>,
}

impl Parser {
    fn new() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            state: State::ExpectQuestion,
            questions: Vec::new(),
        }
    }

    fn process_line(&mut self, line: Line<'_>) -> Result<()> {
        let kind = LineType::classify(line.text);

        match std::mem::replace(&mut self.state, State::ExpectQuestion) {
            State::ExpectQuestion => match kind {
                LineType::Question(text) => {
                    let builder = QuestionBuilder::start(text, line.number)?;
                    self.state = State::ExpectOptionOrNextQuestion(builder);
                    Ok(())
                }
                LineType::Title | LineType::Answer => Err(ParseError::MalformedQuestionLine {
                    line: line.number,
                    text: line.text.to_string(),
                }),
            },
            State::ExpectOptionOrNextQuestion(mut builder) => match kind {
                LineType::Answer => {
                    builder.add_option(line)?;
                    self.state = State::ExpectOptionOrNextQuestion(builder);
                    Ok(())
                }
                // End of the option block; the line is re-read as a question.
                LineType::Question(_) | LineType::Title => {
                    self.questions.push(builder.build()?);
                    self.process_line(line)
                }
            },
        }
    }

    fn finish(mut self) -> Result<Quiz> {
        if let State::ExpectOptionOrNextQuestion(builder) = self.state {
            self.questions.push(builder.build()?);
        }

        if self.questions.is_empty() {
            return Err(ParseError::NoQuestionsParsed);
        }

        Ok(Quiz::new(self.title, self.questions))
    }
}
