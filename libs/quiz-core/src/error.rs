//! Error types for quiz-core.

use thiserror::Error;

/// Result type alias using ParseError.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors that can occur while parsing quiz text.
///
/// Every variant names the offending line or question verbatim so the
/// message can be shown to the author as is. Line numbers are 1-based and
/// refer to the physical line in the input, blank lines included.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("no text to parse")]
    EmptyInput,

    #[error("expected a question at line {line} but got: \"{text}\"")]
    MalformedQuestionLine { line: usize, text: String },

    #[error("empty question text at line {line}")]
    EmptyQuestionText { line: usize },

    #[error("empty answer at line {line} in question \"{question}\"")]
    EmptyOptionText { line: usize, question: String },

    #[error(
        "more than one correct answer in question \"{question}\" (second one at line {line}); \
         only one option may be written as \"- *Correct answer\""
    )]
    AmbiguousCorrectness { line: usize, question: String },

    #[error(
        "no correct answer marked in question \"{question}\" (line {line}); \
         write the correct answer as \"- *Correct answer\""
    )]
    MissingCorrectness { line: usize, question: String },

    #[error("\"{question}\" (line {line}) must have 2-3 answer options (has {count})")]
    OptionCountOutOfRange {
        line: usize,
        question: String,
        count: usize,
    },

    #[error("no questions found")]
    NoQuestionsParsed,
}

/// Errors raised when grading or deriving quizzes with arguments that do not
/// fit the quiz they refer to.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("expected {expected} selections, got {actual}")]
    SelectionCountMismatch { expected: usize, actual: usize },

    #[error("selection {selected} for question {question} is out of range ({options} options)")]
    SelectionOutOfRange {
        question: usize,
        selected: usize,
        options: usize,
    },

    #[error("cannot build a quiz from an empty set of questions")]
    EmptySubset,

    #[error("question index {index} is out of range ({len} questions)")]
    QuestionIndexOutOfRange { index: usize, len: usize },

    #[error("question index {0} appears more than once")]
    DuplicateQuestionIndex(usize),
}
