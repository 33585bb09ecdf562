//! Core quiz library used by the `quiz` command line app.
//!
//! Provides:
//! - Normalizer for asterisk-bullet answer lists
//! - Line-oriented parser for quiz text
//! - Grading of answer sheets
//! - Missed-question subsets for re-study
//! - Shared types (Quiz, Question, GradeResult, Outcome)
//!
//! Everything here is synchronous and free of I/O.

pub mod error;
pub mod grading;
pub mod normalize;
pub mod parser;
pub mod subset;
pub mod types;

pub use error::{ParseError, QuizError, Result};
pub use grading::grade;
pub use normalize::{normalize, normalize_line};
pub use parser::parse;
pub use subset::{build_missed_subset, MISSED_SUFFIX};
pub use types::{GradeResult, Outcome, Question, Quiz, DEFAULT_TITLE, MAX_OPTIONS, MIN_OPTIONS};
