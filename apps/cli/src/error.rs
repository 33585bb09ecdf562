//! Error handling for the quiz session.

use quiz_core::{ParseError, QuizError};
use thiserror::Error;

/// Session error types
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("{0}")]
    Parse(#[from] ParseError),

    #[error("Invalid request: {0}")]
    Quiz(#[from] QuizError),

    #[error("No quiz loaded")]
    NoQuiz,

    #[error("Quiz has not been graded yet")]
    NotGraded,

    #[error("No missed questions to practice")]
    NothingMissed,
}

/// Result type alias for session operations
pub type Result<T> = std::result::Result<T, SessionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_passes_message_through() {
        let error = SessionError::from(ParseError::EmptyInput);
        assert_eq!(error.to_string(), "no text to parse");
    }

    #[test]
    fn test_quiz_error_display() {
        let error = SessionError::from(QuizError::EmptySubset);
        assert_eq!(
            error.to_string(),
            "Invalid request: cannot build a quiz from an empty set of questions"
        );
    }

    #[test]
    fn test_error_display_no_quiz() {
        assert_eq!(SessionError::NoQuiz.to_string(), "No quiz loaded");
    }

    #[test]
    fn test_error_display_nothing_missed() {
        assert_eq!(
            SessionError::NothingMissed.to_string(),
            "No missed questions to practice"
        );
    }
}
