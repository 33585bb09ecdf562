//! Plain-text rendering of quizzes and grades.

use quiz_core::{GradeResult, Quiz};
use std::fmt;

/// Displays a quiz as a numbered form.
pub struct QuizView<'a>(pub &'a Quiz);

impl fmt::Display for QuizView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let quiz = self.0;
        writeln!(f, "{}", quiz.title())?;
        writeln!(f, "{}", "=".repeat(quiz.title().chars().count()))?;

        for (qi, question) in quiz.questions().iter().enumerate() {
            writeln!(f)?;
            writeln!(f, "{}. {}", qi + 1, question.text())?;
            for (oi, option) in question.options().iter().enumerate() {
                writeln!(f, "   {}) {}", oi + 1, option)?;
            }
        }
        Ok(())
    }
}

/// Displays each question with its outcome badge, then the score.
pub struct ResultView<'a> {
    pub quiz: &'a Quiz,
    pub result: &'a GradeResult,
}

impl fmt::Display for ResultView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (qi, (question, outcome)) in self
            .quiz
            .questions()
            .iter()
            .zip(self.result.outcomes())
            .enumerate()
        {
            writeln!(f, "{}. {} [{}]", qi + 1, question.text(), outcome.label())?;
        }
        writeln!(f)?;
        write!(f, "Score: {} / {}", self.result.score(), self.result.total())
    }
}
