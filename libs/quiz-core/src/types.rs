//! Core types for the quiz model.

use serde::Serialize;

/// Title used when the text has no `TEST:` line.
pub const DEFAULT_TITLE: &str = "Quiz";

/// Minimum number of answer options per question.
pub const MIN_OPTIONS: usize = 2;

/// Maximum number of answer options per question.
pub const MAX_OPTIONS: usize = 3;

/// A titled, ordered collection of questions.
///
/// Only the parser and the subset builder construct quizzes, so every
/// `Quiz` in circulation holds at least one valid question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quiz {
    title: String,
    questions: Vec<Question>,
}

impl Quiz {
    pub(crate) fn new(title: String, questions: Vec<Question>) -> Self {
        debug_assert!(!questions.is_empty());
        Self { title, questions }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Pairs with `len` (clippy `len_without_is_empty`). Never true for a
    /// quiz built by `parse` or `build_missed_subset`.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// A prompt with 2-3 options, exactly one of which is correct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    text: String,
    options: Vec<String>,
    correct_index: usize,
}

impl Question {
    pub(crate) fn new(text: String, options: Vec<String>, correct_index: usize) -> Self {
        debug_assert!((MIN_OPTIONS..=MAX_OPTIONS).contains(&options.len()));
        debug_assert!(correct_index < options.len());
        Self {
            text,
            options,
            correct_index,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    /// Text of the correct option.
    pub fn correct_option(&self) -> &str {
        &self.options[self.correct_index]
    }
}

/// Outcome of a single question after grading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Correct,
    Incorrect,
    Unanswered,
}

impl Outcome {
    /// Short badge shown next to a graded question.
    pub fn label(self) -> &'static str {
        match self {
            Self::Correct => "Correct",
            Self::Incorrect => "Wrong",
            Self::Unanswered => "No answer",
        }
    }

    /// Whether the question should be offered again in a missed-only round.
    pub fn is_missed(self) -> bool {
        !matches!(self, Self::Correct)
    }
}

/// Result of grading one pass over a quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GradeResult {
    score: usize,
    total: usize,
    outcomes: Vec<Outcome>,
}

impl GradeResult {
    pub(crate) fn from_outcomes(outcomes: Vec<Outcome>) -> Self {
        let score = outcomes.iter().filter(|o| **o == Outcome::Correct).count();
        Self {
            score,
            total: outcomes.len(),
            outcomes,
        }
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    /// Count of questions with the given outcome.
    pub fn count(&self, outcome: Outcome) -> usize {
        self.outcomes.iter().filter(|o| **o == outcome).count()
    }

    /// Indices of incorrect and unanswered questions, in question order.
    pub fn missed_indices(&self) -> Vec<usize> {
        self.outcomes
            .iter()
            .enumerate()
            .filter(|(_, o)| o.is_missed())
            .map(|(i, _)| i)
            .collect()
    }

    pub fn is_perfect(&self) -> bool {
        self.score == self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grade_result_counts_outcomes() {
        let result = GradeResult::from_outcomes(vec![
            Outcome::Correct,
            Outcome::Unanswered,
            Outcome::Incorrect,
            Outcome::Correct,
        ]);
        assert_eq!(result.score(), 2);
        assert_eq!(result.total(), 4);
        assert_eq!(result.count(Outcome::Unanswered), 1);
        assert_eq!(result.missed_indices(), vec![1, 2]);
        assert!(!result.is_perfect());
    }

    #[test]
    fn quiz_len_and_is_empty() {
        let question = Question::new("2+2?".to_string(), vec!["3".into(), "4".into()], 1);
        let quiz = Quiz::new(DEFAULT_TITLE.to_string(), vec![question.clone(), question]);
        assert_eq!(quiz.len(), 2);
        assert!(!quiz.is_empty());
        assert_eq!(quiz.questions()[0].correct_option(), "4");
    }

    #[test]
    fn outcome_labels() {
        assert_eq!(Outcome::Correct.label(), "Correct");
        assert_eq!(Outcome::Incorrect.label(), "Wrong");
        assert_eq!(Outcome::Unanswered.label(), "No answer");
        assert!(Outcome::Unanswered.is_missed());
    }
}
