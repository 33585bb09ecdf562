//! Quiz session state.
//!
//! The session owns everything that changes between user actions: the quiz
//! that was loaded, the quiz currently on screen (the loaded one or a
//! missed-questions subset) and the most recent grade. The core functions
//! it calls stay stateless.

use crate::error::{Result, SessionError};
use quiz_core::{build_missed_subset, grade, normalize, parse, GradeResult, Quiz};

/// State of one quiz session.
#[derive(Debug, Default)]
pub struct Session {
    current: Option<Quiz>,
    view: Option<Quiz>,
    last_grade: Option<GradeResult>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize and parse `raw`, replacing the loaded quiz.
    ///
    /// On failure the previous state is kept.
    pub fn load(&mut self, raw: &str) -> Result<&Quiz> {
        let quiz = parse(&normalize(raw))?;
        tracing::info!(
            "Loaded quiz \"{}\" with {} questions",
            quiz.title(),
            quiz.len()
        );

        self.current = Some(quiz.clone());
        self.last_grade = None;
        Ok(&*self.view.insert(quiz))
    }

    /// The quiz as loaded.
    pub fn current(&self) -> Option<&Quiz> {
        self.current.as_ref()
    }

    /// The quiz currently presented.
    pub fn view(&self) -> Option<&Quiz> {
        self.view.as_ref()
    }

    pub fn last_grade(&self) -> Option<&GradeResult> {
        self.last_grade.as_ref()
    }

    /// Grade the presented quiz.
    pub fn submit(&mut self, selections: &[Option<usize>]) -> Result<&GradeResult> {
        let view = self.view.as_ref().ok_or(SessionError::NoQuiz)?;
        let result = grade(view, selections)?;
        tracing::info!("Graded \"{}\": {} / {}", view.title(), result.score(), result.total());
        Ok(&*self.last_grade.insert(result))
    }

    /// Whether the last grade left anything to practice.
    pub fn can_practice_missed(&self) -> bool {
        self.last_grade
            .as_ref()
            .is_some_and(|result| !result.is_perfect())
    }

    /// Present the loaded quiz again from the start.
    pub fn redo(&mut self) -> Result<&Quiz> {
        let current = self.current.clone().ok_or(SessionError::NoQuiz)?;
        self.last_grade = None;
        Ok(&*self.view.insert(current))
    }

    /// Present only the questions missed in the last grade.
    pub fn practice_missed(&mut self) -> Result<&Quiz> {
        let result = self.last_grade.as_ref().ok_or(SessionError::NotGraded)?;
        let missed = result.missed_indices();
        if missed.is_empty() {
            return Err(SessionError::NothingMissed);
        }

        let view = self.view.as_ref().ok_or(SessionError::NoQuiz)?;
        let subset = build_missed_subset(view, &missed)?;
        tracing::debug!("Practicing {} missed questions", subset.len());

        self.last_grade = None;
        Ok(&*self.view.insert(subset))
    }

    /// Drop everything and start over.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_QUESTIONS: &str = "TEST: T\nQ: a?\n- *1\n- 2\nQ: b?\n- 1\n- *2";

    #[test]
    fn load_sets_current_and_view() {
        let mut session = Session::new();
        session.load(TWO_QUESTIONS).unwrap();
        assert_eq!(session.current(), session.view());
        assert!(session.last_grade().is_none());
    }

    #[test]
    fn failed_load_keeps_previous_quiz() {
        let mut session = Session::new();
        session.load(TWO_QUESTIONS).unwrap();
        assert!(session.load("Q: broken?\n- a\n- b").is_err());
        assert_eq!(session.current().map(Quiz::title), Some("T"));
    }

    #[test]
    fn submit_without_quiz() {
        let mut session = Session::new();
        assert!(matches!(session.submit(&[]), Err(SessionError::NoQuiz)));
    }

    #[test]
    fn practice_missed_requires_grade() {
        let mut session = Session::new();
        session.load(TWO_QUESTIONS).unwrap();
        assert!(matches!(
            session.practice_missed(),
            Err(SessionError::NotGraded)
        ));
    }

    #[test]
    fn practice_missed_after_perfect_score() {
        let mut session = Session::new();
        session.load(TWO_QUESTIONS).unwrap();
        session.submit(&[Some(0), Some(1)]).unwrap();
        assert!(!session.can_practice_missed());
        assert!(matches!(
            session.practice_missed(),
            Err(SessionError::NothingMissed)
        ));
    }

    #[test]
    fn reset_clears_everything() {
        let mut session = Session::new();
        session.load(TWO_QUESTIONS).unwrap();
        session.submit(&[None, None]).unwrap();
        session.reset();
        assert!(session.current().is_none());
        assert!(session.view().is_none());
        assert!(session.last_grade().is_none());
    }
}
