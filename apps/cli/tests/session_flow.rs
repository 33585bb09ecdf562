//! Session flow tests: load, grade, retry missed, redo.

mod common;

use common::fixtures;
use pretty_assertions::assert_eq;
use quiz_cli::error::SessionError;
use quiz_cli::session::Session;
use quiz_core::{Outcome, MISSED_SUFFIX};

#[test]
fn test_load_normalizes_asterisk_bullets() {
    let mut session = Session::new();
    let quiz = session.load(fixtures::ASTERISK_BULLETS).unwrap();

    assert_eq!(quiz.title(), "Geography");
    assert_eq!(quiz.len(), 2);
    assert_eq!(quiz.questions()[0].correct_option(), "Pacific");
    assert_eq!(quiz.questions()[1].correct_option(), "Oslo");
    assert_eq!(quiz.questions()[1].options().len(), 3);
}

#[test]
fn test_grade_then_practice_missed() {
    let mut session = Session::new();
    session.load(fixtures::CANONICAL).unwrap();

    let result = session.submit(&[Some(0), Some(0), None]).unwrap();
    assert_eq!(result.score(), 1);
    assert_eq!(
        result.outcomes(),
        &[Outcome::Correct, Outcome::Incorrect, Outcome::Unanswered]
    );
    assert!(session.can_practice_missed());

    let subset = session.practice_missed().unwrap();
    assert_eq!(subset.title(), format!("Basics{}", MISSED_SUFFIX));
    assert_eq!(subset.len(), 2);
    assert_eq!(subset.questions()[0].text(), "Second?");
    assert_eq!(subset.questions()[1].text(), "Third?");
    assert!(session.last_grade().is_none());

    // The loaded quiz is untouched.
    assert_eq!(session.current().unwrap().len(), 3);
}

#[test]
fn test_missed_rounds_narrow_down() {
    let mut session = Session::new();
    session.load(fixtures::CANONICAL).unwrap();

    session.submit(&[None, None, None]).unwrap();
    session.practice_missed().unwrap();

    // Second round grades the subset, not the loaded quiz.
    assert_eq!(session.view().unwrap().len(), 3);
    session.submit(&[Some(0), Some(1), None]).unwrap();
    let subset = session.practice_missed().unwrap();
    assert_eq!(subset.len(), 1);
    assert_eq!(subset.questions()[0].text(), "Third?");
    assert_eq!(subset.title(), format!("Basics{}", MISSED_SUFFIX));
}

#[test]
fn test_redo_restores_full_quiz() {
    let mut session = Session::new();
    session.load(fixtures::CANONICAL).unwrap();
    session.submit(&[None, Some(1), Some(2)]).unwrap();
    session.practice_missed().unwrap();

    let quiz = session.redo().unwrap();
    assert_eq!(quiz.len(), 3);
    assert_eq!(quiz.title(), "Basics");
    assert!(session.last_grade().is_none());
}

#[test]
fn test_submit_rejects_wrong_sheet() {
    let mut session = Session::new();
    session.load(&fixtures::sample_quiz(4)).unwrap();
    let result = session.submit(&[Some(1)]);
    assert!(matches!(result, Err(SessionError::Quiz(_))));
}

#[test]
fn test_load_error_is_descriptive() {
    let mut session = Session::new();
    let err = session.load("TEST: T\nQ: Pick one?\n- *a\n- *b").unwrap_err();
    assert!(matches!(err, SessionError::Parse(_)));
    assert!(err.to_string().contains("\"Pick one?\""));
}

#[test]
fn test_redo_without_quiz() {
    let mut session = Session::new();
    assert!(matches!(session.redo(), Err(SessionError::NoQuiz)));
}
