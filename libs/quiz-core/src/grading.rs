//! Grading of user selections against a quiz.

use crate::error::QuizError;
use crate::types::{GradeResult, Outcome, Quiz};

/// Grade one answer sheet.
///
/// `selections` holds one entry per question, `None` meaning no answer was
/// given. A sheet of the wrong length or an index that was never offered as
/// an option is a caller bug and is reported as [`QuizError`].
pub fn grade(quiz: &Quiz, selections: &[Option<usize>]) -> Result<GradeResult, QuizError> {
    if selections.len() != quiz.len() {
        return Err(QuizError::SelectionCountMismatch {
            expected: quiz.len(),
            actual: selections.len(),
        });
    }

    let outcomes = quiz
        .questions()
        .iter()
        .zip(selections)
        .enumerate()
        .map(|(idx, (question, selection))| match *selection {
            None => Ok(Outcome::Unanswered),
            Some(selected) if selected >= question.options().len() => {
                Err(QuizError::SelectionOutOfRange {
                    question: idx,
                    selected,
                    options: question.options().len(),
                })
            }
            Some(selected) if selected == question.correct_index() => Ok(Outcome::Correct),
            Some(_) => Ok(Outcome::Incorrect),
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(GradeResult::from_outcomes(outcomes))
}
