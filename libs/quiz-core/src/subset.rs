//! Remedial quizzes built from previously missed questions.

use crate::error::QuizError;
use crate::types::Quiz;
use std::collections::HashSet;

/// Suffix appended to the title of a missed-questions quiz.
pub const MISSED_SUFFIX: &str = " - Practice missed";

/// Build a quiz holding only the questions at `missed`, in the given order.
///
/// Questions are copied unchanged from `original`. Running this on a quiz
/// that is itself a missed subset keeps a single title suffix.
pub fn build_missed_subset(original: &Quiz, missed: &[usize]) -> Result<Quiz, QuizError> {
    if missed.is_empty() {
        return Err(QuizError::EmptySubset);
    }

    let mut seen = HashSet::with_capacity(missed.len());
    let questions = missed
        .iter()
        .map(|&index| {
            if !seen.insert(index) {
                return Err(QuizError::DuplicateQuestionIndex(index));
            }
            original
                .questions()
                .get(index)
                .cloned()
                .ok_or(QuizError::QuestionIndexOutOfRange {
                    index,
                    len: original.len(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Quiz::new(missed_title(original.title()), questions))
}

fn missed_title(title: &str) -> String {
    if title.ends_with(MISSED_SUFFIX) {
        title.to_string()
    } else {
        format!("{}{}", title, MISSED_SUFFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use pretty_assertions::assert_eq;

    fn three_questions() -> Quiz {
        parse("TEST: Basics\nQ: a?\n- *1\n- 2\nQ: b?\n- 1\n- *2\nQ: c?\n- 1\n- 2\n- *3").unwrap()
    }

    #[test]
    fn keeps_selected_questions_in_order() {
        let quiz = three_questions();
        let subset = build_missed_subset(&quiz, &[0, 2]).unwrap();
        assert_eq!(subset.title(), "Basics - Practice missed");
        assert_eq!(subset.questions(), &[quiz.questions()[0].clone(), quiz.questions()[2].clone()]);
    }

    #[test]
    fn follows_given_order() {
        let quiz = three_questions();
        let subset = build_missed_subset(&quiz, &[2, 0]).unwrap();
        assert_eq!(subset.questions()[0].text(), "c?");
        assert_eq!(subset.questions()[1].text(), "a?");
    }

    #[test]
    fn full_index_list_copies_every_question() {
        let quiz = three_questions();
        let subset = build_missed_subset(&quiz, &[0, 1, 2]).unwrap();
        assert_eq!(subset.questions(), quiz.questions());
    }

    #[test]
    fn suffix_is_not_repeated() {
        let quiz = three_questions();
        let first = build_missed_subset(&quiz, &[0, 1]).unwrap();
        let second = build_missed_subset(&first, &[1]).unwrap();
        assert_eq!(second.title(), "Basics - Practice missed");
        assert_eq!(second.questions()[0].text(), "b?");
    }

    #[test]
    fn reject_empty_subset() {
        assert_eq!(
            build_missed_subset(&three_questions(), &[]),
            Err(QuizError::EmptySubset)
        );
    }

    #[test]
    fn reject_out_of_range_index() {
        assert_eq!(
            build_missed_subset(&three_questions(), &[1, 3]),
            Err(QuizError::QuestionIndexOutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn reject_duplicate_index() {
        assert_eq!(
            build_missed_subset(&three_questions(), &[1, 1]),
            Err(QuizError::DuplicateQuestionIndex(1))
        );
    }
}
