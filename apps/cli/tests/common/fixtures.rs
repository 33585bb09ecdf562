//! Test fixtures and factory functions for creating quiz text.

/// Three-question quiz in canonical syntax; the correct answers are
/// options 1, 2 and 3 respectively.
pub const CANONICAL: &str = "TEST: Basics

Q: First?
- *one
- two

Q: Second?
- one
- *two

Q: Third?
- one
- two
- *three";

/// The same kind of quiz as a chat tool writes it.
pub const ASTERISK_BULLETS: &str = "TEST: Geography\r\n\r\nQ: Largest ocean?\r\n* Atlantic\r\n* *Pacific\r\n\r\nQ: Capital of Norway?\r\n*  * Oslo\r\n* Bergen\r\n* Trondheim";

/// Generate quiz text with `num_questions` two-option questions whose
/// correct answer is always the second option.
pub fn sample_quiz(num_questions: usize) -> String {
    let mut text = String::from("TEST: Sample");
    for i in 0..num_questions {
        text.push_str(&format!("\nQ: Question {}?\n- wrong {}\n- *right {}", i + 1, i + 1, i + 1));
    }
    text
}
