//! Authoring helpers: the instruction prompt for an AI quiz generator and
//! a built-in example quiz.

use quiz_core::{MAX_OPTIONS, MIN_OPTIONS};
use thiserror::Error;

/// Upper bound for the question count asked of the generator.
pub const MAX_QUESTIONS: u32 = 50;

/// Example quiz in the asterisk-bullet style chat tools produce.
pub const EXAMPLE_QUIZ: &str = "TEST: Example quiz

Q: What covers about 70 percent of the Earth's surface?
* Land
* *Sea
* Ice

Q: 2 + 2?
* 3
* *4
* 5";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PromptError {
    #[error("question count must be between 1 and 50 (got {0})")]
    Questions(u32),
    #[error("option count must be 2 or 3 (got {0})")]
    Options(u32),
}

/// Build the prompt asking an AI tool for a quiz in the canonical format.
pub fn build_prompt(questions: u32, options: u32) -> Result<String, PromptError> {
    if !(1..=MAX_QUESTIONS).contains(&questions) {
        return Err(PromptError::Questions(questions));
    }
    if !(MIN_OPTIONS..=MAX_OPTIONS).contains(&(options as usize)) {
        return Err(PromptError::Options(options));
    }

    let third = if options == 3 { "- <wrong answer C>\n" } else { "" };

    Ok(format!(
        "You are a quiz generator.

I will attach 1-10 images or photos (for example pages from a book or a worksheet).
Create a quiz based ONLY on the content of the images.

FORMAT (IMPORTANT, follow exactly):

TEST: <short title>

Q: <question 1>
- <wrong answer A>
- *<correct answer>
{third}
RULES:
- Every question must start with \"Q:\"
- Every answer option must start with \"- \"
- Only the correct answer may be written as \"- *Correct answer\"
- All other answers must be written as \"- Wrong answer\"
- Exactly {questions} questions
- Exactly {options} answers per question
- Nothing but this format (no extra headings, no explanations, no markdown)

START NOW."
    ))
}
