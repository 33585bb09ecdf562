//! Common test utilities shared by the integration tests.

#![allow(dead_code)]

pub mod fixtures;

use std::io::Cursor;

use quiz_cli::runner::Runner;
use quiz_cli::session::Session;

/// Load `quiz_text` into a fresh session and drive it with scripted input.
///
/// Returns the session after the run and everything written to the terminal.
pub fn run_scripted(quiz_text: &str, input: &str) -> (Session, String) {
    let mut session = Session::new();
    session.load(quiz_text).expect("fixture quiz should parse");

    let mut runner = Runner::new(Cursor::new(input.to_string()), Vec::new());
    runner.run(&mut session).expect("runner should not fail");

    let output = String::from_utf8(runner.into_output()).expect("output is UTF-8");
    (session, output)
}
