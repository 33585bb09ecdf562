//! Rewrites asterisk-bullet answers into the canonical dash syntax.
//!
//! Chat tools often render answer lists with `*` bullets, and mark the
//! correct one with a second asterisk:
//!
//! ```text
//! * Land        ->  - Land
//! * *Sea        ->  - *Sea
//! *  * Sea      ->  - *Sea
//! ```
//!
//! Each line is handled on its own. Lines that are not `*`-bullets pass
//! through with trailing whitespace removed, so normalizing canonical text
//! (or normalizing twice) changes nothing.

/// Convert `\r\n` and lone `\r` line endings to `\n`.
pub(crate) fn unify_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Normalize a whole quiz text.
pub fn normalize(raw: &str) -> String {
    unify_line_endings(raw)
        .split('\n')
        .map(normalize_line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Normalize a single physical line.
pub fn normalize_line(line: &str) -> String {
    let line = line.trim_end();

    let Some(rest) = line.strip_prefix('*') else {
        return line.to_string();
    };
    // A bullet needs whitespace after it; `*bold*` style text is left alone.
    if !rest.starts_with(char::is_whitespace) {
        return line.to_string();
    }

    let rest = rest.trim();
    match rest.strip_prefix('*') {
        Some(correct) => format!("- *{}", correct.trim_start()),
        None => format!("- {}", rest),
    }
}
