//! Shared styling helpers for CLI output.

use std::io::IsTerminal;

use owo_colors::OwoColorize;

/// Red, when stderr is a terminal.
pub fn error(text: impl AsRef<str>) -> String {
    let text = text.as_ref();
    if std::io::stderr().is_terminal() {
        format!("{}", text.red())
    } else {
        text.to_string()
    }
}

/// Cyan, when stdout is a terminal.
pub fn accent(text: impl AsRef<str>) -> String {
    let text = text.as_ref();
    if std::io::stdout().is_terminal() {
        format!("{}", text.cyan())
    } else {
        text.to_string()
    }
}
