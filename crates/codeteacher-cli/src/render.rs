//! Terminal rendering utilities.

use codeteacher_sandbox::terminal::{OUTPUT_PLACEHOLDER, UNSUPPORTED_NOTICE};
use codeteacher_sandbox::{OutputLine, PracticeTerminal};
use console::style;

/// Format one output line with its prompt marker.
pub fn format_line(line: &OutputLine) -> String {
    let marker = style(">").dim();
    if line.is_error {
        format!("{} {}", marker, style(&line.text).red())
    } else {
        format!("{} {}", marker, line.text)
    }
}

/// Print the terminal panel: heading, then output or the unsupported notice.
pub fn render_terminal(terminal: &PracticeTerminal) {
    println!("{}", style(terminal.title()).bold());

    if !terminal.is_supported() {
        println!("{}", style(UNSUPPORTED_NOTICE).dim());
        return;
    }

    if terminal.output().is_empty() {
        println!("{}", style(OUTPUT_PLACEHOLDER).dim());
        return;
    }

    for line in terminal.output() {
        println!("{}", format_line(line));
    }
}
