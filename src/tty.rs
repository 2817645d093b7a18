//! Terminal I/O utilities for CLI.
//!
//! Provides TTY detection and user prompting.

use std::io::{self, BufRead, IsTerminal, Write};

pub fn is_stdin_tty() -> bool {
    io::stdin().is_terminal()
}

pub fn is_stdout_tty() -> bool {
    io::stdout().is_terminal()
}

/// Wizards only prompt when a person is on both ends of the terminal.
pub fn can_prompt() -> bool {
    is_stdin_tty() && is_stdout_tty()
}

pub fn prompt(message: &str) -> leadctl::Result<String> {
    eprint!("{}", message);
    io::stderr().flush().ok();

    let stdin = io::stdin();
    let mut line = String::new();
    stdin.lock().read_line(&mut line).map_err(|e| {
        leadctl::Error::internal_io(
            format!("Failed to read input: {}", e),
            Some("read prompt".to_string()),
        )
    })?;

    Ok(line.trim().to_string())
}

/// Prompt showing `default` in brackets; empty input accepts the default.
pub fn prompt_with_default(label: &str, default: Option<&str>) -> leadctl::Result<Option<String>> {
    let answer = match default {
        Some(d) if !d.is_empty() => prompt(&format!("{} [{}]: ", label, d))?,
        _ => prompt(&format!("{}: ", label))?,
    };

    if answer.is_empty() {
        Ok(default.filter(|d| !d.is_empty()).map(str::to_string))
    } else {
        Ok(Some(answer))
    }
}

/// Print status message to stderr if running in a terminal.
pub fn status(message: &str) {
    if io::stderr().is_terminal() {
        eprintln!("{}", message);
    }
}
