//! Plaintext (`.cells`) pattern file reading

use crate::io::configuration::{COMMENT_MARKER, LINE_SEPARATOR};
use crate::io::error::{Result, WithPath};
use std::path::Path;

const NAME_PREFIX: &str = "Name:";

/// Contents of a plaintext pattern file split into header and grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaintextPattern {
    /// Value of a `!Name:` header line, if present
    pub name: Option<String>,
    /// Remaining comment lines without their `!` marker, joined by newlines
    pub comments: String,
    /// Bare grid text ready for decoding
    pub grid: String,
}

/// Reduce plaintext file contents to bare grid text
///
/// Drops `!` comment lines, normalises `\r\n` line endings, and removes
/// trailing empty lines so a final newline does not add a row to the decoded
/// board.
pub fn strip_comments(contents: &str) -> String {
    let mut lines: Vec<&str> = contents
        .lines()
        .filter(|line| !line.starts_with(COMMENT_MARKER))
        .collect();
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    join_lines(&lines)
}

/// Split plaintext file contents into name, comments and grid text
pub fn parse_plaintext(contents: &str) -> PlaintextPattern {
    let mut name = None;
    let mut comments = Vec::new();

    for comment in contents
        .lines()
        .filter_map(|line| line.strip_prefix(COMMENT_MARKER))
    {
        match comment.strip_prefix(NAME_PREFIX) {
            Some(value) if name.is_none() => name = Some(value.trim().to_string()),
            _ => comments.push(comment.trim()),
        }
    }

    PlaintextPattern {
        name,
        comments: join_lines(&comments),
        grid: strip_comments(contents),
    }
}

/// Read and parse a plaintext pattern file
///
/// # Errors
///
/// Returns an error if the file cannot be read
pub fn read_pattern_file(path: &Path) -> Result<PlaintextPattern> {
    let contents = std::fs::read_to_string(path).with_path(path, "read pattern")?;
    Ok(parse_plaintext(&contents))
}

fn join_lines(lines: &[&str]) -> String {
    let mut text = String::new();
    for (index, line) in lines.iter().enumerate() {
        if index > 0 {
            text.push(LINE_SEPARATOR);
        }
        text.push_str(line);
    }
    text
}
