use serde::{Deserialize, Serialize};

/// Cursor position; both fields are zero-based, `column` counts characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Text of the given line without its terminator.
///
/// A trailing newline still counts as starting an (empty) last line.
pub fn line_at(document: &str, line: usize) -> Option<&str> {
    document
        .split('\n')
        .nth(line)
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
}

/// The part of `line` before the cursor. Columns past the end clamp to the
/// whole line.
pub fn prefix_before(line: &str, column: usize) -> &str {
    match line.char_indices().nth(column) {
        Some((byte, _)) => &line[..byte],
        None => line,
    }
}
