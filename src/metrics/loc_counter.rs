//! Line counting for maintainability scoring.
//!
//! # Counting Rules
//!
//! - **Physical lines**: segments of the text split on `'\n'`. A trailing
//!   separator yields a trailing empty segment, and the empty text is one
//!   (empty) line. `"\r"` is left attached to its line.
//! - **Comment lines**: lines whose whitespace-trimmed form starts with `//`
//!   or `/*`. Continuation lines of a block comment are *not* tracked; they
//!   only count when they themselves start with a marker.
//! - **Code lines**: everything else, blank lines included.
//!
//! The invariant `physical_lines == code_lines + comment_lines` always holds.

/// Markers that make a line a comment line
pub const COMMENT_MARKERS: [&str; 2] = ["//", "/*"];

/// Split text into line segments on `'\n'`
pub fn split_lines(content: &str) -> std::str::Split<'_, char> {
    content.split('\n')
}

/// Number of `'\n'`-separated segments, i.e. separator count + 1
pub fn count_lines(content: &str) -> usize {
    split_lines(content).count()
}

/// Whether a raw line is a comment line
pub fn is_comment_line(line: &str) -> bool {
    let trimmed = line.trim();
    COMMENT_MARKERS
        .iter()
        .any(|marker| trimmed.starts_with(marker))
}

/// Line counts for one text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LocCount {
    /// Raw segment count
    pub physical_lines: usize,
    /// Lines that are not comment lines
    pub code_lines: usize,
    /// Lines starting with a comment marker
    pub comment_lines: usize,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LocCounter;

impl LocCounter {
    pub fn new() -> Self {
        Self
    }

    /// Count lines in text (pure function)
    pub fn count_content(&self, content: &str) -> LocCount {
        let mut physical_lines = 0;
        let mut comment_lines = 0;

        for line in split_lines(content) {
            physical_lines += 1;
            if is_comment_line(line) {
                comment_lines += 1;
            }
        }

        LocCount {
            physical_lines,
            code_lines: physical_lines - comment_lines,
            comment_lines,
        }
    }
}
