//! Boundary-aware occurrence counting.
//!
//! Keywords must stand alone: `if` in `if (x)` counts, `if` in `ifValue` or
//! `elif` does not. The boundary test is an explicit look at the neighbouring
//! characters rather than a regex `\b`, so the notion of an identifier
//! character is the same everywhere (Unicode alphanumerics, `_` and `$`).

/// Branching keywords counted as whole words
pub const BRANCH_KEYWORDS: [&str; 8] = [
    "if", "else", "for", "while", "do", "switch", "case", "catch",
];

/// Operators counted as plain substrings
pub const BRANCH_OPERATORS: [&str; 4] = ["&&", "||", "?", "??"];

/// Whether `c` can be part of an identifier
pub fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

/// Count non-overlapping occurrences of `word` that are not glued to
/// identifier characters on either side.
pub fn count_whole_word(text: &str, word: &str) -> usize {
    if word.is_empty() {
        return 0;
    }

    text.match_indices(word)
        .filter(|(start, matched)| {
            let end = start + matched.len();
            let before = text[..*start].chars().next_back();
            let after = text[end..].chars().next();
            !before.is_some_and(is_identifier_char) && !after.is_some_and(is_identifier_char)
        })
        .count()
}

/// Count non-overlapping occurrences of `needle` anywhere in `text`
pub fn count_substring(text: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    text.matches(needle).count()
}
