use crate::core::Issue;
use crate::metrics::split_lines;

/// Lines longer than this many characters are reported
pub const MAX_LINE_LENGTH: usize = 100;

pub const LONG_LINE_MESSAGE: &str = "Line is too long (over 100 characters)";
pub const DEBUG_PRINT_MARKER: &str = "console.log";
pub const DEBUG_PRINT_MESSAGE: &str =
    "Consider removing console.log statements in production code";
pub const TODO_MARKER: &str = "TODO";
pub const TODO_MESSAGE: &str = "TODO comment found";

/// A per-line check producing at most one issue
pub type LineDetector = fn(&str, usize) -> Option<Issue>;

/// Detectors in reporting order
pub const LINE_DETECTORS: [LineDetector; 3] =
    [detect_long_line, detect_debug_print, detect_todo_marker];

/// Scan every line and collect issues in line order.
///
/// Within a line, issues follow [`LINE_DETECTORS`] order. Matching is plain
/// substring containment on the raw line, so markers inside string literals
/// are reported just like markers in comments.
pub fn detect_issues(content: &str) -> Vec<Issue> {
    split_lines(content)
        .enumerate()
        .flat_map(|(index, line)| detect_line_issues(line, index + 1))
        .collect()
}

/// Run all detectors against a single line
pub fn detect_line_issues(line: &str, line_number: usize) -> Vec<Issue> {
    LINE_DETECTORS
        .iter()
        .filter_map(|detector| detector(line, line_number))
        .collect()
}

/// The column is always one past the limit, not the actual overflow point.
pub fn detect_long_line(line: &str, line_number: usize) -> Option<Issue> {
    (line.chars().count() > MAX_LINE_LENGTH)
        .then(|| Issue::warning(LONG_LINE_MESSAGE, line_number, MAX_LINE_LENGTH + 1))
}

pub fn detect_debug_print(line: &str, line_number: usize) -> Option<Issue> {
    marker_column(line, DEBUG_PRINT_MARKER)
        .map(|column| Issue::suggestion(DEBUG_PRINT_MESSAGE, line_number, column))
}

pub fn detect_todo_marker(line: &str, line_number: usize) -> Option<Issue> {
    marker_column(line, TODO_MARKER)
        .map(|column| Issue::suggestion(TODO_MESSAGE, line_number, column))
}

/// 1-based character column of the first occurrence of `marker`
pub fn marker_column(line: &str, marker: &str) -> Option<usize> {
    line.find(marker)
        .map(|byte_index| line[..byte_index].chars().count() + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::IssueKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_line_at_limit_is_fine() {
        let line = "x".repeat(MAX_LINE_LENGTH);
        assert!(detect_long_line(&line, 1).is_none());
    }

    #[test]
    fn test_long_line_reports_fixed_column() {
        let line = "x".repeat(MAX_LINE_LENGTH + 1);
        let issue = detect_long_line(&line, 7).unwrap();
        assert_eq!(issue, Issue::warning(LONG_LINE_MESSAGE, 7, 101));
    }

    #[test]
    fn test_long_line_counts_characters_not_bytes() {
        let line = "é".repeat(60);
        assert!(line.len() > MAX_LINE_LENGTH);
        assert!(detect_long_line(&line, 1).is_none());
    }

    #[test]
    fn test_debug_print_column() {
        let issue = detect_debug_print("  console.log(x);", 3).unwrap();
        assert_eq!(issue.kind, IssueKind::Suggestion);
        assert_eq!(issue.column, 3);
        assert_eq!(issue.line, 3);
    }

    #[test]
    fn test_todo_uses_first_occurrence() {
        let issue = detect_todo_marker("// TODO: one TODO: two", 1).unwrap();
        assert_eq!(issue.column, 4);
    }

    #[test]
    fn test_todo_is_case_sensitive() {
        assert!(detect_todo_marker("// todo later", 1).is_none());
    }

    #[test]
    fn test_marker_in_string_literal_counts() {
        let issues = detect_issues(r#"const s = "TODO console.log";"#);
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].message, DEBUG_PRINT_MESSAGE);
        assert_eq!(issues[1].message, TODO_MESSAGE);
    }

    #[test]
    fn test_marker_column_after_multibyte_prefix() {
        assert_eq!(marker_column("ü TODO", TODO_MARKER), Some(3));
    }

    #[test]
    fn test_single_line_ordering() {
        let mut line = String::from("console.log(x); // TODO fix ");
        while line.chars().count() < 105 {
            line.push('-');
        }

        let issues = detect_issues(&line);
        let debug_column = line.find("console.log").unwrap() + 1;
        let todo_column = line.find("TODO").unwrap() + 1;

        assert_eq!(
            issues,
            vec![
                Issue::warning(LONG_LINE_MESSAGE, 1, 101),
                Issue::suggestion(DEBUG_PRINT_MESSAGE, 1, debug_column),
                Issue::suggestion(TODO_MESSAGE, 1, todo_column),
            ]
        );
    }

    #[test]
    fn test_issues_follow_line_order() {
        let content = "// TODO a\nok\nconsole.log(1)\n// TODO b";
        let lines: Vec<usize> = detect_issues(content).iter().map(|i| i.line).collect();
        assert_eq!(lines, vec![1, 3, 4]);
    }

    #[test]
    fn test_empty_content_has_no_issues() {
        assert!(detect_issues("").is_empty());
    }
}
