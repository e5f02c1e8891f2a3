//! Line-oriented issue detection.
//!
//! Three fixed checks run over every line: overly long lines, leftover debug
//! prints and TODO markers. They are text heuristics and know nothing about
//! the language being scanned.

pub mod patterns;

pub use patterns::{
    detect_debug_print, detect_issues, detect_line_issues, detect_long_line, detect_todo_marker,
    marker_column, LineDetector, DEBUG_PRINT_MESSAGE, LINE_DETECTORS, LONG_LINE_MESSAGE,
    MAX_LINE_LENGTH, TODO_MESSAGE,
};
