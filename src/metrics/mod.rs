//! Metrics calculation module
//!
//! Line counting and the maintainability score built on top of it.

pub mod loc_counter;
pub mod maintainability;

pub use loc_counter::{count_lines, is_comment_line, split_lines, LocCount, LocCounter};
pub use maintainability::{calculate_maintainability, maintainability_score};
