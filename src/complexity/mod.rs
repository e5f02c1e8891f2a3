//! Heuristic complexity scoring over raw source text.
//!
//! No tokenizer and no grammar: branching constructs are found by scanning
//! the text for a fixed set of keywords and operators.

pub mod cyclomatic;
pub mod keywords;

pub use cyclomatic::{calculate_complexity, combine_cyclomatic};
pub use keywords::{count_substring, count_whole_word, is_identifier_char};
