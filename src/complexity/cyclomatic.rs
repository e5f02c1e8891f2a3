use super::keywords::{count_substring, count_whole_word, BRANCH_KEYWORDS, BRANCH_OPERATORS};

/// Approximate cyclomatic complexity of a whole text.
///
/// Starts at 1 for the single linear path and adds one per branching keyword
/// or operator occurrence. Each keyword and operator is counted on its own,
/// so `??` adds two for `?` and one for `??`. Occurrences inside strings and
/// comments count too; this is a text heuristic, not a control-flow graph.
pub fn calculate_complexity(content: &str) -> u32 {
    let keywords = BRANCH_KEYWORDS
        .iter()
        .map(|keyword| count_whole_word(content, keyword));
    let operators = BRANCH_OPERATORS
        .iter()
        .map(|operator| count_substring(content, operator));

    let branches: usize = keywords.chain(operators).sum();
    combine_cyclomatic(branches)
}

/// Baseline path plus branch count, saturating at `u32::MAX`
pub fn combine_cyclomatic(branches: usize) -> u32 {
    u32::try_from(branches)
        .unwrap_or(u32::MAX)
        .saturating_add(1)
}
