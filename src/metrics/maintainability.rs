use super::loc_counter::LocCounter;
use crate::complexity::calculate_complexity;

/// Maintainability points lost per code line
pub const CODE_LINE_PENALTY: f64 = 0.5;
/// Maintainability points lost per unit of complexity
pub const COMPLEXITY_PENALTY: f64 = 2.0;

/// Maintainability score of a text, in `0..=100`.
///
/// `100 - code_lines * 0.5 - complexity * 2`, clamped to `[0, 100]` and then
/// rounded half up. Clamping happens before rounding.
pub fn calculate_maintainability(content: &str) -> u8 {
    let loc = LocCounter::new().count_content(content);
    let complexity = calculate_complexity(content);
    maintainability_score(loc.code_lines, complexity)
}

/// Score from precomputed inputs
pub fn maintainability_score(code_lines: usize, complexity: u32) -> u8 {
    let raw = 100.0
        - code_lines as f64 * CODE_LINE_PENALTY
        - f64::from(complexity) * COMPLEXITY_PENALTY;
    round_half_up(raw.clamp(0.0, 100.0)) as u8
}

// Inputs are already clamped to be non-negative.
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}
