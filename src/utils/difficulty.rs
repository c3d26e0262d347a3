use std::ops::RangeInclusive;

use log::debug;

/// Operand values for a difficulty level: `0..=9` at level 1, then exactly
/// `difficulty` digits (`10..=99`, `100..=999`, ...).
///
/// Returns `None` when the upper bound does not fit in `i64` (level 19 and up).
pub fn operand_range(difficulty: u32) -> Option<RangeInclusive<i64>> {
    let high = 10_i64.checked_pow(difficulty)? - 1;
    let low = if difficulty > 1 {
        10_i64.checked_pow(difficulty - 1)?
    } else {
        0
    };
    debug!("Difficulty {} maps to operand range {}..={}", difficulty, low, high);
    Some(low..=high)
}

/// Operand count for a difficulty level: `difficulty + 1`, clamped to `min..=max`.
pub fn operand_count(difficulty: u32, min: usize, max: usize) -> usize {
    let natural = usize::try_from(difficulty).map_or(usize::MAX, |d| d.saturating_add(1));
    natural.clamp(min, max.max(min))
}
