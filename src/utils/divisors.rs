use std::ops::RangeInclusive;

use log::debug;

/// Positive divisors of `value` that fall inside `range`, in ascending order.
///
/// Zero is divisible by everything, so callers handle a zero `value` separately;
/// this returns an empty list for it.
pub fn divisors_in_range(value: i128, range: &RangeInclusive<i64>) -> Vec<i64> {
    if value == 0 {
        return Vec::new();
    }

    let magnitude = value.unsigned_abs();
    let low = (*range.start()).max(1);
    let high = i64::try_from(magnitude).map_or(*range.end(), |m| m.min(*range.end()));

    let divisors: Vec<i64> = (low..=high)
        .filter(|&d| magnitude % u128::from(d.unsigned_abs()) == 0)
        .collect();

    debug!(
        "Found {} divisors of {} in {}..={}",
        divisors.len(),
        value,
        range.start(),
        range.end()
    );
    divisors
}
