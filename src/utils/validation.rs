use log::{debug, warn};

use crate::utils::errors::UtilsError;

/// Checks `difficulty` against `1..=max` and narrows it to `u32`.
///
/// # Errors
///
/// Returns an error if the difficulty is non-positive or above `max`.
pub fn validate_difficulty(difficulty: i64, max: u32) -> Result<u32, UtilsError> {
    debug!("Validating difficulty: {}", difficulty);

    match u32::try_from(difficulty) {
        Ok(level) if (1..=max).contains(&level) => Ok(level),
        _ => {
            warn!("Difficulty {} is outside 1..={}", difficulty, max);
            Err(UtilsError::InvalidDifficulty { difficulty, max })
        }
    }
}

/// # Errors
///
/// Returns an error if `count` is zero.
pub fn validate_count(count: usize) -> Result<(), UtilsError> {
    if count == 0 {
        warn!("Requested an empty expression set");
        return Err(UtilsError::InvalidCount(count));
    }
    Ok(())
}

/// # Errors
///
/// Returns an error if `count` is outside `min..=max`.
pub fn validate_operand_count(count: usize, min: usize, max: usize) -> Result<(), UtilsError> {
    if count < min || count > max {
        warn!("Operand count {} is outside {}..={}", count, min, max);
        return Err(UtilsError::InvalidOperandCount { count, min, max });
    }
    Ok(())
}
