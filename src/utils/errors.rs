use thiserror::Error;

/// Errors raised while validating caller input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UtilsError {
    #[error("Difficulty must be between 1 and {max}, got {difficulty}")]
    InvalidDifficulty { difficulty: i64, max: u32 },
    #[error("Expression count must be at least 1, got {0}")]
    InvalidCount(usize),
    #[error("Number of operands must be between {min} and {max}, got {count}")]
    InvalidOperandCount { count: usize, min: usize, max: usize },
}
