use thiserror::Error;

use crate::expression::ExpressionError;
use crate::utils::UtilsError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeneratorError {
    #[error("Invalid input: {0}")]
    Utils(#[from] UtilsError),
    #[error("Expression evaluation error: {0}")]
    Expression(#[from] ExpressionError),
    #[error("Could not find a nonzero divisor after {attempts} attempts")]
    RetryExhausted { attempts: usize },
    #[error("Invalid generator configuration: {0}")]
    InvalidConfig(String),
}

impl GeneratorError {
    pub fn is_invalid_difficulty(&self) -> bool {
        matches!(self, GeneratorError::Utils(UtilsError::InvalidDifficulty { .. }))
    }

    pub fn is_invalid_count(&self) -> bool {
        matches!(self, GeneratorError::Utils(UtilsError::InvalidCount(_)))
    }
}
