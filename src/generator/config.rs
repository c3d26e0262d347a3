use std::ops::RangeInclusive;

use crate::generator::constants::{
    DEFAULT_MAX_DIFFICULTY, DEFAULT_MAX_OPERANDS, DEFAULT_MIN_OPERANDS, MAX_OPERAND_VALUE,
    MAX_SUPPORTED_DIFFICULTY, MAX_SUPPORTED_OPERANDS,
};
use crate::generator::errors::GeneratorError;
use crate::utils::{UtilsError, operand_range};

/// How division steps are constrained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DivisionPolicy {
    /// Every division is exact and answers are integers
    #[default]
    WholeNumber,
    /// Divisors are only kept nonzero; answers are floating point
    AllowDecimal,
}

/// Settings for an [`ExpressionGenerator`](crate::ExpressionGenerator)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub max_difficulty: u32,
    pub min_operands: usize,
    pub max_operands: usize,
    pub division: DivisionPolicy,
    pub allow_negative_result: bool,
    /// Fixed operand range used instead of the per-difficulty digit ranges
    pub operand_range: Option<(u32, u32)>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_difficulty: DEFAULT_MAX_DIFFICULTY,
            min_operands: DEFAULT_MIN_OPERANDS,
            max_operands: DEFAULT_MAX_OPERANDS,
            division: DivisionPolicy::WholeNumber,
            allow_negative_result: false,
            operand_range: None,
        }
    }
}

impl GeneratorConfig {
    pub fn max_difficulty(mut self, max_difficulty: u32) -> Self {
        self.max_difficulty = max_difficulty;
        self
    }

    pub fn operands(mut self, min: usize, max: usize) -> Self {
        self.min_operands = min;
        self.max_operands = max;
        self
    }

    pub fn division(mut self, division: DivisionPolicy) -> Self {
        self.division = division;
        self
    }

    pub fn allow_negative_result(mut self, allow: bool) -> Self {
        self.allow_negative_result = allow;
        self
    }

    pub fn operand_range(mut self, low: u32, high: u32) -> Self {
        self.operand_range = Some((low, high));
        self
    }

    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidConfig`] when a limit is outside what the
    /// generator can evaluate exactly.
    pub fn validate(&self) -> Result<(), GeneratorError> {
        if !(1..=MAX_SUPPORTED_DIFFICULTY).contains(&self.max_difficulty) {
            return Err(GeneratorError::InvalidConfig(format!(
                "max_difficulty must be between 1 and {}, got {}",
                MAX_SUPPORTED_DIFFICULTY, self.max_difficulty
            )));
        }
        if self.min_operands < 2 {
            return Err(GeneratorError::InvalidConfig(format!(
                "min_operands must be at least 2, got {}",
                self.min_operands
            )));
        }
        if self.max_operands < self.min_operands || self.max_operands > MAX_SUPPORTED_OPERANDS {
            return Err(GeneratorError::InvalidConfig(format!(
                "max_operands must be between {} and {}, got {}",
                self.min_operands, MAX_SUPPORTED_OPERANDS, self.max_operands
            )));
        }
        if let Some((low, high)) = self.operand_range
            && (low > high || high > MAX_OPERAND_VALUE)
        {
            return Err(GeneratorError::InvalidConfig(format!(
                "operand_range must satisfy low <= high <= {}, got {}..={}",
                MAX_OPERAND_VALUE, low, high
            )));
        }
        Ok(())
    }

    /// Operand values for an already validated difficulty level
    pub(crate) fn range_for(&self, difficulty: u32) -> Result<RangeInclusive<i64>, UtilsError> {
        match self.operand_range {
            Some((low, high)) => Ok(i64::from(low)..=i64::from(high)),
            None => operand_range(difficulty).ok_or(UtilsError::InvalidDifficulty {
                difficulty: i64::from(difficulty),
                max: self.max_difficulty,
            }),
        }
    }
}
