use log::{debug, info};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::expression::{Expression, Operator};
use crate::generator::answer::{Answer, GeneratedExpression};
use crate::generator::config::GeneratorConfig;
use crate::generator::constraints::{enforce_division_safety, enforce_non_negative};
use crate::generator::errors::GeneratorError;
use crate::utils::{operand_count, validate_count, validate_difficulty, validate_operand_count};

/// Generator for random arithmetic expressions paired with their answers
///
/// The only state carried between calls is the random source, so a generator
/// built with [`ExpressionGenerator::from_seed`] always yields the same sequence.
#[derive(Debug, Clone)]
pub struct ExpressionGenerator<R = Pcg32> {
    config: GeneratorConfig,
    rng: R,
}

impl ExpressionGenerator<Pcg32> {
    /// Create a generator with the default configuration, seeded from OS entropy
    pub fn new() -> Self {
        Self {
            config: GeneratorConfig::default(),
            rng: Pcg32::from_entropy(),
        }
    }

    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidConfig`] if `config` fails validation.
    pub fn with_config(config: GeneratorConfig) -> Result<Self, GeneratorError> {
        Self::with_rng(config, Pcg32::from_entropy())
    }

    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidConfig`] if `config` fails validation.
    pub fn from_seed(config: GeneratorConfig, seed: u64) -> Result<Self, GeneratorError> {
        Self::with_rng(config, Pcg32::seed_from_u64(seed))
    }
}

impl Default for ExpressionGenerator<Pcg32> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> ExpressionGenerator<R> {
    /// Use a caller-supplied random source
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidConfig`] if `config` fails validation.
    pub fn with_rng(config: GeneratorConfig, rng: R) -> Result<Self, GeneratorError> {
        config.validate()?;
        Ok(Self { config, rng })
    }

    /// The validated configuration this generator was built with
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate one expression whose operand count and value range follow from
    /// `difficulty`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// * `difficulty` is outside `1..=max_difficulty`
    /// * the operand range cannot supply a nonzero divisor
    pub fn generate_expression(
        &mut self,
        difficulty: i64,
    ) -> Result<GeneratedExpression, GeneratorError> {
        let level = validate_difficulty(difficulty, self.config.max_difficulty)?;
        let count = operand_count(level, self.config.min_operands, self.config.max_operands);
        self.generate_validated(count, level)
    }

    /// Generate one expression with exactly `num_operands` operands.
    ///
    /// # Errors
    ///
    /// Same as [`generate_expression`](Self::generate_expression), plus an error
    /// when `num_operands` is outside the configured operand bounds.
    pub fn generate_expression_with_operands(
        &mut self,
        num_operands: usize,
        difficulty: i64,
    ) -> Result<GeneratedExpression, GeneratorError> {
        let level = validate_difficulty(difficulty, self.config.max_difficulty)?;
        validate_operand_count(num_operands, self.config.min_operands, self.config.max_operands)?;
        self.generate_validated(num_operands, level)
    }

    /// Generate `count` independent expressions in order.
    ///
    /// # Errors
    ///
    /// Returns an error if `count` is zero or any single generation fails. No
    /// partial set is returned.
    pub fn generate_expression_set(
        &mut self,
        count: usize,
        difficulty: i64,
    ) -> Result<Vec<GeneratedExpression>, GeneratorError> {
        validate_count(count)?;
        info!("Generating {} expressions at difficulty {}", count, difficulty);
        (0..count)
            .map(|_| self.generate_expression(difficulty))
            .collect()
    }

    /// # Errors
    ///
    /// Same as [`generate_expression_set`](Self::generate_expression_set) and
    /// [`generate_expression_with_operands`](Self::generate_expression_with_operands).
    pub fn generate_expression_set_with_operands(
        &mut self,
        count: usize,
        num_operands: usize,
        difficulty: i64,
    ) -> Result<Vec<GeneratedExpression>, GeneratorError> {
        validate_count(count)?;
        info!(
            "Generating {} expressions with {} operands at difficulty {}",
            count, num_operands, difficulty
        );
        (0..count)
            .map(|_| self.generate_expression_with_operands(num_operands, difficulty))
            .collect()
    }

    fn generate_validated(
        &mut self,
        num_operands: usize,
        difficulty: u32,
    ) -> Result<GeneratedExpression, GeneratorError> {
        let range = self.config.range_for(difficulty)?;
        let policy = self.config.division;

        let mut operands: Vec<i64> = (0..num_operands)
            .map(|_| self.rng.gen_range(range.clone()))
            .collect();
        let mut operators: Vec<Operator> = (1..num_operands)
            .map(|_| Operator::random(&mut self.rng))
            .collect();
        debug!("Sampled operands {:?} and operators {:?}", operands, operators);

        enforce_division_safety(&mut operands, &mut operators, &range, policy, &mut self.rng)?;
        if !self.config.allow_negative_result {
            enforce_non_negative(&operands, &mut operators, policy)?;
        }

        let expression = Expression::from_sequence(&operands, &operators)?;
        let result = Answer::evaluate(&expression, policy)?;
        debug!("Generated '{}' = {}", expression, result);

        Ok(GeneratedExpression::new(expression, result))
    }
}
