//! mathgen - A library for generating random arithmetic practice problems
//!
//! This library builds random expressions over `+`, `-`, `*` and `/` at a chosen
//! difficulty and pairs each one with its answer under standard operator precedence.

pub mod expression;
pub mod generator;
pub mod utils;

// Re-export the main public API
pub use expression::{Expression, ExpressionError, Operator};
pub use generator::{
    Answer, DivisionPolicy, ExpressionGenerator, GeneratedExpression, GeneratorConfig,
    GeneratorError,
};
pub use utils::UtilsError;

/// Generate one expression and its answer at the given difficulty
///
/// This is a convenience function that creates an entropy-seeded generator with
/// the default configuration.
///
/// # Arguments
///
/// * `difficulty` - Difficulty level, `1..=4` with the default configuration
///
/// # Returns
///
/// * `Ok((expression, answer))` - The rendered expression and its value
/// * `Err(GeneratorError)` - If the difficulty is out of range
///
/// # Errors
///
/// This function will return an error if `difficulty` is zero, negative, or
/// above the default maximum difficulty.
///
/// # Examples
///
/// ```
/// use mathgen::generate_expression;
///
/// match generate_expression(1) {
///     Ok((expression, answer)) => println!("{} = {}", expression, answer),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn generate_expression(difficulty: i64) -> Result<(String, Answer), GeneratorError> {
    let mut generator = ExpressionGenerator::new();
    generator
        .generate_expression(difficulty)
        .map(GeneratedExpression::into_pair)
}

/// Generate `count` independent expressions at the given difficulty
///
/// # Errors
///
/// This function will return an error if `count` is zero or `difficulty` is out
/// of range.
///
/// # Examples
///
/// ```
/// use mathgen::generate_expression_set;
///
/// let problems = generate_expression_set(3, 2).unwrap_or_default();
/// assert_eq!(problems.len(), 3);
/// ```
pub fn generate_expression_set(
    count: usize,
    difficulty: i64,
) -> Result<Vec<(String, Answer)>, GeneratorError> {
    let mut generator = ExpressionGenerator::new();
    Ok(generator
        .generate_expression_set(count, difficulty)?
        .into_iter()
        .map(GeneratedExpression::into_pair)
        .collect())
}
