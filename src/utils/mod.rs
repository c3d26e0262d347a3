//! Utils module split into submodules

mod difficulty;
mod divisors;
mod errors;
mod validation;

pub use difficulty::{operand_count, operand_range};
pub use divisors::divisors_in_range;
pub use errors::UtilsError;
pub use validation::{validate_count, validate_difficulty, validate_operand_count};

#[cfg(test)]
mod tests;
