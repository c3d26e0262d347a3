mod answer;
mod config;
pub mod constants;
mod constraints;
mod core;
mod errors;

pub use answer::{Answer, GeneratedExpression};
pub use config::{DivisionPolicy, GeneratorConfig};
pub use self::core::ExpressionGenerator;
pub use errors::GeneratorError;
