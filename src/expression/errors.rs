use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExpressionError {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Division {dividend} / {divisor} does not produce a whole number")]
    InexactDivision { dividend: i128, divisor: i128 },
    #[error("Integer overflow while evaluating expression")]
    Overflow,
    #[error(
        "Expected exactly one more operand than operators, got {operands} operands and {operators} operators"
    )]
    MalformedSequence { operands: usize, operators: usize },
}
