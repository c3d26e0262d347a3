use std::fmt;

use crate::expression::{Expression, ExpressionError};
use crate::generator::config::DivisionPolicy;
use crate::generator::constants::DECIMAL_TOLERANCE;

// Largest magnitude below which every integer has an exact f64
const EXACT_F64_INTEGER: u128 = 1 << 53;

/// Value of a generated expression
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Answer {
    Integer(i128),
    Decimal(f64),
}

impl Answer {
    /// Evaluates `expression` the way `policy` requires: exact integer
    /// arithmetic for whole-number division, floating point otherwise.
    ///
    /// # Errors
    ///
    /// Propagates the evaluation error from the expression.
    pub fn evaluate(expression: &Expression, policy: DivisionPolicy) -> Result<Self, ExpressionError> {
        match policy {
            DivisionPolicy::WholeNumber => expression.evaluate_exact().map(Answer::Integer),
            DivisionPolicy::AllowDecimal => expression.evaluate().map(Answer::Decimal),
        }
    }

    pub fn as_integer(&self) -> Option<i128> {
        match self {
            Answer::Integer(n) => Some(*n),
            Answer::Decimal(_) => None,
        }
    }

    pub fn is_negative(&self) -> bool {
        match self {
            Answer::Integer(n) => *n < 0,
            Answer::Decimal(x) => *x < 0.0,
        }
    }

    /// Compares against a floating-point evaluation of the same expression.
    ///
    /// Integers up to 2^53 are compared exactly. Larger integers and all decimals
    /// are compared within a relative tolerance, since `other` cannot hold them
    /// exactly. Use [`as_integer`](Self::as_integer) for exact integer checks.
    pub fn matches(&self, other: f64) -> bool {
        let value = match self {
            Answer::Integer(n) if n.unsigned_abs() <= EXACT_F64_INTEGER => {
                return other.fract() == 0.0 && other as i128 == *n;
            }
            Answer::Integer(n) => *n as f64,
            Answer::Decimal(x) => *x,
        };
        (value - other).abs() <= DECIMAL_TOLERANCE * value.abs().max(1.0)
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Answer::Integer(n) => write!(f, "{}", n),
            Answer::Decimal(x) => write!(f, "{}", x),
        }
    }
}

/// One generated expression with its rendering and value
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedExpression {
    expression: Expression,
    text: String,
    result: Answer,
}

impl GeneratedExpression {
    pub(crate) fn new(expression: Expression, result: Answer) -> Self {
        let text = expression.to_string();
        Self {
            expression,
            text,
            result,
        }
    }

    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    /// Rendered expression, e.g. `4 + 7 * 2`
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn result(&self) -> Answer {
        self.result
    }

    pub fn into_pair(self) -> (String, Answer) {
        (self.text, self.result)
    }
}

impl fmt::Display for GeneratedExpression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} = {}", self.text, self.result)
    }
}
