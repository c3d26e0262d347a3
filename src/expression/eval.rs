use log::debug;

use crate::expression::ast::Expression;
use crate::expression::errors::ExpressionError;

#[inline]
fn is_zero(value: f64) -> bool {
    value.abs() < f64::EPSILON
}

impl Expression {
    /// Evaluate with IEEE double arithmetic.
    ///
    /// # Errors
    ///
    /// Returns [`ExpressionError::DivisionByZero`] when a divisor evaluates to zero.
    pub fn evaluate(&self) -> Result<f64, ExpressionError> {
        debug!("Evaluating expression: {}", self);

        let result = match self {
            Expression::Number(n) => Ok(*n as f64),
            Expression::Add(l, r) => Ok(l.evaluate()? + r.evaluate()?),
            Expression::Sub(l, r) => Ok(l.evaluate()? - r.evaluate()?),
            Expression::Mul(l, r) => Ok(l.evaluate()? * r.evaluate()?),
            Expression::Div(l, r) => {
                let left = l.evaluate()?;
                let right = r.evaluate()?;
                if is_zero(right) {
                    debug!("Division by zero attempted");
                    Err(ExpressionError::DivisionByZero)
                } else {
                    Ok(left / right)
                }
            }
        };

        match &result {
            Ok(value) => debug!("Expression evaluated to: {}", value),
            Err(e) => debug!("Expression evaluation failed: {}", e),
        }

        result
    }

    /// Evaluate with checked integer arithmetic, requiring every division to be exact.
    ///
    /// # Errors
    ///
    /// Returns an error when:
    /// - a divisor evaluates to zero
    /// - a division leaves a remainder
    /// - an intermediate value overflows `i128`
    pub fn evaluate_exact(&self) -> Result<i128, ExpressionError> {
        let result = match self {
            Expression::Number(n) => Ok(i128::from(*n)),
            Expression::Add(l, r) => l
                .evaluate_exact()?
                .checked_add(r.evaluate_exact()?)
                .ok_or(ExpressionError::Overflow),
            Expression::Sub(l, r) => l
                .evaluate_exact()?
                .checked_sub(r.evaluate_exact()?)
                .ok_or(ExpressionError::Overflow),
            Expression::Mul(l, r) => l
                .evaluate_exact()?
                .checked_mul(r.evaluate_exact()?)
                .ok_or(ExpressionError::Overflow),
            Expression::Div(l, r) => {
                let dividend = l.evaluate_exact()?;
                let divisor = r.evaluate_exact()?;
                if divisor == 0 {
                    debug!("Division by zero attempted");
                    Err(ExpressionError::DivisionByZero)
                } else if dividend.checked_rem(divisor).ok_or(ExpressionError::Overflow)? != 0 {
                    debug!("Inexact division: {} / {}", dividend, divisor);
                    Err(ExpressionError::InexactDivision { dividend, divisor })
                } else {
                    dividend.checked_div(divisor).ok_or(ExpressionError::Overflow)
                }
            }
        };

        if let Err(e) = &result {
            debug!("Exact evaluation of {} failed: {}", self, e);
        }

        result
    }
}

#[cfg(test)]
mod tests_inner_helpers {
    use super::is_zero;

    #[test]
    fn test_is_zero() {
        assert!(is_zero(0.0));
        assert!(is_zero(f64::EPSILON / 2.0));
        assert!(!is_zero(f64::EPSILON * 2.0));
        assert!(!is_zero(1.0));
    }
}
