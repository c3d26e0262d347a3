use crate::expression::errors::ExpressionError;
use crate::expression::operator::Operator;

/// Arithmetic expression tree over integer literals
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Number(i64),
    Add(Box<Expression>, Box<Expression>),
    Sub(Box<Expression>, Box<Expression>),
    Mul(Box<Expression>, Box<Expression>),
    Div(Box<Expression>, Box<Expression>),
}

impl Expression {
    pub fn binary(operator: Operator, left: Expression, right: Expression) -> Self {
        let (l, r) = (Box::new(left), Box::new(right));
        match operator {
            Operator::Add => Expression::Add(l, r),
            Operator::Sub => Expression::Sub(l, r),
            Operator::Mul => Expression::Mul(l, r),
            Operator::Div => Expression::Div(l, r),
        }
    }

    /// Returns the operator and both children, or `None` for a literal.
    pub fn as_binary(&self) -> Option<(Operator, &Expression, &Expression)> {
        match self {
            Expression::Number(_) => None,
            Expression::Add(l, r) => Some((Operator::Add, l, r)),
            Expression::Sub(l, r) => Some((Operator::Sub, l, r)),
            Expression::Mul(l, r) => Some((Operator::Mul, l, r)),
            Expression::Div(l, r) => Some((Operator::Div, l, r)),
        }
    }

    /// Build the tree for `operands[0] operators[0] operands[1] ...` using
    /// standard precedence, all operators left-associative.
    ///
    /// # Errors
    ///
    /// Returns [`ExpressionError::MalformedSequence`] unless there is at least one
    /// operand and exactly one more operand than operators.
    pub fn from_sequence(operands: &[i64], operators: &[Operator]) -> Result<Self, ExpressionError> {
        let malformed = ExpressionError::MalformedSequence {
            operands: operands.len(),
            operators: operators.len(),
        };
        if operands.len() != operators.len() + 1 {
            return Err(malformed);
        }
        let (&first, rest) = operands.split_first().ok_or(malformed)?;

        // Completed additive prefix together with the operator joining it to `term`
        let mut sum: Option<(Expression, Operator)> = None;
        let mut term = Expression::Number(first);

        for (&operator, &value) in operators.iter().zip(rest) {
            let rhs = Expression::Number(value);
            if operator.is_additive() {
                let left = match sum.take() {
                    Some((acc, pending)) => Expression::binary(pending, acc, term),
                    None => term,
                };
                sum = Some((left, operator));
                term = rhs;
            } else {
                term = Expression::binary(operator, term, rhs);
            }
        }

        Ok(match sum {
            Some((acc, pending)) => Expression::binary(pending, acc, term),
            None => term,
        })
    }

    /// Literals in token order
    pub fn operands(&self) -> Vec<i64> {
        let mut out = Vec::new();
        self.walk(&mut |expr| {
            if let Expression::Number(n) = expr {
                out.push(*n);
            }
        });
        out
    }

    /// Operators in token order
    pub fn operators(&self) -> Vec<Operator> {
        let mut out = Vec::new();
        self.walk(&mut |expr| {
            if let Some((op, _, _)) = expr.as_binary() {
                out.push(op);
            }
        });
        out
    }

    // In-order traversal, matching the rendered token order.
    fn walk(&self, visit: &mut impl FnMut(&Expression)) {
        match self.as_binary() {
            None => visit(self),
            Some((_, l, r)) => {
                l.walk(visit);
                visit(self);
                r.walk(visit);
            }
        }
    }
}
