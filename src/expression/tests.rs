use crate::expression::{Expression, ExpressionError, Operator};

fn num(n: i64) -> Box<Expression> {
    Box::new(Expression::Number(n))
}

#[test]
fn test_from_sequence_respects_precedence() {
    let expr = Expression::from_sequence(&[4, 7, 2], &[Operator::Add, Operator::Mul]);
    assert!(expr.is_ok());
    if let Ok(expr) = expr {
        assert_eq!(
            expr,
            Expression::Add(num(4), Box::new(Expression::Mul(num(7), num(2))))
        );
        assert_eq!(expr.evaluate_exact(), Ok(18));
    }
}

#[test]
fn test_from_sequence_is_left_associative() {
    let expr = Expression::from_sequence(&[10, 4, 3], &[Operator::Sub, Operator::Sub]);
    assert!(expr.is_ok());
    if let Ok(expr) = expr {
        assert_eq!(expr.evaluate_exact(), Ok(3));
    }

    let expr = Expression::from_sequence(&[48, 4, 2], &[Operator::Div, Operator::Div]);
    assert!(expr.is_ok());
    if let Ok(expr) = expr {
        assert_eq!(expr.evaluate_exact(), Ok(6));
    }
}

#[test]
fn test_from_sequence_single_operand() {
    let expr = Expression::from_sequence(&[7], &[]);
    assert_eq!(expr, Ok(Expression::Number(7)));
}

#[test]
fn test_from_sequence_rejects_mismatched_lengths() {
    let result = Expression::from_sequence(&[1, 2], &[Operator::Add, Operator::Mul]);
    assert_eq!(
        result,
        Err(ExpressionError::MalformedSequence {
            operands: 2,
            operators: 2
        })
    );

    let result = Expression::from_sequence(&[], &[]);
    assert!(result.is_err());
}

#[test]
fn test_display_round_trips_token_order() {
    let operands = [8, 2, 3, 6, 3];
    let operators = [Operator::Sub, Operator::Mul, Operator::Add, Operator::Div];
    let expr = Expression::from_sequence(&operands, &operators);
    assert!(expr.is_ok());
    if let Ok(expr) = expr {
        assert_eq!(format!("{}", expr), "8 - 2 * 3 + 6 / 3");
        assert_eq!(expr.operands(), operands.to_vec());
        assert_eq!(expr.operators(), operators.to_vec());
        assert_eq!(expr.evaluate_exact(), Ok(4));
    }
}

#[test]
fn test_display_adds_parens_when_tree_requires_them() {
    let expr = Expression::Sub(num(10), Box::new(Expression::Sub(num(4), num(3))));
    assert_eq!(format!("{}", expr), "10 - (4 - 3)");

    let expr = Expression::Mul(Box::new(Expression::Add(num(1), num(2))), num(3));
    assert_eq!(format!("{}", expr), "(1 + 2) * 3");

    let expr = Expression::Div(num(12), Box::new(Expression::Mul(num(2), num(3))));
    assert_eq!(format!("{}", expr), "12 / (2 * 3)");
}

#[test]
fn test_to_latex() {
    let expr = Expression::from_sequence(&[6, 3, 2], &[Operator::Div, Operator::Mul]);
    assert!(expr.is_ok());
    if let Ok(expr) = expr {
        assert_eq!(expr.to_latex(), "6 \\div 3 \\times 2");
    }

    let expr = Expression::Mul(Box::new(Expression::Add(num(1), num(2))), num(3));
    assert_eq!(expr.to_latex(), "\\left(1 + 2\\right) \\times 3");
}

#[test]
fn test_evaluate_exact_division_by_zero() {
    let expr = Expression::Div(num(5), num(0));
    assert_eq!(expr.evaluate_exact(), Err(ExpressionError::DivisionByZero));
    assert_eq!(expr.evaluate(), Err(ExpressionError::DivisionByZero));
}

#[test]
fn test_evaluate_exact_rejects_remainder() {
    let expr = Expression::Div(num(7), num(2));
    assert_eq!(
        expr.evaluate_exact(),
        Err(ExpressionError::InexactDivision {
            dividend: 7,
            divisor: 2
        })
    );

    let result = expr.evaluate();
    assert!(result.is_ok());
    if let Ok(value) = result {
        assert!((value - 3.5).abs() < 1e-12);
    }
}

#[test]
fn test_evaluate_exact_large_product() {
    let operands = [999_999; 6];
    let operators = [Operator::Mul; 5];
    let expr = Expression::from_sequence(&operands, &operators);
    assert!(expr.is_ok());
    if let Ok(expr) = expr {
        assert_eq!(expr.evaluate_exact(), Ok(999_999_i128.pow(6)));
    }
}

#[test]
fn test_evaluate_exact_overflow() {
    let operands = [i64::MAX; 4];
    let operators = [Operator::Mul; 3];
    let expr = Expression::from_sequence(&operands, &operators);
    assert!(expr.is_ok());
    if let Ok(expr) = expr {
        assert_eq!(expr.evaluate_exact(), Err(ExpressionError::Overflow));
    }
}

#[test]
fn test_operator_symbols() {
    for op in Operator::ALL {
        assert_eq!(Operator::from_symbol(op.symbol()), Some(op));
        assert_eq!(format!("{}", op), op.symbol());
    }
    assert_eq!(Operator::from_symbol("^"), None);
    assert!(Operator::Sub.is_additive());
    assert!(!Operator::Div.is_additive());
}

#[test]
fn test_random_operator_covers_all() {
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    let mut rng = StdRng::seed_from_u64(71);
    let seen: HashSet<Operator> = (0..200).map(|_| Operator::random(&mut rng)).collect();
    assert_eq!(seen.len(), Operator::ALL.len());
    assert!(seen.iter().all(|op| Operator::ALL.contains(op)));
}
