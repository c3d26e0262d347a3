use std::fmt;

use crate::expression::ast::Expression;
use crate::expression::operator::Operator;

/// Token spelling used when rendering a tree
pub(crate) struct Notation {
    pub symbol: fn(Operator) -> &'static str,
    pub open: &'static str,
    pub close: &'static str,
}

pub(crate) const PLAIN: Notation = Notation {
    symbol: Operator::symbol,
    open: "(",
    close: ")",
};

fn precedence(expr: &Expression) -> u8 {
    match expr.as_binary() {
        Some((op, _, _)) => op.precedence(),
        None => 3,
    }
}

fn write_with_parens<W: fmt::Write>(
    w: &mut W,
    notation: &Notation,
    expr: &Expression,
    need_parens: bool,
) -> fmt::Result {
    if need_parens {
        w.write_str(notation.open)?;
        write_expression(w, notation, expr)?;
        w.write_str(notation.close)
    } else {
        write_expression(w, notation, expr)
    }
}

/// Writes `expr` as space-separated tokens. Parentheses only appear where the
/// tree disagrees with left-associative standard precedence.
pub(crate) fn write_expression<W: fmt::Write>(
    w: &mut W,
    notation: &Notation,
    expr: &Expression,
) -> fmt::Result {
    let Some((op, l, r)) = expr.as_binary() else {
        if let Expression::Number(n) = expr {
            write!(w, "{}", n)?;
        }
        return Ok(());
    };

    let lp = precedence(l);
    let rp = precedence(r);
    let (need_l, need_r) = match op {
        Operator::Add => (lp < 1, rp < 1),
        Operator::Sub => (lp < 1, rp <= 1),
        Operator::Mul => (lp < 2, rp < 2),
        Operator::Div => (lp < 2, rp <= 2),
    };

    write_with_parens(w, notation, l, need_l)?;
    write!(w, " {} ", (notation.symbol)(op))?;
    write_with_parens(w, notation, r, need_r)
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_expression(f, &PLAIN, self)
    }
}
