use log::debug;

use crate::expression::ast::Expression;
use crate::expression::display::{Notation, write_expression};
use crate::expression::operator::Operator;

const LATEX: Notation = Notation {
    symbol: Operator::latex_symbol,
    open: "\\left(",
    close: "\\right)",
};

impl Expression {
    /// Render the expression as inline LaTeX for worksheets.
    /// - Keeps the token order of the plain rendering
    /// - Uses \times and \div instead of * and /
    pub fn to_latex(&self) -> String {
        let mut out = String::new();
        if write_expression(&mut out, &LATEX, self).is_err() {
            debug!("Formatting into a String failed");
        }
        out
    }
}
