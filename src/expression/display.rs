use std::fmt;

use crate::expression::ast::{Expression, ExpressionKind, Operator};

/// Left operands need grouping only when an additive subtree feeds `×` or `÷`.
fn needs_left_parens(operator: Operator, left: &Expression) -> bool {
    operator.is_multiplicative() && left.operator().is_some_and(Operator::is_additive)
}

/// Right operands are grouped when they are compound under `÷`, or additive
/// under `×` or `-`.
fn needs_right_parens(operator: Operator, right: &Expression) -> bool {
    match right.operator() {
        None => false,
        Some(inner) => {
            operator == Operator::Div
                || (matches!(operator, Operator::Mul | Operator::Sub) && inner.is_additive())
        }
    }
}

fn write_with_parens<W: fmt::Write>(
    out: &mut W,
    expr: &Expression,
    need_parens: bool,
    symbol: fn(Operator) -> &'static str,
) -> fmt::Result {
    if need_parens {
        out.write_char('(')?;
        write_infix(out, expr, symbol)?;
        out.write_char(')')
    } else {
        write_infix(out, expr, symbol)
    }
}

/// Infix rendering with the fewest parentheses that keep standard precedence.
pub(crate) fn write_infix<W: fmt::Write>(
    out: &mut W,
    expr: &Expression,
    symbol: fn(Operator) -> &'static str,
) -> fmt::Result {
    match &expr.kind {
        ExpressionKind::Number => write!(out, "{}", expr.value),
        ExpressionKind::Binary {
            operator,
            left,
            right,
        } => {
            write_with_parens(out, left, needs_left_parens(*operator, left), symbol)?;
            write!(out, " {} ", symbol(*operator))?;
            write_with_parens(out, right, needs_right_parens(*operator, right), symbol)
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_infix(f, self, Operator::symbol)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
