use crate::expression::{Expression, Operator};

/// One legal combination of two entries of a working multiset.
///
/// `left` and `right` are positions in the multiset the operation was
/// generated from, so equal values stay distinct entries.
#[derive(Debug, Clone)]
pub struct Operation {
    pub left: usize,
    pub right: usize,
    pub expression: Expression,
}

impl Operation {
    /// The multiset left after consuming both operands and adding the result
    pub fn reduce(&self, numbers: &[Expression]) -> Vec<Expression> {
        let mut next: Vec<Expression> = numbers
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != self.left && i != self.right)
            .map(|(_, expr)| expr.clone())
            .collect();
        next.push(self.expression.clone());
        next
    }
}

pub struct ExpressionGenerator;

impl ExpressionGenerator {
    /// Every node obtainable by applying one operator to two distinct entries.
    ///
    /// `+` and `×` are tried once per unordered pair, `-` and `÷` once per
    /// ordered pair. Multiplying or dividing by one is skipped, as are
    /// non-positive differences, inexact quotients and overflowing results.
    pub fn operations(numbers: &[Expression]) -> Vec<Operation> {
        let mut out = Vec::new();

        for (i, left) in numbers.iter().enumerate() {
            for (j, right) in numbers.iter().enumerate().skip(i + 1) {
                Self::push(&mut out, Operator::Add, i, left, j, right);

                if left.value() != 1 && right.value() != 1 {
                    Self::push(&mut out, Operator::Mul, i, left, j, right);
                }
            }
        }

        for (i, left) in numbers.iter().enumerate() {
            for (j, right) in numbers.iter().enumerate() {
                if i == j {
                    continue;
                }

                if left.value() > right.value() {
                    Self::push(&mut out, Operator::Sub, i, left, j, right);
                }

                if right.value() != 1 && right.value() != 0 && left.value() % right.value() == 0 {
                    Self::push(&mut out, Operator::Div, i, left, j, right);
                }
            }
        }

        out
    }

    fn push(
        out: &mut Vec<Operation>,
        operator: Operator,
        i: usize,
        left: &Expression,
        j: usize,
        right: &Expression,
    ) {
        if let Some(expression) = Expression::combine(operator, left.clone(), right.clone()) {
            out.push(Operation {
                left: i,
                right: j,
                expression,
            });
        }
    }
}
