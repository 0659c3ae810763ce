use std::ops::Add;

use crate::expression::errors::ExpressionError;

/// The four binary operators a puzzle may use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// Glyph used in rendered solutions
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "×",
            Operator::Div => "÷",
        }
    }

    /// Plain ASCII spelling, for callers that feed the output to a calculator
    pub fn ascii_symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
        }
    }

    pub fn is_commutative(self) -> bool {
        matches!(self, Operator::Add | Operator::Mul)
    }

    pub fn is_additive(self) -> bool {
        matches!(self, Operator::Add | Operator::Sub)
    }

    pub fn is_multiplicative(self) -> bool {
        matches!(self, Operator::Mul | Operator::Div)
    }

    /// # Errors
    ///
    /// Returns an error when the result would overflow, would not be strictly
    /// positive (subtraction), or would not be a whole number (division).
    pub fn evaluate(self, lhs: u64, rhs: u64) -> Result<u64, ExpressionError> {
        match self {
            Operator::Add => lhs.checked_add(rhs).ok_or(ExpressionError::Overflow),
            Operator::Sub => {
                if lhs > rhs {
                    Ok(lhs - rhs)
                } else {
                    Err(ExpressionError::NonPositiveDifference { lhs, rhs })
                }
            }
            Operator::Mul => lhs.checked_mul(rhs).ok_or(ExpressionError::Overflow),
            Operator::Div => {
                if rhs == 0 {
                    Err(ExpressionError::DivisionByZero)
                } else if lhs % rhs != 0 {
                    Err(ExpressionError::InexactDivision { lhs, rhs })
                } else {
                    Ok(lhs / rhs)
                }
            }
        }
    }

    /// Like [`Operator::evaluate`], discarding the reason for a rejected result
    pub fn apply(self, lhs: u64, rhs: u64) -> Option<u64> {
        self.evaluate(lhs, rhs).ok()
    }
}

/// Operator counts across a subtree.
///
/// Field order is significant: the derived ordering compares divisions first,
/// then multiplications, subtractions and additions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OperatorProfile {
    pub divisions: usize,
    pub multiplications: usize,
    pub subtractions: usize,
    pub additions: usize,
}

impl OperatorProfile {
    pub(crate) fn record(&mut self, operator: Operator) {
        match operator {
            Operator::Add => self.additions += 1,
            Operator::Sub => self.subtractions += 1,
            Operator::Mul => self.multiplications += 1,
            Operator::Div => self.divisions += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.divisions + self.multiplications + self.subtractions + self.additions
    }
}

impl Add for OperatorProfile {
    type Output = OperatorProfile;

    fn add(self, other: OperatorProfile) -> OperatorProfile {
        OperatorProfile {
            divisions: self.divisions + other.divisions,
            multiplications: self.multiplications + other.multiplications,
            subtractions: self.subtractions + other.subtractions,
            additions: self.additions + other.additions,
        }
    }
}

/// Shape of a node: either an input number or an operator applied to two subtrees
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ExpressionKind {
    Number,
    Binary {
        operator: Operator,
        left: Box<Expression>,
        right: Box<Expression>,
    },
}

/// An immutable arithmetic expression tree over positive integers.
///
/// The value and the ranking metadata are computed once at construction, so
/// every node satisfies `value == operator(left.value, right.value)` for as
/// long as it exists.
#[derive(Debug, Clone)]
pub struct Expression {
    pub(crate) value: u64,
    pub(crate) size: usize,
    pub(crate) depth: usize,
    pub(crate) profile: OperatorProfile,
    pub(crate) kind: ExpressionKind,
}

impl Expression {
    /// A leaf holding one of the input numbers
    pub fn number(value: u64) -> Self {
        Self {
            value,
            size: 1,
            depth: 0,
            profile: OperatorProfile::default(),
            kind: ExpressionKind::Number,
        }
    }

    /// Combine two subtrees with `operator`.
    ///
    /// Returns `None` when the operator rejects the operand values (overflow,
    /// non-positive difference, inexact or zero division). Operands of `+` and
    /// `×` are reordered so the greater one is on the left.
    pub fn combine(operator: Operator, left: Expression, right: Expression) -> Option<Self> {
        let value = operator.apply(left.value, right.value)?;

        let (left, right) = if operator.is_commutative() && left < right {
            (right, left)
        } else {
            (left, right)
        };

        let mut profile = left.profile + right.profile;
        profile.record(operator);

        Some(Self {
            value,
            size: left.size + right.size,
            depth: 1 + left.depth.max(right.depth),
            profile,
            kind: ExpressionKind::Binary {
                operator,
                left: Box::new(left),
                right: Box::new(right),
            },
        })
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    /// Number of input numbers consumed by this subtree
    pub fn size(&self) -> usize {
        self.size
    }

    /// Longest root-to-leaf edge count
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn profile(&self) -> OperatorProfile {
        self.profile
    }

    pub fn kind(&self) -> &ExpressionKind {
        &self.kind
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, ExpressionKind::Number)
    }

    pub fn operator(&self) -> Option<Operator> {
        match &self.kind {
            ExpressionKind::Number => None,
            ExpressionKind::Binary { operator, .. } => Some(*operator),
        }
    }

    /// Leaf values in left-to-right order
    pub fn leaves(&self) -> Vec<u64> {
        let mut out = Vec::with_capacity(self.size);
        let mut stack = vec![self];
        while let Some(expr) = stack.pop() {
            match &expr.kind {
                ExpressionKind::Number => out.push(expr.value),
                ExpressionKind::Binary { left, right, .. } => {
                    stack.push(right);
                    stack.push(left);
                }
            }
        }
        out
    }
}
