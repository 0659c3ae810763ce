use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::expression::ast::{Expression, ExpressionKind};

// Cached metadata is a function of value and kind, so it is left out of
// equality and hashing.
impl PartialEq for Expression {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.kind == other.kind
    }
}

impl Eq for Expression {}

impl Hash for Expression {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
        self.kind.hash(state);
    }
}

impl PartialOrd for Expression {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Simplicity order: value, then input numbers used, then operator profile,
/// then the rendered text. Trees that render identically (`6 + 3 + 2` can be
/// built two ways) are finally told apart by structure so that the order
/// agrees with `Eq`.
impl Ord for Expression {
    fn cmp(&self, other: &Self) -> Ordering {
        if std::ptr::eq(self, other) {
            return Ordering::Equal;
        }

        self.value
            .cmp(&other.value)
            .then_with(|| self.size.cmp(&other.size))
            .then_with(|| self.profile.cmp(&other.profile))
            .then_with(|| self.to_string().cmp(&other.to_string()))
            .then_with(|| cmp_structure(self, other))
    }
}

fn cmp_structure(a: &Expression, b: &Expression) -> Ordering {
    match (&a.kind, &b.kind) {
        (ExpressionKind::Number, ExpressionKind::Number) => a.value.cmp(&b.value),
        (ExpressionKind::Number, ExpressionKind::Binary { .. }) => Ordering::Less,
        (ExpressionKind::Binary { .. }, ExpressionKind::Number) => Ordering::Greater,
        (
            ExpressionKind::Binary {
                operator: op_a,
                left: left_a,
                right: right_a,
            },
            ExpressionKind::Binary {
                operator: op_b,
                left: left_b,
                right: right_b,
            },
        ) => op_a
            .cmp(op_b)
            .then_with(|| left_a.cmp(left_b))
            .then_with(|| right_a.cmp(right_b)),
    }
}
