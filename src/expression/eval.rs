use log::trace;

use crate::expression::ast::{Expression, ExpressionKind};
use crate::expression::errors::ExpressionError;

impl Expression {
    /// Recompute the value from the leaves up, ignoring the cached values of
    /// internal nodes.
    ///
    /// # Errors
    ///
    /// Returns an error if any node applies its operator to operands it does
    /// not accept: overflow, a non-positive difference, or a division that is
    /// by zero or leaves a remainder.
    pub fn evaluate(&self) -> Result<u64, ExpressionError> {
        let result = match &self.kind {
            ExpressionKind::Number => Ok(self.value),
            ExpressionKind::Binary {
                operator,
                left,
                right,
            } => {
                let lhs = left.evaluate()?;
                let rhs = right.evaluate()?;
                operator.evaluate(lhs, rhs)
            }
        };

        if let Err(e) = &result {
            trace!("Evaluation of {} failed: {}", self, e);
        }

        result
    }

    /// Check that every node's cached value matches its recomputed value.
    pub fn is_consistent(&self) -> bool {
        match &self.kind {
            ExpressionKind::Number => true,
            ExpressionKind::Binary {
                operator,
                left,
                right,
            } => {
                left.is_consistent()
                    && right.is_consistent()
                    && operator.apply(left.value, right.value) == Some(self.value)
            }
        }
    }
}
