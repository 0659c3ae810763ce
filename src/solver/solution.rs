use std::collections::HashSet;

use crate::expression::Expression;
use crate::solver::ranker;

/// Counters collected while searching
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes_generated: u64,
    pub solutions_found: usize,
    pub budget_exhausted: bool,
}

/// Every distinct expression found for a target
#[derive(Debug, Clone)]
pub struct Solution {
    pub(crate) target: u64,
    pub(crate) expressions: HashSet<Expression>,
    pub(crate) stats: SearchStats,
}

impl Solution {
    pub(crate) fn new(target: u64) -> Self {
        Self {
            target,
            expressions: HashSet::new(),
            stats: SearchStats::default(),
        }
    }

    /// A target that is one of the input numbers needs no operations
    pub(crate) fn from_leaf(target: u64, leaf: Expression) -> Self {
        let mut solution = Self::new(target);
        solution.expressions.insert(leaf);
        solution.stats.solutions_found = 1;
        solution
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    pub fn expressions(&self) -> &HashSet<Expression> {
        &self.expressions
    }

    pub fn len(&self) -> usize {
        self.expressions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expressions.is_empty()
    }

    pub fn best(&self) -> Option<&Expression> {
        ranker::best(&self.expressions)
    }

    pub fn ranked(&self) -> Vec<&Expression> {
        ranker::ranked(&self.expressions)
    }

    pub fn into_best(self) -> Option<Expression> {
        self.expressions.into_iter().min()
    }
}
