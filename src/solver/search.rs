use log::{debug, info, trace, warn};

use crate::expression::Expression;
use crate::generator::ExpressionGenerator;
use crate::solver::config::SolverConfig;
use crate::solver::solution::Solution;

/// Exhaustive forward search over reduced multisets
pub struct ExpressionSolver {
    config: SolverConfig,
}

impl ExpressionSolver {
    /// Create a solver that explores the whole search space
    pub fn new() -> Self {
        Self::with_config(SolverConfig::default())
    }

    pub fn with_config(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Get a reference to the solver configuration
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// The simplest expression over `numbers` that evaluates to `target`
    pub fn find_expression(&self, target: u64, numbers: &[u64]) -> Option<Expression> {
        self.solve(target, numbers).into_best()
    }

    /// Collect every distinct expression over `numbers` that evaluates to
    /// `target`. Duplicate input values are independent entries.
    pub fn solve(&self, target: u64, numbers: &[u64]) -> Solution {
        info!(
            "Searching for {} using numbers {:?}",
            target, numbers
        );

        if numbers.contains(&target) {
            debug!("Target {} is one of the input numbers", target);
            return Solution::from_leaf(target, Expression::number(target));
        }

        let leaves: Vec<Expression> = numbers.iter().copied().map(Expression::number).collect();
        let mut solution = Solution::new(target);
        self.search(&leaves, &mut solution);

        solution.stats.solutions_found = solution.expressions.len();
        info!(
            "Search finished: {} nodes generated, {} distinct solutions",
            solution.stats.nodes_generated, solution.stats.solutions_found
        );

        solution
    }

    /// Returns `false` once the node budget is spent, unwinding the search.
    fn search(&self, numbers: &[Expression], solution: &mut Solution) -> bool {
        for operation in ExpressionGenerator::operations(numbers) {
            if let Some(budget) = self.config.node_budget
                && solution.stats.nodes_generated >= budget
            {
                if !solution.stats.budget_exhausted {
                    warn!("Node budget of {} exhausted, search incomplete", budget);
                    solution.stats.budget_exhausted = true;
                }
                return false;
            }
            solution.stats.nodes_generated += 1;

            if operation.expression.value() == solution.target
                && solution.expressions.insert(operation.expression.clone())
            {
                trace!("Found {} = {}", operation.expression, solution.target);
            }

            if numbers.len() > 2 {
                let next = operation.reduce(numbers);
                if !self.search(&next, solution) {
                    return false;
                }
            }
        }

        true
    }
}

impl Default for ExpressionSolver {
    fn default() -> Self {
        Self::new()
    }
}
