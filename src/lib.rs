//! Numble - find arithmetic expressions over a multiset of integers
//!
//! Numbers are combined pairwise with `+`, `-`, `×` and `÷` until a value
//! equal to the target appears. Intermediate results stay positive integers.
//! The search is exhaustive and the simplest of all distinct solutions is
//! returned: fewest numbers used, then fewest divisions, multiplications,
//! subtractions and additions, then alphabetical rendering.

pub mod expression;
pub mod generator;
pub mod solver;
pub mod utils;

// Re-export the main public API
pub use expression::{Expression, ExpressionError, Operator, OperatorProfile};
pub use solver::{ExpressionSolver, SearchStats, Solution, SolverConfig, SolverError};
pub use utils::{UtilsError, validate_numbers};

/// Find the simplest expression over `numbers` that evaluates to `target`
///
/// This is a convenience function that validates the input, creates a default
/// solver and ranks everything it finds.
///
/// # Returns
///
/// * `Ok(Some(Expression))` - The best matching expression
/// * `Ok(None)` - If no combination of the numbers reaches the target
/// * `Err(SolverError)` - If the input is empty or contains a zero
///
/// # Errors
///
/// This function will return an error if:
/// * `numbers` is empty
/// * `numbers` contains a zero
///
/// # Examples
///
/// ```
/// use numble::solve_puzzle;
///
/// match solve_puzzle(375, &[5, 75]) {
///     Ok(Some(expr)) => assert_eq!(format!("{} = 375", expr), "75 × 5 = 375"),
///     Ok(None) => println!("No solution found."),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn solve_puzzle(target: u64, numbers: &[u64]) -> Result<Option<Expression>, SolverError> {
    validate_numbers(numbers)?;

    let solver = ExpressionSolver::new();
    Ok(solver.find_expression(target, numbers))
}
