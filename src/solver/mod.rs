mod config;
mod errors;
mod ranker;
mod search;
mod solution;

pub use config::SolverConfig;
pub use errors::SolverError;
pub use ranker::{best, ranked};
pub use search::ExpressionSolver;
pub use solution::{SearchStats, Solution};
