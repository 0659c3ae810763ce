mod operations;

pub use operations::{ExpressionGenerator, Operation};

#[cfg(test)]
mod tests;
