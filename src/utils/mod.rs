//! Input validation for the solver's invocation contract

mod errors;
mod validation;

pub use errors::UtilsError;
pub use validation::validate_numbers;

#[cfg(test)]
mod tests;
