use thiserror::Error;

/// Errors that can occur in utility functions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("At least one number is required")]
    NoNumbers,
    #[error("Numbers must be positive, found 0 at position {index}")]
    ZeroNumber { index: usize },
}
