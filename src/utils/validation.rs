use log::{debug, warn};

use crate::utils::errors::UtilsError;

/// # Errors
///
/// Returns an error if the list is empty or contains a zero.
pub fn validate_numbers(numbers: &[u64]) -> Result<(), UtilsError> {
    debug!("Validating numbers: {:?}", numbers);

    if numbers.is_empty() {
        warn!("No numbers given");
        return Err(UtilsError::NoNumbers);
    }

    if let Some(index) = numbers.iter().position(|&n| n == 0) {
        warn!("Zero found at position {}", index);
        return Err(UtilsError::ZeroNumber { index });
    }

    debug!("Number validation successful");
    Ok(())
}
