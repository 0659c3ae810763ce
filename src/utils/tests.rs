use crate::utils::{UtilsError, validate_numbers};

#[test]
fn test_validate_numbers_valid() {
    assert!(validate_numbers(&[25, 100, 50, 75, 10, 3]).is_ok());
    assert!(validate_numbers(&[7, 7]).is_ok());
    assert!(validate_numbers(&[1]).is_ok());
}

#[test]
fn test_validate_numbers_empty() {
    assert_eq!(validate_numbers(&[]), Err(UtilsError::NoNumbers));
}

#[test]
fn test_validate_numbers_zero() {
    assert_eq!(
        validate_numbers(&[5, 0, 75]),
        Err(UtilsError::ZeroNumber { index: 1 })
    );
}
