//! Validation functions for pointers and name paths.

use crate::PointerError;

/// Maximum allowed pointer string length.
const MAX_POINTER_LENGTH: usize = 1024;

/// Maximum allowed path depth.
const MAX_PATH_LENGTH: usize = 256;

/// Validate a pointer string.
///
/// # Errors
///
/// - [`PointerError::PointerInvalid`] if the pointer is non-empty and doesn't start with `/`
/// - [`PointerError::PointerTooLong`] if the pointer exceeds 1024 bytes
pub fn validate_pointer(pointer: &str) -> Result<(), PointerError> {
    if pointer.is_empty() {
        return Ok(());
    }
    if !pointer.starts_with('/') {
        return Err(PointerError::PointerInvalid);
    }
    if pointer.len() > MAX_POINTER_LENGTH {
        return Err(PointerError::PointerTooLong);
    }
    Ok(())
}

/// Validate a name path. Every string is a valid name; only depth is bounded.
pub fn validate_path(path: &[String]) -> Result<(), PointerError> {
    if path.len() > MAX_PATH_LENGTH {
        return Err(PointerError::PathTooLong);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_empty_pointer() {
        assert!(validate_pointer("").is_ok());
    }

    #[test]
    fn test_validate_absolute_pointer() {
        assert!(validate_pointer("/").is_ok());
        assert!(validate_pointer("/nav/#hash").is_ok());
    }

    #[test]
    fn test_validate_relative_pointer() {
        assert_eq!(validate_pointer("nav"), Err(PointerError::PointerInvalid));
    }

    #[test]
    fn test_validate_long_pointer() {
        let long_pointer = "/".to_string() + &"a".repeat(2000);
        assert_eq!(
            validate_pointer(&long_pointer),
            Err(PointerError::PointerTooLong)
        );
    }

    #[test]
    fn test_validate_path_depth() {
        let ok: Vec<String> = (0..256).map(|i| i.to_string()).collect();
        assert!(validate_path(&ok).is_ok());
        let too_deep: Vec<String> = (0..300).map(|i| i.to_string()).collect();
        assert_eq!(validate_path(&too_deep), Err(PointerError::PathTooLong));
    }
}
