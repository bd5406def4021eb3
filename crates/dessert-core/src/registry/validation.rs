//! Guard rails for validator names.

use crate::assert::AssertError;

/// Namespace members that can never be registered, replaced or removed.
pub const CORE_NAMES: [&str; 5] = ["assert", "addType", "addTypes", "customHandler", "validators"];

pub fn is_core_name(name: &str) -> bool {
    CORE_NAMES.contains(&name)
}

/// Validate a validator name.
///
/// Any non-empty string is accepted, so names such as `foo-bar` or
/// `has space` register like any other key.
///
/// # Errors
///
/// Returns `AssertError::InvalidArgument` for the empty name and
/// `AssertError::CoreNameConflict` for core names.
pub fn validate_name(name: &str) -> Result<(), AssertError> {
    if name.is_empty() {
        return Err(AssertError::InvalidArgument {
            message: "validator name must not be empty".to_string(),
        });
    }

    if is_core_name(name) {
        return Err(AssertError::CoreNameConflict {
            name: name.to_string(),
        });
    }

    Ok(())
}
