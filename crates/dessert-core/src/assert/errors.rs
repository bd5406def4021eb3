use crate::errors::DessertError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AssertError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Cannot replace core function '{name}'")]
    CoreNameConflict { name: String },

    #[error("Validator '{name}' already exists (pass overwrite to replace it)")]
    DuplicateValidator { name: String },

    #[error("Built-in validator '{name}' cannot be removed")]
    BuiltinValidator { name: String },

    #[error("Unknown validator '{name}'")]
    UnknownValidator { name: String },

    #[error("{message}")]
    AssertionFailed { message: String },
}

impl AssertError {
    /// Whether this is a failed assertion, the only kind a custom handler can intercept.
    pub fn is_assertion_failure(&self) -> bool {
        matches!(self, AssertError::AssertionFailed { .. })
    }
}

impl DessertError for AssertError {
    fn error_code(&self) -> &'static str {
        match self {
            AssertError::InvalidArgument { .. } => "INVALID_ARGUMENT",
            AssertError::CoreNameConflict { .. } => "CORE_NAME_CONFLICT",
            AssertError::DuplicateValidator { .. } => "DUPLICATE_VALIDATOR",
            AssertError::BuiltinValidator { .. } => "BUILTIN_VALIDATOR",
            AssertError::UnknownValidator { .. } => "UNKNOWN_VALIDATOR",
            AssertError::AssertionFailed { .. } => "ASSERTION_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        // Every variant stems from caller input
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_name_conflict() {
        let error = AssertError::CoreNameConflict {
            name: "assert".to_string(),
        };
        assert_eq!(error.to_string(), "Cannot replace core function 'assert'");
        assert_eq!(error.error_code(), "CORE_NAME_CONFLICT");
        assert!(error.is_user_error());
        assert!(!error.is_assertion_failure());
    }

    #[test]
    fn test_duplicate_validator() {
        let error = AssertError::DuplicateValidator {
            name: "test".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Validator 'test' already exists (pass overwrite to replace it)"
        );
        assert_eq!(error.error_code(), "DUPLICATE_VALIDATOR");
    }

    #[test]
    fn test_assertion_failed_displays_message_only() {
        let error = AssertError::AssertionFailed {
            message: "foo bar".to_string(),
        };
        assert_eq!(error.to_string(), "foo bar");
        assert!(error.is_assertion_failure());
    }

    #[test]
    fn test_error_codes_are_unique() {
        use std::collections::HashSet;
        let name = || "t".to_string();
        let errors: Vec<&str> = vec![
            AssertError::InvalidArgument { message: name() }.error_code(),
            AssertError::CoreNameConflict { name: name() }.error_code(),
            AssertError::DuplicateValidator { name: name() }.error_code(),
            AssertError::BuiltinValidator { name: name() }.error_code(),
            AssertError::UnknownValidator { name: name() }.error_code(),
            AssertError::AssertionFailed { message: name() }.error_code(),
        ];
        let unique: HashSet<_> = errors.iter().collect();
        assert_eq!(unique.len(), errors.len(), "Error codes must be unique");
    }
}
