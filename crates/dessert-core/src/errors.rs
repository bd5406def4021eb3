use std::error::Error;

/// Base trait for all dessert errors
pub trait DessertError: Error + Send + Sync + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether this error was caused by caller input rather than an internal fault
    fn is_user_error(&self) -> bool {
        false
    }
}

/// Common result type for the library
pub type DessertResult<T> = Result<T, Box<dyn DessertError>>;
