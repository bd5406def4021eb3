//! Application-level lifecycle events.

use tracing::{error, info, warn};

use crate::errors::DessertError;

pub fn log_app_startup() {
    info!(
        event = "core.app.startup_completed",
        version = env!("CARGO_PKG_VERSION")
    );
}

/// Log an error at a level matching its origin: warnings for caller
/// mistakes, errors for everything else.
pub fn log_app_error<E: DessertError>(error: &E) {
    if error.is_user_error() {
        warn!(
            event = "core.app.error_occurred",
            error_code = error.error_code(),
            error = %error
        );
    } else {
        error!(
            event = "core.app.error_occurred",
            error_code = error.error_code(),
            error = %error
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert::AssertError;
    use crate::config::ConfigError;

    #[test]
    fn test_log_events_do_not_panic() {
        log_app_startup();
        log_app_error(&AssertError::UnknownValidator {
            name: "isNumber".to_string(),
        });
        log_app_error(&ConfigError::from(std::io::Error::other("disk gone")));
    }
}
