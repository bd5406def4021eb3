use super::errors::ConfigError;
use super::types::DessertConfig;

/// Validate a DessertConfig, returning an error if any values are invalid.
///
/// # Validation Rules
///
/// - `assert.default_message`, if set, must not be blank
/// - `assert.separator`, if set, must not contain line breaks
pub fn validate_config(config: &DessertConfig) -> Result<(), ConfigError> {
    if let Some(ref message) = config.assert.default_message
        && message.trim().is_empty()
    {
        return Err(ConfigError::InvalidConfiguration {
            message: "assert.default_message must not be blank".to_string(),
        });
    }

    if let Some(ref separator) = config.assert.separator
        && separator.contains(['\n', '\r'])
    {
        return Err(ConfigError::InvalidConfiguration {
            message: "assert.separator must not contain line breaks".to_string(),
        });
    }

    Ok(())
}
