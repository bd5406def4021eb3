use serde::{Deserialize, Serialize};

use crate::assert::FailurePolicy;

pub const DEFAULT_MESSAGE: &str = "Assertion failed";
pub const DEFAULT_SEPARATOR: &str = " ";

/// Top-level configuration, as read from `config.toml`.
///
/// Every field is optional so that partial files can be layered; use the
/// accessor methods to read effective values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DessertConfig {
    #[serde(default)]
    pub assert: AssertConfig,

    #[serde(default)]
    pub handler: HandlerConfig,
}

/// How failure messages are composed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssertConfig {
    /// Message used when an assertion fails without message parts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_message: Option<String>,

    /// Joins message parts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub separator: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HandlerConfig {
    /// Failure handler installed when a namespace is constructed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy: Option<FailurePolicy>,
}

impl DessertConfig {
    pub fn default_message(&self) -> &str {
        self.assert
            .default_message
            .as_deref()
            .unwrap_or(DEFAULT_MESSAGE)
    }

    pub fn separator(&self) -> &str {
        self.assert.separator.as_deref().unwrap_or(DEFAULT_SEPARATOR)
    }

    pub fn failure_policy(&self) -> FailurePolicy {
        self.handler.policy.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DessertConfig::default();
        assert_eq!(config.default_message(), "Assertion failed");
        assert_eq!(config.separator(), " ");
        assert_eq!(config.failure_policy(), FailurePolicy::Raise);
    }

    #[test]
    fn test_parse_full_config() {
        let config: DessertConfig = toml::from_str(
            r#"
            [assert]
            default_message = "check failed"
            separator = ", "

            [handler]
            policy = "silent"
            "#,
        )
        .unwrap();
        assert_eq!(config.default_message(), "check failed");
        assert_eq!(config.separator(), ", ");
        assert_eq!(config.failure_policy(), FailurePolicy::Silent);
    }

    #[test]
    fn test_parse_partial_config() {
        let config: DessertConfig = toml::from_str("[handler]\npolicy = \"log\"\n").unwrap();
        assert_eq!(config.default_message(), "Assertion failed");
        assert_eq!(config.failure_policy(), FailurePolicy::Log);
    }

    #[test]
    fn test_unknown_policy_rejected() {
        let result: Result<DessertConfig, _> = toml::from_str("[handler]\npolicy = \"explode\"\n");
        assert!(result.is_err());
    }
}
