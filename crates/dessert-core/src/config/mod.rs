//! TOML configuration for message formatting and the default failure policy.

mod errors;
mod loading;
mod types;
mod validation;

pub use errors::ConfigError;
pub use loading::{CONFIG_ENV_VAR, load_config_file, load_hierarchy, merge_configs};
pub use types::{AssertConfig, DEFAULT_MESSAGE, DEFAULT_SEPARATOR, DessertConfig, HandlerConfig};
pub use validation::validate_config;

impl DessertConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy(explicit: Option<&std::path::Path>) -> Result<Self, ConfigError> {
        loading::load_hierarchy(explicit)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validation::validate_config(self)
    }
}
