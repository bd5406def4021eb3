//! Configuration loading and merging logic.
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.dessert/config.toml`
//! 3. **Project config** - `./.dessert/config.toml`
//! 4. **`DESSERT_CONFIG`** - Path named by the environment variable
//! 5. **Explicit path** - e.g. the CLI `--config` flag (highest priority)

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::errors::ConfigError;
use super::types::{AssertConfig, DessertConfig, HandlerConfig};
use super::validation::validate_config;

/// Environment variable naming an extra config file.
pub const CONFIG_ENV_VAR: &str = "DESSERT_CONFIG";

const CONFIG_DIR: &str = ".dessert";
const CONFIG_FILE: &str = "config.toml";

/// Load configuration from the hierarchy of config files.
///
/// `explicit` is layered on top of everything else; unlike the implicit
/// locations it must exist.
///
/// # Errors
///
/// Returns an error if a file cannot be parsed, if `explicit` cannot be
/// read, or if validation fails. Missing implicit files are not errors.
pub fn load_hierarchy(explicit: Option<&Path>) -> Result<DessertConfig, ConfigError> {
    let mut config = DessertConfig::default();

    let mut implicit: Vec<PathBuf> = Vec::new();
    if let Some(home) = dirs::home_dir() {
        implicit.push(home.join(CONFIG_DIR).join(CONFIG_FILE));
    }
    if let Ok(cwd) = std::env::current_dir() {
        implicit.push(cwd.join(CONFIG_DIR).join(CONFIG_FILE));
    }
    if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
        implicit.push(PathBuf::from(path));
    }

    for path in implicit {
        match load_config_file(&path) {
            Ok(layer) => {
                debug!(event = "core.config.layer_loaded", path = %path.display());
                config = merge_configs(config, layer);
            }
            Err(e) if e.is_file_not_found() => {}
            Err(e) => return Err(e),
        }
    }

    if let Some(path) = explicit {
        config = merge_configs(config, load_config_file(path)?);
        debug!(event = "core.config.layer_loaded", path = %path.display());
    }

    validate_config(&config)?;

    Ok(config)
}

/// Load a single configuration file without validating it.
pub fn load_config_file(path: &Path) -> Result<DessertConfig, ConfigError> {
    let content = fs::read_to_string(path)
        .map_err(|e| std::io::Error::new(e.kind(), format!("'{}': {}", path.display(), e)))?;
    toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
        message: format!("'{}': {}", path.display(), e),
    })
}

/// Merge two configurations, with `override_config` taking precedence.
///
/// Override values replace base values only if present.
pub fn merge_configs(base: DessertConfig, override_config: DessertConfig) -> DessertConfig {
    DessertConfig {
        assert: AssertConfig {
            default_message: override_config
                .assert
                .default_message
                .or(base.assert.default_message),
            separator: override_config.assert.separator.or(base.assert.separator),
        },
        handler: HandlerConfig {
            policy: override_config.handler.policy.or(base.handler.policy),
        },
    }
}
