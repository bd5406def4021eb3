//! dessert-core: runtime assertions with an extensible validator registry
//!
//! This library provides:
//! - A dynamic [`Value`] model with JavaScript-style truthiness
//! - The [`Dessert`] namespace: `assert`, custom failure handlers and
//!   dispatch of named validators
//! - A registry of named predicates with guard rails against clobbering
//!   core names and previously registered validators
//! - TOML configuration and `tracing`-based structured logging

pub mod assert;
pub mod config;
pub mod errors;
pub mod events;
pub mod logging;
pub mod namespace;
pub mod registry;
pub mod value;

// Re-export commonly used types at the crate root
pub use errors::{DessertError, DessertResult};
pub use logging::init_logging;

pub use assert::{AssertError, CheckMode, CheckOutcome, Disposition, FailureHandler, FailurePolicy};
pub use config::{ConfigError, DessertConfig};
pub use namespace::{Dessert, dessert, init_global};
pub use registry::{CORE_NAMES, Predicate, Validator, ValidatorKind};
pub use value::{Function, Object, Prototype, Value};
