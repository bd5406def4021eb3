//! Registry of named validators.
//!
//! Holds the mapping from validator name to predicate and enforces the
//! registration rules: core names are immutable, existing validators are
//! only replaced when asked to, and built-ins cannot be removed.

mod builtins;
mod types;
mod validation;

use std::collections::HashMap;

use tracing::debug;

use crate::assert::AssertError;

pub use builtins::{IS_FUNCTION, IS_FUNCTION_OPTIONAL, IS_PLAIN_OBJECT, IS_STRING};
pub use types::{Predicate, Validator, ValidatorKind};
pub use validation::{CORE_NAMES, is_core_name, validate_name};

/// What a successful registration did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    Added,
    Replaced,
    /// Same predicate registered again under the same name.
    Unchanged,
}

/// Validator storage without synchronization; `Dessert` owns the lock.
#[derive(Debug, Clone)]
pub(crate) struct Registry {
    validators: HashMap<String, Validator>,
}

impl Registry {
    /// Registry pre-populated with the built-in validators.
    pub fn with_builtins() -> Self {
        let validators = builtins::builtin_validators()
            .into_iter()
            .map(|(name, predicate)| {
                (
                    name.to_string(),
                    Validator::new(name, ValidatorKind::Builtin, predicate),
                )
            })
            .collect();
        Self { validators }
    }

    /// Register `predicate` under `name`.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if `name` is empty
    /// - `CoreNameConflict` if `name` is a core name
    /// - `DuplicateValidator` if `name` is taken by a different predicate
    ///   and `overwrite` is false
    pub fn add(
        &mut self,
        name: &str,
        predicate: Predicate,
        overwrite: bool,
    ) -> Result<Registration, AssertError> {
        validate_name(name)?;

        let Some(existing) = self.validators.get_mut(name) else {
            self.validators.insert(
                name.to_string(),
                Validator::new(name, ValidatorKind::Custom, predicate),
            );
            debug!(event = "core.registry.type_added", name = name);
            return Ok(Registration::Added);
        };

        if overwrite {
            existing.set_predicate(predicate);
            debug!(
                event = "core.registry.type_replaced",
                name = name,
                kind = ?existing.kind()
            );
            return Ok(Registration::Replaced);
        }

        if existing.predicate().ptr_eq(&predicate) {
            return Ok(Registration::Unchanged);
        }

        Err(AssertError::DuplicateValidator {
            name: name.to_string(),
        })
    }

    /// Remove a custom validator. Returns whether anything was removed.
    pub fn remove(&mut self, name: &str) -> Result<bool, AssertError> {
        if is_core_name(name) {
            return Err(AssertError::CoreNameConflict {
                name: name.to_string(),
            });
        }

        match self.validators.get(name) {
            None => Ok(false),
            Some(validator) if validator.is_builtin() => Err(AssertError::BuiltinValidator {
                name: name.to_string(),
            }),
            Some(_) => {
                self.validators.remove(name);
                debug!(event = "core.registry.type_removed", name = name);
                Ok(true)
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Validator> {
        self.validators.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.validators.contains_key(name)
    }

    /// All validator names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.validators.keys().cloned().collect();
        names.sort();
        names
    }

    /// All validators, sorted by name.
    pub fn validators(&self) -> Vec<Validator> {
        let mut validators: Vec<Validator> = self.validators.values().cloned().collect();
        validators.sort_by(|a, b| a.name().cmp(b.name()));
        validators
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    fn is_test(value: &Value, _: &[Value]) -> bool {
        value.as_str() == Some("test")
    }

    #[test]
    fn test_registry_contains_builtins() {
        let registry = Registry::with_builtins();
        assert_eq!(
            registry.names(),
            vec![IS_FUNCTION, IS_FUNCTION_OPTIONAL, IS_PLAIN_OBJECT, IS_STRING]
        );
        assert!(registry.validators().iter().all(Validator::is_builtin));
    }

    #[test]
    fn test_add_new_validator() {
        let mut registry = Registry::with_builtins();
        assert!(!registry.contains("test"));

        let outcome = registry.add("test", Predicate::new(is_test), false);
        assert_eq!(outcome, Ok(Registration::Added));
        let validator = registry.get("test").unwrap();
        assert_eq!(validator.kind(), ValidatorKind::Custom);
        assert!(validator.predicate().evaluate(&Value::from("test"), &[]));
    }

    #[test]
    fn test_add_same_predicate_is_noop() {
        let mut registry = Registry::with_builtins();
        let predicate = Predicate::new(is_test);

        registry.add("test", predicate.clone(), false).unwrap();
        assert_eq!(
            registry.add("test", predicate.clone(), false),
            Ok(Registration::Unchanged)
        );
        assert!(registry.get("test").unwrap().predicate().ptr_eq(&predicate));
    }

    #[test]
    fn test_add_different_predicate_is_rejected() {
        let mut registry = Registry::with_builtins();
        let original = Predicate::new(is_test);
        registry.add("test", original.clone(), false).unwrap();

        let result = registry.add("test", Predicate::new(|_, _| true), false);
        assert_eq!(
            result,
            Err(AssertError::DuplicateValidator {
                name: "test".to_string()
            })
        );
        assert!(registry.get("test").unwrap().predicate().ptr_eq(&original));
    }

    #[test]
    fn test_overwrite_replaces() {
        let mut registry = Registry::with_builtins();
        registry.add("test", Predicate::new(is_test), false).unwrap();

        let replacement = Predicate::new(|value, _| value.as_str() == Some("overwritten"));
        assert_eq!(
            registry.add("test", replacement.clone(), true),
            Ok(Registration::Replaced)
        );
        assert!(registry.get("test").unwrap().predicate().ptr_eq(&replacement));
    }

    #[test]
    fn test_overwritten_builtin_stays_builtin() {
        let mut registry = Registry::with_builtins();
        registry
            .add(IS_STRING, Predicate::new(|_, _| true), true)
            .unwrap();
        assert!(registry.get(IS_STRING).unwrap().is_builtin());
        assert!(matches!(
            registry.remove(IS_STRING),
            Err(AssertError::BuiltinValidator { .. })
        ));
    }

    #[test]
    fn test_core_name_rejected_even_with_overwrite() {
        let mut registry = Registry::with_builtins();
        for overwrite in [false, true] {
            assert!(matches!(
                registry.add("assert", Predicate::new(|_, _| true), overwrite),
                Err(AssertError::CoreNameConflict { .. })
            ));
        }
        assert!(!registry.contains("assert"));
    }

    #[test]
    fn test_remove() {
        let mut registry = Registry::with_builtins();
        registry.add("test", Predicate::new(is_test), false).unwrap();

        assert_eq!(registry.remove("test"), Ok(true));
        assert_eq!(registry.remove("test"), Ok(false));
        assert!(matches!(
            registry.remove("validators"),
            Err(AssertError::CoreNameConflict { .. })
        ));
    }
}
