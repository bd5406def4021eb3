//! The `Dessert` namespace: assertions, the failure-handler slot and
//! validator dispatch.

use std::fmt;
use std::sync::{OnceLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, error, info, warn};

use crate::assert::{
    AssertError, CheckMode, CheckOutcome, Disposition, FailureHandler, compose_message,
};
use crate::config::DessertConfig;
use crate::registry::{
    IS_FUNCTION, IS_FUNCTION_OPTIONAL, IS_PLAIN_OBJECT, IS_STRING, Predicate, Registry, Validator,
};
use crate::value::Value;


/// Process-wide namespace.
static GLOBAL: OnceLock<Dessert> = OnceLock::new();

/// The process-wide namespace, created with default configuration on first use.
pub fn dessert() -> &'static Dessert {
    GLOBAL.get_or_init(Dessert::new)
}

/// Create the process-wide namespace from `config`.
///
/// If the namespace already exists it is returned unchanged and `config` is
/// ignored.
pub fn init_global(config: DessertConfig) -> &'static Dessert {
    let mut fresh = Some(config);
    let namespace = GLOBAL.get_or_init(|| Dessert::with_config(fresh.take().unwrap_or_default()));
    if fresh.is_some() {
        warn!(
            event = "core.namespace.init_skipped",
            reason = "namespace already initialized"
        );
    }
    namespace
}

/// Namespace holding the validator registry and the custom failure handler.
///
/// Every successful operation returns the namespace so calls can be chained:
///
/// ```
/// use dessert_core::{Dessert, Value};
///
/// let ns = Dessert::new();
/// ns.is_string("hello")?
///     .assert(true, &[])?
///     .check("isPlainObject", Value::Object(Default::default()), &[])?;
/// # Ok::<(), dessert_core::AssertError>(())
/// ```
pub struct Dessert {
    registry: RwLock<Registry>,
    handler: RwLock<Option<FailureHandler>>,
    config: DessertConfig,
}

impl Dessert {
    /// Namespace with default configuration and the built-in validators.
    pub fn new() -> Self {
        Self::with_config(DessertConfig::default())
    }

    /// Namespace using `config`; installs the configured failure policy.
    pub fn with_config(config: DessertConfig) -> Self {
        let policy = config.failure_policy();
        info!(event = "core.namespace.created", policy = ?policy);

        Self {
            registry: RwLock::new(Registry::with_builtins()),
            handler: RwLock::new(policy.handler(&config)),
            config,
        }
    }

    pub fn config(&self) -> &DessertConfig {
        &self.config
    }

    // --- Assertion core ---

    /// Assert that `expr` is truthy.
    ///
    /// On failure the custom handler, if any, is consulted first; when it
    /// reports [`Disposition::Handled`] the failure is suppressed.
    ///
    /// # Errors
    ///
    /// Returns `AssertError::AssertionFailed` with the message parts joined
    /// by the configured separator, or the configured default message when
    /// no parts are given.
    pub fn assert(
        &self,
        expr: impl Into<Value>,
        message_parts: &[Value],
    ) -> Result<&Self, AssertError> {
        let expr = expr.into();
        if expr.is_truthy() {
            return Ok(self);
        }

        // Cloned out of the slot so the handler may use the namespace
        let handler = self.handler_slot().clone();
        if let Some(handler) = handler
            && handler.handle(&expr, message_parts) == Disposition::Handled
        {
            debug!(event = "core.assert.failure_handled", expr = %expr);
            return Ok(self);
        }

        let message = compose_message(
            message_parts,
            self.config.separator(),
            self.config.default_message(),
        );
        warn!(event = "core.assert.failed", message = %message);
        Err(AssertError::AssertionFailed { message })
    }

    /// Install `handler` as the failure interceptor, or remove it with `None`.
    ///
    /// Returns the previously installed handler.
    pub fn custom_handler(&self, handler: Option<FailureHandler>) -> Option<FailureHandler> {
        debug!(
            event = "core.assert.handler_changed",
            installed = handler.is_some()
        );
        let mut slot = self.handler_slot_mut();
        std::mem::replace(&mut *slot, handler)
    }

    pub fn has_custom_handler(&self) -> bool {
        self.handler_slot().is_some()
    }

    // --- Registry ---

    /// Register a named validator.
    ///
    /// Re-registering the same predicate (a clone of the registered one) is
    /// a no-op. A different predicate replaces the existing one only when
    /// `overwrite` is set.
    ///
    /// # Errors
    ///
    /// `InvalidArgument`, `CoreNameConflict` or `DuplicateValidator`; these
    /// never pass through the custom handler.
    pub fn add_type(
        &self,
        name: &str,
        predicate: Predicate,
        overwrite: bool,
    ) -> Result<&Self, AssertError> {
        let registration = self.registry_mut().add(name, predicate, overwrite);
        match registration {
            Ok(outcome) => {
                debug!(event = "core.namespace.add_type_completed", name = name, outcome = ?outcome);
                Ok(self)
            }
            Err(e) => {
                warn!(
                    event = "core.namespace.add_type_failed",
                    name = name,
                    error = %e
                );
                Err(e)
            }
        }
    }

    /// Register a validator from dynamic values.
    ///
    /// `name` must be a string and `predicate` a function; the function's
    /// return value is judged by truthiness.
    pub fn add_type_value(
        &self,
        name: &Value,
        predicate: &Value,
        overwrite: bool,
    ) -> Result<&Self, AssertError> {
        let Value::String(name) = name else {
            return Err(AssertError::InvalidArgument {
                message: format!("validator name must be a string, got {}", name.type_name()),
            });
        };
        let predicate = Predicate::try_from(predicate)?;
        self.add_type(name, predicate, overwrite)
    }

    /// Register several validators without overwriting.
    ///
    /// Stops at the first failure; validators registered before it stay.
    pub fn add_types<I, N>(&self, validators: I) -> Result<&Self, AssertError>
    where
        I: IntoIterator<Item = (N, Predicate)>,
        N: AsRef<str>,
    {
        for (name, predicate) in validators {
            self.add_type(name.as_ref(), predicate, false)?;
        }
        Ok(self)
    }

    /// Remove a custom validator. Returns whether anything was removed.
    ///
    /// # Errors
    ///
    /// `CoreNameConflict` for core names, `BuiltinValidator` for built-ins.
    pub fn remove_type(&self, name: &str) -> Result<bool, AssertError> {
        self.registry_mut().remove(name)
    }

    pub fn has_type(&self, name: &str) -> bool {
        self.registry().contains(name)
    }

    pub fn validator(&self, name: &str) -> Option<Validator> {
        self.registry().get(name).cloned()
    }

    /// Registered validator names, sorted.
    pub fn validator_names(&self) -> Vec<String> {
        self.registry().names()
    }

    /// Snapshot of every registered validator, sorted by name.
    pub fn validators(&self) -> Vec<Validator> {
        self.registry().validators()
    }

    // --- Dispatch ---

    /// Run the validator registered as `name` against `value`.
    ///
    /// In [`CheckMode::Soft`] the predicate result is returned as is. In
    /// [`CheckMode::Assert`] it goes through [`Dessert::assert`] with the
    /// value followed by `extra` as message parts.
    ///
    /// # Errors
    ///
    /// `UnknownValidator` if nothing is registered under `name`; in assert
    /// mode also `AssertionFailed`.
    pub fn call(
        &self,
        name: &str,
        value: &Value,
        extra: &[Value],
        mode: CheckMode,
    ) -> Result<CheckOutcome<'_>, AssertError> {
        // Cloned out of the registry so predicates may use the namespace
        let validator = self
            .validator(name)
            .ok_or_else(|| AssertError::UnknownValidator {
                name: name.to_string(),
            })?;

        let passed = validator.predicate().evaluate(value, extra);

        match mode {
            CheckMode::Soft => Ok(CheckOutcome::Soft(passed)),
            CheckMode::Assert => {
                let mut message_parts = Vec::with_capacity(extra.len() + 1);
                message_parts.push(value.clone());
                message_parts.extend_from_slice(extra);
                self.assert(passed, &message_parts)
                    .map(CheckOutcome::Namespace)
            }
        }
    }

    /// Assert-mode validator call.
    pub fn check(
        &self,
        name: &str,
        value: impl Into<Value>,
        extra: &[Value],
    ) -> Result<&Self, AssertError> {
        match self.call(name, &value.into(), extra, CheckMode::Assert)? {
            CheckOutcome::Namespace(namespace) => Ok(namespace),
            CheckOutcome::Soft(_) => Ok(self),
        }
    }

    /// Soft-mode validator call: returns whether `value` passes.
    pub fn test(
        &self,
        name: &str,
        value: impl Into<Value>,
        extra: &[Value],
    ) -> Result<bool, AssertError> {
        self.call(name, &value.into(), extra, CheckMode::Soft)
            .map(|outcome| outcome.passed())
    }

    pub fn is_string(&self, value: impl Into<Value>) -> Result<&Self, AssertError> {
        self.check(IS_STRING, value, &[])
    }

    pub fn is_function(&self, value: impl Into<Value>) -> Result<&Self, AssertError> {
        self.check(IS_FUNCTION, value, &[])
    }

    pub fn is_function_optional(&self, value: impl Into<Value>) -> Result<&Self, AssertError> {
        self.check(IS_FUNCTION_OPTIONAL, value, &[])
    }

    pub fn is_plain_object(&self, value: impl Into<Value>) -> Result<&Self, AssertError> {
        self.check(IS_PLAIN_OBJECT, value, &[])
    }

    // --- Locking ---

    fn registry(&self) -> RwLockReadGuard<'_, Registry> {
        self.registry.read().unwrap_or_else(|poisoned| {
            error!(event = "core.namespace.registry_lock_poisoned");
            PoisonError::into_inner(poisoned)
        })
    }

    fn registry_mut(&self) -> RwLockWriteGuard<'_, Registry> {
        self.registry.write().unwrap_or_else(|poisoned| {
            error!(event = "core.namespace.registry_lock_poisoned");
            PoisonError::into_inner(poisoned)
        })
    }

    fn handler_slot(&self) -> RwLockReadGuard<'_, Option<FailureHandler>> {
        self.handler.read().unwrap_or_else(|poisoned| {
            error!(event = "core.namespace.handler_lock_poisoned");
            PoisonError::into_inner(poisoned)
        })
    }

    fn handler_slot_mut(&self) -> RwLockWriteGuard<'_, Option<FailureHandler>> {
        self.handler.write().unwrap_or_else(|poisoned| {
            error!(event = "core.namespace.handler_lock_poisoned");
            PoisonError::into_inner(poisoned)
        })
    }
}

impl Default for Dessert {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Dessert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dessert")
            .field("validators", &self.validator_names())
            .field("custom_handler", &self.has_custom_handler())
            .field("config", &self.config)
            .finish()
    }
}
