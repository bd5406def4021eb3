use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::namespace::Dessert;
use crate::value::Value;

/// What a custom handler decided to do with a failed assertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// The failure was dealt with; `assert` returns the namespace.
    Handled,
    /// Fall through to the default failure, an `AssertionFailed` error.
    Raise,
}

type HandlerFn = dyn Fn(&Value, &[Value]) -> Disposition + Send + Sync;

/// Callback intercepting failed assertions.
///
/// Receives the falsy expression and every message part passed to `assert`.
#[derive(Clone)]
pub struct FailureHandler {
    handler: Arc<HandlerFn>,
}

impl FailureHandler {
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(&Value, &[Value]) -> Disposition + Send + Sync + 'static,
    {
        Self {
            handler: Arc::new(handler),
        }
    }

    pub fn handle(&self, expr: &Value, message_parts: &[Value]) -> Disposition {
        (self.handler)(expr, message_parts)
    }

    pub fn ptr_eq(&self, other: &FailureHandler) -> bool {
        Arc::ptr_eq(&self.handler, &other.handler)
    }
}

impl fmt::Debug for FailureHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FailureHandler").finish_non_exhaustive()
    }
}

/// Built-in failure handling installed from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// No handler: failed assertions return an error.
    #[default]
    Raise,
    /// Log a warning and continue.
    Log,
    /// Continue without output.
    Silent,
}

/// How a validator call reports its result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CheckMode {
    /// Route the predicate result through `assert`.
    #[default]
    Assert,
    /// Return the predicate result; never fails the assertion.
    Soft,
}

/// Result of a validator call, shaped by its [`CheckMode`].
#[derive(Debug, Clone, Copy)]
pub enum CheckOutcome<'a> {
    Namespace(&'a Dessert),
    Soft(bool),
}

impl CheckOutcome<'_> {
    /// Whether the check passed (or, in assert mode, was handled).
    pub fn passed(&self) -> bool {
        match self {
            CheckOutcome::Namespace(_) => true,
            CheckOutcome::Soft(passed) => *passed,
        }
    }
}
