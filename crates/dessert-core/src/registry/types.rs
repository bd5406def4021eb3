use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::assert::AssertError;
use crate::value::{Function, Value};

type NativePredicate = dyn Fn(&Value, &[Value]) -> bool + Send + Sync;

#[derive(Clone)]
enum PredicateFn {
    Native(Arc<NativePredicate>),
    Function(Function),
}

/// Boolean check behind a named validator.
///
/// Called with the value under test and any extra arguments. Clones share
/// identity, which is what makes re-registering the same predicate a no-op.
#[derive(Clone)]
pub struct Predicate {
    inner: PredicateFn,
}

impl Predicate {
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&Value, &[Value]) -> bool + Send + Sync + 'static,
    {
        Self {
            inner: PredicateFn::Native(Arc::new(predicate)),
        }
    }

    /// Wrap a function value; its return value is judged by truthiness.
    pub fn from_function(function: Function) -> Self {
        Self {
            inner: PredicateFn::Function(function),
        }
    }

    pub fn evaluate(&self, value: &Value, extra: &[Value]) -> bool {
        match &self.inner {
            PredicateFn::Native(predicate) => predicate(value, extra),
            PredicateFn::Function(function) => {
                let mut args = Vec::with_capacity(extra.len() + 1);
                args.push(value.clone());
                args.extend_from_slice(extra);
                function.call(&args).is_truthy()
            }
        }
    }

    /// Reference identity.
    pub fn ptr_eq(&self, other: &Predicate) -> bool {
        match (&self.inner, &other.inner) {
            (PredicateFn::Native(a), PredicateFn::Native(b)) => Arc::ptr_eq(a, b),
            (PredicateFn::Function(a), PredicateFn::Function(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl TryFrom<&Value> for Predicate {
    type Error = AssertError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Function(function) => Ok(Predicate::from_function(function.clone())),
            other => Err(AssertError::InvalidArgument {
                message: format!("validator must be a function, got {}", other.type_name()),
            }),
        }
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            PredicateFn::Native(_) => write!(f, "Predicate(native)"),
            PredicateFn::Function(function) => write!(f, "Predicate({:?})", function),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidatorKind {
    /// Registered at namespace construction; cannot be removed.
    Builtin,
    /// Registered through `add_type`.
    Custom,
}

/// A named predicate held by the registry.
#[derive(Debug, Clone)]
pub struct Validator {
    name: String,
    kind: ValidatorKind,
    predicate: Predicate,
}

impl Validator {
    pub(crate) fn new(name: impl Into<String>, kind: ValidatorKind, predicate: Predicate) -> Self {
        Self {
            name: name.into(),
            kind,
            predicate,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ValidatorKind {
        self.kind
    }

    pub fn predicate(&self) -> &Predicate {
        &self.predicate
    }

    pub fn is_builtin(&self) -> bool {
        self.kind == ValidatorKind::Builtin
    }

    pub(crate) fn set_predicate(&mut self, predicate: Predicate) {
        self.predicate = predicate;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicate_identity() {
        let predicate = Predicate::new(|value, _| value.is_truthy());
        let clone = predicate.clone();
        let other = Predicate::new(|value, _| value.is_truthy());

        assert!(predicate.ptr_eq(&clone));
        assert!(!predicate.ptr_eq(&other));
    }

    #[test]
    fn test_function_predicate_receives_value_then_extra() {
        let function = Function::new("between", |args| {
            let (Some(Value::Number(n)), Some(Value::Number(lo)), Some(Value::Number(hi))) =
                (args.first(), args.get(1), args.get(2))
            else {
                return Value::Bool(false);
            };
            Value::Bool(lo <= n && n <= hi)
        });
        let predicate = Predicate::from_function(function.clone());

        assert!(predicate.evaluate(&Value::from(5), &[Value::from(1), Value::from(10)]));
        assert!(!predicate.evaluate(&Value::from(50), &[Value::from(1), Value::from(10)]));
        assert!(predicate.ptr_eq(&Predicate::from_function(function)));
    }

    #[test]
    fn test_function_predicate_uses_truthiness() {
        let predicate = Predicate::from_function(Function::anonymous(|args| {
            args.first().cloned().unwrap_or_default()
        }));
        assert!(predicate.evaluate(&Value::from("non-empty"), &[]));
        assert!(!predicate.evaluate(&Value::from(""), &[]));
    }

    #[test]
    fn test_try_from_non_function() {
        let error = Predicate::try_from(&Value::from("foo")).unwrap_err();
        assert!(matches!(error, AssertError::InvalidArgument { .. }));
        assert!(error.to_string().contains("string"));
    }
}
