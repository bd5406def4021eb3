use super::types::Predicate;
use crate::value::Value;

pub const IS_STRING: &str = "isString";
pub const IS_FUNCTION: &str = "isFunction";
pub const IS_FUNCTION_OPTIONAL: &str = "isFunctionOptional";
pub const IS_PLAIN_OBJECT: &str = "isPlainObject";

/// Validators every namespace starts with.
pub fn builtin_validators() -> Vec<(&'static str, Predicate)> {
    vec![
        (
            IS_STRING,
            Predicate::new(|value, _| matches!(value, Value::String(_))),
        ),
        (
            IS_FUNCTION,
            Predicate::new(|value, _| matches!(value, Value::Function(_))),
        ),
        (
            IS_FUNCTION_OPTIONAL,
            Predicate::new(|value, _| matches!(value, Value::Undefined | Value::Function(_))),
        ),
        (
            IS_PLAIN_OBJECT,
            Predicate::new(|value, _| matches!(value, Value::Object(object) if object.is_plain())),
        ),
    ]
}
