//! Conversions into and out of [`Value`].

use super::types::{Function, Object, Value};

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Object> for Value {
    fn from(object: Object) -> Self {
        Value::Object(object)
    }
}

impl From<Function> for Value {
    fn from(function: Function) -> Self {
        Value::Function(function)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Undefined, Into::into)
    }
}

impl From<&Value> for Value {
    fn from(value: &Value) -> Self {
        value.clone()
    }
}

/// JSON objects become plain objects; numbers become `f64`.
impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => {
                let mut object = Object::new();
                for (key, value) in map {
                    object.insert(key, Value::from(value));
                }
                Value::Object(object)
            }
        }
    }
}

impl Value {
    /// Parse a JSON document into a value.
    pub fn from_json_str(input: &str) -> Result<Value, serde_json::Error> {
        serde_json::from_str::<serde_json::Value>(input).map(Value::from)
    }

    /// Lossy JSON rendering.
    ///
    /// `undefined`, functions and non-finite numbers have no JSON form and
    /// render as `null`. Only own properties of objects are emitted.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Undefined | Value::Null | Value::Function(_) => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Number(n) => serde_json::Number::from_f64(*n)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Array(items) => serde_json::Value::Array(items.iter().map(Value::to_json).collect()),
            Value::Object(object) => serde_json::Value::Object(
                object
                    .properties()
                    .iter()
                    .map(|(key, value)| (key.clone(), value.to_json()))
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_object_is_plain() {
        let value = Value::from(json!({"name": "dessert", "tags": [1, 2]}));
        let object = value.as_object().unwrap();
        assert!(object.is_plain());
        assert_eq!(object.get("name"), Some(&Value::from("dessert")));
        assert_eq!(
            object.get("tags"),
            Some(&Value::Array(vec![Value::Number(1.0), Value::Number(2.0)]))
        );
    }

    #[test]
    fn test_from_json_str() {
        assert_eq!(Value::from_json_str("\"hello\"").unwrap(), Value::from("hello"));
        assert_eq!(Value::from_json_str("null").unwrap(), Value::Null);
        assert!(Value::from_json_str("{not json").is_err());
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Value::from(None::<&str>), Value::Undefined);
        assert_eq!(Value::from(Some(3)), Value::Number(3.0));
    }

    #[test]
    fn test_to_json_lossy() {
        let value = Value::Array(vec![
            Value::Undefined,
            Value::Number(f64::NAN),
            Value::Function(Function::anonymous(|_| Value::Null)),
            Value::from("x"),
        ]);
        assert_eq!(value.to_json(), json!([null, null, null, "x"]));
    }
}
