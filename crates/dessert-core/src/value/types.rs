use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

type NativeFn = dyn Fn(&[Value]) -> Value + Send + Sync;

/// A dynamically typed value checked by assertions and validators.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
    Object(Object),
    Function(Function),
}

impl Value {
    /// Truthiness as used by `assert`.
    ///
    /// `undefined`, `null`, `false`, `0`, `NaN` and the empty string are
    /// falsy; everything else, including empty arrays and objects, is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) | Value::Function(_) => true,
        }
    }

    /// Short type label used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
            Value::Function(_) => "function",
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&Function> {
        match self {
            Value::Function(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }
}

/// The prototype an [`Object`] was created from.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Prototype {
    /// The generic object prototype (object literals).
    #[default]
    Object,
    /// No prototype at all.
    Null,
    /// Another object acting as prototype.
    Derived(Box<Object>),
}

/// An object with named properties and a prototype.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Object {
    properties: BTreeMap<String, Value>,
    prototype: Prototype,
}

impl Object {
    /// Create an empty object literal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty object inheriting from `parent`.
    pub fn derived_from(parent: Object) -> Self {
        Self {
            properties: BTreeMap::new(),
            prototype: Prototype::Derived(Box::new(parent)),
        }
    }

    /// Create an empty object with no prototype.
    pub fn bare() -> Self {
        Self {
            properties: BTreeMap::new(),
            prototype: Prototype::Null,
        }
    }

    /// Add a property, builder style.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.properties.insert(key.into(), value.into())
    }

    /// Look up an own property, falling back to the prototype chain.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self.properties.get(key) {
            Some(value) => Some(value),
            None => match &self.prototype {
                Prototype::Derived(parent) => parent.get(key),
                Prototype::Object | Prototype::Null => None,
            },
        }
    }

    pub fn properties(&self) -> &BTreeMap<String, Value> {
        &self.properties
    }

    pub fn prototype(&self) -> &Prototype {
        &self.prototype
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Whether the prototype is exactly the generic object prototype.
    pub fn is_plain(&self) -> bool {
        matches!(self.prototype, Prototype::Object)
    }
}

/// A named callable value.
///
/// Clones share the same underlying callable, and equality is identity:
/// two functions are equal only when they are clones of each other.
#[derive(Clone)]
pub struct Function {
    name: String,
    call: Arc<NativeFn>,
}

impl Function {
    pub fn new<F>(name: impl Into<String>, call: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            call: Arc::new(call),
        }
    }

    pub fn anonymous<F>(call: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Self::new("", call)
    }

    /// Function name; empty for anonymous functions.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn call(&self, args: &[Value]) -> Value {
        (self.call)(args)
    }

    /// Reference identity.
    pub fn ptr_eq(&self, other: &Function) -> bool {
        Arc::ptr_eq(&self.call, &other.call)
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            write!(f, "[Function (anonymous)]")
        } else {
            write!(f, "[Function: {}]", self.name)
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => fmt_number(*n, f),
            Value::String(s) => write!(f, "{}", s),
            Value::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    // Nested undefined/null render as empty slots
                    if !matches!(item, Value::Undefined | Value::Null) {
                        write!(f, "{}", item)?;
                    }
                }
                Ok(())
            }
            Value::Object(_) => write!(f, "[object Object]"),
            Value::Function(func) => write!(f, "{:?}", func),
        }
    }
}

fn fmt_number(n: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if n.is_nan() {
        write!(f, "NaN")
    } else if n.is_infinite() {
        write!(f, "{}Infinity", if n < 0.0 { "-" } else { "" })
    } else {
        write!(f, "{}", n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truthiness() {
        assert!(!Value::Undefined.is_truthy());
        assert!(!Value::Null.is_truthy());
        assert!(!Value::Bool(false).is_truthy());
        assert!(!Value::Number(0.0).is_truthy());
        assert!(!Value::Number(f64::NAN).is_truthy());
        assert!(!Value::String(String::new()).is_truthy());

        assert!(Value::Bool(true).is_truthy());
        assert!(Value::Number(-1.5).is_truthy());
        assert!(Value::String("0".to_string()).is_truthy());
        assert!(Value::Array(vec![]).is_truthy());
        assert!(Value::Object(Object::new()).is_truthy());
        assert!(Value::Function(Function::anonymous(|_| Value::Undefined)).is_truthy());
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Undefined.to_string(), "undefined");
        assert_eq!(Value::Number(1.0).to_string(), "1");
        assert_eq!(Value::Number(2.5).to_string(), "2.5");
        assert_eq!(Value::Number(f64::NEG_INFINITY).to_string(), "-Infinity");
        assert_eq!(Value::String("foo".to_string()).to_string(), "foo");
        assert_eq!(
            Value::Array(vec![Value::Number(1.0), Value::Null, Value::Bool(true)]).to_string(),
            "1,,true"
        );
        assert_eq!(Value::Object(Object::new()).to_string(), "[object Object]");
        assert_eq!(
            Value::Function(Function::new("validator", |_| Value::Undefined)).to_string(),
            "[Function: validator]"
        );
    }

    #[test]
    fn test_function_identity() {
        let f = Function::new("f", |_| Value::Bool(true));
        let same = f.clone();
        let other = Function::new("f", |_| Value::Bool(true));

        assert_eq!(f, same);
        assert_ne!(f, other);
        assert_eq!(f.call(&[]), Value::Bool(true));
    }

    #[test]
    fn test_object_prototype_chain() {
        let parent = Object::new().with("inherited", 1);
        let child = Object::derived_from(parent).with("own", 2);

        assert_eq!(child.get("own"), Some(&Value::Number(2.0)));
        assert_eq!(child.get("inherited"), Some(&Value::Number(1.0)));
        assert_eq!(child.get("missing"), None);
        assert!(!child.is_plain());
        assert!(Object::new().is_plain());
        assert!(!Object::bare().is_plain());
    }

    #[test]
    fn test_type_name() {
        assert_eq!(Value::Null.type_name(), "null");
        assert_eq!(Value::Object(Object::bare()).type_name(), "object");
        assert_eq!(Value::Array(vec![]).type_name(), "array");
    }
}
