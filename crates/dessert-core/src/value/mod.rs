mod convert;
mod types;

pub use types::{Function, Object, Prototype, Value};
