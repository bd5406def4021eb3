use crate::value::Value;

/// Join message parts into the text of a failed assertion.
///
/// Falls back to `default_message` when there are no parts.
pub fn compose_message(parts: &[Value], separator: &str, default_message: &str) -> String {
    if parts.is_empty() {
        return default_message.to_string();
    }

    parts
        .iter()
        .map(Value::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}
