use serde_yaml::Value;

/// Display text for a YAML value sitting where a scalar is expected.
///
/// Strings are returned verbatim, numbers and booleans in their YAML spelling, `null`
/// as the empty string. Anything structured falls back to its trimmed YAML text.
pub fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Tagged(tagged) => scalar_text(&tagged.value),
        Value::Sequence(_) | Value::Mapping(_) => serde_yaml::to_string(value)
            .map(|text| text.trim().to_string())
            .unwrap_or_default(),
    }
}

/// Whether a value renders as a single line of text.
pub fn is_scalar(value: &Value) -> bool {
    match value {
        Value::Sequence(_) | Value::Mapping(_) => false,
        Value::Tagged(tagged) => is_scalar(&tagged.value),
        _ => true,
    }
}
