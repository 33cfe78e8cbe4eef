//! Assertions over docmd JSON output

use serde_json::Value;

/// Parse JSON output, panicking with the raw text on failure
pub fn parse_json(output: &str) -> Value {
    serde_json::from_str(output)
        .unwrap_or_else(|e| panic!("Output is not valid JSON: {}\n{}", e, output))
}

/// Assert the output has exactly the four category keys, in order
pub fn assert_categories(output: &str) {
    let value = parse_json(output);
    let object = value.as_object().expect("Top level should be an object");
    let keys: Vec<&str> = object.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["class", "interface", "enum", "functions"]);
    for key in &keys {
        assert!(object[*key].is_object(), "`{}` should be an object", key);
    }
}

/// Keys of the object at a JSON pointer, in output order
pub fn keys_at(value: &Value, pointer: &str) -> Vec<String> {
    value
        .pointer(pointer)
        .and_then(Value::as_object)
        .map(|object| object.keys().cloned().collect())
        .unwrap_or_default()
}
