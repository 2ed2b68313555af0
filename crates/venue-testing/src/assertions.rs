//! Output validation helpers for integration tests.

use serde_json::Value;

/// Parse stdout as JSON, panicking with the raw output on failure so the
/// test log shows what the CLI actually printed.
pub fn parse_json_stdout(stdout: &[u8]) -> Value {
    let text = String::from_utf8_lossy(stdout);
    serde_json::from_str(&text)
        .unwrap_or_else(|err| panic!("stdout is not valid JSON ({err}):\n{text}"))
}

/// Assert that a JSON value has an array at `key` and return it.
pub fn expect_array<'a>(value: &'a Value, key: &str) -> &'a Vec<Value> {
    value[key]
        .as_array()
        .unwrap_or_else(|| panic!("expected array at {key:?}, got: {value}"))
}
