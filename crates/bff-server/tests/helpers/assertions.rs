//! Custom assertions para tests.

use serde_json::Value;

/// Verifica el cuerpo `{message}` de un 400 por parametro ausente.
pub fn assert_missing_parameter(json: &Value, parameter: &str) {
    assert_eq!(
        json["message"],
        format!("Missing required parameter: {}", parameter),
        "Unexpected body: {}",
        json
    );
    assert!(json.get("success").is_none(), "Error body must not carry 'success'");
}

/// Verifica el cuerpo generico de un 500.
pub fn assert_internal_error(json: &Value) {
    assert_eq!(json["error"], "Internal server error", "Unexpected body: {}", json);
    assert!(json["message"].is_string(), "'message' should be a string");
}

/// Verifica que un timestamp tenga formato ISO-8601 (UTC, milisegundos).
pub fn assert_iso8601_timestamp(value: &str) {
    let parsed = chrono::DateTime::parse_from_rfc3339(value);
    assert!(parsed.is_ok(), "Invalid ISO-8601 timestamp: {}", value);
    assert!(value.ends_with('Z'), "Timestamp should be UTC: {}", value);
    assert_eq!(value.len(), "2024-01-01T00:00:00.000Z".len(), "Unexpected precision: {}", value);
}
