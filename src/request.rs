//! Request-body building for the interactive preview
//!
//! The body is rebuilt from scratch from the current field values on every
//! change; the same builder backs both the live curl preview and the real
//! submission.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};

use crate::api::API_BASE;
use crate::types::FieldDescriptor;

/// Coerce a raw field value: a trimmed, non-empty value that parses as a
/// finite number becomes a JSON number, everything else stays a string.
/// Deliberately lossy (a numeric-shaped phone number is coerced too).
pub fn coerce_scalar(raw: &str) -> Value {
    let trimmed = raw.trim();
    if !trimmed.is_empty() {
        if let Ok(n) = trimmed.parse::<i64>() {
            return Value::from(n);
        }
        if let Ok(f) = trimmed.parse::<f64>() {
            if f.is_finite() {
                return Value::from(f);
            }
        }
    }
    Value::String(raw.to_string())
}

/// Collect array rows into body values: blank rows are dropped, the rest
/// trimmed and coerced.
pub fn collect_array_items(rows: &[String]) -> Vec<Value> {
    rows.iter()
        .map(|row| row.trim())
        .filter(|row| !row.is_empty())
        .map(coerce_scalar)
        .collect()
}

/// Rebuild the complete request body from the current field values, keyed
/// in descriptor order.
pub fn build_request_body(
    fields: &[FieldDescriptor],
    scalars: &HashMap<String, String>,
    arrays: &HashMap<String, Vec<String>>,
) -> Value {
    let mut body = Map::new();
    for field in fields {
        match field {
            FieldDescriptor::Text(_) | FieldDescriptor::Dropdown(_) => {
                let key = field.key();
                let raw = scalars.get(key).map(String::as_str).unwrap_or("");
                body.insert(key.to_string(), coerce_scalar(raw));
            }
            FieldDescriptor::Array(f) => {
                let rows = arrays.get(&f.key).map(Vec::as_slice).unwrap_or(&[]);
                body.insert(f.key.clone(), Value::Array(collect_array_items(rows)));
            }
        }
    }
    Value::Object(body)
}

/// Render the curl invocation shown in the Request Preview panel.
///
/// The bearer token is a display-only placeholder; the real request sends
/// no Authorization header.
pub fn curl_preview(endpoint: &str, body: &Value) -> String {
    let formatted_body = to_pretty(body).replace('\n', "\n    ");
    format!(
        "curl -X POST {}/{} \\\n    -H \"Authorization: Bearer <YOUR_SECRET_API_KEY>\" \\\n    -H \"Content-Type: application/json\" \\\n    -d '{}'",
        API_BASE, endpoint, formatted_body
    )
}

/// Pretty-print at the documentation site's 4-space indent
/// (`serde_json::to_string_pretty` uses 2).
fn to_pretty(value: &Value) -> String {
    let mut out = Vec::new();
    let mut ser =
        serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"    "));
    match value.serialize(&mut ser) {
        Ok(()) => String::from_utf8(out).unwrap_or_default(),
        Err(_) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::parse_field_descriptors;
    use serde_json::json;

    /// Field state as the preview component initialises it: empty text
    /// fields, dropdowns on their initial option.
    fn initial_scalars(fields: &[FieldDescriptor]) -> HashMap<String, String> {
        fields
            .iter()
            .filter_map(|field| match field {
                FieldDescriptor::Text(f) => Some((f.key.clone(), String::new())),
                FieldDescriptor::Dropdown(f) => Some((f.key.clone(), f.initial_value())),
                FieldDescriptor::Array(_) => None,
            })
            .collect()
    }

    #[test]
    fn test_coerce_numeric_strings() {
        assert_eq!(coerce_scalar("42"), json!(42));
        assert_eq!(coerce_scalar(" 42 "), json!(42));
        assert_eq!(coerce_scalar("-7"), json!(-7));
        assert_eq!(coerce_scalar("4.5"), json!(4.5));
        assert_eq!(coerce_scalar("1e3"), json!(1000.0));
    }

    #[test]
    fn test_coerce_keeps_non_numeric_strings() {
        assert_eq!(coerce_scalar("42a"), json!("42a"));
        assert_eq!(coerce_scalar("two"), json!("two"));
        assert_eq!(coerce_scalar(""), json!(""));
        assert_eq!(coerce_scalar("   "), json!("   "));
        assert_eq!(coerce_scalar("<your-name>"), json!("<your-name>"));
    }

    #[test]
    fn test_coerce_rejects_non_finite_numbers() {
        assert_eq!(coerce_scalar("inf"), json!("inf"));
        assert_eq!(coerce_scalar("NaN"), json!("NaN"));
        assert_eq!(coerce_scalar("1e999"), json!("1e999"));
    }

    #[test]
    fn test_collect_array_items_drops_blanks_and_coerces() {
        let rows = vec!["1".to_string(), "two".to_string(), "".to_string()];
        assert_eq!(collect_array_items(&rows), vec![json!(1), json!("two")]);
    }

    #[test]
    fn test_collect_array_items_trims_rows() {
        let rows = vec![" 3 ".to_string(), "  a b  ".to_string(), "   ".to_string()];
        assert_eq!(collect_array_items(&rows), vec![json!(3), json!("a b")]);
    }

    #[test]
    fn test_initial_body_uses_default_selected_option() {
        let fields = parse_field_descriptors(&json!([
            {"type": "dropdown", "label": "Mode", "id": "mode", "key": "mode",
             "options": [{"value": "fast", "label": "Fast", "selected": true},
                         {"value": "slow", "label": "Slow"}]}
        ]));
        let body = build_request_body(&fields, &initial_scalars(&fields), &HashMap::new());
        assert_eq!(body, json!({"mode": "fast"}));
    }

    #[test]
    fn test_body_coerces_text_and_collects_arrays() {
        let fields = parse_field_descriptors(&json!([
            {"type": "text", "label": "Name", "id": "name", "key": "name"},
            {"type": "text", "label": "Age", "id": "age", "key": "age"},
            {"type": "array", "label": "Tags", "id": "tags", "key": "tags"}
        ]));

        let mut scalars = initial_scalars(&fields);
        scalars.insert("name".to_string(), "<your-name>".to_string());
        scalars.insert("age".to_string(), "42".to_string());
        let mut arrays = HashMap::new();
        arrays.insert(
            "tags".to_string(),
            vec!["1".to_string(), "two".to_string(), "".to_string()],
        );

        let body = build_request_body(&fields, &scalars, &arrays);
        assert_eq!(body, json!({"name": "<your-name>", "age": 42, "tags": [1, "two"]}));
    }

    #[test]
    fn test_body_keys_follow_descriptor_order() {
        let fields = parse_field_descriptors(&json!([
            {"type": "text", "label": "Z", "id": "z", "key": "zebra"},
            {"type": "text", "label": "A", "id": "a", "key": "apple"}
        ]));
        let body = build_request_body(&fields, &initial_scalars(&fields), &HashMap::new());
        let keys: Vec<&String> = body.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["zebra", "apple"]);
    }

    #[test]
    fn test_curl_preview_template() {
        let preview = curl_preview("greet", &json!({"name": "<your-name>"}));
        assert_eq!(
            preview,
            "curl -X POST https://prism.optical-labs.ca/greet \\\n    \
             -H \"Authorization: Bearer <YOUR_SECRET_API_KEY>\" \\\n    \
             -H \"Content-Type: application/json\" \\\n    \
             -d '{\n        \"name\": \"<your-name>\"\n    }'"
        );
    }

    #[test]
    fn test_curl_preview_with_empty_body() {
        let preview = curl_preview("greet", &json!({}));
        assert!(preview.ends_with("-d '{}'"));
    }
}
