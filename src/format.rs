//! JSON syntax highlighting for documentation code blocks
//!
//! Renders a JSON value as pretty-printed HTML with span markers the
//! documentation stylesheet colors: `null`, `number`, `boolean`, `string`,
//! `key`. Strings and keys of the form `<...>` are documentation
//! placeholders and get an extra `placeholder` marker.

use serde_json::Value;

/// Spaces added per nesting level.
const INDENT_STEP: usize = 4;

/// Format a JSON value as highlighted HTML, starting at indent level 0.
pub fn format_json(value: &Value) -> String {
    format_value(value, 0)
}

fn format_value(value: &Value, indent: usize) -> String {
    let spacing = " ".repeat(indent);
    let next_spacing = " ".repeat(indent + INDENT_STEP);

    match value {
        Value::Null => r#"<span class="null">null</span>"#.to_string(),
        Value::Bool(b) => format!(r#"<span class="boolean">{}</span>"#, b),
        Value::Number(n) => format!(r#"<span class="number">{}</span>"#, n),
        Value::String(s) => format!(r#"<span class="string">{}</span>"#, wrap_string(s)),
        Value::Array(items) => {
            if items.is_empty() {
                return "[]".to_string();
            }
            let items = items
                .iter()
                .map(|item| {
                    format!("{}{}", next_spacing, format_value(item, indent + INDENT_STEP))
                })
                .collect::<Vec<_>>()
                .join(",\n");
            format!("[\n{}\n{}]", items, spacing)
        }
        Value::Object(entries) => {
            if entries.is_empty() {
                return "{}".to_string();
            }
            let entries = entries
                .iter()
                .map(|(key, val)| {
                    format!(
                        r#"{}<span class="key">{}</span>: {}"#,
                        next_spacing,
                        wrap_key(key),
                        format_value(val, indent + INDENT_STEP)
                    )
                })
                .collect::<Vec<_>>()
                .join(",\n");
            format!("{{\n{}\n{}}}", entries, spacing)
        }
    }
}

/// Placeholder detection runs on the raw string, before escaping.
fn is_placeholder(s: &str) -> bool {
    s.starts_with('<') && s.ends_with('>')
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Quote and escape a string value, marking placeholders.
fn wrap_string(s: &str) -> String {
    let escaped = escape_html(s);
    if is_placeholder(s) {
        format!(r#"<span class="placeholder">"{}"</span>"#, escaped)
    } else {
        format!(r#""{}""#, escaped)
    }
}

/// Quote and escape an object key, marking placeholder keys.
fn wrap_key(key: &str) -> String {
    if is_placeholder(key) {
        format!(r#"<span class="placeholder">"{}"</span>"#, escape_html(key))
    } else {
        format!(r#""{}""#, escape_html(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Drop span tags and undo HTML escaping, leaving the plain JSON text.
    fn strip_markup(html: &str) -> String {
        let mut out = String::new();
        let mut in_tag = false;
        for ch in html.chars() {
            match ch {
                '<' => in_tag = true,
                '>' => in_tag = false,
                c if !in_tag => out.push(c),
                _ => {}
            }
        }
        out.replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&amp;", "&")
    }

    #[test]
    fn test_scalar_tokens() {
        assert_eq!(format_json(&json!(null)), r#"<span class="null">null</span>"#);
        assert_eq!(format_json(&json!(true)), r#"<span class="boolean">true</span>"#);
        assert_eq!(format_json(&json!(42)), r#"<span class="number">42</span>"#);
        assert_eq!(format_json(&json!(-1.5)), r#"<span class="number">-1.5</span>"#);
    }

    #[test]
    fn test_string_is_escaped() {
        let html = format_json(&json!("a < b > c & d"));
        assert_eq!(
            html,
            r#"<span class="string">"a &lt; b &gt; c &amp; d"</span>"#
        );
    }

    #[test]
    fn test_placeholder_string_is_marked() {
        let html = format_json(&json!("<your-name>"));
        assert_eq!(
            html,
            r#"<span class="string"><span class="placeholder">"&lt;your-name&gt;"</span></span>"#
        );
    }

    #[test]
    fn test_plain_string_has_no_placeholder_marker() {
        let html = format_json(&json!("plain text"));
        assert!(!html.contains("placeholder"));
    }

    #[test]
    fn test_unbalanced_angle_brackets_are_not_placeholders() {
        assert!(!format_json(&json!("<only-open")).contains("placeholder"));
        assert!(!format_json(&json!("only-close>")).contains("placeholder"));
    }

    #[test]
    fn test_placeholder_key_is_marked() {
        let html = format_json(&json!({"<param>": 1, "plain": 2}));
        assert!(html.contains(r#"<span class="key"><span class="placeholder">"&lt;param&gt;"</span></span>"#));
        assert!(html.contains(r#"<span class="key">"plain"</span>"#));
    }

    #[test]
    fn test_empty_collections() {
        assert_eq!(format_json(&json!([])), "[]");
        assert_eq!(format_json(&json!({})), "{}");
    }

    #[test]
    fn test_indentation_grows_by_four_per_level() {
        let html = format_json(&json!({"a": {"b": [1]}}));
        let expected = "{\n    \
             <span class=\"key\">\"a\"</span>: {\n        \
             <span class=\"key\">\"b\"</span>: [\n            \
             <span class=\"number\">1</span>\n        \
             ]\n    \
             }\n}";
        assert_eq!(html, expected);
    }

    #[test]
    fn test_array_items_are_newline_separated() {
        let html = format_json(&json!([1, 2]));
        assert_eq!(
            html,
            "[\n    <span class=\"number\">1</span>,\n    <span class=\"number\">2</span>\n]"
        );
    }

    #[test]
    fn test_key_order_is_preserved() {
        let html = format_json(&json!({"zebra": 1, "apple": 2, "mango": 3}));
        let zebra = html.find("zebra").unwrap();
        let apple = html.find("apple").unwrap();
        let mango = html.find("mango").unwrap();
        assert!(zebra < apple && apple < mango);
    }

    #[test]
    fn test_structural_round_trip() {
        let value = json!({
            "name": "<your-name>",
            "count": 3,
            "tags": ["a", "b & c"],
            "nested": {"ok": true, "none": null, "empty": {}}
        });
        let stripped = strip_markup(&format_json(&value));
        let parsed: Value = serde_json::from_str(&stripped).unwrap();
        assert_eq!(parsed, value);
    }
}
