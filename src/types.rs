//! Field descriptors for the interactive API preview
//!
//! The embedding page supplies an ordered list of descriptor objects; each
//! one maps a single form input to a request-body key. Entries that do not
//! deserialize (unknown `type`, missing fields) are skipped.

use serde::Deserialize;
use serde_json::Value;

/// One form input and its mapping to a request-body key.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FieldDescriptor {
    Text(TextField),
    Dropdown(DropdownField),
    Array(ArrayField),
}

/// Free-text input, rendered as a textarea.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TextField {
    pub label: String,
    pub id: String,
    pub key: String,
    #[serde(default)]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub required: bool,
}

/// Fixed-choice input, rendered as a select.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DropdownField {
    pub label: String,
    pub id: String,
    pub key: String,
    pub options: Vec<DropdownOption>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DropdownOption {
    pub value: String,
    pub label: String,
    #[serde(default)]
    pub selected: bool,
}

/// Zero-or-more free-text rows, collected into a list.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ArrayField {
    pub label: String,
    pub id: String,
    pub key: String,
}

impl FieldDescriptor {
    /// The request-body key this field writes to.
    pub fn key(&self) -> &str {
        match self {
            FieldDescriptor::Text(f) => &f.key,
            FieldDescriptor::Dropdown(f) => &f.key,
            FieldDescriptor::Array(f) => &f.key,
        }
    }
}

impl DropdownField {
    /// The value shown before any user interaction: the option flagged as
    /// selected, otherwise the first option (what a browser select picks).
    pub fn initial_value(&self) -> String {
        self.options
            .iter()
            .find(|opt| opt.selected)
            .or_else(|| self.options.first())
            .map(|opt| opt.value.clone())
            .unwrap_or_default()
    }
}

/// Parse the descriptor list supplied by the embedding page.
///
/// Anything that is not a descriptor array, or any element that does not
/// deserialize into a known variant, is dropped without comment.
pub fn parse_field_descriptors(raw: &Value) -> Vec<FieldDescriptor> {
    match raw.as_array() {
        Some(items) => items
            .iter()
            .filter_map(|item| serde_json::from_value(item.clone()).ok())
            .collect(),
        None => Vec::new(),
    }
}
