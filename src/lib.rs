//! Embeddable documentation widgets for the Prism API site
//!
//! Each exported function builds its widget and inserts it immediately
//! before the `<script>` element that invoked it, so the embedding page
//! controls placement:
//!
//! ```html
//! <script>
//!   addJSONCodeBlock("Example response", { status: "<status>" });
//! </script>
//! ```
//!
//! Module scripts have no `document.currentScript`; a call made from one
//! falls back to appending the widget to the body (see `demos/`).

use std::sync::Arc;

use leptos::prelude::*;
use serde_json::Value;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

mod api;
mod components;
mod format;
mod request;
mod scroll;
mod types;

pub use components::{ApiPreview, CodeBlock, JsonCodeBlock};
pub use format::format_json;
pub use request::{build_request_body, coerce_scalar, collect_array_items, curl_preview};
pub use scroll::{ResponseScroller, WindowScroller};
pub use types::{
    parse_field_descriptors, ArrayField, DropdownField, DropdownOption, FieldDescriptor, TextField,
};

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Insert a syntax-highlighted JSON code block before the calling script.
#[wasm_bindgen(js_name = addJSONCodeBlock)]
pub fn add_json_code_block(title: String, code: JsValue) {
    let Some(host) = insertion_host() else {
        return;
    };
    let value = js_value_to_json(&code).unwrap_or(Value::Null);
    leptos::mount::mount_to(host, move || view! { <JsonCodeBlock title=title value=value /> })
        .forget();
}

/// Insert a plain code block with a language tag before the calling script.
#[wasm_bindgen(js_name = addCodeBlock)]
pub fn add_code_block(title: String, lang: String, code: String) {
    let Some(host) = insertion_host() else {
        return;
    };
    leptos::mount::mount_to(host, move || view! { <CodeBlock title=title lang=lang code=code /> })
        .forget();
}

/// Insert the interactive API preview before the calling script.
///
/// `fields` is the descriptor list documented in `types.rs`; entries that
/// do not parse are skipped.
#[wasm_bindgen(js_name = addInteractivePreview)]
pub fn add_interactive_preview(endpoint: String, fields: JsValue) {
    let Some(host) = insertion_host() else {
        return;
    };
    let raw = js_value_to_json(&fields).unwrap_or(Value::Null);
    let fields = parse_field_descriptors(&raw);
    let scroller: Arc<dyn ResponseScroller> = Arc::new(WindowScroller);
    leptos::mount::mount_to(host, move || {
        view! { <ApiPreview endpoint=endpoint fields=fields scroller=scroller /> }
    })
    .forget();
}

/// Create a host `<div>` for a widget: inserted immediately before the
/// currently executing script when there is one, appended to the body
/// otherwise (module scripts have no current script).
fn insertion_host() -> Option<web_sys::HtmlElement> {
    let document = web_sys::window()?.document()?;
    let host = document.create_element("div").ok()?;

    match document.current_script().and_then(|s| s.parent_element().map(|p| (s, p))) {
        Some((script, parent)) => {
            parent.insert_before(&host, Some(script.as_ref())).ok()?;
        }
        None => {
            document.body()?.append_child(&host).ok()?;
        }
    }

    host.dyn_into::<web_sys::HtmlElement>().ok()
}

/// Bridge a JS value into `serde_json` through `JSON.stringify`.
fn js_value_to_json(value: &JsValue) -> Option<Value> {
    let json = js_sys::JSON::stringify(value).ok()?;
    let json: String = json.into();
    serde_json::from_str(&json).ok()
}
