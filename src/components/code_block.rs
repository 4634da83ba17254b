//! Static code block widgets
//!
//! Both render the documentation site's `code-block` shell: a header row
//! with the title and a language tag above the code itself.

use leptos::prelude::*;
use serde_json::Value;

use crate::format::format_json;

/// A titled, syntax-highlighted JSON code block.
#[component]
pub fn JsonCodeBlock(title: String, value: Value) -> impl IntoView {
    let markup = format_json(&value);
    view! {
        <div class="code-block">
            <div class="code-header">
                <span>{title}</span>
                <span class="code-lang">"JSON"</span>
            </div>
            <pre><code inner_html=markup></code></pre>
        </div>
    }
}

/// A titled code block for any language; the code is rendered as escaped
/// plain text, no highlighting.
#[component]
pub fn CodeBlock(title: String, lang: String, code: String) -> impl IntoView {
    view! {
        <div class="code-block">
            <div class="code-header">
                <span>{title}</span>
                <span class="code-lang">{lang}</span>
            </div>
            <pre><code>{code}</code></pre>
        </div>
    }
}
