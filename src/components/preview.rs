//! Interactive API preview
//!
//! Renders a form from the supplied field descriptors, keeps a curl-style
//! request preview in sync with every edit, and on submit POSTs the body
//! to the live API and shows the formatted response.

use std::collections::HashMap;
use std::sync::Arc;

use leptos::prelude::*;
use leptos::web_sys;

use crate::api;
use crate::components::array_field::{row_values, ArrayFieldEditor, ArrayRow};
use crate::format::format_json;
use crate::request::{build_request_body, curl_preview};
use crate::scroll::ResponseScroller;
use crate::types::FieldDescriptor;

/// What the Live Response panel is currently showing.
#[derive(Clone)]
enum ResponseState {
    Waiting,
    Received(serde_json::Value),
    Failed,
}

/// The interactive preview block: form, request preview, response panel.
///
/// The whole request body is rebuilt from current field state on every
/// edit; submission reuses the same builder, so what is sent is what the
/// preview showed.
#[component]
pub fn ApiPreview(
    endpoint: String,
    fields: Vec<FieldDescriptor>,
    #[prop(optional)] scroller: Option<Arc<dyn ResponseScroller>>,
) -> impl IntoView {
    // One value signal per text/dropdown key; dropdowns start on their
    // default-selected option (or the first one, as a browser select would).
    let scalars = RwSignal::new(
        fields
            .iter()
            .filter_map(|field| match field {
                FieldDescriptor::Text(f) => Some((f.key.clone(), String::new())),
                FieldDescriptor::Dropdown(f) => Some((f.key.clone(), f.initial_value())),
                FieldDescriptor::Array(_) => None,
            })
            .collect::<HashMap<_, _>>(),
    );

    // One row-list signal per array key; rows are never pre-populated.
    let array_rows: Vec<(String, RwSignal<Vec<ArrayRow>>)> = fields
        .iter()
        .filter_map(|field| match field {
            FieldDescriptor::Array(f) => Some((f.key.clone(), RwSignal::new(Vec::new()))),
            _ => None,
        })
        .collect();

    let submitting = RwSignal::new(false);
    let response = RwSignal::new(ResponseState::Waiting);
    let output_ref = NodeRef::<leptos::html::Div>::new();

    let fields_stored = StoredValue::new(fields.clone());

    let endpoint_for_preview = endpoint.clone();
    let rows_for_preview = array_rows.clone();
    let preview = Memo::new(move |_| {
        let arrays: HashMap<String, Vec<String>> = rows_for_preview
            .iter()
            .map(|(key, rows)| (key.clone(), row_values(&rows.get())))
            .collect();
        let body = fields_stored
            .with_value(|fields| build_request_body(fields, &scalars.get(), &arrays));
        curl_preview(&endpoint_for_preview, &body)
    });

    let endpoint_for_submit = endpoint.clone();
    let rows_for_submit = array_rows.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let arrays: HashMap<String, Vec<String>> = rows_for_submit
            .iter()
            .map(|(key, rows)| (key.clone(), row_values(&rows.get())))
            .collect();
        let body = fields_stored
            .with_value(|fields| build_request_body(fields, &scalars.get(), &arrays));

        // Disabled before the request goes out, restored in every outcome.
        submitting.set(true);

        let endpoint = endpoint_for_submit.clone();
        let scroller = scroller.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match api::post_preview(&endpoint, &body).await {
                Ok(data) => response.set(ResponseState::Received(data)),
                Err(e) => {
                    log::error!("Preview request to /{} failed: {}", endpoint, e);
                    response.set(ResponseState::Failed);
                }
            }
            submitting.set(false);

            if let Some(scroller) = scroller {
                if let Some(el) = output_ref.get_untracked() {
                    scroller.scroll_to(&el, -120.0);
                }
            }
        });
    };

    let request_url = format!("{}/{}", api::API_BASE, endpoint);

    view! {
        <div>
            <form id="preview-form" on:submit=on_submit>
                <p style="margin:0; font-size: 2em">
                    "Request to: "
                    <span class="inline-code">{request_url}</span>
                </p>

                <div id="preview-fields">
                    {fields
                        .iter()
                        .map(|field| render_field(field, scalars, &array_rows))
                        .collect_view()}
                </div>

                <hr/>

                <button type="submit" id="preview-btn" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Fetching..." } else { "Send Request" }}
                </button>

                <p id="live-response">
                    <span style="text-decoration: underline; font-style: italic;">"Note:"</span>
                    " Because this is a free preview, we are enforcing a strict maximum of 7 requests per minute."
                </p>
            </form>

            <div class="code-block" id="preview-request">
                <div class="code-header">
                    <span>"Request Preview"</span>
                    <span class="code-lang">"BASH"</span>
                </div>
                <pre><code id="preview-body">{move || preview.get()}</code></pre>
            </div>

            <div class="code-block" id="preview-output" node_ref=output_ref>
                <div class="code-header">
                    <span>"Live Response"</span>
                    <span class="code-lang">"JSON"</span>
                </div>
                {move || match response.get() {
                    ResponseState::Waiting => view! {
                        <pre><code>"The response will appear here"</code></pre>
                    }.into_any(),
                    ResponseState::Received(data) => view! {
                        <pre><code inner_html=format_json(&data)></code></pre>
                    }.into_any(),
                    ResponseState::Failed => view! {
                        <pre><code>"Error: Could not connect to the API."</code></pre>
                    }.into_any(),
                }}
            </div>
        </div>
    }
}

/// Render one field per its descriptor variant.
fn render_field(
    field: &FieldDescriptor,
    scalars: RwSignal<HashMap<String, String>>,
    array_rows: &[(String, RwSignal<Vec<ArrayRow>>)],
) -> AnyView {
    match field {
        FieldDescriptor::Text(f) => {
            let key = f.key.clone();
            let key_for_input = key.clone();
            view! {
                <div>
                    <label>{f.label.clone()}</label>
                    <textarea
                        id=f.id.clone()
                        placeholder=f.placeholder.clone().unwrap_or_default()
                        required=f.required
                        prop:value=move || scalars.get().get(&key).cloned().unwrap_or_default()
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            scalars.update(|vals| {
                                vals.insert(key_for_input.clone(), value);
                            });
                        }
                    ></textarea>
                </div>
            }
            .into_any()
        }
        FieldDescriptor::Dropdown(f) => {
            let key = f.key.clone();
            let key_for_change = key.clone();
            let options = f.options.clone();
            view! {
                <div>
                    <label>{f.label.clone()}</label>
                    <select
                        id=f.id.clone()
                        prop:value=move || scalars.get().get(&key).cloned().unwrap_or_default()
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            scalars.update(|vals| {
                                vals.insert(key_for_change.clone(), value);
                            });
                        }
                    >
                        {options
                            .into_iter()
                            .map(|opt| {
                                view! {
                                    <option value=opt.value.clone() selected=opt.selected>
                                        {opt.label}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>
            }
            .into_any()
        }
        FieldDescriptor::Array(f) => {
            let rows = array_rows
                .iter()
                .find(|(key, _)| key == &f.key)
                .map(|(_, rows)| *rows);
            match rows {
                Some(rows) => view! { <ArrayFieldEditor field=f.clone() rows=rows /> }.into_any(),
                None => view! { <span /> }.into_any(),
            }
        }
    }
}
