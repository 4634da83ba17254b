//! Array field rows for the interactive preview
//!
//! Rows are added and removed by the user and never pre-populated. Each
//! row keeps its own value signal so typing does not rebuild the row list
//! (and lose focus).

use leptos::prelude::*;

use crate::types::ArrayField;

/// One editable row of an array field. The id stays stable across removals
/// of other rows.
#[derive(Clone, Copy)]
pub struct ArrayRow {
    pub id: usize,
    pub value: RwSignal<String>,
}

/// Read the current row values in order.
pub fn row_values(rows: &[ArrayRow]) -> Vec<String> {
    rows.iter().map(|row| row.value.get()).collect()
}

/// Editor for one array field: a list of removable text rows plus an
/// add button.
#[component]
pub fn ArrayFieldEditor(field: ArrayField, rows: RwSignal<Vec<ArrayRow>>) -> impl IntoView {
    let on_add = move |_| {
        rows.update(|rows| {
            let id = rows.iter().map(|row| row.id + 1).max().unwrap_or(0);
            rows.push(ArrayRow {
                id,
                value: RwSignal::new(String::new()),
            });
        });
    };

    view! {
        <div class="array-container">
            <label>{field.label.clone()}</label>
            <div id=format!("{}-items", field.id) class="array-list">
                {move || {
                    rows.get()
                        .into_iter()
                        .map(|row| {
                            view! {
                                <div class="array-item-row">
                                    <input
                                        type="text"
                                        class="array-item-input"
                                        prop:value=move || row.value.get()
                                        on:input=move |ev| row.value.set(event_target_value(&ev))
                                    />
                                    <button
                                        type="button"
                                        class="array-item-remove"
                                        on:click=move |_| {
                                            rows.update(|rows| rows.retain(|r| r.id != row.id));
                                        }
                                    >
                                        <i class="fa-solid fa-trash"></i>
                                    </button>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
            <button type="button" class="add-array-btn" on:click=on_add>
                <i class="fa-regular fa-square-plus"></i>
                " Add Item"
            </button>
        </div>
    }
}
