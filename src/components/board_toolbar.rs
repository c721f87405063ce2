//! Board Toolbar Component
//!
//! Column filter input and the "Add item" button.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::store::{filter_text, store_add_item, store_set_filter, use_kanban_store};

#[component]
pub fn BoardToolbar() -> impl IntoView {
    let store = use_kanban_store();

    view! {
        <div class="board-toolbar">
            <input
                type="text"
                class="column-filter"
                placeholder="Filtrar por nome da coluna"
                prop:value=move || filter_text(&store)
                on:input=move |ev| {
                    let input = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());
                    if let Some(input) = input {
                        store_set_filter(&store, input.value());
                    }
                }
            />
            <button class="add-item-btn" on:click=move |_| store_add_item(&store)>
                "Add item"
            </button>
        </div>
    }
}
