//! New Item Form Component
//!
//! Form for appending items to the list.

use leptos::prelude::*;
use shopping_list_core::Action;

use crate::store::{store_dispatch, use_app_store};

/// Form for adding new items
#[component]
pub fn NewItemForm() -> impl IntoView {
    let store = use_app_store();

    let (new_text, set_new_text) = signal(String::new());

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if store_dispatch(&store, Action::Add(new_text.get())).is_ok() {
            set_new_text.set(String::new());
        }
    };

    view! {
        <form id="shopping-list-form" on:submit=add_item>
            <label for="shopping-list-entry">"Add an item"</label>
            <input
                type="text"
                name="shopping-list-entry"
                class="shopping-list-entry"
                placeholder="e.g., broccoli"
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <button type="submit">"Add item"</button>
        </form>
    }
}
