//! Shopping List View Component
//!
//! Rebuilds every row from the derived list view whenever the store changes.

use leptos::prelude::*;

use crate::components::ShoppingItem;
use crate::store::{store_render, use_app_store};

#[component]
pub fn ShoppingListView() -> impl IntoView {
    let store = use_app_store();

    view! {
        <ul class="shopping-list">
            {move || {
                store_render(&store)
                    .rows
                    .into_iter()
                    .map(|row| view! { <ShoppingItem row=row /> })
                    .collect_view()
            }}
        </ul>
    }
}
