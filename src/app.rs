//! Shopping List App
//!
//! Root component: add form, list controls, the list itself and a footer.

use leptos::prelude::*;
use reactive_stores::Store;
use shopping_list_core::{SeedConfig, ShoppingList};

use crate::components::{ListControls, NewItemForm, ShoppingListView};
use crate::context::AppContext;
use crate::store::{store_completed_count, store_render, AppState};

#[component]
pub fn App() -> impl IntoView {
    let seed = SeedConfig::bundled();
    tracing::info!("starting with {} seed items", seed.items.len());

    let store = Store::new(AppState {
        list: ShoppingList::from_seed(&seed),
    });
    provide_context(store);
    provide_context(AppContext::new(RwSignal::new(String::new())));

    let summary = move || {
        let view = store_render(&store);
        format!(
            "{} items, {} done, {} hidden",
            view.total,
            store_completed_count(&store),
            view.hidden
        )
    };

    view! {
        <main class="container">
            <h1>"Shopping List"</h1>

            <NewItemForm />

            <ListControls />

            <ShoppingListView />

            <p class="item-count">{summary}</p>
        </main>
    }
}
