//! Global Application State Store
//!
//! Uses Leptos reactive_stores; the list controller is the one field every
//! view reads, so any dispatch re-renders the whole list.

use leptos::prelude::*;
use reactive_stores::Store;
use shopping_list_core::{Action, ListView, ShoppingList, StoreResult};

/// Global application state
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Items, flags and the active search term
    pub list: ShoppingList,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Apply a user gesture to the list.
///
/// Rejected gestures are logged and leave the list untouched; callers only
/// need the result to decide whether to reset their input fields.
pub fn store_dispatch(store: &AppStore, action: Action) -> StoreResult<()> {
    let result = store.list().write().dispatch(action.clone());
    if let Err(err) = &result {
        tracing::warn!(?action, "rejected: {}", err);
    }
    result
}

/// Derive the visible rows
pub fn store_render(store: &AppStore) -> ListView {
    store.list().read().render()
}

pub fn store_hide_completed(store: &AppStore) -> bool {
    store.list().read().store().hide_completed()
}

pub fn store_completed_count(store: &AppStore) -> usize {
    store.list().read().store().completed_count()
}
