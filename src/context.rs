//! Application Context
//!
//! UI-only state shared via Leptos Context API.

use leptos::prelude::*;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Text currently typed in the search field
    search_draft: RwSignal<String>,
}

impl AppContext {
    pub fn new(search_draft: RwSignal<String>) -> Self {
        Self { search_draft }
    }

    pub fn search_draft(&self) -> String {
        self.search_draft.get()
    }

    pub fn set_search_draft(&self, text: String) {
        self.search_draft.set(text);
    }

    /// Empty the search field
    pub fn clear_search_draft(&self) {
        self.search_draft.set(String::new());
    }
}
