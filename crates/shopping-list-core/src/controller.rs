//! Controller
//!
//! Maps user gestures onto store mutations. The UI dispatches one `Action`
//! per gesture and then re-renders the whole list.

use tracing::debug;

use crate::config::SeedConfig;
use crate::error::StoreResult;
use crate::model::ItemId;
use crate::store::Store;
use crate::view::{self, ListView};

/// A user gesture
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Add-item form submitted
    Add(String),
    /// Check control clicked
    Toggle(ItemId),
    /// Delete control clicked
    Delete(ItemId),
    /// Hide-completed control clicked
    ToggleHideCompleted,
    /// Search form submitted
    SubmitSearch(String),
    /// Clear-search control clicked
    ClearSearch,
    /// Edit control clicked
    Edit(ItemId),
    /// Enter pressed in the inline edit field
    ConfirmEdit { id: ItemId, name: String },
}

/// Owns the store plus the last submitted search term
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShoppingList {
    store: Store,
    search_term: String,
}

impl ShoppingList {
    pub fn new(store: Store) -> Self {
        Self {
            store,
            search_term: String::new(),
        }
    }

    pub fn from_seed(seed: &SeedConfig) -> Self {
        Self::new(Store::from_seed(seed))
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Apply one gesture. On error the store is left as it was.
    pub fn dispatch(&mut self, action: Action) -> StoreResult<()> {
        debug!(?action, "dispatch");
        match action {
            Action::Add(name) => {
                self.store.add_item(&name)?;
            }
            Action::Toggle(id) => {
                self.store.toggle_checked(&id)?;
            }
            Action::Delete(id) => {
                self.store.delete_item(&id)?;
            }
            Action::ToggleHideCompleted => {
                let hide = !self.store.hide_completed();
                self.store.set_hide_completed(hide);
            }
            Action::SubmitSearch(term) => {
                self.search_term = term;
                let filtered = !self.store.filtered();
                self.store.set_filtered(filtered);
            }
            Action::ClearSearch => {
                self.search_term.clear();
                let filtered = !self.store.filtered();
                self.store.set_filtered(filtered);
            }
            Action::Edit(id) => {
                self.store.set_editing(Some(&id))?;
            }
            Action::ConfirmEdit { id, name } => {
                self.store.rename_item(&id, &name)?;
                self.store.set_editing(None)?;
            }
        }
        Ok(())
    }

    pub fn render(&self) -> ListView {
        view::render(&self.store, &self.search_term)
    }
}
