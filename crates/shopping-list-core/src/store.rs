//! List Store
//!
//! The single mutable record holding all list state. Every mutation goes
//! through the methods here so the invariants hold:
//! - ids are unique
//! - `editing`, if set, names an item that exists
//! - `items` stays in insertion order

use tracing::debug;

use crate::config::SeedConfig;
use crate::error::{StoreError, StoreResult};
use crate::model::{is_valid_name, Item, ItemId};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Store {
    items: Vec<Item>,
    hide_completed: bool,
    filtered: bool,
    editing: Option<ItemId>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store holding the seed items, all flags off
    pub fn from_seed(seed: &SeedConfig) -> Self {
        let items = seed
            .items
            .iter()
            .map(|entry| Item {
                checked: entry.checked,
                ..Item::new(entry.name.clone())
            })
            .collect();
        Self {
            items,
            ..Self::default()
        }
    }

    // ========================
    // Accessors
    // ========================

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn hide_completed(&self) -> bool {
        self.hide_completed
    }

    pub fn filtered(&self) -> bool {
        self.filtered
    }

    pub fn editing(&self) -> Option<&ItemId> {
        self.editing.as_ref()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|item| item.checked).count()
    }

    pub fn remaining_count(&self) -> usize {
        self.len() - self.completed_count()
    }

    // ========================
    // Mutations
    // ========================

    /// Append an unchecked item, returning its fresh id
    pub fn add_item(&mut self, name: &str) -> StoreResult<ItemId> {
        if !is_valid_name(name) {
            return Err(StoreError::EmptyName);
        }
        let item = Item::new(name);
        let id = item.id.clone();
        debug!(%id, name, "add item");
        self.items.push(item);
        Ok(id)
    }

    pub fn toggle_checked(&mut self, id: &ItemId) -> StoreResult<bool> {
        let item = self.item_mut(id)?;
        item.checked = !item.checked;
        debug!(%id, checked = item.checked, "toggle item");
        Ok(item.checked)
    }

    /// Remove an item. Leaves edit mode if that item was being edited.
    pub fn delete_item(&mut self, id: &ItemId) -> StoreResult<Item> {
        let index = self
            .items
            .iter()
            .position(|item| &item.id == id)
            .ok_or_else(|| StoreError::ItemNotFound(id.clone()))?;
        let removed = self.items.remove(index);
        if self.editing.as_ref() == Some(id) {
            self.editing = None;
        }
        debug!(%id, "delete item");
        Ok(removed)
    }

    pub fn rename_item(&mut self, id: &ItemId, new_name: &str) -> StoreResult<()> {
        if !is_valid_name(new_name) {
            return Err(StoreError::EmptyName);
        }
        let item = self.item_mut(id)?;
        item.name = new_name.to_string();
        debug!(%id, name = new_name, "rename item");
        Ok(())
    }

    pub fn set_hide_completed(&mut self, hide: bool) {
        debug!(hide, "set hide completed");
        self.hide_completed = hide;
    }

    pub fn set_filtered(&mut self, filtered: bool) {
        debug!(filtered, "set filtered");
        self.filtered = filtered;
    }

    /// Put a single item into inline-edit mode, or leave edit mode with `None`
    pub fn set_editing(&mut self, id: Option<&ItemId>) -> StoreResult<()> {
        if let Some(id) = id {
            if self.get(id).is_none() {
                return Err(StoreError::ItemNotFound(id.clone()));
            }
        }
        debug!(editing = ?id, "set editing");
        self.editing = id.cloned();
        Ok(())
    }

    fn item_mut(&mut self, id: &ItemId) -> StoreResult<&mut Item> {
        self.items
            .iter_mut()
            .find(|item| &item.id == id)
            .ok_or_else(|| StoreError::ItemNotFound(id.clone()))
    }
}
