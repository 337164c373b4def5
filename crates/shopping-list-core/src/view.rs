//! View Derivation
//!
//! Pure functions turning a store and search term into the rows to display.
//! The UI rebuilds the whole list from a `ListView` on every change.

use crate::model::{Item, ItemId};
use crate::store::Store;

/// How a row shows its name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameCell {
    Static(String),
    /// Inline text field, pre-filled with the current name
    Editing { draft: String },
}

/// One visible row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub id: ItemId,
    pub checked: bool,
    pub name: NameCell,
    /// The edit control is disabled while its row is being edited
    pub edit_disabled: bool,
}

impl RowView {
    pub fn is_editing(&self) -> bool {
        matches!(self.name, NameCell::Editing { .. })
    }
}

/// The rendered list
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListView {
    pub rows: Vec<RowView>,
    /// Items in the store
    pub total: usize,
    /// Items dropped by the active filters
    pub hidden: usize,
}

/// Filter predicate: prefix search (when filtered) and completion (when hiding)
pub fn is_visible(item: &Item, store: &Store, search_term: &str) -> bool {
    let matches_search = !store.filtered() || item.name.starts_with(search_term);
    let matches_completion = !store.hide_completed() || !item.checked;
    matches_search && matches_completion
}

pub fn render(store: &Store, search_term: &str) -> ListView {
    let editing = store.editing();
    let rows: Vec<RowView> = store
        .items()
        .iter()
        .filter(|item| is_visible(item, store, search_term))
        .map(|item| {
            let is_editing = editing == Some(&item.id);
            let name = if is_editing {
                NameCell::Editing { draft: item.name.clone() }
            } else {
                NameCell::Static(item.name.clone())
            };
            RowView {
                id: item.id.clone(),
                checked: item.checked,
                name,
                edit_disabled: is_editing,
            }
        })
        .collect();

    ListView {
        total: store.len(),
        hidden: store.len() - rows.len(),
        rows,
    }
}
