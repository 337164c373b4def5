//! UI Components
//!
//! Leptos components for the shopping list page.

mod list_controls;
mod new_item_form;
mod shopping_item;
mod shopping_list_view;

pub use list_controls::ListControls;
pub use new_item_form::NewItemForm;
pub use shopping_item::ShoppingItem;
pub use shopping_list_view::ShoppingListView;
