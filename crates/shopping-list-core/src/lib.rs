//! Shopping List Core
//!
//! Platform-independent half of the shopping list editor:
//! - model: items and their ids
//! - store: the single mutable list record and its mutations
//! - view: pure derivation of the visible rows
//! - controller: user actions mapped onto store mutations
//! - config: the seed list loaded at startup

mod config;
mod controller;
mod error;
mod model;
mod store;
mod view;

#[cfg(test)]
mod tests;

pub use config::{ConfigError, SeedConfig, SeedItem};
pub use controller::{Action, ShoppingList};
pub use error::{StoreError, StoreResult};
pub use model::{Item, ItemId};
pub use store::Store;
pub use view::{is_visible, render, ListView, NameCell, RowView};
