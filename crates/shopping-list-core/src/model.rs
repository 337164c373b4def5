//! Item Model

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque unique identifier of a list item
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Generate a fresh, collision-free id
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A single entry of the shopping list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier
    pub id: ItemId,
    /// Display name, never empty
    pub name: String,
    /// Whether the item has been picked up
    pub checked: bool,
}

impl Item {
    /// Create an unchecked item with a fresh id
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ItemId::generate(),
            name: name.into(),
            checked: false,
        }
    }
}

/// Names are valid when they contain something other than whitespace.
pub(crate) fn is_valid_name(name: &str) -> bool {
    !name.trim().is_empty()
}
