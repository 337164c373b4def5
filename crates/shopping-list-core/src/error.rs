//! Store Errors

use thiserror::Error;

use crate::model::ItemId;

/// Common result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by store mutations.
///
/// Ids only ever come from rendered rows, so `ItemNotFound` signals a broken
/// invariant rather than bad user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("item name must not be empty")]
    EmptyName,
    #[error("no item with id {0}")]
    ItemNotFound(ItemId),
}
