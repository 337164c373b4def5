//! Seed Configuration
//!
//! The list a page starts with, read from JSON.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::is_valid_name;

const DEFAULT_SEED: &str = include_str!("../seed.json");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid seed document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("seed item {0} has an empty name")]
    EmptySeedName(usize),
}

/// One entry of the seed list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedItem {
    pub name: String,
    #[serde(default)]
    pub checked: bool,
}

/// Items the store is initialised with at load
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SeedConfig {
    #[serde(default)]
    pub items: Vec<SeedItem>,
}

impl SeedConfig {
    /// Parse a seed document, rejecting entries without a usable name
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SeedConfig = serde_json::from_str(json)?;
        if let Some(index) = config.items.iter().position(|item| !is_valid_name(&item.name)) {
            return Err(ConfigError::EmptySeedName(index));
        }
        Ok(config)
    }

    /// The bundled seed list (apples, oranges, milk, bread)
    pub fn bundled() -> Self {
        Self::from_json(DEFAULT_SEED).unwrap_or_else(|err| {
            tracing::error!("bundled seed rejected: {}", err);
            Self::default()
        })
    }
}
