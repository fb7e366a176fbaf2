//! Error types for U-Loading.

use thiserror::Error;

use crate::placement::ItemId;

/// Result type alias for U-Loading operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during a loading run.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid item provided (zero dimension, bad weight, duplicate id).
    #[error("Invalid item: {0}")]
    InvalidItem(String),

    /// Invalid container template provided.
    #[error("Invalid container: {0}")]
    InvalidContainer(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The item does not fit an empty container of this class in any allowed orientation.
    #[error("Item '{item}' cannot fit this container class: {reason}")]
    Unplaceable {
        /// Identifier of the offending item.
        item: ItemId,
        /// Human-readable explanation.
        reason: String,
    },

    /// More containers would be needed than the configured cap allows.
    #[error("Container limit of {0} exceeded")]
    ContainerLimit(usize),

    /// Center of mass requested for a container holding no weight.
    #[error("Center of mass undefined for container {0}: no weight committed")]
    UndefinedCenterOfMass(usize),

    /// Serialization error.
    #[cfg(feature = "serde")]
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Returns the offending item id for errors tied to a single item.
    pub fn item_id(&self) -> Option<&str> {
        match self {
            Error::Unplaceable { item, .. } => Some(item.as_str()),
            _ => None,
        }
    }
}
