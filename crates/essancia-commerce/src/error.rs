//! Commerce error types.

use thiserror::Error;

/// Errors that can occur at the storefront's boundaries.
///
/// Cart mutations themselves never fail (invalid arguments degrade to
/// no-ops); this type covers lookups, strict price parsing, and
/// configuration loading.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Category not found.
    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    /// Price text could not be normalized to a numeric amount.
    #[error("Unparsable price: {0:?}")]
    UnparsablePrice(String),

    /// Invalid quantity.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
