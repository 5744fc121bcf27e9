//! Unified error types and result handling for the inventory app.
//!
//! Validation variants (`EmptyName`, `InvalidQuantity`, `InvalidPrice`) are
//! recovered at the prompt by asking again. `DuplicateProduct` is turned into an
//! update by [`crate::core::product::save_product`]. Everything else bubbles up.

use thiserror::Error;

/// All errors produced by the inventory app.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be read or parsed.
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong.
        message: String,
    },

    /// The storage engine reported a failure.
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// A delimited file could not be read or written.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Plain file or terminal I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A product needs a non-empty name.
    #[error("Product name cannot be empty")]
    EmptyName,

    /// Quantity was not a non-negative integer.
    #[error("Invalid quantity: '{input}'")]
    InvalidQuantity {
        /// The rejected text.
        input: String,
    },

    /// Price was not a non-negative decimal amount.
    #[error("Invalid price: '{input}'")]
    InvalidPrice {
        /// The rejected text.
        input: String,
    },

    /// Date did not match `MM/DD/YYYY`.
    #[error("Invalid date: '{input}' (expected MM/DD/YYYY)")]
    InvalidDate {
        /// The rejected text.
        input: String,
    },

    /// Insert hit the unique constraint on the product name.
    #[error("Product '{name}' already exists")]
    DuplicateProduct {
        /// Name that collided.
        name: String,
    },

    /// Lookup found no product.
    #[error("Product '{name}' not found")]
    ProductNotFound {
        /// Name or id that was looked up.
        name: String,
    },

    /// The operator's input stream reached end-of-file.
    #[error("Input stream closed")]
    InputClosed,
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// True for errors that mean "ask the operator again".
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::EmptyName | Self::InvalidQuantity { .. } | Self::InvalidPrice { .. }
        )
    }
}
