//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in catalog and checkout operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// Checkout entered without a usable `{product.id, quantity}` state.
    #[error("Invalid access: {0}")]
    InvalidAccess(String),

    /// Invalid quantity.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Checkout incomplete.
    #[error("Checkout incomplete: missing {0}")]
    CheckoutIncomplete(String),

    /// Unknown sort option.
    #[error("Unknown sort option: {0}")]
    UnknownSort(String),
}
