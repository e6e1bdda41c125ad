//! Commerce error types.

use crate::checkout::FieldError;
use thiserror::Error;

/// Errors that can occur in commerce operations.
///
/// Cart mutations themselves never fail — unknown ids are no-ops and storage
/// trouble is logged and absorbed — so these cover the checkout boundary and
/// the fallible edges of persistence.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Order submitted against an empty cart.
    #[error("cart is empty")]
    EmptyCart,

    /// Checkout form failed validation.
    #[error("checkout rejected: {} invalid field(s)", .0.len())]
    CheckoutRejected(Vec<FieldError>),

    /// Storage error.
    #[error("storage error: {0}")]
    Storage(#[from] studio_store::StoreError),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
