//! Error types for the receipt service.

use receipt_points_core::{ReceiptId, ValidationError};
use receipt_points_store::StoreError;
use thiserror::Error;

/// Errors that can occur during service operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The submitted receipt failed to decode or validate.
    #[error("invalid receipt: {0}")]
    Invalid(#[from] ValidationError),

    /// No receipt is stored under the id.
    #[error("receipt not found: {0}")]
    NotFound(ReceiptId),

    /// Storage error.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}

/// Result type for service operations.
pub type Result<T> = std::result::Result<T, ServiceError>;
