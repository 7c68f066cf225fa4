//! Error types for receipt points core.

use thiserror::Error;

/// Which scalar receipt field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReceiptField {
    Retailer,
    PurchaseDate,
    PurchaseTime,
    Total,
}

impl ReceiptField {
    /// The field's wire name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ReceiptField::Retailer => "retailer",
            ReceiptField::PurchaseDate => "purchaseDate",
            ReceiptField::PurchaseTime => "purchaseTime",
            ReceiptField::Total => "total",
        }
    }
}

impl std::fmt::Display for ReceiptField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which item field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemField {
    ShortDescription,
    Price,
}

impl ItemField {
    /// The field's wire name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ItemField::ShortDescription => "shortDescription",
            ItemField::Price => "price",
        }
    }
}

impl std::fmt::Display for ItemField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation errors for submitted receipts.
///
/// All variants are reported to clients the same way; the detail is kept
/// for logs.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("request body is empty")]
    EmptyBody,

    #[error("receipt could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("required field {0} is empty")]
    EmptyField(ReceiptField),

    #[error("item {index} has an empty {field}")]
    EmptyItemField { index: usize, field: ItemField },
}
