//! # Receipt Points Core
//!
//! Pure primitives for receipt points: the receipt model, validation, and
//! the scoring rules.
//!
//! This crate contains no I/O, no storage, no networking. Everything here is
//! a deterministic function of its input and safe to call from any thread.
//!
//! ## Key Types
//!
//! - [`Receipt`] - The submitted purchase document
//! - [`Item`] - A line item on a receipt
//! - [`ReceiptId`] - Opaque identifier assigned at submission
//! - [`ScoreBreakdown`] - Per-rule contributions to a score
//!
//! ## Scoring
//!
//! ```rust
//! use receipt_points_core::{score, Receipt};
//!
//! let receipt = Receipt::builder("Target")
//!     .purchase_date("2022-01-01")
//!     .purchase_time("13:01")
//!     .item("Mountain Dew 12PK", "6.49")
//!     .total("6.49")
//!     .build();
//!
//! assert_eq!(score(&receipt), 12);
//! ```

pub mod error;
pub mod receipt;
pub mod scoring;
pub mod types;
pub mod validation;

pub use error::{ItemField, ReceiptField, ValidationError};
pub use receipt::{Item, Receipt, ReceiptBuilder};
pub use scoring::{breakdown, score, Rule, ScoreBreakdown};
pub use types::{Points, ReceiptId};
pub use validation::{decode_and_validate, decode_receipt, is_valid, validate_receipt};
