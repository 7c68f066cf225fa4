//! # Receipt Points Testkit
//!
//! Testing utilities for receipt points.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Receipt bodies with the points they must score
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: Sample receipts and a ready-made service
//!
//! ## Golden Vectors
//!
//! ```rust
//! use receipt_points_testkit::vectors::{all_vectors, score_vector};
//!
//! for vector in all_vectors() {
//!     let points = score_vector(&vector).unwrap();
//!     assert_eq!(points, vector.expected_points, "{}", vector.name);
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use receipt_points_testkit::generators::{receipt_from_params, ReceiptParams};
//!
//! proptest! {
//!     #[test]
//!     fn score_is_deterministic(params: ReceiptParams) {
//!         let receipt = receipt_from_params(&params);
//!         prop_assert_eq!(score(&receipt), score(&receipt));
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use receipt_points_testkit::fixtures::{target_receipt, TestFixture};
//!
//! let fixture = TestFixture::new();
//! let receipt = target_receipt();
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{corner_market_receipt, target_receipt, walgreens_receipt, TestFixture};
pub use generators::{receipt_from_params, ReceiptParams};
pub use vectors::{all_vectors, score_vector, verify_all_vectors, GoldenVector};
