//! # Receipt Points Store
//!
//! Storage abstraction for receipt points. Provides a trait-based interface
//! for receipt storage with an in-memory implementation.
//!
//! ## Key Types
//!
//! - [`Store`] - The async trait for all storage operations
//! - [`MemoryStore`] - In-memory storage
//! - [`InsertResult`] - Result of putting a receipt
//!
//! ## Usage
//!
//! ```rust,no_run
//! use receipt_points_core::Receipt;
//! use receipt_points_store::{MemoryStore, Store, StoreExt};
//!
//! async fn example() {
//!     let store = MemoryStore::new();
//!
//!     let receipt = Receipt::builder("Target").total("1.00").build();
//!     let id = store.put_new(&receipt).await.unwrap();
//!
//!     let stored = store.get(&id).await.unwrap();
//!     assert_eq!(stored, Some(receipt));
//! }
//! ```
//!
//! ## Design Notes
//!
//! - **Write-once**: a second put under an existing id returns `AlreadyExists`
//! - **No deletes**: receipts live until the process exits

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use traits::{InsertResult, Store, StoreExt};
