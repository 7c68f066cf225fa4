//! Store trait: the abstract interface for receipt storage.
//!
//! The service only needs to put a receipt under a fresh id and get it
//! back. Scoring and validation never touch the store.

use async_trait::async_trait;
use receipt_points_core::{Receipt, ReceiptId};

use crate::error::Result;

/// Result of putting a receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertResult {
    /// Receipt was stored under the id.
    Inserted,
    /// The id is already taken. The existing receipt is left untouched.
    AlreadyExists,
}

/// The Store trait: async interface for receipt storage.
///
/// Records are write-once: there is no update or delete, and a second put
/// under an existing id never replaces the first receipt.
#[async_trait]
pub trait Store: Send + Sync {
    /// Store a receipt under `id`.
    async fn put(&self, id: &ReceiptId, receipt: &Receipt) -> Result<InsertResult>;

    /// Get a receipt by id.
    async fn get(&self, id: &ReceiptId) -> Result<Option<Receipt>>;

    /// Number of stored receipts.
    async fn len(&self) -> Result<usize>;

    /// Whether the store holds no receipts.
    async fn is_empty(&self) -> Result<bool> {
        Ok(self.len().await? == 0)
    }
}

/// Extension trait for common store patterns.
pub trait StoreExt: Store {
    /// Store a receipt under a freshly generated id.
    ///
    /// Regenerates on the (practically impossible) event of an id collision.
    fn put_new(
        &self,
        receipt: &Receipt,
    ) -> impl std::future::Future<Output = Result<ReceiptId>> + Send;
}

impl<S: Store + ?Sized> StoreExt for S {
    async fn put_new(&self, receipt: &Receipt) -> Result<ReceiptId> {
        loop {
            let id = ReceiptId::generate();
            match self.put(&id, receipt).await? {
                InsertResult::Inserted => return Ok(id),
                InsertResult::AlreadyExists => {
                    tracing::warn!(%id, "generated receipt id already taken, retrying");
                }
            }
        }
    }
}
