//! In-memory implementation of the Store trait.
//!
//! Nothing survives the process. Thread-safe via RwLock.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use receipt_points_core::{Receipt, ReceiptId};

use crate::error::{Result, StoreError};
use crate::traits::{InsertResult, Store};

/// In-memory store implementation.
pub struct MemoryStore {
    receipts: RwLock<HashMap<ReceiptId, Receipt>>,
}

impl MemoryStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            receipts: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn put(&self, id: &ReceiptId, receipt: &Receipt) -> Result<InsertResult> {
        let mut receipts = self.receipts.write().map_err(|_| StoreError::Poisoned)?;

        if receipts.contains_key(id) {
            return Ok(InsertResult::AlreadyExists);
        }

        receipts.insert(id.clone(), receipt.clone());
        Ok(InsertResult::Inserted)
    }

    async fn get(&self, id: &ReceiptId) -> Result<Option<Receipt>> {
        let receipts = self.receipts.read().map_err(|_| StoreError::Poisoned)?;
        Ok(receipts.get(id).cloned())
    }

    async fn len(&self) -> Result<usize> {
        let receipts = self.receipts.read().map_err(|_| StoreError::Poisoned)?;
        Ok(receipts.len())
    }
}
