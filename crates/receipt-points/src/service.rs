//! The receipt service: submit receipts and query their points.
//!
//! Brings the validator, the scorer and a store together. The store is
//! injected, so the same service runs over any [`Store`] implementation.

use std::sync::Arc;

use receipt_points_core::{
    breakdown, decode_receipt, validate_receipt, Points, Receipt, ReceiptId, ScoreBreakdown,
};
use receipt_points_store::{Store, StoreExt};

use crate::error::{Result, ServiceError};

/// The main service struct.
pub struct ReceiptService<S: Store> {
    store: Arc<S>,
}

impl<S: Store> Clone for ReceiptService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: Store> ReceiptService<S> {
    /// Create a new service over the given store.
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Get the store reference.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Decode, validate and store a receipt from its JSON body.
    pub async fn submit_json(&self, body: &[u8]) -> Result<ReceiptId> {
        let receipt = decode_receipt(body)?;
        self.submit(receipt).await
    }

    /// Validate and store a receipt, returning its new id.
    pub async fn submit(&self, receipt: Receipt) -> Result<ReceiptId> {
        validate_receipt(&receipt)?;

        let id = self.store.put_new(&receipt).await?;
        tracing::info!(
            %id,
            retailer = %receipt.retailer,
            items = receipt.item_count(),
            "receipt stored"
        );
        Ok(id)
    }

    /// Get a stored receipt.
    pub async fn receipt(&self, id: &ReceiptId) -> Result<Receipt> {
        self.store
            .get(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(id.clone()))
    }

    /// Per-rule contributions for a stored receipt.
    pub async fn breakdown(&self, id: &ReceiptId) -> Result<ScoreBreakdown> {
        let receipt = self.receipt(id).await?;
        Ok(breakdown(&receipt))
    }

    /// Points for a stored receipt. Recomputed on every call.
    pub async fn points(&self, id: &ReceiptId) -> Result<Points> {
        let breakdown = self.breakdown(id).await?;
        let points = breakdown.total();
        tracing::debug!(%id, points, %breakdown, "scored receipt");
        Ok(points)
    }

    /// Number of stored receipts.
    pub async fn receipt_count(&self) -> Result<usize> {
        Ok(self.store.len().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use receipt_points_core::ValidationError;
    use receipt_points_store::MemoryStore;

    fn make_service() -> ReceiptService<MemoryStore> {
        ReceiptService::new(MemoryStore::new())
    }

    fn target_receipt() -> Receipt {
        Receipt::builder("Target")
            .purchase_date("2022-01-01")
            .purchase_time("13:01")
            .item("Mountain Dew 12PK", "6.49")
            .item("Emils Cheese Pizza", "12.25")
            .item("Knorr Creamy Chicken", "1.26")
            .item("Doritos Nacho Cheese", "3.35")
            .item("Klarbrunn 12-PK 12 FL OZ", "12.00")
            .total("35.35")
            .build()
    }

    #[tokio::test]
    async fn test_submit_then_points() {
        let service = make_service();
        let id = service.submit(target_receipt()).await.unwrap();

        assert_eq!(service.points(&id).await.unwrap(), 28);
        assert_eq!(service.receipt_count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_points_are_stable() {
        let service = make_service();
        let id = service.submit(target_receipt()).await.unwrap();

        let first = service.points(&id).await.unwrap();
        let second = service.points(&id).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_submit_invalid_is_not_stored() {
        let service = make_service();
        let receipt = Receipt {
            retailer: String::new(),
            ..target_receipt()
        };

        let result = service.submit(receipt).await;
        assert!(matches!(result, Err(ServiceError::Invalid(_))));
        assert_eq!(service.receipt_count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_submit_json_decode_failure() {
        let service = make_service();
        let result = service.submit_json(b"[1, 2, 3]").await;
        assert!(matches!(
            result,
            Err(ServiceError::Invalid(ValidationError::Decode(_)))
        ));
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let service = make_service();
        let id = ReceiptId::new("does-not-exist");

        let result = service.points(&id).await;
        assert!(matches!(result, Err(ServiceError::NotFound(missing)) if missing == id));
    }

    #[tokio::test]
    async fn test_each_submission_gets_its_own_id() {
        let service = make_service();
        let a = service.submit(target_receipt()).await.unwrap();
        let b = service.submit(target_receipt()).await.unwrap();

        assert_ne!(a, b);
        assert_eq!(service.points(&a).await.unwrap(), service.points(&b).await.unwrap());
    }
}
