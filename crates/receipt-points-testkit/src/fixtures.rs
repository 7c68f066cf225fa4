//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use receipt_points::{ReceiptService, ServiceError};
use receipt_points_core::{Points, Receipt, ReceiptId};
use receipt_points_store::MemoryStore;

/// The five-item Target receipt. Scores 28.
pub fn target_receipt() -> Receipt {
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

/// Four Gatorades at M&M Corner Market. Scores 109.
pub fn corner_market_receipt() -> Receipt {
    Receipt::builder("M&M Corner Market")
        .purchase_date("2022-03-20")
        .purchase_time("14:33")
        .item("Gatorade", "2.25")
        .item("Gatorade", "2.25")
        .item("Gatorade", "2.25")
        .item("Gatorade", "2.25")
        .total("9.00")
        .build()
}

/// A morning Walgreens receipt with two items. Scores 15.
pub fn walgreens_receipt() -> Receipt {
    Receipt::builder("Walgreens")
        .purchase_date("2022-01-02")
        .purchase_time("08:13")
        .item("Pepsi - 12-oz", "1.25")
        .item("Dasani", "1.40")
        .total("2.65")
        .build()
}

/// A test fixture with a service over a memory store.
pub struct TestFixture {
    pub service: ReceiptService<MemoryStore>,
}

impl TestFixture {
    /// Create a new fixture with an empty store.
    pub fn new() -> Self {
        Self {
            service: ReceiptService::new(MemoryStore::new()),
        }
    }

    /// Submit a receipt.
    pub async fn submit(&self, receipt: Receipt) -> Result<ReceiptId, ServiceError> {
        self.service.submit(receipt).await
    }

    /// Submit a receipt and immediately query its points.
    pub async fn submit_and_score(&self, receipt: Receipt) -> Result<Points, ServiceError> {
        let id = self.submit(receipt).await?;
        self.service.points(&id).await
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
