//! The receipt document and its line items.
//!
//! Every field is carried as text exactly as it arrived on the wire. Prices
//! and totals are strings, not numbers; interpreting them is the scorer's job.

use serde::{Deserialize, Deserializer, Serialize};

/// A single purchased line item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Free-form description, counted untrimmed by the scorer.
    #[serde(default, alias = "ShortDescription", alias = "shortdescription")]
    pub short_description: String,
    /// Decimal price string, e.g. `"6.49"`.
    #[serde(default, alias = "Price")]
    pub price: String,
}

impl Item {
    /// Create a new item.
    pub fn new(short_description: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            short_description: short_description.into(),
            price: price.into(),
        }
    }
}

/// A submitted purchase receipt.
///
/// Absent scalar fields decode as empty strings so that the validator, not
/// the decoder, decides whether the receipt is acceptable. Keys are also
/// accepted in PascalCase and all-lowercase.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    #[serde(default, alias = "Retailer")]
    pub retailer: String,
    /// `YYYY-MM-DD`.
    #[serde(default, alias = "PurchaseDate", alias = "purchasedate")]
    pub purchase_date: String,
    /// `HH:MM`, 24-hour clock.
    #[serde(default, alias = "PurchaseTime", alias = "purchasetime")]
    pub purchase_time: String,
    /// Ordered line items. `null` and absent both mean no items.
    #[serde(default, alias = "Items", deserialize_with = "null_as_empty")]
    pub items: Vec<Item>,
    /// Decimal total string, e.g. `"35.35"`.
    #[serde(default, alias = "Total")]
    pub total: String,
}

impl Receipt {
    /// Start building a receipt for the given retailer.
    pub fn builder(retailer: impl Into<String>) -> ReceiptBuilder {
        ReceiptBuilder::new(retailer)
    }

    /// Number of line items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Item>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Item>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Builder for constructing receipts in code.
#[derive(Debug, Clone)]
pub struct ReceiptBuilder {
    receipt: Receipt,
}

impl ReceiptBuilder {
    /// Create a new builder.
    pub fn new(retailer: impl Into<String>) -> Self {
        Self {
            receipt: Receipt {
                retailer: retailer.into(),
                ..Receipt::default()
            },
        }
    }

    /// Set the purchase date (`YYYY-MM-DD`).
    pub fn purchase_date(mut self, date: impl Into<String>) -> Self {
        self.receipt.purchase_date = date.into();
        self
    }

    /// Set the purchase time (`HH:MM`).
    pub fn purchase_time(mut self, time: impl Into<String>) -> Self {
        self.receipt.purchase_time = time.into();
        self
    }

    /// Append a line item.
    pub fn item(mut self, short_description: impl Into<String>, price: impl Into<String>) -> Self {
        self.receipt.items.push(Item::new(short_description, price));
        self
    }

    /// Replace all line items.
    pub fn items(mut self, items: Vec<Item>) -> Self {
        self.receipt.items = items;
        self
    }

    /// Set the total.
    pub fn total(mut self, total: impl Into<String>) -> Self {
        self.receipt.total = total.into();
        self
    }

    /// Finish building.
    pub fn build(self) -> Receipt {
        self.receipt
    }
}
