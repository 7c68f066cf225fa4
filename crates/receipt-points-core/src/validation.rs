//! Receipt validation: decoding and structural checks.
//!
//! Validation only checks presence. Numeric formats, calendar validity and
//! whether the total matches the item prices are left to the scorer, which
//! tolerates malformed values.

use crate::error::{ItemField, ReceiptField, ValidationError};
use crate::receipt::Receipt;

/// Decode a receipt from its JSON wire form.
///
/// Only the first JSON value in the body is read; anything after it is
/// ignored. A body that fails to decode is a validation failure like any
/// other.
pub fn decode_receipt(body: &[u8]) -> Result<Receipt, ValidationError> {
    serde_json::Deserializer::from_slice(body)
        .into_iter::<Receipt>()
        .next()
        .ok_or(ValidationError::EmptyBody)?
        .map_err(ValidationError::from)
}

/// Validate a receipt's structure.
///
/// This checks, in order:
/// - `retailer`, `purchaseDate`, `purchaseTime`, `total` are non-empty
/// - every item has a non-empty `shortDescription` and `price`
///
/// An empty item list is valid.
pub fn validate_receipt(receipt: &Receipt) -> Result<(), ValidationError> {
    let scalars = [
        (ReceiptField::Retailer, &receipt.retailer),
        (ReceiptField::PurchaseDate, &receipt.purchase_date),
        (ReceiptField::PurchaseTime, &receipt.purchase_time),
        (ReceiptField::Total, &receipt.total),
    ];
    for (field, value) in scalars {
        if value.is_empty() {
            return Err(ValidationError::EmptyField(field));
        }
    }

    for (index, item) in receipt.items.iter().enumerate() {
        if item.short_description.is_empty() {
            return Err(ValidationError::EmptyItemField {
                index,
                field: ItemField::ShortDescription,
            });
        }
        if item.price.is_empty() {
            return Err(ValidationError::EmptyItemField {
                index,
                field: ItemField::Price,
            });
        }
    }

    Ok(())
}

/// Boolean form of [`validate_receipt`].
pub fn is_valid(receipt: &Receipt) -> bool {
    validate_receipt(receipt).is_ok()
}

/// Decode and validate in one step.
pub fn decode_and_validate(body: &[u8]) -> Result<Receipt, ValidationError> {
    let receipt = decode_receipt(body)?;
    validate_receipt(&receipt)?;
    Ok(receipt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::receipt::Item;

    fn make_valid_receipt() -> Receipt {
        Receipt::builder("Target")
            .purchase_date("2022-01-01")
            .purchase_time("13:01")
            .item("Mountain Dew 12PK", "6.49")
            .total("6.49")
            .build()
    }

    #[test]
    fn test_valid_receipt() {
        assert!(validate_receipt(&make_valid_receipt()).is_ok());
        assert!(is_valid(&make_valid_receipt()));
    }

    #[test]
    fn test_empty_items_is_valid() {
        let receipt = Receipt {
            items: vec![],
            ..make_valid_receipt()
        };
        assert!(is_valid(&receipt));
    }

    #[test]
    fn test_empty_retailer() {
        let receipt = Receipt {
            retailer: String::new(),
            ..make_valid_receipt()
        };
        let result = validate_receipt(&receipt);
        assert!(matches!(
            result,
            Err(ValidationError::EmptyField(ReceiptField::Retailer))
        ));
    }

    #[test]
    fn test_empty_purchase_date() {
        let receipt = Receipt {
            purchase_date: String::new(),
            ..make_valid_receipt()
        };
        let result = validate_receipt(&receipt);
        assert!(matches!(
            result,
            Err(ValidationError::EmptyField(ReceiptField::PurchaseDate))
        ));
    }

    #[test]
    fn test_empty_purchase_time() {
        let receipt = Receipt {
            purchase_time: String::new(),
            ..make_valid_receipt()
        };
        assert!(!is_valid(&receipt));
    }

    #[test]
    fn test_empty_total() {
        let receipt = Receipt {
            total: String::new(),
            ..make_valid_receipt()
        };
        let result = validate_receipt(&receipt);
        assert!(matches!(
            result,
            Err(ValidationError::EmptyField(ReceiptField::Total))
        ));
    }

    #[test]
    fn test_empty_item_description() {
        let mut receipt = make_valid_receipt();
        receipt.items.push(Item::new("", "1.00"));

        let result = validate_receipt(&receipt);
        assert!(matches!(
            result,
            Err(ValidationError::EmptyItemField {
                index: 1,
                field: ItemField::ShortDescription
            })
        ));
    }

    #[test]
    fn test_empty_item_price() {
        let mut receipt = make_valid_receipt();
        receipt.items[0].price = String::new();

        let result = validate_receipt(&receipt);
        assert!(matches!(
            result,
            Err(ValidationError::EmptyItemField {
                index: 0,
                field: ItemField::Price
            })
        ));
    }

    #[test]
    fn test_malformed_values_still_valid() {
        // Presence is all that is checked.
        let receipt = Receipt::builder("?")
            .purchase_date("x")
            .purchase_time("y")
            .item("z", "free")
            .total("abc0")
            .build();
        assert!(is_valid(&receipt));
    }

    #[test]
    fn test_decode_failure() {
        let result = decode_and_validate(b"{not json");
        assert!(matches!(result, Err(ValidationError::Decode(_))));
    }

    #[test]
    fn test_decode_empty_body() {
        assert!(matches!(decode_receipt(b""), Err(ValidationError::EmptyBody)));
        assert!(matches!(decode_receipt(b"  \n"), Err(ValidationError::EmptyBody)));
    }

    #[test]
    fn test_decode_ignores_trailing_data() {
        let body = br#"{
            "retailer": "Target",
            "purchaseDate": "2022-01-01",
            "purchaseTime": "13:01",
            "total": "1.00"
        } x"#;
        let receipt = decode_and_validate(body).unwrap();
        assert_eq!(receipt.retailer, "Target");
    }

    #[test]
    fn test_decode_pascal_case_keys() {
        let body = br#"{
            "Retailer": "Target",
            "PurchaseDate": "2022-01-01",
            "PurchaseTime": "13:01",
            "Total": "1.00"
        }"#;
        assert!(decode_and_validate(body).is_ok());
    }

    #[test]
    fn test_decode_duplicate_key_is_rejected() {
        let body = br#"{"retailer": "A", "retailer": "B", "purchaseDate": "2022-01-01"}"#;
        assert!(matches!(decode_receipt(body), Err(ValidationError::Decode(_))));
    }

    #[test]
    fn test_decode_missing_field_is_invalid() {
        let body = br#"{"retailer": "Target", "purchaseDate": "2022-01-01", "items": []}"#;
        let result = decode_and_validate(body);
        assert!(matches!(
            result,
            Err(ValidationError::EmptyField(ReceiptField::PurchaseTime))
        ));
    }

    #[test]
    fn test_decode_and_validate_ok() {
        let body = br#"{
            "retailer": "Walgreens",
            "purchaseDate": "2022-01-02",
            "purchaseTime": "08:13",
            "total": "2.65",
            "items": [
                {"shortDescription": "Pepsi - 12-oz", "price": "1.25"},
                {"shortDescription": "Dasani", "price": "1.40"}
            ]
        }"#;
        let receipt = decode_and_validate(body).unwrap();
        assert_eq!(receipt.retailer, "Walgreens");
        assert_eq!(receipt.item_count(), 2);
    }
}
