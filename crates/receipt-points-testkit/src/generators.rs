//! Proptest generators for property-based testing.

use proptest::prelude::*;

use receipt_points_core::{Item, Receipt};

/// Generate a retailer name, punctuation included.
pub fn retailer() -> impl Strategy<Value = String> {
    "[A-Za-z0-9&' .-]{1,32}".prop_map(String::from)
}

/// Generate a `YYYY-MM-DD` date.
pub fn purchase_date() -> impl Strategy<Value = String> {
    (2000u32..=2030, 1u32..=12, 1u32..=31)
        .prop_map(|(y, m, d)| format!("{:04}-{:02}-{:02}", y, m, d))
}

/// Generate an `HH:MM` time.
pub fn purchase_time() -> impl Strategy<Value = String> {
    (0u32..24, 0u32..60).prop_map(|(h, m)| format!("{:02}:{:02}", h, m))
}

/// Generate a two-decimal amount string.
pub fn amount() -> impl Strategy<Value = String> {
    (0u32..1000, 0u32..100).prop_map(|(dollars, cents)| format!("{}.{:02}", dollars, cents))
}

/// Generate a well-formed item.
pub fn item() -> impl Strategy<Value = Item> {
    ("[A-Za-z0-9 -]{1,30}", amount()).prop_map(|(desc, price)| Item::new(desc, price))
}

/// Generate any string, including empty, short, and non-ASCII ones.
pub fn any_text() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        ".{0,3}",
        any::<String>(),
    ]
}

/// Generate an item with arbitrary field contents.
pub fn any_item() -> impl Strategy<Value = Item> {
    (any_text(), any_text()).prop_map(|(desc, price)| Item::new(desc, price))
}

/// Parameters for generating a well-formed receipt.
#[derive(Debug, Clone)]
pub struct ReceiptParams {
    pub retailer: String,
    pub purchase_date: String,
    pub purchase_time: String,
    pub items: Vec<Item>,
    pub total: String,
}

impl Arbitrary for ReceiptParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (
            retailer(),
            purchase_date(),
            purchase_time(),
            prop::collection::vec(item(), 0..12),
            amount(),
        )
            .prop_map(|(retailer, purchase_date, purchase_time, items, total)| {
                ReceiptParams {
                    retailer,
                    purchase_date,
                    purchase_time,
                    items,
                    total,
                }
            })
            .boxed()
    }
}

/// Build a receipt from parameters.
pub fn receipt_from_params(params: &ReceiptParams) -> Receipt {
    Receipt::builder(params.retailer.clone())
        .purchase_date(params.purchase_date.clone())
        .purchase_time(params.purchase_time.clone())
        .items(params.items.clone())
        .total(params.total.clone())
        .build()
}

/// Generate a receipt whose fields may be empty or malformed.
pub fn any_receipt() -> impl Strategy<Value = Receipt> {
    (
        any_text(),
        any_text(),
        any_text(),
        prop::collection::vec(any_item(), 0..6),
        any_text(),
    )
        .prop_map(|(retailer, purchase_date, purchase_time, items, total)| Receipt {
            retailer,
            purchase_date,
            purchase_time,
            items,
            total,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use receipt_points_core::{breakdown, is_valid, score, Rule};

    proptest! {
        #[test]
        fn test_score_deterministic(params: ReceiptParams) {
            let receipt = receipt_from_params(&params);
            prop_assert_eq!(score(&receipt), score(&receipt));
        }

        #[test]
        fn test_generated_receipts_are_valid(params: ReceiptParams) {
            prop_assert!(is_valid(&receipt_from_params(&params)));
        }

        #[test]
        fn test_well_formed_receipts_score_non_negative(params: ReceiptParams) {
            prop_assert!(score(&receipt_from_params(&params)) >= 0);
        }

        #[test]
        fn test_breakdown_sums_to_score(receipt in any_receipt()) {
            prop_assert_eq!(breakdown(&receipt).total(), score(&receipt));
        }

        #[test]
        fn test_validity_is_field_presence(receipt in any_receipt()) {
            let expected = !receipt.retailer.is_empty()
                && !receipt.purchase_date.is_empty()
                && !receipt.purchase_time.is_empty()
                && !receipt.total.is_empty()
                && receipt
                    .items
                    .iter()
                    .all(|i| !i.short_description.is_empty() && !i.price.is_empty());
            prop_assert_eq!(is_valid(&receipt), expected);
        }

        #[test]
        fn test_retailer_points_bounded_by_length(receipt in any_receipt()) {
            let points = breakdown(&receipt).get(Rule::RetailerAlphanumeric);
            prop_assert!(points >= 0);
            prop_assert!(points as usize <= receipt.retailer.len());
        }

        #[test]
        fn test_pair_points(params: ReceiptParams) {
            let receipt = receipt_from_params(&params);
            let expected = (receipt.items.len() / 2) as i64 * 5;
            prop_assert_eq!(breakdown(&receipt).get(Rule::ItemPairs), expected);
        }

        #[test]
        fn test_total_bonuses_follow_cents(dollars in 0u32..1000, cents in 0u32..100) {
            let receipt = Receipt::builder("x")
                .total(format!("{}.{:02}", dollars, cents))
                .build();
            let b = breakdown(&receipt);

            prop_assert_eq!(b.get(Rule::RoundDollarTotal) > 0, cents == 0);
            prop_assert_eq!(b.get(Rule::QuarterMultipleTotal) > 0, cents % 25 == 0);
        }
    }
}
