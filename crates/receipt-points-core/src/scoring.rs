//! Points scoring: independent, additive rules over a receipt.
//!
//! Scoring never fails. Every numeric value is taken from a fixed byte
//! position in its field and parsed leniently: anything that does not parse
//! counts as zero, and the rule is still evaluated against that zero. A
//! total of `"abc0"` therefore earns both the round-dollar and the
//! quarter-multiple bonus.

use std::fmt;

use crate::receipt::{Item, Receipt};
use crate::types::Points;

/// Bonus for a total with zero cents.
pub const ROUND_DOLLAR_POINTS: Points = 50;
/// Bonus for a total whose cents are a multiple of 25.
pub const QUARTER_MULTIPLE_POINTS: Points = 25;
/// Points per two items on the receipt.
pub const ITEM_PAIR_POINTS: Points = 5;
/// Bonus for an odd day of month.
pub const ODD_DAY_POINTS: Points = 6;
/// Bonus for a purchase between 14:00 and 16:00.
pub const AFTERNOON_POINTS: Points = 10;
/// Price multiplier for items with a description length divisible by 3.
pub const DESCRIPTION_PRICE_MULTIPLIER: f64 = 0.2;

const AFTERNOON_START_HOUR: i64 = 14;
const AFTERNOON_END_HOUR: i64 = 16;

/// The scoring rules, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    RetailerAlphanumeric,
    RoundDollarTotal,
    QuarterMultipleTotal,
    ItemPairs,
    ItemDescriptionLength,
    OddPurchaseDay,
    AfternoonPurchase,
}

impl Rule {
    /// All rules, in evaluation order.
    pub const ALL: [Rule; 7] = [
        Rule::RetailerAlphanumeric,
        Rule::RoundDollarTotal,
        Rule::QuarterMultipleTotal,
        Rule::ItemPairs,
        Rule::ItemDescriptionLength,
        Rule::OddPurchaseDay,
        Rule::AfternoonPurchase,
    ];

    /// Short machine-friendly name.
    pub const fn name(&self) -> &'static str {
        match self {
            Rule::RetailerAlphanumeric => "retailer_alphanumeric",
            Rule::RoundDollarTotal => "round_dollar_total",
            Rule::QuarterMultipleTotal => "quarter_multiple_total",
            Rule::ItemPairs => "item_pairs",
            Rule::ItemDescriptionLength => "item_description_length",
            Rule::OddPurchaseDay => "odd_purchase_day",
            Rule::AfternoonPurchase => "afternoon_purchase",
        }
    }

    /// Points this rule contributes for the receipt.
    pub fn apply(&self, receipt: &Receipt) -> Points {
        match self {
            Rule::RetailerAlphanumeric => retailer_points(&receipt.retailer),
            Rule::RoundDollarTotal => {
                if total_cents(&receipt.total) == 0 {
                    ROUND_DOLLAR_POINTS
                } else {
                    0
                }
            }
            Rule::QuarterMultipleTotal => {
                if total_cents(&receipt.total) % 25 == 0 {
                    QUARTER_MULTIPLE_POINTS
                } else {
                    0
                }
            }
            Rule::ItemPairs => (receipt.items.len() / 2) as Points * ITEM_PAIR_POINTS,
            Rule::ItemDescriptionLength => receipt
                .items
                .iter()
                .map(item_description_points)
                .fold(0, Points::saturating_add),
            Rule::OddPurchaseDay => {
                if purchase_day(&receipt.purchase_date) % 2 == 1 {
                    ODD_DAY_POINTS
                } else {
                    0
                }
            }
            Rule::AfternoonPurchase => {
                let hour = purchase_hour(&receipt.purchase_time);
                if (AFTERNOON_START_HOUR..AFTERNOON_END_HOUR).contains(&hour) {
                    AFTERNOON_POINTS
                } else {
                    0
                }
            }
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-rule contributions for one receipt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreBreakdown {
    contributions: [(Rule, Points); 7],
}

impl ScoreBreakdown {
    /// Contributions in evaluation order.
    pub fn contributions(&self) -> &[(Rule, Points)] {
        &self.contributions
    }

    /// The contribution of a single rule.
    pub fn get(&self, rule: Rule) -> Points {
        self.contributions()
            .iter()
            .find(|(r, _)| *r == rule)
            .map(|(_, points)| *points)
            .unwrap_or(0)
    }

    /// Sum of all contributions.
    pub fn total(&self) -> Points {
        self.contributions()
            .iter()
            .map(|(_, points)| *points)
            .fold(0, Points::saturating_add)
    }
}

impl fmt::Display for ScoreBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (rule, points) in self.contributions() {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{}={}", rule, points)?;
            first = false;
        }
        Ok(())
    }
}

/// Compute every rule's contribution for a receipt.
pub fn breakdown(receipt: &Receipt) -> ScoreBreakdown {
    ScoreBreakdown {
        contributions: Rule::ALL.map(|rule| (rule, rule.apply(receipt))),
    }
}

/// Compute the points for a receipt.
pub fn score(receipt: &Receipt) -> Points {
    breakdown(receipt).total()
}

/// One point per ASCII letter or digit.
fn retailer_points(retailer: &str) -> Points {
    retailer.bytes().filter(u8::is_ascii_alphanumeric).count() as Points
}

/// Description length is counted in bytes, like every other position.
fn item_description_points(item: &Item) -> Points {
    if item.short_description.len() % 3 != 0 {
        return 0;
    }
    let price = parse_float_or_zero(&item.price);
    // `as` saturates on overflow and maps NaN to zero.
    (price * DESCRIPTION_PRICE_MULTIPLIER).ceil() as Points
}

fn total_cents(total: &str) -> i64 {
    parse_int_or_zero(last_two(total))
}

fn purchase_day(date: &str) -> i64 {
    parse_int_or_zero(last_two(date))
}

fn purchase_hour(time: &str) -> i64 {
    parse_int_or_zero(time.get(..2))
}

/// The last two bytes of `s`, if they exist and fall on a char boundary.
fn last_two(s: &str) -> Option<&str> {
    s.len().checked_sub(2).and_then(|start| s.get(start..))
}

fn parse_int_or_zero(s: Option<&str>) -> i64 {
    s.and_then(|s| s.parse().ok()).unwrap_or(0)
}

fn parse_float_or_zero(s: &str) -> f64 {
    s.parse().unwrap_or(0.0)
}
