//! Golden scoring vectors.
//!
//! Each vector is a receipt body exactly as a client would submit it, with
//! the points it must score. The set covers every rule and the lenient
//! parsing of malformed fields.

use receipt_points_core::{decode_and_validate, score, Points, ValidationError};

/// A golden test vector.
#[derive(Debug, Clone)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Receipt JSON body.
    pub body: &'static str,
    /// Expected points.
    pub expected_points: Points,
}

/// A vector whose body was rejected or whose score did not match.
#[derive(Debug)]
pub struct VectorFailure {
    pub name: &'static str,
    pub expected: Points,
    pub outcome: Result<Points, ValidationError>,
}

/// Get all golden test vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "Target with five items",
            body: r#"{
                "retailer": "Target",
                "purchaseDate": "2022-01-01",
                "purchaseTime": "13:01",
                "items": [
                    {"shortDescription": "Mountain Dew 12PK", "price": "6.49"},
                    {"shortDescription": "Emils Cheese Pizza", "price": "12.25"},
                    {"shortDescription": "Knorr Creamy Chicken", "price": "1.26"},
                    {"shortDescription": "Doritos Nacho Cheese", "price": "3.35"},
                    {"shortDescription": "Klarbrunn 12-PK 12 FL OZ", "price": "12.00"}
                ],
                "total": "35.35"
            }"#,
            // 6 retailer + 10 pairs + 3 + 3 descriptions + 6 odd day
            expected_points: 28,
        },
        GoldenVector {
            name: "Corner market round dollar in the afternoon",
            body: r#"{
                "retailer": "M&M Corner Market",
                "purchaseDate": "2022-03-20",
                "purchaseTime": "14:33",
                "items": [
                    {"shortDescription": "Gatorade", "price": "2.25"},
                    {"shortDescription": "Gatorade", "price": "2.25"},
                    {"shortDescription": "Gatorade", "price": "2.25"},
                    {"shortDescription": "Gatorade", "price": "2.25"}
                ],
                "total": "9.00"
            }"#,
            // 14 retailer + 50 + 25 total + 10 pairs + 10 afternoon
            expected_points: 109,
        },
        GoldenVector {
            name: "Walgreens morning with two items",
            body: r#"{
                "retailer": "Walgreens",
                "purchaseDate": "2022-01-02",
                "purchaseTime": "08:13",
                "items": [
                    {"shortDescription": "Pepsi - 12-oz", "price": "1.25"},
                    {"shortDescription": "Dasani", "price": "1.40"}
                ],
                "total": "2.65"
            }"#,
            // 9 retailer + 5 pairs + 1 description
            expected_points: 15,
        },
        GoldenVector {
            name: "Non-numeric cents count as zero",
            body: r#"{
                "retailer": "Target",
                "purchaseDate": "2022-01-01",
                "purchaseTime": "13:01",
                "items": [
                    {"shortDescription": "Mountain Dew 12PK", "price": "6.49"},
                    {"shortDescription": "Emils Cheese Pizza", "price": "12.25"},
                    {"shortDescription": "Knorr Creamy Chicken", "price": "1.26"},
                    {"shortDescription": "Doritos Nacho Cheese", "price": "3.35"},
                    {"shortDescription": "Klarbrunn 12-PK 12 FL OZ", "price": "12.00"}
                ],
                "total": "abc0"
            }"#,
            expected_points: 28 + 75,
        },
        GoldenVector {
            name: "No items",
            body: r#"{
                "retailer": "Target",
                "purchaseDate": "2022-01-02",
                "purchaseTime": "15:00",
                "items": [],
                "total": "1.00"
            }"#,
            // 6 retailer + 75 total + 10 afternoon
            expected_points: 91,
        },
        GoldenVector {
            name: "Single-character fields",
            body: r#"{
                "retailer": "A",
                "purchaseDate": "1",
                "purchaseTime": "9",
                "total": "5"
            }"#,
            // 1 retailer + 75 total; day and hour are unreadable
            expected_points: 76,
        },
        GoldenVector {
            name: "Punctuation-only retailer",
            body: r#"{
                "retailer": "- & -",
                "purchaseDate": "2022-12-31",
                "purchaseTime": "14:00",
                "items": [{"shortDescription": "abc", "price": "0.01"}],
                "total": "0.01"
            }"#,
            // 6 odd day + 10 afternoon + 1 description
            expected_points: 17,
        },
    ]
}

/// Decode, validate and score one vector.
pub fn score_vector(vector: &GoldenVector) -> Result<Points, ValidationError> {
    let receipt = decode_and_validate(vector.body.as_bytes())?;
    Ok(score(&receipt))
}

/// Check every vector, returning the ones that did not score as expected.
pub fn verify_all_vectors() -> Vec<VectorFailure> {
    all_vectors()
        .into_iter()
        .filter_map(|vector| {
            let outcome = score_vector(&vector);
            match outcome {
                Ok(points) if points == vector.expected_points => None,
                outcome => Some(VectorFailure {
                    name: vector.name,
                    expected: vector.expected_points,
                    outcome,
                }),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_names_unique() {
        let vectors = all_vectors();
        let mut names: Vec<_> = vectors.iter().map(|v| v.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), vectors.len());
    }

    #[test]
    fn test_all_vectors_pass() {
        let failures = verify_all_vectors();
        assert!(failures.is_empty(), "failing vectors: {:?}", failures);
    }
}
