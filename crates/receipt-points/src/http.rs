//! HTTP surface: JSON routes over the receipt service.
//!
//! | Method | Path                    | Body                 |
//! |--------|-------------------------|----------------------|
//! | POST   | `/receipts/process`     | receipt JSON         |
//! | GET    | `/receipts/{id}/points` |                      |
//! | GET    | `/health`               |                      |

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use receipt_points_core::{Points, ReceiptId};
use receipt_points_store::Store;
use serde::{Deserialize, Serialize};

use crate::error::ServiceError;
use crate::service::ReceiptService;

/// Client-facing description for any rejected submission.
pub const INVALID_RECEIPT: &str = "The receipt is invalid";
/// Client-facing description for an unknown id.
pub const RECEIPT_NOT_FOUND: &str = "No receipt found for that id";
const INTERNAL_ERROR: &str = "Internal server error";

/// Body returned by a successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdResponse {
    pub id: ReceiptId,
}

/// Body returned by a points query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: Points,
}

/// Body returned for every error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub description: String,
}

/// Body returned by the liveness check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub receipts: usize,
}

impl ServiceError {
    /// The HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Invalid(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn description(&self) -> &'static str {
        match self {
            ServiceError::Invalid(_) => INVALID_RECEIPT,
            ServiceError::NotFound(_) => RECEIPT_NOT_FOUND,
            ServiceError::Store(_) => INTERNAL_ERROR,
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::warn!(error = %self, "request rejected");
        }

        let body = ErrorResponse {
            description: self.description().to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Build the router for a service.
pub fn router<S>(service: ReceiptService<S>) -> Router
where
    S: Store + 'static,
{
    Router::new()
        .route("/receipts/process", post(process_receipt::<S>))
        .route("/receipts/{id}/points", get(receipt_points::<S>))
        .route("/health", get(health::<S>))
        .with_state(service)
}

/// The body is taken raw so that a decode failure gets the same response as
/// any other invalid receipt.
async fn process_receipt<S: Store + 'static>(
    State(service): State<ReceiptService<S>>,
    body: Bytes,
) -> Result<Json<IdResponse>, ServiceError> {
    let id = service.submit_json(&body).await?;
    Ok(Json(IdResponse { id }))
}

async fn receipt_points<S: Store + 'static>(
    State(service): State<ReceiptService<S>>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>, ServiceError> {
    let points = service.points(&ReceiptId::from(id)).await?;
    Ok(Json(PointsResponse { points }))
}

async fn health<S: Store + 'static>(
    State(service): State<ReceiptService<S>>,
) -> Result<Json<HealthResponse>, ServiceError> {
    let receipts = service.receipt_count().await?;
    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        receipts,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use receipt_points_core::ValidationError;
    use receipt_points_store::StoreError;

    async fn error_body(err: ServiceError) -> (StatusCode, ErrorResponse) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_store_error_is_internal() {
        let err = ServiceError::Store(StoreError::Poisoned);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let (status, body) = error_body(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.description, "Internal server error");
    }

    #[tokio::test]
    async fn test_invalid_is_bad_request() {
        let (status, body) = error_body(ServiceError::Invalid(ValidationError::EmptyBody)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.description, INVALID_RECEIPT);
    }

    #[tokio::test]
    async fn test_not_found_is_404() {
        let err = ServiceError::NotFound(ReceiptId::new("missing"));
        let (status, body) = error_body(err).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.description, RECEIPT_NOT_FOUND);
    }
}
