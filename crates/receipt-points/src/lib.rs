//! # Receipt Points
//!
//! An HTTP service that accepts purchase receipts and scores them for
//! loyalty points.
//!
//! ## Overview
//!
//! - **Submit**: `POST /receipts/process` validates a receipt, stores it
//!   under a fresh id and returns `{"id": ...}`
//! - **Points**: `GET /receipts/{id}/points` scores the stored receipt and
//!   returns `{"points": ...}`
//!
//! Scoring is recomputed on every query; only the receipt is stored.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use receipt_points::{serve, ReceiptService, ServerConfig};
//! use receipt_points::store::MemoryStore;
//!
//! async fn example() -> anyhow::Result<()> {
//!     let service = ReceiptService::new(MemoryStore::new());
//!     serve(ServerConfig::default(), service).await
//! }
//! ```
//!
//! ## Re-exports
//!
//! - `receipt_points::core` - Receipt model, validation, scoring
//! - `receipt_points::store` - Storage abstraction

pub mod config;
pub mod error;
pub mod http;
pub mod logging;
pub mod service;

pub use receipt_points_core as core;
pub use receipt_points_store as store;

pub use config::{CliArgs, LogFormat, ServerConfig};
pub use error::{Result, ServiceError};
pub use http::router;
pub use logging::init_logging;
pub use service::ReceiptService;

pub use receipt_points_core::{Item, Points, Receipt, ReceiptId, ScoreBreakdown};

use receipt_points_store::Store;
use tokio::net::TcpListener;

/// Bind the configured address and serve until Ctrl+C or SIGTERM.
pub async fn serve<S>(config: ServerConfig, service: ReceiptService<S>) -> anyhow::Result<()>
where
    S: Store + 'static,
{
    let listener = TcpListener::bind(config.bind).await?;
    let actual_addr = listener.local_addr()?;
    tracing::info!(bind = %actual_addr, "listening");

    axum::serve(listener, router(service))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("received SIGINT (Ctrl+C), shutting down");
        },
        _ = terminate => {
            tracing::info!("received SIGTERM, shutting down");
        },
    }
}
