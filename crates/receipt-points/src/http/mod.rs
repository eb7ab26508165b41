//! HTTP surface: routing, handlers and error mapping.

pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use receipt_points_store::Store;
use tower_http::trace::TraceLayer;

use crate::processor::ReceiptProcessor;

pub use error::{ApiError, ApiResult, ErrorResponse};
pub use handlers::{PointsResponse, ProcessResponse};

/// Create the API router.
///
/// Other methods on these paths answer `405 Method Not Allowed`.
pub fn create_router<S: Store + 'static>(processor: Arc<ReceiptProcessor<S>>) -> Router {
    Router::new()
        .route("/receipts/process", post(handlers::process_receipt::<S>))
        .route("/receipts/:id/points", get(handlers::get_points::<S>))
        .layer(TraceLayer::new_for_http())
        .with_state(processor)
}
