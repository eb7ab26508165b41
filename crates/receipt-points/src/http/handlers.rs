//! Receipt endpoints

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use receipt_points_core::{Points, Receipt, ReceiptId};
use receipt_points_store::Store;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::{ApiError, ApiResult};
use crate::processor::ReceiptProcessor;

/// Response to `POST /receipts/process`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProcessResponse {
    pub id: ReceiptId,
}

/// Response to `GET /receipts/:id/points`.
#[derive(Debug, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: Points,
}

/// Submit a receipt for processing
pub async fn process_receipt<S: Store + 'static>(
    State(processor): State<Arc<ReceiptProcessor<S>>>,
    payload: Result<Json<Receipt>, JsonRejection>,
) -> ApiResult<Json<ProcessResponse>> {
    let Json(receipt) = payload.map_err(|rejection| {
        debug!(error = %rejection.body_text(), "rejected receipt body");
        ApiError::MalformedBody(rejection.body_text())
    })?;

    let id = processor.submit(&receipt).await?;
    Ok(Json(ProcessResponse { id }))
}

/// Get the points awarded to a receipt
pub async fn get_points<S: Store + 'static>(
    State(processor): State<Arc<ReceiptProcessor<S>>>,
    Path(id): Path<String>,
) -> ApiResult<Json<PointsResponse>> {
    let points = processor.get_points(&id).await?;
    Ok(Json(PointsResponse { points }))
}
