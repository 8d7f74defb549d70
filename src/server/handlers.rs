//! HTTP route handlers.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;

use crate::core::estimator::{estimate, parse_estimate_input};
use crate::core::validator::parse_record;
use crate::domain::model::{Prediction, StatusResponse};
use crate::server::AppState;
use crate::utils::error::{Result, ServiceError};

/// Bodies are parsed as JSON whatever the `Content-Type` says.
fn parse_body(body: &Bytes) -> Result<Value> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::warn!("Rejected request body: {}", e);
        ServiceError::InvalidData
    })
}

/// GET / - Liveness check.
pub async fn root() -> &'static str {
    "OK"
}

/// POST /append - Validate a record and append it to the CSV file.
pub async fn append(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<(StatusCode, Json<StatusResponse>)> {
    let payload = parse_body(&body)?;
    let record = parse_record(&payload).ok_or_else(|| {
        tracing::warn!("Rejected record: {}", payload);
        ServiceError::InvalidData
    })?;

    state.store.append(&record).await?;
    tracing::info!(
        age = record.age,
        weight = record.weight,
        height_cm = record.height_cm,
        "Record appended"
    );

    Ok((StatusCode::CREATED, Json(StatusResponse::ok())))
}

/// POST /predict - Placeholder estimate from age, weight and height.
pub async fn predict(body: Bytes) -> Result<Json<Prediction>> {
    let payload = parse_body(&body)?;
    let input = parse_estimate_input(&payload).ok_or_else(|| {
        tracing::warn!("Rejected prediction input: {}", payload);
        ServiceError::InvalidData
    })?;
    let prediction = estimate(&input).ok_or(ServiceError::InvalidData)?;

    tracing::debug!("Prediction for {:?}: {}", input, prediction);
    Ok(Json(Prediction { prediction }))
}
