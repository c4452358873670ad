//! Transaction endpoints - JSON API
//!
//! Listing returns most-recent-first; detail, update, and delete address the
//! as-parsed (file order) index. Write handlers take the write half of the
//! ledger lock, serializing the parse-edit-write sequence.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use ledgerweb_core::{Transaction, TransactionRequest};
use serde_json::{json, Value};
use std::collections::HashMap;

use crate::error::ApiError;
use crate::AppState;

/// `GET /api/transactions?limit=N`
pub async fn list_transactions(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Vec<Transaction>>, ApiError> {
    // absent or unparseable limit means no truncation
    let limit = params
        .get("limit")
        .and_then(|value| value.parse().ok())
        .unwrap_or(0);

    let ledger = state.ledger.read().await;
    Ok(Json(ledger.recent_transactions(limit).await?))
}

/// `GET /api/transactions/{index}`
pub async fn get_transaction(
    State(state): State<AppState>,
    Path(index): Path<i64>,
) -> Result<Json<Transaction>, ApiError> {
    let ledger = state.ledger.read().await;
    Ok(Json(ledger.transaction(index).await?))
}

/// `POST /api/transactions`
pub async fn create_transaction(
    State(state): State<AppState>,
    body: String,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let request = parse_body(&body)?;
    let ledger = state.ledger.write().await;
    ledger.add_transaction(&request).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Transaction added successfully" })),
    ))
}

/// `PUT /api/transactions/{index}`
pub async fn update_transaction(
    State(state): State<AppState>,
    Path(index): Path<i64>,
    body: String,
) -> Result<Json<Value>, ApiError> {
    let request = parse_body(&body)?;
    let ledger = state.ledger.write().await;
    ledger.update_transaction(index, &request).await?;
    Ok(Json(json!({ "message": "Transaction updated successfully" })))
}

/// `DELETE /api/transactions/{index}`
pub async fn delete_transaction(
    State(state): State<AppState>,
    Path(index): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let ledger = state.ledger.write().await;
    ledger.delete_transaction(index).await?;
    Ok(Json(json!({ "message": "Transaction deleted successfully" })))
}

/// Decode a write payload, rejecting malformed JSON before any file access.
fn parse_body(body: &str) -> Result<TransactionRequest, ApiError> {
    serde_json::from_str(body).map_err(|err| ApiError::BadRequest {
        message: format!("invalid JSON: {err}"),
    })
}
