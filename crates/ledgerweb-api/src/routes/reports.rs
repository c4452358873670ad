//! Report endpoints backed by the external accounting tool
//!
//! Thin plumbing: run the tool, split its output into rows, return JSON. A
//! failing tool produces an empty report, never an error response.

use axum::extract::State;
use axum::Json;
use ledgerweb_core::{AccountRow, BudgetRow, ClearedRow, RegisterRow};

use crate::AppState;

/// `GET /api/summary` - assets and liabilities overview
pub async fn summary(State(state): State<AppState>) -> Json<Vec<AccountRow>> {
    let ledger = state.ledger.read().await;
    Json(ledger.account_summary().await)
}

/// `GET /api/accounts` - account names for autocomplete
pub async fn accounts(State(state): State<AppState>) -> Json<Vec<String>> {
    let ledger = state.ledger.read().await;
    Json(ledger.accounts().await)
}

/// `GET /api/balance`
pub async fn balance(State(state): State<AppState>) -> Json<Vec<AccountRow>> {
    let ledger = state.ledger.read().await;
    Json(ledger.balance_report().await)
}

/// `GET /api/register`
pub async fn register(State(state): State<AppState>) -> Json<Vec<RegisterRow>> {
    let ledger = state.ledger.read().await;
    Json(ledger.register_report().await)
}

/// `GET /api/budget`
pub async fn budget(State(state): State<AppState>) -> Json<Vec<BudgetRow>> {
    let ledger = state.ledger.read().await;
    Json(ledger.budget_report().await)
}

/// `GET /api/cleared`
pub async fn cleared(State(state): State<AppState>) -> Json<Vec<ClearedRow>> {
    let ledger = state.ledger.read().await;
    Json(ledger.cleared_report().await)
}
