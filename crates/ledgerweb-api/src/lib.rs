//! HTTP surface for the ledger API
//!
//! Thin plumbing in front of `ledgerweb-core`: route registration, CORS,
//! and the error-to-status dispatch. Handlers share one [`Ledger`] behind a
//! read/write lock, so overlapping writers are serialized within the
//! process.
//!
//! Routes are organized into modules:
//! - routes::transactions: list, detail, create, update, delete
//! - routes::reports: summary, accounts, balance, register, budget, cleared

pub mod error;
pub mod routes;

use axum::http::{header, Method, StatusCode};
use axum::routing::{get, options};
use axum::Router;
use ledgerweb_config::Config;
use ledgerweb_core::Ledger;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};

pub use error::ApiError;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub ledger: Arc<RwLock<Ledger>>,
    pub config: Config,
}

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    use routes::reports::{accounts, balance, budget, cleared, register, summary};
    use routes::transactions::{
        create_transaction, delete_transaction, get_transaction, list_transactions,
        update_transaction,
    };

    Router::new()
        .route("/api/summary", get(summary).options(preflight))
        .route(
            "/api/transactions",
            get(list_transactions)
                .post(create_transaction)
                .options(preflight),
        )
        .route(
            "/api/transactions/:index",
            get(get_transaction)
                .put(update_transaction)
                .delete(delete_transaction)
                .options(preflight),
        )
        .route("/api/accounts", get(accounts).options(preflight))
        .route("/api/balance", get(balance).options(preflight))
        .route("/api/register", get(register).options(preflight))
        .route("/api/budget", get(budget).options(preflight))
        .route("/api/cleared", get(cleared).options(preflight))
        .route("/api/*path", options(preflight))
        .layer(cors_layer())
        .with_state(state)
}

/// Empty success for OPTIONS requests; the CORS layer attaches the headers.
async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// Allow any origin with the methods and headers the frontend uses.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::HeaderName::from_static("x-requested-with"),
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::AUTHORIZATION,
        ])
}

/// Start the HTTP server
///
/// Binds to the configured address and serves requests until the process
/// exits.
pub async fn start_server(config: Config, ledger: Arc<RwLock<Ledger>>) {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState { ledger, config };
    let router = create_router(state);

    let listener = match TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err) => {
            log::error!("failed to bind {}: {}", addr, err);
            return;
        }
    };
    log::info!("listening on http://{}", addr);

    if let Err(err) = axum::serve(listener, router).await {
        log::error!("server error: {}", err);
    }
}

// ==================== Tests ====================
