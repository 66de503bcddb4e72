//! HTTP API over the reservation store.
//!
//! | Method | Path | Success |
//! |---|---|---|
//! | GET | `/api/customers` | 200 |
//! | POST | `/api/customers` | 201 |
//! | GET | `/api/restaurants` | 200 |
//! | POST | `/api/restaurants` | 201 |
//! | GET | `/api/reservations` | 200 |
//! | POST | `/api/customers/{customer_id}/reservations` | 201 |
//! | DELETE | `/api/customers/{customer_id}/reservations/{id}` | 204 |

pub mod error;
pub mod extract;
pub mod handlers;
pub mod state;

use anyhow::Context;
use axum::routing::{delete, get, post};
use axum::Router;
use tokio::net::TcpListener;

pub use error::ApiError;
pub use state::AppState;

/// Builds the API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/customers",
            get(handlers::list_customers).post(handlers::create_customer),
        )
        .route(
            "/api/restaurants",
            get(handlers::list_restaurants).post(handlers::create_restaurant),
        )
        .route("/api/reservations", get(handlers::list_reservations))
        .route(
            "/api/customers/{customer_id}/reservations",
            post(handlers::create_reservation),
        )
        .route(
            "/api/customers/{customer_id}/reservations/{id}",
            delete(handlers::delete_reservation),
        )
        .with_state(state)
}

/// Binds the listen socket.
pub async fn bind(host: &str, port: u16) -> anyhow::Result<TcpListener> {
    TcpListener::bind((host, port))
        .await
        .with_context(|| format!("failed to bind {host}:{port}"))
}

/// Serves the API until Ctrl-C.
pub async fn run(listener: TcpListener, state: AppState) -> anyhow::Result<()> {
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server stopped with an error")
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("failed to listen for shutdown signal: {e}");
        // Without a signal handler, keep serving.
        std::future::pending::<()>().await;
    }
    log::info!("shutting down");
}
