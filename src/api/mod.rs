//! HTTP API wiring (axum router + shared state).
//!
//! This folder is structured like:
//! - `model.rs`: request payloads and entry validation
//! - `products.rs` / `options.rs`: HTTP routes + handlers, one file per resource
//! - error responses come from the `IntoResponse` impl on [`crate::errors::Error`]

/// Request payloads and entry validation
pub mod model;
/// Product option routes and handlers
pub mod options;
/// Product routes and handlers
pub mod products;

use axum::extract::Extension;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use sea_orm::DatabaseConnection;
use serde_json::json;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::errors::Result;
use crate::repository::{ProductOptionRepository, ProductRepository};

/// Shared state available to all request handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Repository of products
    pub products: ProductRepository,
    /// Repository of product options
    pub options: ProductOptionRepository,
}

impl AppState {
    /// Builds the per-entity repositories over one shared connection.
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            products: ProductRepository::new(db.clone()),
            options: ProductOptionRepository::new(db),
        }
    }
}

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests).
pub fn build_router(db: DatabaseConnection) -> Router {
    let state = AppState::new(db);

    Router::new()
        .route("/health", get(health))
        .nest("/products", products::router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(Extension(state)),
        )
}

/// Liveness probe.
async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// Binds `bind_address` and serves the API until the process is stopped.
pub async fn serve(bind_address: &str, db: DatabaseConnection) -> Result<()> {
    let app = build_router(db);

    let listener = tokio::net::TcpListener::bind(bind_address).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
