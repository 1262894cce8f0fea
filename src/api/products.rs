//! Product routes and handlers.
//!
//! Handlers translate HTTP requests into repository calls and repository
//! results into status codes and JSON bodies; no business logic lives here.

use axum::extract::{Extension, Path, Query};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ColumnTrait, Set};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::api::model::NewProduct;
use crate::api::{AppState, options};
use crate::entities::{ProductColumn, product};
use crate::errors::{Error, Result};
use crate::repository::EntityQuery;

/// Routes for the `/products` resource, with option routes nested below
/// each product.
pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
        .nest("/:id/options", options::router())
}

/// Query parameters accepted by [`list_products`].
#[derive(Debug, Deserialize)]
pub struct ListProductsParams {
    /// When present, only products with exactly this name are returned
    pub name: Option<String>,
}

/// `GET /products` - lists all products, optionally filtered by exact name.
pub async fn list_products(
    Extension(state): Extension<AppState>,
    Query(params): Query<ListProductsParams>,
) -> Result<Response> {
    let items = match params.name {
        Some(name) => {
            state
                .products
                .list(EntityQuery::new().filter(ProductColumn::Name.eq(name)))
                .await?
        }
        None => state.products.list_all().await?,
    };

    Ok((StatusCode::OK, Json(json!({ "items": items }))).into_response())
}

/// `GET /products/{id}` - fetches a single product.
pub async fn get_product(
    Extension(state): Extension<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response> {
    match state.products.get_by_id(id).await? {
        Some(product) => Ok((StatusCode::OK, Json(product)).into_response()),
        None => Err(Error::NotFound {
            entity: "product",
            id,
        }),
    }
}

/// `POST /products` - validates and persists a new product.
pub async fn create_product(
    Extension(state): Extension<AppState>,
    Json(body): Json<NewProduct>,
) -> Result<Response> {
    body.validate()?;

    let now = chrono::Utc::now().naive_utc();
    let saved = state
        .products
        .add(product::ActiveModel {
            id: NotSet,
            name: Set(body.name.trim().to_string()),
            description: Set(body.description),
            price: Set(body.price),
            delivery_price: Set(body.delivery_price),
            created_at: Set(now),
            updated_at: Set(now),
        })
        .await?;

    Ok((StatusCode::CREATED, Json(saved)).into_response())
}

/// `PUT /products/{id}` - validates and replaces a product in full.
/// Replacing a product that does not exist is a 404.
pub async fn update_product(
    Extension(state): Extension<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<NewProduct>,
) -> Result<Response> {
    body.validate()?;

    let updated = state
        .products
        .update(product::ActiveModel {
            id: Set(id),
            name: Set(body.name.trim().to_string()),
            description: Set(body.description),
            price: Set(body.price),
            delivery_price: Set(body.delivery_price),
            created_at: NotSet,
            updated_at: Set(chrono::Utc::now().naive_utc()),
        })
        .await?;

    Ok((StatusCode::OK, Json(updated)).into_response())
}

/// `DELETE /products/{id}` - removes a product.
///
/// The storage layer cascades the delete to the product's options. Deleting
/// a product that is already gone is a no-op.
pub async fn delete_product(
    Extension(state): Extension<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response> {
    if let Some(product) = state.products.get_by_id(id).await? {
        state.products.delete(product).await?;
    }
    Ok(StatusCode::ACCEPTED.into_response())
}
