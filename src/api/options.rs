//! Product option routes and handlers.
//!
//! All routes here are nested under `/products/{id}/options`; the owning
//! product id always comes from the path.

use axum::extract::{Extension, Path};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ColumnTrait, Condition, Set};
use serde_json::json;
use uuid::Uuid;

use crate::api::AppState;
use crate::api::model::NewProductOption;
use crate::entities::{ProductOptionColumn, product_option};
use crate::errors::{Error, Result};
use crate::repository::EntityQuery;

/// Routes for the options of one product.
pub fn router() -> Router {
    Router::new()
        .route("/", get(list_options).post(create_option))
        .route(
            "/:option_id",
            get(get_option).put(update_option).delete(delete_option),
        )
}

/// `GET /products/{id}/options` - lists the options of a product.
/// A product without options (or an unknown product) yields an empty list.
pub async fn list_options(
    Extension(state): Extension<AppState>,
    Path(product_id): Path<Uuid>,
) -> Result<Response> {
    let items = state
        .options
        .list(EntityQuery::new().filter(ProductOptionColumn::ProductId.eq(product_id)))
        .await?;

    Ok((StatusCode::OK, Json(json!({ "items": items }))).into_response())
}

/// `GET /products/{id}/options/{option_id}` - fetches one option of a
/// product. The option must belong to the product in the path.
pub async fn get_option(
    Extension(state): Extension<AppState>,
    Path((product_id, option_id)): Path<(Uuid, Uuid)>,
) -> Result<Response> {
    let mut matches = state
        .options
        .list(
            EntityQuery::new().filter(
                Condition::all()
                    .add(ProductOptionColumn::Id.eq(option_id))
                    .add(ProductOptionColumn::ProductId.eq(product_id)),
            ),
        )
        .await?;

    match matches.pop() {
        Some(option) => Ok((StatusCode::OK, Json(option)).into_response()),
        None => Err(Error::NotFound {
            entity: "product option",
            id: option_id,
        }),
    }
}

/// `POST /products/{id}/options` - validates and persists a new option for
/// an existing product.
pub async fn create_option(
    Extension(state): Extension<AppState>,
    Path(product_id): Path<Uuid>,
    Json(body): Json<NewProductOption>,
) -> Result<Response> {
    body.validate()?;

    if state.products.get_by_id(product_id).await?.is_none() {
        return Err(Error::NotFound {
            entity: "product",
            id: product_id,
        });
    }

    let now = chrono::Utc::now().naive_utc();
    let saved = state
        .options
        .add(product_option::ActiveModel {
            id: NotSet,
            product_id: Set(product_id),
            name: Set(body.name.trim().to_string()),
            description: Set(body.description),
            created_at: Set(now),
            updated_at: Set(now),
        })
        .await?;

    Ok((StatusCode::CREATED, Json(saved)).into_response())
}

/// `PUT /products/{id}/options/{option_id}` - validates and replaces an
/// option in full, re-attaching it to the product in the path.
/// Replacing an option that does not exist is a 404.
pub async fn update_option(
    Extension(state): Extension<AppState>,
    Path((product_id, option_id)): Path<(Uuid, Uuid)>,
    Json(body): Json<NewProductOption>,
) -> Result<Response> {
    body.validate()?;

    let updated = state
        .options
        .update(product_option::ActiveModel {
            id: Set(option_id),
            product_id: Set(product_id),
            name: Set(body.name.trim().to_string()),
            description: Set(body.description),
            created_at: NotSet,
            updated_at: Set(chrono::Utc::now().naive_utc()),
        })
        .await?;

    Ok((StatusCode::OK, Json(updated)).into_response())
}

/// `DELETE /products/{id}/options/{option_id}` - removes an option.
/// Deleting an option that is already gone is a no-op.
pub async fn delete_option(
    Extension(state): Extension<AppState>,
    Path((_product_id, option_id)): Path<(Uuid, Uuid)>,
) -> Result<Response> {
    if let Some(option) = state.options.get_by_id(option_id).await? {
        state.options.delete(option).await?;
    }
    Ok(StatusCode::ACCEPTED.into_response())
}
