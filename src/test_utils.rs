//! Shared test utilities for `ProductApi`.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults.

use crate::{
    config,
    entities::{product, product_option},
    errors::Result,
};
use sea_orm::{ActiveValue::NotSet, DatabaseConnection, Set};
use uuid::Uuid;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    config::database::create_tables(&db).await?;
    Ok(db)
}

/// Builds a product active model with an unset id, ready for
/// `Repository::add`.
pub fn new_product(
    name: &str,
    description: Option<&str>,
    price: f64,
    delivery_price: f64,
) -> product::ActiveModel {
    let now = chrono::Utc::now().naive_utc();
    product::ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
        description: Set(description.map(ToString::to_string)),
        price: Set(price),
        delivery_price: Set(delivery_price),
        created_at: Set(now),
        updated_at: Set(now),
    }
}

/// Builds a product option active model owned by `product_id`, with an
/// unset id.
pub fn new_option(
    product_id: Uuid,
    name: &str,
    description: Option<&str>,
) -> product_option::ActiveModel {
    let now = chrono::Utc::now().naive_utc();
    product_option::ActiveModel {
        id: NotSet,
        product_id: Set(product_id),
        name: Set(name.to_string()),
        description: Set(description.map(ToString::to_string)),
        created_at: Set(now),
        updated_at: Set(now),
    }
}
