//! Database connection and table creation using `SeaORM`.
//!
//! The schema is generated straight from the entity definitions with
//! `Schema::create_table_from_entity`, so the tables (including the
//! cascading foreign key from options to products) always match the Rust
//! structs without hand-written SQL.

use crate::entities::{Product, ProductOption};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

/// Establishes a connection to the database at `database_url`.
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    Database::connect(database_url).await.map_err(Into::into)
}

/// Creates all necessary database tables from the entity definitions.
///
/// Tables are created with `IF NOT EXISTS` so this is safe to run on every
/// startup against an existing database.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut product_table = schema.create_table_from_entity(Product);
    let mut option_table = schema.create_table_from_entity(ProductOption);

    db.execute(builder.build(product_table.if_not_exists()))
        .await?;
    db.execute(builder.build(option_table.if_not_exists()))
        .await?;

    Ok(())
}
