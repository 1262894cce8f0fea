//! Product entity - Represents a sellable product in the catalog.
//!
//! Each product carries its own price and a delivery price. Options that
//! belong to a product live in the `product_options` table and are removed
//! by the database when their parent product is deleted.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Product database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    /// Unique identifier for the product
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Name of the product (e.g., "Samsung Galaxy S7")
    pub name: String,
    /// Optional longer description
    pub description: Option<String>,
    /// Price per unit
    pub price: f64,
    /// Price charged for delivery
    pub delivery_price: f64,
    /// When the product was created
    pub created_at: DateTime,
    /// When the product was last modified
    pub updated_at: DateTime,
}

/// Defines relationships between Product and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each product owns zero or more options
    #[sea_orm(has_many = "super::product_option::Entity")]
    ProductOption,
}

impl Related<super::product_option::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductOption.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
