//! Product option entity - Represents a variant of a product.
//!
//! Options are things like colour or storage size. Every option references
//! its owning product; the foreign key cascades on delete so removing a
//! product removes its options in the same storage-level operation.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Product option database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "product_options")]
pub struct Model {
    /// Unique identifier for the option
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// ID of the product this option belongs to
    pub product_id: Uuid,
    /// Name of the option (e.g., "White", "64GB")
    pub name: String,
    /// Optional longer description
    pub description: Option<String>,
    /// When the option was created
    pub created_at: DateTime,
    /// When the option was last modified
    pub updated_at: DateTime,
}

/// Defines relationships between `ProductOption` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each option belongs to one product
    #[sea_orm(
        belongs_to = "super::product::Entity",
        from = "Column::ProductId",
        to = "super::product::Column::Id",
        on_delete = "Cascade"
    )]
    Product,
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
