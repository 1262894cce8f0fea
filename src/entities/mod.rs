//! Entity module - Contains all `SeaORM` entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod product;
pub mod product_option;

// Re-export specific types to avoid conflicts
pub use product::{Column as ProductColumn, Entity as Product, Model as ProductModel};
pub use product_option::{
    Column as ProductOptionColumn, Entity as ProductOption, Model as ProductOptionModel,
};
