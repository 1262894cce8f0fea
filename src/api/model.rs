//! Request payloads for the HTTP API.
//!
//! Entry validation lives here, at the boundary: nothing below this layer
//! (repository, entities) re-checks field lengths or ranges. Payloads are
//! full-record shapes, used verbatim for both create and replace.

use crate::errors::{Error, Result};
use serde::Deserialize;

/// Maximum accepted length for names.
const NAME_MAX_LEN: usize = 100;
/// Maximum accepted length for descriptions.
const DESCRIPTION_MAX_LEN: usize = 500;

/// Payload for creating or replacing a product.
#[derive(Debug, Deserialize)]
pub struct NewProduct {
    /// Product name, required, 1-100 characters
    pub name: String,
    /// Optional description, at most 500 characters
    pub description: Option<String>,
    /// Price per unit, must be greater than zero
    pub price: f64,
    /// Delivery price, must be greater than zero
    pub delivery_price: f64,
}

impl NewProduct {
    /// Checks all field constraints, reporting the first violation.
    pub fn validate(&self) -> Result<()> {
        validate_name(&self.name)?;
        validate_description(self.description.as_deref())?;
        validate_price("price", self.price)?;
        validate_price("delivery_price", self.delivery_price)
    }
}

/// Payload for creating or replacing a product option.
#[derive(Debug, Deserialize)]
pub struct NewProductOption {
    /// Option name, required, 1-100 characters
    pub name: String,
    /// Optional description, at most 500 characters
    pub description: Option<String>,
}

impl NewProductOption {
    /// Checks all field constraints, reporting the first violation.
    pub fn validate(&self) -> Result<()> {
        validate_name(&self.name)?;
        validate_description(self.description.as_deref())
    }
}

fn validate_name(name: &str) -> Result<()> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(Error::validation("Name is required"));
    }
    if trimmed.chars().count() > NAME_MAX_LEN {
        return Err(Error::validation(format!(
            "Name must be at most {NAME_MAX_LEN} characters"
        )));
    }
    Ok(())
}

fn validate_description(description: Option<&str>) -> Result<()> {
    if let Some(description) = description {
        if description.chars().count() > DESCRIPTION_MAX_LEN {
            return Err(Error::validation(format!(
                "Description must be at most {DESCRIPTION_MAX_LEN} characters"
            )));
        }
    }
    Ok(())
}

fn validate_price(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(Error::validation(format!(
            "Please enter a {field} bigger than 0"
        )));
    }
    Ok(())
}
