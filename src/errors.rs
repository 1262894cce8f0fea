//! Unified error types and result handling.
//!
//! The repository layer defines no error kinds of its own: persistence
//! failures surface verbatim inside [`Error::Database`], and absence is a
//! value (`None` or an empty list), never an error. Validation and
//! configuration problems get their own variants so the HTTP layer can map
//! each to the right status code.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use sea_orm::DbErr;
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: Uuid },

    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Shorthand for a validation failure with a formatted message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// The HTTP status and machine-readable code this error maps to.
    ///
    /// `RecordNotUpdated` is what the ORM returns when an update matches no
    /// row, so a full-record replacement of a missing identity surfaces as
    /// 404 rather than 500.
    #[must_use]
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::Validation { .. } => (StatusCode::BAD_REQUEST, "validation_error"),
            Self::NotFound { .. } => (StatusCode::NOT_FOUND, "not_found"),
            Self::Database(DbErr::RecordNotUpdated) => (StatusCode::NOT_FOUND, "not_found"),
            Self::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, "database_error"),
            Self::Config { .. } | Self::Io(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error")
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let (status, code) = self.status_and_code();
        (
            status,
            axum::Json(json!({
                "error": code,
                "message": self.to_string(),
            })),
        )
            .into_response()
    }
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let err = Error::validation("Name is required");
        assert_eq!(err.status_and_code().0, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let err = Error::NotFound {
            entity: "product",
            id: Uuid::new_v4(),
        };
        assert_eq!(err.status_and_code().0, StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_record_not_updated_maps_to_404() {
        let err = Error::Database(DbErr::RecordNotUpdated);
        assert_eq!(err.status_and_code().0, StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_other_database_errors_map_to_500() {
        let err = Error::Database(DbErr::Custom("connection lost".to_string()));
        assert_eq!(err.status_and_code().0, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
