//! Unified error handling
//!
//! Every failure a handler can produce maps onto one [`AppError`] variant,
//! and every variant maps onto exactly one HTTP status:
//!
//! | Variant | Status |
//! |------|------|
//! | `Validation` | 422 |
//! | `InvalidArgument` | 400 |
//! | `InsufficientStock` | 400 |
//! | `NotFound` | 404 |
//! | `Unavailable` | 500 |
//! | `Database` | 500 |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::db::repository::RepoError;

/// Result type for API handlers
pub type AppResult<T> = Result<T, AppError>;

/// Application error enum
#[derive(Debug, Error)]
pub enum AppError {
    /// Payload failed schema validation (shape, constraints, email format)
    #[error("{0}")]
    Validation(String),

    /// Malformed identifier or otherwise unusable argument
    #[error("{0}")]
    InvalidArgument(String),

    /// Requested record does not exist
    #[error("{0}")]
    NotFound(String),

    /// Ordered quantity exceeds the product's stock_count
    #[error("Insufficient stock for {0}")]
    InsufficientStock(String),

    /// The store is not configured
    #[error("{0}")]
    Unavailable(String),

    /// Store I/O failure
    #[error("Database error: {0}")]
    Database(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: &'static str,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            AppError::Validation(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "validation_error", msg.clone())
            }
            AppError::InvalidArgument(msg) => {
                (StatusCode::BAD_REQUEST, "invalid_argument", msg.clone())
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg.clone()),
            AppError::InsufficientStock(_) => {
                (StatusCode::BAD_REQUEST, "insufficient_stock", self.to_string())
            }
            AppError::Unavailable(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "service_unavailable",
                msg.clone(),
            ),
            AppError::Database(msg) => {
                // Log the detail but do not expose it to the caller
                error!(target: "database", error = %msg, "Database error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "database_error",
                    "Database error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_type,
            message,
        });

        (status, body).into_response()
    }
}

impl From<RepoError> for AppError {
    fn from(e: RepoError) -> Self {
        match e {
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}

// ========== Helper constructors ==========

impl AppError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create a not found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create an insufficient stock error naming the product
    pub fn insufficient_stock(title: impl Into<String>) -> Self {
        Self::InsufficientStock(title.into())
    }

    /// Create a service unavailable error
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    /// Create a database error
    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_stock_names_the_product() {
        let err = AppError::insufficient_stock("Sunset Barrel Tee");
        assert_eq!(err.to_string(), "Insufficient stock for Sunset Barrel Tee");
    }

    #[test]
    fn repo_errors_map_to_database() {
        let err: AppError = RepoError::Database("boom".into()).into();
        assert!(matches!(err, AppError::Database(_)));
    }
}
