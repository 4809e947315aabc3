//! Unified error handling for the API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::db::RepositoryError;
use crate::documents::DocumentError;
use crate::kv::KvError;

/// Application-level error type for the API.
#[derive(Debug, Error)]
pub enum AppError {
    /// Relational store operation failed.
    #[error("database error: {0}")]
    Database(RepositoryError),

    /// Document store operation failed.
    #[error("document store error: {0}")]
    Documents(DocumentError),

    /// Key-value store operation failed.
    #[error("key-value store error: {0}")]
    Kv(KvError),

    /// Resource not found, or soft-deleted. Callers cannot tell the two
    /// apart; that is the contract, not an accident.
    #[error("not found: {0}")]
    NotFound(String),

    /// Duplicate unique field (e.g. user email). Surfaced as 400.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Bad request from the client (malformed id, invalid email, ...).
    #[error("bad request: {0}")]
    BadRequest(String),
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => Self::NotFound("user not found".to_owned()),
            RepositoryError::Conflict(message) => Self::Conflict(message),
            other => Self::Database(other),
        }
    }
}

impl From<DocumentError> for AppError {
    fn from(err: DocumentError) -> Self {
        match err {
            DocumentError::NotFound => Self::NotFound("review not found".to_owned()),
            DocumentError::MalformedId(id) => Self::BadRequest(format!("invalid review id: {id}")),
            other => Self::Documents(other),
        }
    }
}

impl From<KvError> for AppError {
    fn from(err: KvError) -> Self {
        match err {
            KvError::NotFound => Self::NotFound("cart not found".to_owned()),
            other => Self::Kv(other),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log server errors with Sentry
        if matches!(self, Self::Database(_) | Self::Documents(_) | Self::Kv(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "API request error"
            );
        }

        let status = match &self {
            Self::Database(_) | Self::Documents(_) | Self::Kv(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            // Conflict renders as 400, not 409; deployed clients match on it.
            Self::Conflict(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Database(_) | Self::Documents(_) | Self::Kv(_) => {
                "internal server error".to_owned()
            }
            _ => self.to_string(),
        };

        (status, message).into_response()
    }
}
