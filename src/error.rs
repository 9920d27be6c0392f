//! # Error Handling
//!
//! Unified error handling for the Customer Directory service. Handlers
//! return [`AppError`], which renders as a plain-text body with the matching
//! status code; this is an HTML application, so clients never receive
//! structured error payloads. Full error detail goes to the logs only.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Errors surfaced by the repository layer.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("{0} not found")]
    NotFound(String),
    #[error("database error: {source}")]
    Database {
        #[from]
        source: sea_orm::DbErr,
    },
}

impl RepositoryError {
    /// Wrap a SeaORM error as a repository database error.
    pub fn database_error(source: sea_orm::DbErr) -> Self {
        Self::Database { source }
    }
}

/// Error type returned by every HTTP handler.
///
/// The variants mirror the service's response taxonomy: a 404 for a missing
/// customer, a 400 for malformed form input, and a 500 with a fixed
/// per-route message for storage failures.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound(message.into())
    }

    pub fn bad_request<S: Into<String>>(message: S) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Internal(message) => {
                tracing::error!(%message, "request failed");
            }
            AppError::NotFound(message) | AppError::BadRequest(message) => {
                tracing::debug!(%message, "request rejected");
            }
        }

        (self.status_code(), self.to_string()).into_response()
    }
}

impl From<RepositoryError> for AppError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::NotFound(entity) => Self::NotFound(format!("{} not found", entity)),
            RepositoryError::Database { source } => {
                tracing::error!(error = %source, "database operation failed");
                Self::Internal("Internal server error".to_string())
            }
        }
    }
}

impl From<askama::Error> for AppError {
    fn from(error: askama::Error) -> Self {
        tracing::error!(error = %error, "template rendering failed");
        Self::Internal("Internal server error".to_string())
    }
}
