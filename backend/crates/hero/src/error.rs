//! Hero Error Types
//!
//! Hero-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::extract::rejection::PathRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use kernel::id::IdParseError;
use thiserror::Error;

/// Hero-specific result type alias
pub type HeroResult<T> = Result<T, HeroError>;

/// Hero-specific error variants
#[derive(Debug, Error)]
pub enum HeroError {
    /// Request body could not be decoded
    #[error("Invalid request payload")]
    InvalidPayload,

    /// Path id is not an integer
    #[error("Invalid hero ID")]
    InvalidId,

    /// Name, role or difficulty is empty
    #[error("Name, role, and difficulty are required")]
    MissingFields,

    #[error("Hero not found")]
    NotFound,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl HeroError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            HeroError::InvalidPayload | HeroError::InvalidId | HeroError::MissingFields => {
                StatusCode::BAD_REQUEST
            }
            HeroError::NotFound => StatusCode::NOT_FOUND,
            HeroError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            HeroError::InvalidPayload | HeroError::InvalidId | HeroError::MissingFields => {
                ErrorKind::BadRequest
            }
            HeroError::NotFound => ErrorKind::NotFound,
            HeroError::Database(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    ///
    /// Storage detail never reaches the client.
    pub fn to_app_error(&self) -> AppError {
        if self.kind().is_server_error() {
            AppError::internal("Internal server error")
        } else {
            AppError::new(self.kind(), self.to_string())
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            HeroError::Database(e) => {
                tracing::error!(error = %e, "Hero database error");
            }
            _ => {
                tracing::debug!(error = %self, "Hero request rejected");
            }
        }
    }
}

impl IntoResponse for HeroError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<HeroError> for AppError {
    fn from(err: HeroError) -> Self {
        match err {
            HeroError::Database(e) => AppError::from(e),
            other => other.to_app_error(),
        }
    }
}

impl From<IdParseError> for HeroError {
    fn from(_: IdParseError) -> Self {
        HeroError::InvalidId
    }
}

/// Covers segments that are not valid UTF-8 after percent-decoding
impl From<PathRejection> for HeroError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!(rejection = %rejection.body_text(), "Rejected hero path");
        HeroError::InvalidId
    }
}

/// Bodies are decoded whatever their `Content-Type` says
impl From<serde_json::Error> for HeroError {
    fn from(err: serde_json::Error) -> Self {
        tracing::debug!(error = %err, "Rejected hero payload");
        HeroError::InvalidPayload
    }
}
