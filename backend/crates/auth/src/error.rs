//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::bearer::BearerError;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// No `Authorization` header
    #[error("Authorization header required")]
    MissingAuthorization,

    /// `Authorization` header without the `Bearer ` scheme
    #[error("Invalid authorization format")]
    InvalidAuthorizationFormat,

    /// `Bearer ` followed by nothing
    #[error("Token required")]
    TokenRequired,

    /// Token unknown, revoked, or past its expiry
    #[error("Invalid or expired token")]
    InvalidToken,

    /// Username/password pair not in the credential store
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Request body could not be decoded
    #[error("Invalid request payload")]
    InvalidPayload,

    /// Credential file could not be read or parsed
    #[error("Failed to load credentials from {path}: {reason}")]
    CredentialLoad { path: String, reason: String },
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::MissingAuthorization
            | AuthError::InvalidAuthorizationFormat
            | AuthError::TokenRequired
            | AuthError::InvalidToken
            | AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AuthError::InvalidPayload => StatusCode::BAD_REQUEST,
            AuthError::CredentialLoad { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::MissingAuthorization
            | AuthError::InvalidAuthorizationFormat
            | AuthError::TokenRequired
            | AuthError::InvalidToken
            | AuthError::InvalidCredentials => ErrorKind::Unauthorized,
            AuthError::InvalidPayload => ErrorKind::BadRequest,
            AuthError::CredentialLoad { .. } => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    ///
    /// Server-side failures are replaced by a generic message.
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
            AuthError::CredentialLoad { path, reason } => {
                tracing::error!(path = %path, reason = %reason, "Credential store unavailable");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::InvalidToken => {
                tracing::warn!("Rejected unknown or expired bearer token");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        err.to_app_error()
    }
}

impl From<BearerError> for AuthError {
    fn from(err: BearerError) -> Self {
        match err {
            BearerError::MissingHeader => AuthError::MissingAuthorization,
            BearerError::InvalidFormat => AuthError::InvalidAuthorizationFormat,
            BearerError::EmptyToken => AuthError::TokenRequired,
        }
    }
}

/// Bodies are decoded whatever their `Content-Type` says
impl From<serde_json::Error> for AuthError {
    fn from(err: serde_json::Error) -> Self {
        tracing::debug!(error = %err, "Rejected login payload");
        AuthError::InvalidPayload
    }
}
