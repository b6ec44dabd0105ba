//! The error type every HTTP response is rendered from.

use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use super::kind::ErrorKind;

type BoxedSource = Box<dyn Error + Send + Sync + 'static>;

/// Client-facing error
///
/// Domain crates keep their own `thiserror` enums and convert at the HTTP
/// boundary. `message` is what the client sees as `{"error": message}`;
/// `source` is kept for logs only.
///
/// ```rust
/// use kernel::error::app_error::AppError;
///
/// let err = AppError::not_found("Hero not found");
/// assert_eq!(err.status_code(), 404);
/// assert_eq!(err.to_string(), "Not Found: Hero not found");
/// ```
#[derive(Debug)]
pub struct AppError {
    kind: ErrorKind,
    message: Cow<'static, str>,
    source: Option<BoxedSource>,
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    pub fn not_found(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    pub fn internal(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::InternalServerError, message)
    }

    /// Keep the underlying error for logging
    pub fn with_source(mut self, source: impl Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source.as_deref().map(|e| e as &(dyn Error + 'static))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_and_status() {
        let err = AppError::new(ErrorKind::BadRequest, "Invalid hero ID");
        assert_eq!(err.kind(), ErrorKind::BadRequest);
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.message(), "Invalid hero ID");
        assert!(err.source().is_none());
    }

    #[test]
    fn test_source_stays_out_of_message() {
        let cause = std::io::Error::other("connection reset");
        let err = AppError::internal("Internal server error").with_source(cause);

        assert_eq!(err.message(), "Internal server error");
        assert_eq!(err.source().map(|s| s.to_string()).as_deref(), Some("connection reset"));
    }

    #[test]
    fn test_owned_message() {
        let name = String::from("Zilong");
        let err = AppError::not_found(format!("{name} not found"));
        assert_eq!(err.to_string(), "Not Found: Zilong not found");
    }
}
