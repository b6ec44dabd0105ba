//! Bearer Token Extraction
//!
//! Parses `Authorization: Bearer <token>` request headers.

use axum::http::{HeaderMap, header};

/// Scheme prefix, matched case-sensitively including the trailing space
pub const BEARER_PREFIX: &str = "Bearer ";

/// Why a request carried no usable bearer token
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BearerError {
    /// No `Authorization` header at all
    #[error("Authorization header required")]
    MissingHeader,

    /// Header present but not `Bearer ` prefixed (or not valid ASCII)
    #[error("Invalid authorization format")]
    InvalidFormat,

    /// `Bearer ` with nothing after it
    #[error("Token required")]
    EmptyToken,
}

/// Extract the bearer token from request headers
///
/// ## Returns
/// * `Ok(token)` - the raw token following `Bearer `
/// * `Err(BearerError)` - which of the three header problems was found
pub fn extract_bearer(headers: &HeaderMap) -> Result<&str, BearerError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(BearerError::MissingHeader)?;

    let value = value.to_str().map_err(|_| BearerError::InvalidFormat)?;

    if value.is_empty() {
        return Err(BearerError::MissingHeader);
    }

    let token = value
        .strip_prefix(BEARER_PREFIX)
        .ok_or(BearerError::InvalidFormat)?;

    if token.is_empty() {
        return Err(BearerError::EmptyToken);
    }

    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn test_extract_valid_token() {
        let headers = headers_with("Bearer abc123");
        assert_eq!(extract_bearer(&headers), Ok("abc123"));
    }

    #[test]
    fn test_missing_header() {
        assert_eq!(
            extract_bearer(&HeaderMap::new()),
            Err(BearerError::MissingHeader)
        );
        assert_eq!(
            extract_bearer(&headers_with("")),
            Err(BearerError::MissingHeader)
        );
    }

    #[test]
    fn test_wrong_scheme() {
        assert_eq!(
            extract_bearer(&headers_with("Basic dXNlcjpwYXNz")),
            Err(BearerError::InvalidFormat)
        );
        assert_eq!(
            extract_bearer(&headers_with("bearer abc")),
            Err(BearerError::InvalidFormat)
        );
        assert_eq!(
            extract_bearer(&headers_with("Bearerabc")),
            Err(BearerError::InvalidFormat)
        );
    }

    #[test]
    fn test_empty_token() {
        // HeaderValue trims nothing, so the trailing space survives
        assert_eq!(
            extract_bearer(&headers_with("Bearer ")),
            Err(BearerError::EmptyToken)
        );
    }

    #[test]
    fn test_messages_are_distinct() {
        let messages = [
            BearerError::MissingHeader.to_string(),
            BearerError::InvalidFormat.to_string(),
            BearerError::EmptyToken.to_string(),
        ];
        assert_eq!(messages[0], "Authorization header required");
        assert_ne!(messages[0], messages[1]);
        assert_ne!(messages[1], messages[2]);
    }
}
