//! Error classification shared by every crate's error enum.

use std::fmt;

/// What went wrong, from the client's point of view
///
/// The API answers with exactly these four statuses. Anything a domain
/// crate cannot classify is an [`ErrorKind::InternalServerError`].
///
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// assert_eq!(ErrorKind::Unauthorized.status_code(), 401);
/// assert_eq!(ErrorKind::NotFound.to_string(), "Not Found");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed payload, empty required field, non-numeric id
    BadRequest,
    /// Gate or credential failure
    Unauthorized,
    NotFound,
    /// Storage and everything unexpected; detail stays in the logs
    InternalServerError,
}

impl ErrorKind {
    pub const fn status_code(self) -> u16 {
        match self {
            Self::BadRequest => 400,
            Self::Unauthorized => 401,
            Self::NotFound => 404,
            Self::InternalServerError => 500,
        }
    }

    /// HTTP reason phrase
    pub const fn reason(self) -> &'static str {
        match self {
            Self::BadRequest => "Bad Request",
            Self::Unauthorized => "Unauthorized",
            Self::NotFound => "Not Found",
            Self::InternalServerError => "Internal Server Error",
        }
    }

    /// Whether the failure is ours rather than the caller's
    pub const fn is_server_error(self) -> bool {
        matches!(self, Self::InternalServerError)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.reason())
    }
}
