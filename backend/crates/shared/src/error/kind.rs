//! Error classification
//!
//! Four kinds cover the whole external error surface: every failure a
//! handler can produce is one of these, and the kind alone decides the
//! HTTP status code.

use std::fmt;

/// Error classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Input was rejected (bad credentials, policy violations, blank titles)
    BadRequest,
    /// No live session for the request
    Unauthorized,
    /// The resource does not exist for this account
    NotFound,
    /// A store or server-side failure
    InternalServerError,
}

impl ErrorKind {
    /// HTTP status code for this kind
    pub fn status_code(&self) -> u16 {
        match self {
            ErrorKind::BadRequest => 400,
            ErrorKind::Unauthorized => 401,
            ErrorKind::NotFound => 404,
            ErrorKind::InternalServerError => 500,
        }
    }

    /// Human-readable title (RFC 7807 `title` field)
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "Bad Request",
            ErrorKind::Unauthorized => "Unauthorized",
            ErrorKind::NotFound => "Not Found",
            ErrorKind::InternalServerError => "Internal Server Error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
