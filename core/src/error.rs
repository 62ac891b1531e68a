//! Error types for the API client.
//!
//! # Design
//! Three failure families reach the caller and stay distinguishable:
//! `Transport` (the call never produced a response), `Api` (the remote
//! answered with an `error` payload) and `EmptyResponse` (no body on a status
//! other than 204). The remaining variants cover local failures around a
//! call: an unreadable upload, a binary response that is not JSON, missing
//! configuration.

use std::fmt;

use thiserror::Error;

/// Result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by `Dispatcher` and the catalog operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Connection, TLS, timeout or any other failure below HTTP. Surfaced
    /// exactly as the transport reported it.
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The remote answered with an `error` field.
    #[error("{0}")]
    Api(ApiError),

    /// No body and a status other than 204 No Content.
    #[error("empty response with HTTP status {status}")]
    EmptyResponse { status: u16 },

    /// A binary-upload response could not be parsed as JSON.
    #[error("response is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    /// A file upload could not be opened or read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A required environment variable is not set.
    #[error("missing configuration: {0} is not set")]
    MissingConfig(&'static str),
}

impl Error {
    pub fn transport(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Error::Transport(err.into())
    }

    /// The classified API failure, if this is one.
    pub fn api(&self) -> Option<&ApiError> {
        match self {
            Error::Api(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ApiError> for Error {
    fn from(err: ApiError) -> Self {
        Error::Api(err)
    }
}

/// A structured error payload returned by the remote API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// The body's `error_code`. Authoritative even when `message` is `None`.
    pub code: Option<i64>,
    /// The body's `error` token, e.g. `bad_token`.
    pub error: String,
    /// Message from the static code table, `None` for unknown codes.
    pub message: Option<&'static str>,
}

impl ApiError {
    pub fn new(code: Option<i64>, error: impl Into<String>) -> Self {
        Self {
            code,
            error: error.into(),
            message: code.and_then(crate::codes::message),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "API error {code}")?,
            None => write!(f, "API error")?,
        }
        match self.message {
            Some(message) => write!(f, ": {message} ({})", self.error),
            None => write!(f, ": {}", self.error),
        }
    }
}

impl std::error::Error for ApiError {}
