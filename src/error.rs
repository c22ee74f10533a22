/******************************************************************************
   Author: Face Log Team
   Date: 18/10/26
******************************************************************************/

//! Error type shared by every layer of the client.

use crate::constants::MAX_ERROR_BODY_LENGTH;
use reqwest::StatusCode;
use std::fmt;

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// Transport level failure (connection refused, DNS, TLS, body read)
    Network(reqwest::Error),
    /// JSON (de)serialization failure
    Json(serde_json::Error),
    /// I/O failure, typically from a file backed token store
    Io(std::io::Error),
    /// The API answered 401 and the session could not be recovered
    Unauthorized,
    /// The API answered 403
    Forbidden(String),
    /// The API answered 404
    NotFound,
    /// The API answered 400, usually with field level validation errors
    BadRequest(String),
    /// Any other non-success status
    Unexpected(StatusCode),
    /// Caller supplied input the client refuses to send
    InvalidInput(String),
    /// A value could not be serialized for the wire
    SerializationError(String),
    /// A response could not be interpreted
    Deserialization(String),
}

impl AppError {
    /// Maps a non-success status and its body to the matching error
    ///
    /// # Arguments
    /// * `status` - HTTP status returned by the API
    /// * `body` - Response body, truncated before being stored
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        let body = truncate_body(body);
        match status {
            StatusCode::BAD_REQUEST => AppError::BadRequest(body),
            StatusCode::UNAUTHORIZED => AppError::Unauthorized,
            StatusCode::FORBIDDEN => AppError::Forbidden(body),
            StatusCode::NOT_FOUND => AppError::NotFound,
            _ => AppError::Unexpected(status),
        }
    }

    /// Returns true when the error means the user has to log in again
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, AppError::Unauthorized)
    }
}

fn truncate_body(body: &str) -> String {
    if body.len() <= MAX_ERROR_BODY_LENGTH {
        return body.to_string();
    }
    let mut end = MAX_ERROR_BODY_LENGTH;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}... (truncated, {} total bytes)", &body[..end], body.len())
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
            AppError::Unauthorized => write!(f, "unauthorized"),
            AppError::Forbidden(body) => write!(f, "forbidden: {body}"),
            AppError::NotFound => write!(f, "not found"),
            AppError::BadRequest(body) => write!(f, "bad request: {body}"),
            AppError::Unexpected(status) => write!(f, "unexpected status: {status}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            AppError::SerializationError(msg) => write!(f, "serialization error: {msg}"),
            AppError::Deserialization(msg) => write!(f, "deserialization error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}

impl From<reqwest::header::InvalidHeaderValue> for AppError {
    fn from(e: reqwest::header::InvalidHeaderValue) -> Self {
        AppError::InvalidInput(format!("invalid header value: {e}"))
    }
}
