//! Error types for Image Guard.
//!
//! Every verification failure is scoped to a single request and maps to a
//! structured `{status, code, message}` body for HTTP clients.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejections raised while verifying a signed request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SecurityError {
    /// Verification is required but the server has no key.
    #[error("The image request you provided could not be processed. HMAC is compulsory, but no key is set.")]
    HmacCompulsoryNoKey,

    /// Verification is required but the request carries no digest.
    #[error("The image request you provided could not be processed. HMAC is compulsory, but no hash was provided with the request.")]
    HmacCompulsoryNoneProvided,

    /// The request carries a digest the server cannot check.
    #[error("The image request you provided could not be processed. A HMAC appears to be in the path, but no HMAC key has been set.")]
    HmacProvidedKeyMissing,

    /// The supplied digest does not match the payload.
    #[error("The image request you provided could not be processed. The HMAC key is different from the expected value, and the request appears to have been tampered with.")]
    HmacProvidedMismatch,
}

impl SecurityError {
    /// HTTP status for this rejection. All verification failures are client errors.
    pub fn status(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            SecurityError::HmacCompulsoryNoKey => "HmacCompulsoryNoKey",
            SecurityError::HmacCompulsoryNoneProvided => "HmacCompulsoryNoneProvided",
            SecurityError::HmacProvidedKeyMissing => "HmacProvidedKeyMissing",
            SecurityError::HmacProvidedMismatch => "HmacProvidedMismatch",
        }
    }

    /// Structured body surfaced to the caller.
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            status: self.status().as_u16(),
            code: self.code().to_string(),
            message: self.to_string(),
        }
    }
}

/// Error response body for API clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: u16,
    pub code: String,
    pub message: String,
}

impl IntoResponse for SecurityError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.to_response())).into_response()
    }
}

/// Result type alias for verification operations.
pub type SecurityResult<T> = Result<T, SecurityError>;
