//! API request and response types.

use serde::{Deserialize, Serialize};

/// Health check response.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
    /// HMAC digest algorithm in use.
    pub algorithm: String,
    /// Whether every request must be signed.
    pub hmac_required: bool,
    /// Whether a signing key is configured. The key itself is never exposed.
    pub key_configured: bool,
}

/// Result of verifying a signed image path.
#[derive(Debug, Serialize, Deserialize)]
pub struct VerifiedPathResponse {
    /// Path with any digest stripped.
    pub path: String,
    /// Encoded payload handed to the image decoder.
    pub encoded_payload: String,
}
