//! HTTP request handlers.

use axum::{extract::State, http::Uri, Json};

use crate::api::types::{HealthResponse, VerifiedPathResponse};
use crate::error::SecurityResult;
use crate::request::ImageRequest;
use crate::security::verify;
use crate::AppState;

/// Health check endpoint.
///
/// GET /v1/health
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        algorithm: state.verification.algorithm.to_string(),
        hmac_required: state.verification.digest_required,
        key_configured: state.verification.key().is_some(),
    })
}

/// Verify a forwarded request record.
///
/// POST /v1/verify
///
/// Returns the record with its path cleaned, or the structured rejection.
pub async fn verify_request(
    State(state): State<AppState>,
    Json(request): Json<ImageRequest>,
) -> SecurityResult<Json<ImageRequest>> {
    let verified = verify(request, &state.verification)?;
    Ok(Json(verified))
}

/// Verify a signed image path taken straight from the request URI.
///
/// Any path not matched by another route.
pub async fn verify_path(
    State(state): State<AppState>,
    uri: Uri,
) -> SecurityResult<Json<VerifiedPathResponse>> {
    let verified = verify(ImageRequest::new(uri.path()), &state.verification)?;

    tracing::debug!(path = %verified.path, "Image path accepted");

    let encoded_payload = verified
        .path
        .strip_prefix('/')
        .unwrap_or(&verified.path)
        .to_string();

    Ok(Json(VerifiedPathResponse {
        path: verified.path,
        encoded_payload,
    }))
}
