//! Route definitions for the API.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api::handlers;
use crate::AppState;

/// Build the API router.
///
/// Paths outside `/v1` are treated as signed image paths.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/v1/health", get(handlers::health_check))
        .route("/v1/verify", post(handlers::verify_request))
        .fallback(handlers::verify_path)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header::CONTENT_TYPE, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::security::{DigestAlgorithm, VerificationConfig};

    const ENCODED: &str = "eyJidWNrZXQiOiJ2YWxpZEJ1Y2tldCIsImtleSI6InZhbGlkS2V5IiwiZWRpdHMiOnsiZ3JheXNjYWxlIjp0cnVlfX0=";
    const VALID_DIGEST: &str = "17b1131b7d6f08a29065fadb8b54b727ba25188a";

    fn make_app(key: Option<&str>, required: bool) -> Router {
        crate::logging::init_test();
        build_router(AppState::new(VerificationConfig {
            algorithm: DigestAlgorithm::Sha1,
            shared_key: key.map(str::to_string),
            digest_required: required,
            separator: '_',
        }))
    }

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_health_hides_key() {
        let response = make_app(Some("secret"), true)
            .oneshot(get("/v1/health"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["algorithm"], "sha1");
        assert_eq!(body["hmac_required"], true);
        assert_eq!(body["key_configured"], true);
        assert!(!body.to_string().contains("secret"));
    }

    #[tokio::test]
    async fn test_signed_path_accepted() {
        let response = make_app(Some("secret"), true)
            .oneshot(get(&format!("/{VALID_DIGEST}_{ENCODED}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["path"], format!("/{ENCODED}"));
        assert_eq!(body["encoded_payload"], ENCODED);
    }

    #[tokio::test]
    async fn test_unsigned_path_when_optional() {
        let response = make_app(None, false)
            .oneshot(get(&format!("/{ENCODED}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["encoded_payload"], ENCODED);
    }

    #[tokio::test]
    async fn test_tampered_path_rejected() {
        let response = make_app(Some("secret"), true)
            .oneshot(get(&format!(
                "/469a67474a79221397a6c665986fae3682b70510_{ENCODED}"
            )))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["status"], 400);
        assert_eq!(body["code"], "HmacProvidedMismatch");
    }

    #[tokio::test]
    async fn test_misconfigured_server_rejects() {
        let response = make_app(None, true)
            .oneshot(get(&format!("/{ENCODED}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["code"], "HmacCompulsoryNoKey");
    }

    #[tokio::test]
    async fn test_verify_record_keeps_fields() {
        let record = json!({
            "path": format!("/{VALID_DIGEST}_{ENCODED}"),
            "httpMethod": "GET",
            "headers": {"Accept": "image/webp"},
        });
        let request = Request::builder()
            .method("POST")
            .uri("/v1/verify")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(record.to_string()))
            .unwrap();

        let response = make_app(Some("secret"), false)
            .oneshot(request)
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["path"], format!("/{ENCODED}"));
        assert_eq!(body["httpMethod"], "GET");
        assert_eq!(body["headers"]["Accept"], "image/webp");
    }

    #[tokio::test]
    async fn test_verify_record_rejects_missing_digest() {
        let request = Request::builder()
            .method("POST")
            .uri("/v1/verify")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json!({ "path": format!("/{ENCODED}") }).to_string()))
            .unwrap();

        let response = make_app(Some("secret"), true)
            .oneshot(request)
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await["code"],
            "HmacCompulsoryNoneProvided"
        );
    }
}
