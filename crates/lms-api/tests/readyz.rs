use axum::{body::Body, http::Request, http::StatusCode};
use http_body_util::BodyExt;
use std::sync::atomic::Ordering;
use tower::ServiceExt;

#[tokio::test]
async fn readyz_returns_service_unavailable_when_not_ready() {
    let state = lms_api::test_state();
    state.readiness.store(false, Ordering::SeqCst);
    let app = lms_api::create_router(state);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/readyz")
                .header("x-request-id", "drain-check")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["code"], "service_unavailable");
    assert_eq!(json["message"], "shutting_down");
    assert_eq!(json["request_id"], "drain-check");
}

#[tokio::test]
async fn health_alias_follows_readiness() {
    let state = lms_api::test_state();
    state.readiness.store(false, Ordering::SeqCst);
    let app = lms_api::create_router(state);

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}
