use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    routing::post,
    Router,
};
use tower::ServiceExt;

use super::*;

/// Outermost layer last: request id, then metrics, then tracing.
fn app_with_middleware(metrics: Arc<RequestMetrics>) -> Router {
    Router::new()
        .route("/ok", post(|| async { "sorted" }))
        .route(
            "/fail",
            post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        )
        .layer(TraceLayer::new())
        .layer(MetricsLayer::new(metrics))
        .layer(RequestIdLayer::new())
}

fn post_to(uri: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_metrics_count_requests_by_outcome() {
    let metrics = Arc::new(RequestMetrics::new());
    let app = app_with_middleware(Arc::clone(&metrics));

    let response = app.clone().oneshot(post_to("/ok")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.clone().oneshot(post_to("/fail")).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    // Wrong method is answered by the route itself, inside the layers
    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/ok")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

    assert_eq!(metrics.request_count(), 3);
    assert_eq!(metrics.success_count(), 1);
    assert_eq!(metrics.server_error_count(), 1);
    assert_eq!(metrics.client_error_count(), 1);
}

#[tokio::test]
async fn test_tracing_layer_passes_response_through() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::INFO)
        .try_init();

    let app = app_with_middleware(Arc::new(RequestMetrics::new()));
    let response = app.oneshot(post_to("/ok")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body[..], b"sorted");
}

#[tokio::test]
async fn test_request_id_is_generated_when_absent() {
    let app = app_with_middleware(Arc::new(RequestMetrics::new()));
    let response = app.oneshot(post_to("/ok")).await.unwrap();

    let id = response
        .headers()
        .get(REQUEST_ID_HEADER)
        .expect("response should carry a request id")
        .to_str()
        .unwrap();
    assert!(
        uuid::Uuid::parse_str(id).is_ok(),
        "generated id should be a UUID, got {id}"
    );
}

#[tokio::test]
async fn test_request_id_is_propagated_to_handler_and_response() {
    let app = Router::new()
        .route(
            "/echo",
            post(|req: Request<Body>| async move {
                req.headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("missing")
                    .to_string()
            }),
        )
        .layer(RequestIdLayer::new());

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/echo")
                .header(REQUEST_ID_HEADER, "batch-42")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.headers()[REQUEST_ID_HEADER], "batch-42");
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body[..], b"batch-42");
}

#[tokio::test]
async fn test_error_responses_still_get_request_id() {
    let app = app_with_middleware(Arc::new(RequestMetrics::new()));
    let response = app.oneshot(post_to("/fail")).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.headers().contains_key(REQUEST_ID_HEADER));
}
