//! Integration tests for the HTTP API.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use budget_engine::api::build_router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collects")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body is JSON")
}

#[tokio::test]
async fn test_optimize_endpoint_returns_breakdown() {
    let app = build_router();

    let request = post_json(
        "/api/budget/optimize",
        json!({
            "destination": "Manali, Himachal Pradesh",
            "duration": 5,
            "total_budget": 50000.0,
            "interests": ["Adventure", "Nature"],
            "travel_date": "2024-10-12"
        }),
    );

    let response = app.oneshot(request).await.expect("handler runs");
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["metadata"]["destination_type"], json!("hill_stations"));
    assert!(body["accommodation"].as_u64().is_some());
}

#[tokio::test]
async fn test_recommendations_endpoint_returns_advisories() {
    let app = build_router();

    let request = post_json(
        "/api/budget/recommendations",
        json!({
            "destination": "Mysore",
            "duration": 5,
            "total_budget": 3000.0,
            "travel_date": "2024-10-12"
        }),
    );

    let response = app.oneshot(request).await.expect("handler runs");
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let warnings = body["warnings"].as_array().expect("warnings array");
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].as_str().unwrap().contains("9,000"));
}

#[tokio::test]
async fn test_invalid_duration_is_unprocessable() {
    let app = build_router();

    let request = post_json(
        "/api/budget/optimize",
        json!({
            "destination": "Goa",
            "duration": 0,
            "total_budget": 20000.0
        }),
    );

    let response = app.oneshot(request).await.expect("handler runs");
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("duration"));
}
