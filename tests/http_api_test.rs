use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use phase_diagram::create_router;
use serde_json::Value;
use tower::ServiceExt;

struct TestResponse {
    status: StatusCode,
    content_type: Option<String>,
    body: String,
}

async fn send(method: Method, uri: &str) -> TestResponse {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = create_router().oneshot(request).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    TestResponse {
        status,
        content_type,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}

async fn get(uri: &str) -> TestResponse {
    send(Method::GET, uri).await
}

#[tokio::test]
async fn test_valid_pressure_returns_rounded_volumes() {
    let response = get("/phase-change-diagram?pressure=1.0").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.content_type.as_deref(), Some("application/json"));

    let json: Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(json["specific_volume_liquid"].as_f64(), Some(0.00156));
    assert_eq!(json["specific_volume_vapor"].as_f64(), Some(1.55922));
}

#[tokio::test]
async fn test_response_has_exactly_two_fields() {
    let response = get("/phase-change-diagram?pressure=2").await;
    let json: Value = serde_json::from_str(&response.body).unwrap();

    let object = json.as_object().unwrap();
    assert_eq!(object.len(), 2);
    assert!(object.contains_key("specific_volume_liquid"));
    assert!(object.contains_key("specific_volume_vapor"));
}

#[tokio::test]
async fn test_missing_pressure_is_bad_request() {
    let response = get("/phase-change-diagram").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body, "missing pressure query param");
    assert!(response
        .content_type
        .as_deref()
        .unwrap_or_default()
        .starts_with("text/plain"));
}

#[tokio::test]
async fn test_empty_pressure_is_bad_request() {
    let response = get("/phase-change-diagram?pressure=").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body, "missing pressure query param");
}

#[tokio::test]
async fn test_other_params_do_not_count_as_pressure() {
    let response = get("/phase-change-diagram?temperature=300").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body, "missing pressure query param");
}

#[tokio::test]
async fn test_non_numeric_pressure_is_bad_request() {
    let response = get("/phase-change-diagram?pressure=abc").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body, "invalid pressure value");
}

#[tokio::test]
async fn test_out_of_range_pressure_is_bad_request() {
    let response = get("/phase-change-diagram?pressure=1e40").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body, "invalid pressure value");
}

#[tokio::test]
async fn test_zero_pressure_serializes_as_null() {
    let response = get("/phase-change-diagram?pressure=0").await;

    assert_eq!(response.status, StatusCode::OK);
    let json: Value = serde_json::from_str(&response.body).unwrap();
    assert!(json["specific_volume_liquid"].is_null());
    assert!(json["specific_volume_vapor"].is_null());
}

#[tokio::test]
async fn test_negative_pressure_is_accepted() {
    let response = get("/phase-change-diagram?pressure=-1").await;

    assert_eq!(response.status, StatusCode::OK);
    let json: Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(json["specific_volume_liquid"].as_f64(), Some(0.00116));
    assert_eq!(json["specific_volume_vapor"].as_f64(), Some(-1.38585));
}

#[tokio::test]
async fn test_url_encoded_pressure() {
    // %2B 為 '+'
    let response = get("/phase-change-diagram?pressure=%2B1.0").await;

    assert_eq!(response.status, StatusCode::OK);
    let json: Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(json["specific_volume_vapor"].as_f64(), Some(1.55922));
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let response = get("/does-not-exist").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_post_is_method_not_allowed() {
    let response = send(Method::POST, "/phase-change-diagram?pressure=1").await;
    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_first_pressure_value_wins() {
    let invalid_first = get("/phase-change-diagram?pressure=abc&pressure=1").await;
    assert_eq!(invalid_first.status, StatusCode::BAD_REQUEST);
    assert_eq!(invalid_first.body, "invalid pressure value");

    let valid_first = get("/phase-change-diagram?pressure=1&pressure=abc").await;
    assert_eq!(valid_first.status, StatusCode::OK);
    let json: Value = serde_json::from_str(&valid_first.body).unwrap();
    assert_eq!(json["specific_volume_liquid"].as_f64(), Some(0.00156));
}

#[tokio::test]
async fn test_signed_nan_is_bad_request() {
    for uri in [
        "/phase-change-diagram?pressure=-nan",
        "/phase-change-diagram?pressure=%2Bnan",
    ] {
        let response = get(uri).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(response.body, "invalid pressure value");
    }
}

#[tokio::test]
async fn test_hex_float_is_bad_request() {
    let response = get("/phase-change-diagram?pressure=0x1p0").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body, "invalid pressure value");
}
