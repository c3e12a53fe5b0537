mod common;

use axum::http::{HeaderName, HeaderValue, StatusCode};
use serde_json::{Value, json};

const CLIENT_IP_HEADER: HeaderName = HeaderName::from_static("cf-connecting-ip");

#[tokio::test]
async fn test_client_is_limited_after_quota_exhausted() {
    let (server, _store) = common::test_app(100);

    for i in 0..100 {
        let response = server
            .post("/api/shorten")
            .add_header(CLIENT_IP_HEADER, HeaderValue::from_static("203.0.113.9"))
            .json(&json!({ "prompt": format!("prompt {}", i) }))
            .await;
        response.assert_status_ok();
    }

    // The 101st request within the window is rejected.
    let response = server
        .post("/api/shorten")
        .add_header(CLIENT_IP_HEADER, HeaderValue::from_static("203.0.113.9"))
        .json(&json!({ "prompt": "one too many" }))
        .await;

    response.assert_status(StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(response.json::<Value>()["error"], "Rate limit exceeded");
}

#[tokio::test]
async fn test_clients_are_limited_independently() {
    let (server, _store) = common::test_app(1);

    let response = server
        .post("/api/shorten")
        .add_header(CLIENT_IP_HEADER, HeaderValue::from_static("203.0.113.9"))
        .json(&json!({ "prompt": "first client" }))
        .await;
    response.assert_status_ok();

    let response = server
        .post("/api/shorten")
        .add_header(CLIENT_IP_HEADER, HeaderValue::from_static("198.51.100.1"))
        .json(&json!({ "prompt": "second client" }))
        .await;
    response.assert_status_ok();

    let response = server
        .post("/api/shorten")
        .add_header(CLIENT_IP_HEADER, HeaderValue::from_static("203.0.113.9"))
        .json(&json!({ "prompt": "first client again" }))
        .await;
    response.assert_status(StatusCode::TOO_MANY_REQUESTS);
}

#[tokio::test]
async fn test_clients_without_header_share_unknown_bucket() {
    let (server, _store) = common::test_app(1);

    let response = server
        .post("/api/shorten")
        .json(&json!({ "prompt": "anonymous one" }))
        .await;
    response.assert_status_ok();

    // No client header on either request, so both land in the shared bucket.
    let response = server
        .post("/api/shorten")
        .json(&json!({ "prompt": "anonymous two" }))
        .await;
    response.assert_status(StatusCode::TOO_MANY_REQUESTS);
}

#[tokio::test]
async fn test_invalid_requests_consume_quota() {
    let (server, _store) = common::test_app(2);

    // The rate-limit increment runs before validation, so 400s count too.
    for _ in 0..2 {
        let response = server
            .post("/api/shorten")
            .add_header(CLIENT_IP_HEADER, HeaderValue::from_static("203.0.113.9"))
            .json(&json!({ "prompt": 42 }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    let response = server
        .post("/api/shorten")
        .add_header(CLIENT_IP_HEADER, HeaderValue::from_static("203.0.113.9"))
        .json(&json!({ "prompt": "valid but out of quota" }))
        .await;

    response.assert_status(StatusCode::TOO_MANY_REQUESTS);
}

#[tokio::test]
async fn test_rejected_requests_do_not_increment_counter() {
    let (server, store) = common::test_app(1);

    server
        .post("/api/shorten")
        .add_header(CLIENT_IP_HEADER, HeaderValue::from_static("203.0.113.9"))
        .json(&json!({ "prompt": "first" }))
        .await
        .assert_status_ok();

    for _ in 0..3 {
        server
            .post("/api/shorten")
            .add_header(CLIENT_IP_HEADER, HeaderValue::from_static("203.0.113.9"))
            .json(&json!({ "prompt": "rejected" }))
            .await
            .assert_status(StatusCode::TOO_MANY_REQUESTS);
    }

    use prompt_shortener::domain::store::KeyValueStore;
    assert_eq!(
        store.get("rate_limit:203.0.113.9").await.unwrap(),
        Some("1".to_string())
    );
}
