mod common;

use axum::http::{StatusCode, header};
use axum_test::TestServer;
use serde_json::{Value, json};

fn location(response: &axum_test::TestResponse) -> String {
    response
        .headers()
        .get(header::LOCATION)
        .expect("Location header missing")
        .to_str()
        .unwrap()
        .to_string()
}

async fn create_code(server: &TestServer, prompt: &str) -> String {
    let response = server
        .post("/api/shorten")
        .json(&json!({ "prompt": prompt }))
        .await;
    response.assert_status_ok();
    response.json::<Value>()["shortCode"]
        .as_str()
        .unwrap()
        .to_string()
}

#[tokio::test]
async fn test_round_trip_redirects_with_encoded_prompt() {
    let (server, _store) = common::test_app(100);

    let code = create_code(&server, "Test prompt").await;

    let response = server.get(&format!("/s/{}", code)).await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(
        location(&response),
        format!("{}/?q=Test%20prompt", common::BASE_URL)
    );
}

#[tokio::test]
async fn test_round_trip_preserves_prompt_after_decoding() {
    let (server, _store) = common::test_app(100);

    let prompt = "Special chars: !@#$%^&*() and unicode 你好";
    let code = create_code(&server, prompt).await;

    let response = server.get(&format!("/s/{}", code)).await;

    response.assert_status(StatusCode::FOUND);

    let target = location(&response);
    let encoded = target
        .strip_prefix(&format!("{}/?q=", common::BASE_URL))
        .expect("unexpected redirect target");
    let decoded = percent_decode(encoded);

    assert_eq!(decoded, prompt);
}

#[tokio::test]
async fn test_unknown_code_redirects_to_root() {
    let (server, _store) = common::test_app(100);

    let response = server.get("/s/zzzzzz").await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(location(&response), format!("{}/", common::BASE_URL));
}

#[tokio::test]
async fn test_empty_code_redirects_to_root() {
    let (server, _store) = common::test_app(100);

    let response = server.get("/s").await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(location(&response), format!("{}/", common::BASE_URL));
}

#[tokio::test]
async fn test_preview_parameter_propagates() {
    let (server, _store) = common::test_app(100);

    let code = create_code(&server, "Test prompt").await;

    let response = server
        .get(&format!("/s/{}", code))
        .add_query_param("preview", "1")
        .await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(
        location(&response),
        format!("{}/?q=Test%20prompt&preview=1", common::BASE_URL)
    );
}

#[tokio::test]
async fn test_preview_absent_without_parameter() {
    let (server, _store) = common::test_app(100);

    let code = create_code(&server, "Test prompt").await;

    let response = server.get(&format!("/s/{}", code)).await;

    assert!(!location(&response).contains("preview"));
}

#[tokio::test]
async fn test_resolution_does_not_mutate_store() {
    let (server, store) = common::test_app(100);

    let code = create_code(&server, "Test prompt").await;
    let entries_after_create = store.len();

    server.get(&format!("/s/{}", code)).await;
    server.get("/s/zzzzzz").await;

    assert_eq!(store.len(), entries_after_create);
}

/// Minimal percent-decoder for test assertions.
fn percent_decode(input: &str) -> String {
    let mut bytes = Vec::new();
    let mut chars = input.bytes().peekable();

    while let Some(b) = chars.next() {
        if b == b'%' {
            let hi = chars.next().expect("truncated escape");
            let lo = chars.next().expect("truncated escape");
            let hex = [hi, lo];
            let hex = std::str::from_utf8(&hex).unwrap();
            bytes.push(u8::from_str_radix(hex, 16).expect("invalid escape"));
        } else {
            bytes.push(b);
        }
    }

    String::from_utf8(bytes).expect("decoded bytes are not UTF-8")
}
