use saturn::backend::{BackendClient, BackendError};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> BackendClient {
    BackendClient::new(format!("{}/query", server.uri()))
}

#[tokio::test]
async fn sends_exactly_one_post_with_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/query"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "query": "hello" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "response": "Hi there" })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let text = client.query("hello").await.unwrap();
    assert_eq!(text, "Hi there");
}

#[tokio::test]
async fn response_field_takes_precedence_over_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": "Hi there",
            "error": "ignored",
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    assert_eq!(client.query("hello").await.unwrap(), "Hi there");
}

#[tokio::test]
async fn backend_reported_error_becomes_display_text() {
    // The real server reports query failures with an error field and a
    // 205 RESET_CONTENT status, which still counts as success transport-wise.
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(205).set_body_json(json!({ "error": "no results" })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    assert_eq!(client.query("broken").await.unwrap(), "no results");
}

#[tokio::test]
async fn reply_with_neither_field_is_an_empty_turn() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "query": "hello" })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    assert_eq!(client.query("hello").await.unwrap(), "");
}

#[tokio::test]
async fn non_success_status_is_a_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.query("hello").await.unwrap_err();
    assert!(matches!(err, BackendError::Status { status } if status.as_u16() == 500));
}

#[tokio::test]
async fn malformed_json_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.query("hello").await.unwrap_err();
    assert!(matches!(err, BackendError::Decode { .. }));
}

#[tokio::test]
async fn unreachable_endpoint_is_a_transport_error() {
    // Port 9 (discard) is not listening; the connection is refused.
    let endpoint = "http://127.0.0.1:9/query".to_string();

    let client = BackendClient::new(endpoint.clone());
    let err = client.query("hello").await.unwrap_err();
    assert!(matches!(err, BackendError::Transport { url, .. } if url == endpoint));
}
