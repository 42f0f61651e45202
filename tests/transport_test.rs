//! Transport normalization against a mock backend.

use moneymap::investments::InvestmentRecord;
use moneymap::transport::{ApiClient, TransportError};
use serde_json::{json, Value};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api_message(err: TransportError) -> String {
    match err {
        TransportError::Api(message) => message,
        other => panic!("expected normalized API error, got: {other:?}"),
    }
}

#[tokio::test]
async fn get_decodes_record_array() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/investments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "name": "FD", "type": "Fixed Deposit", "amount": 1000.0,
             "current_val": 1050.0, "invest_date": "2024-01-01", "note": ""}
        ])))
        .mount(&server)
        .await;

    let api = ApiClient::new(server.uri());
    let records: Vec<InvestmentRecord> = api.get_json("/api/investments").await.unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "FD");
    assert_eq!(records[0].kind, "Fixed Deposit");
}

#[tokio::test]
async fn error_status_uses_error_body_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/investments"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "db down"})))
        .mount(&server)
        .await;

    let api = ApiClient::new(server.uri());
    let err = api.get_json::<Value>("/api/investments").await.unwrap_err();

    assert_eq!(api_message(err), "db down");
}

#[tokio::test]
async fn success_status_with_embedded_error_is_a_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/investments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"error": "not authorized"})))
        .mount(&server)
        .await;

    let api = ApiClient::new(server.uri());
    let err = api.get_json::<Value>("/api/investments").await.unwrap_err();

    assert_eq!(api_message(err), "not authorized");
}

#[tokio::test]
async fn undecodable_error_body_falls_back_to_status_line() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/investments"))
        .respond_with(ResponseTemplate::new(404).set_body_string("<html>gone</html>"))
        .mount(&server)
        .await;

    let api = ApiClient::new(server.uri());
    let err = api.get_json::<Value>("/api/investments").await.unwrap_err();

    assert_eq!(api_message(err), "HTTP 404 Not Found");
}

#[tokio::test]
async fn writes_share_the_same_normalization() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/investments"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "insert failed"})))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/investments/9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"error": "no such record"})))
        .mount(&server)
        .await;

    let api = ApiClient::new(server.uri());

    let post_err = api
        .post_json::<Value, _>("/api/investments", &json!({"name": "FD"}))
        .await
        .unwrap_err();
    assert_eq!(api_message(post_err), "insert failed");

    let delete_err = api
        .delete_json::<Value>("/api/investments/9")
        .await
        .unwrap_err();
    assert_eq!(api_message(delete_err), "no such record");
}

#[tokio::test]
async fn post_sends_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/investments"))
        .and(header("content-type", "application/json"))
        .and(body_partial_json(json!({"name": "FD", "type": "Fixed Deposit"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .expect(1)
        .mount(&server)
        .await;

    let api = ApiClient::new(server.uri());
    let status: Value = api
        .post_json(
            "/api/investments",
            &json!({"name": "FD", "type": "Fixed Deposit", "amount": 1000.0}),
        )
        .await
        .unwrap();

    assert_eq!(status, json!({"status": "ok"}));
}

#[tokio::test]
async fn put_returns_decoded_status_body() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/profile"))
        .and(body_partial_json(json!({"currency": "INR"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .expect(1)
        .mount(&server)
        .await;

    let api = ApiClient::new(server.uri());
    let status: Value = api
        .put_json("/api/profile", &json!({"currency": "INR"}))
        .await
        .unwrap();

    assert_eq!(status, json!({"status": "ok"}));
}
