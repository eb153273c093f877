//! Request executor protocol: success, no-content, throttling and failures.

use std::time::Duration;

use discord_rest::http::{HttpError, Method, RequestDescriptor};
use discord_rest::{ApiError, ApiResult, Client, ClientConfig};
use serde_json::{json, Value};

mod common;
use common::{json_response, rate_limited, scripted_client, ScriptedTransport};

#[tokio::test]
async fn test_success_wraps_parsed_json() {
    let transport = ScriptedTransport::new(vec![json_response(200, r#"{"id":"1","name":"general"}"#)]);
    let client = scripted_client(transport.clone());

    let result: ApiResult<Value> = client
        .request(RequestDescriptor::get("/channels/1"))
        .await
        .unwrap();
    assert_eq!(result, Ok(json!({"id": "1", "name": "general"})));
    assert_eq!(transport.calls(), 1);
}

#[tokio::test]
async fn test_no_content_is_null_for_every_method() {
    for method in [Method::Get, Method::Post, Method::Patch, Method::Put, Method::Delete] {
        let transport = ScriptedTransport::new(vec![json_response(204, "")]);
        let client = scripted_client(transport);

        let result: ApiResult<Option<Value>> = client
            .request(RequestDescriptor::new(method, "/channels/1/pins/2"))
            .await
            .unwrap();
        assert_eq!(result, Ok(None), "method {}", method);
    }
}

#[tokio::test(start_paused = true)]
async fn test_two_throttles_then_success() {
    let transport = ScriptedTransport::new(vec![
        rate_limited("0"),
        rate_limited("0"),
        json_response(200, r#"{"id":"1"}"#),
    ]);
    let client = scripted_client(transport.clone());

    let start = tokio::time::Instant::now();
    let result: ApiResult<Value> = client
        .request(RequestDescriptor::get("/channels/1"))
        .await
        .unwrap();
    assert_eq!(result, Ok(json!({"id": "1"})));
    assert_eq!(transport.calls(), 3);
    assert!(start.elapsed() < Duration::from_secs(1));
}

#[tokio::test(start_paused = true)]
async fn test_every_attempt_throttled_exhausts_budget() {
    let transport = ScriptedTransport::new((0..40).map(|_| rate_limited("1")).collect());
    let client = scripted_client(transport.clone());

    let start = tokio::time::Instant::now();
    let result: ApiResult<Value> = client
        .request(RequestDescriptor::get("/channels/1"))
        .await
        .unwrap();

    let err = result.unwrap_err();
    assert_eq!(err.message, "Retry amount is reached.");
    assert_eq!(err.code, -1);
    assert_eq!(transport.calls(), 31);
    // One sleep between each pair of attempts.
    assert!(start.elapsed() >= Duration::from_secs(30));
}

#[tokio::test(start_paused = true)]
async fn test_configured_retry_ceiling() {
    let mut config = ClientConfig::default();
    config.retries.max_retries = 2;
    let transport = ScriptedTransport::new((0..10).map(|_| rate_limited("0")).collect());
    let client = Client::with_transport("T", config, transport.clone()).unwrap();

    let result: ApiResult<Value> = client
        .request(RequestDescriptor::get("/channels/1"))
        .await
        .unwrap();
    assert_eq!(result, Err(ApiError::retry_exhausted()));
    assert_eq!(transport.calls(), 3);
}

#[tokio::test]
async fn test_client_error_returned_without_retry() {
    for status in [400u16, 401, 403, 404, 500, 502] {
        let transport = ScriptedTransport::new(vec![json_response(
            status,
            r#"{"message": "Missing Access", "code": 50001}"#,
        )]);
        let client = scripted_client(transport.clone());

        let result: ApiResult<Value> = client
            .request(RequestDescriptor::get("/channels/1"))
            .await
            .unwrap();
        assert_eq!(result.unwrap_err().code, 50001, "status {}", status);
        assert_eq!(transport.calls(), 1);
    }
}

#[tokio::test]
async fn test_malformed_error_body_is_a_fault() {
    let transport = ScriptedTransport::new(vec![json_response(502, "Bad Gateway")]);
    let client = scripted_client(transport);

    let err = client
        .request::<Value>(RequestDescriptor::get("/channels/1"))
        .await
        .unwrap_err();
    match err {
        HttpError::Decode { status, body, .. } => {
            assert_eq!(status, 502);
            assert_eq!(body, "Bad Gateway");
        }
        other => panic!("expected decode error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_identical_calls_are_independent() {
    let transport = ScriptedTransport::new(vec![
        json_response(200, r#"{"id":"1"}"#),
        json_response(200, r#"{"id":"1"}"#),
    ]);
    let client = scripted_client(transport.clone());

    let (a, b) = tokio::join!(
        client.request::<Value>(RequestDescriptor::get("/channels/1")),
        client.request::<Value>(RequestDescriptor::get("/channels/1")),
    );
    assert_eq!(a.unwrap(), b.unwrap());
    assert_eq!(transport.calls(), 2);
}

#[tokio::test]
async fn test_headers_on_every_request() {
    let transport = ScriptedTransport::new(vec![json_response(200, "{}")]);
    let client = scripted_client(transport.clone());

    let _: ApiResult<Value> = client
        .request(RequestDescriptor::get("/users/@me"))
        .await
        .unwrap();

    let request = &transport.requests()[0];
    assert_eq!(request.url, "https://discord.com/api/v10/users/@me");
    assert_eq!(request.headers["authorization"], "Bot T");
    assert_eq!(request.headers["user-agent"], "Bot (, v0.0.1)");
    assert_eq!(request.headers["content-type"], "application/json; charset=UTF-8");
}

#[tokio::test]
async fn test_empty_path_rejected_before_sending() {
    let transport = ScriptedTransport::new(Vec::new());
    let client = scripted_client(transport.clone());

    let err = client
        .request::<Value>(RequestDescriptor::get(""))
        .await
        .unwrap_err();
    assert!(matches!(err, HttpError::InvalidPath));
    assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn test_error_body_without_code_is_a_failure() {
    let transport = ScriptedTransport::new(vec![json_response(
        405,
        r#"{"message": "405: Method Not Allowed"}"#,
    )]);
    let client = scripted_client(transport.clone());

    let result: ApiResult<Value> = client
        .request(RequestDescriptor::patch("/channels/1"))
        .await
        .unwrap();
    let err = result.unwrap_err();
    assert_eq!(err.message, "405: Method Not Allowed");
    assert_eq!(err.code, 0);
    assert_eq!(transport.calls(), 1);
}

#[test]
fn test_oversized_fallback_delay_rejected_by_client() {
    let mut config = ClientConfig::default();
    config.retries.fallback_delay_secs = 1e30;
    let err = Client::with_transport("T", config, ScriptedTransport::new(Vec::new())).unwrap_err();
    assert!(matches!(err, HttpError::Config(_)));
}
