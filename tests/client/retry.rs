use httpmock::Method::GET;
use httpmock::MockServer;
use std::time::Duration;
use stockdex_rs::{Backoff, Digrin, RetryConfig, SdClient, SdError};
use url::Url;

use crate::common::SYMBOL;

fn client_with_retries(server: &MockServer, max_retries: u32) -> SdClient {
    let mut cfg = RetryConfig::default();
    cfg.backoff = Backoff::Fixed(Duration::from_millis(1));
    cfg.max_retries = max_retries;

    SdClient::builder()
        .base_digrin(Url::parse(&format!("{}/stocks/detail/", server.base_url())).unwrap())
        .retry_config(cfg)
        .build()
        .unwrap()
}

#[tokio::test]
async fn persistent_5xx_is_retried_up_to_the_limit() {
    let server = MockServer::start();
    let fail = server.mock(|when, then| {
        when.method(GET).path(format!("/stocks/detail/{SYMBOL}"));
        then.status(503).body("Service Unavailable");
    });

    let max_retries = 3;
    let client = client_with_retries(&server, max_retries);
    let result = Digrin::new(&client, SYMBOL).dividend().await;

    // 1 initial attempt + 3 retries
    fail.assert_calls((max_retries + 1) as usize);
    match result {
        Err(SdError::Status { status, .. }) => assert_eq!(status, 503),
        other => panic!("expected Status 503 after retries, got {other:?}"),
    }
}

#[tokio::test]
async fn non_retryable_status_is_returned_at_once() {
    let server = MockServer::start();
    let missing = server.mock(|when, then| {
        when.method(GET).path(format!("/stocks/detail/{SYMBOL}/price"));
        then.status(404).body("not here");
    });

    let client = client_with_retries(&server, 3);
    let err = Digrin::new(&client, SYMBOL).price().await.unwrap_err();

    missing.assert_calls(1);
    assert!(matches!(err, SdError::Status { status: 404, .. }), "got {err:?}");
}

#[tokio::test]
async fn disabled_retries_send_a_single_request() {
    let server = MockServer::start();
    let fail = server.mock(|when, then| {
        when.method(GET).path(format!("/stocks/detail/{SYMBOL}/dgr10"));
        then.status(503);
    });

    let client = SdClient::builder()
        .base_digrin(Url::parse(&format!("{}/stocks/detail/", server.base_url())).unwrap())
        .retry_config(RetryConfig::disabled())
        .build()
        .unwrap();
    let err = Digrin::new(&client, SYMBOL).dgr10().await.unwrap_err();

    fail.assert_calls(1);
    assert!(matches!(err, SdError::Status { status: 503, .. }));
}

#[tokio::test]
async fn successful_response_is_not_retried() {
    let server = MockServer::start();
    let ok = server.mock(|when, then| {
        when.method(GET).path(format!("/stocks/detail/{SYMBOL}"));
        then.status(200).body(
            "<table><thead><tr><th>Ex-dividend date</th></tr></thead>\
             <tbody><tr><td>Dec. 31, 2023</td></tr></tbody></table>",
        );
    });

    let client = client_with_retries(&server, 3);
    let table = Digrin::new(&client, SYMBOL).dividend().await.unwrap();

    ok.assert_calls(1);
    assert_eq!(table.len(), 1);
}

#[tokio::test]
async fn connection_errors_are_retried_then_surfaced() {
    // Port 1 is reserved and refuses connections.
    let base = "http://127.0.0.1:1/stocks/detail/";

    let mut cfg = RetryConfig::default();
    cfg.backoff = Backoff::Fixed(Duration::from_millis(1));
    cfg.max_retries = 2;
    let client = SdClient::builder()
        .base_digrin(Url::parse(base).unwrap())
        .retry_config(cfg)
        .build()
        .unwrap();

    let err = Digrin::new(&client, SYMBOL).dividend().await.unwrap_err();
    assert!(matches!(err, SdError::Http(_)), "got {err:?}");
}
