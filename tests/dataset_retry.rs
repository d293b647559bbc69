//! Resiliency tests for the dataset fetch: selective retry with backoff,
//! terminal parse failures, and retry exhaustion.
//!
//! These drive a minimal local TCP server so the real reqwest/tokio-retry
//! path is exercised, including genuine connection failures.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use pixel_status::dataset::fetch_dataset;
use pixel_status::error_handling::{LoadError, LoadErrorKind};
use pixel_status::initialization::init_client;

const VALID_BODY: &str = r#"{
    "metadata": {"totalAreas": 1},
    "areas": [{"domain": "a.com"}]
}"#;

/// Serves `body` after dropping the first `failures` connections.
///
/// Returns the server URL and the connection counter.
async fn spawn_flaky_server(failures: u32, body: &'static str) -> (String, Arc<AtomicU32>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("listener addr");
    let hits = Arc::new(AtomicU32::new(0));
    let hits_for_server = Arc::clone(&hits);

    tokio::spawn(async move {
        loop {
            let (mut socket, _) = match listener.accept().await {
                Ok(conn) => conn,
                Err(_) => break,
            };
            let attempt = hits_for_server.fetch_add(1, Ordering::SeqCst) + 1;
            if attempt <= failures {
                // Close without answering: the client sees a connection
                // reset, a retriable network failure
                drop(socket);
                continue;
            }

            let mut request = [0u8; 1024];
            let _ = socket.read(&mut request).await;
            let response = format!(
                "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                body.len(),
                body
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });

    (format!("http://{addr}/dataset.json"), hits)
}

#[tokio::test]
async fn fetch_succeeds_first_try_with_zero_retries() {
    let (url, hits) = spawn_flaky_server(0, VALID_BODY).await;
    let client = init_client(Duration::from_secs(5)).unwrap();

    let outcome = fetch_dataset(&client, &url).await.unwrap();
    assert_eq!(outcome.retry_count, 0);
    assert_eq!(outcome.document.areas.len(), 1);
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn fetch_failing_twice_succeeds_on_third_attempt() {
    let (url, hits) = spawn_flaky_server(2, VALID_BODY).await;
    let client = init_client(Duration::from_secs(5)).unwrap();

    let outcome = fetch_dataset(&client, &url).await.unwrap();
    // Two automatic retries, then success; no error surfaced
    assert_eq!(outcome.retry_count, 2);
    assert_eq!(outcome.document.metadata.total_areas, 1);
    assert_eq!(hits.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn malformed_response_fails_immediately_without_retry() {
    let (url, hits) = spawn_flaky_server(0, "{ this is not json").await;
    let client = init_client(Duration::from_secs(5)).unwrap();

    let err = fetch_dataset(&client, &url).await.unwrap_err();
    assert!(matches!(err, LoadError::Parse(_)), "got: {err:?}");
    // No point retrying malformed data: exactly one request went out
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn structurally_invalid_document_is_terminal() {
    let (url, hits) =
        spawn_flaky_server(0, r#"{"metadata": {"totalAreas": 1}, "areas": []}"#).await;
    let client = init_client(Duration::from_secs(5)).unwrap();

    let err = fetch_dataset(&client, &url).await.unwrap_err();
    assert_eq!(err.kind(), LoadErrorKind::Validation);
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn fetch_gives_up_after_retries_exhausted() {
    // More failures than the schedule allows: 1 initial + 3 retries
    let (url, hits) = spawn_flaky_server(u32::MAX, VALID_BODY).await;
    let client = init_client(Duration::from_secs(5)).unwrap();

    let err = fetch_dataset(&client, &url).await.unwrap_err();
    assert_eq!(err.kind(), LoadErrorKind::Network);
    assert_eq!(hits.load(Ordering::SeqCst), 4);
}
