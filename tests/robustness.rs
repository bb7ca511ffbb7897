//! Robustness tests for the feed fetcher against a local HTTP responder.
//!
//! These tests verify status handling, charset selection and that every
//! failure mode surfaces as an error instead of a panic.

mod common;

use std::time::Duration;

use common::serve_once;
use unbound_blacklister::fetcher::{FeedSource, FetchError, Fetcher, USER_AGENT};

fn fetcher() -> Fetcher {
    Fetcher::new(Duration::from_secs(5))
}

#[tokio::test]
async fn test_fetch_sends_user_agent() {
    let (url, server) = serve_once("200 OK", Some("text/plain; charset=utf-8"), b"");
    fetcher().fetch_feed(&url).await.unwrap();

    let request = server.join().unwrap().to_lowercase();
    assert!(request.starts_with("get /hosts http/1.1"));
    assert!(
        request.contains(&format!("user-agent: {}", USER_AGENT.to_lowercase())),
        "request was: {}",
        request
    );
}

#[tokio::test]
async fn test_fetch_utf8_declared() {
    let body = "0.0.0.0 xn--80ak6aa92e.com # пример\n".as_bytes();
    let (url, server) = serve_once("200 OK", Some("text/plain; charset=UTF-8"), body);

    let text = fetcher().fetch_feed(&url).await.unwrap();
    server.join().unwrap();
    assert_eq!(text, "0.0.0.0 xn--80ak6aa92e.com # пример\n");
}

#[tokio::test]
async fn test_fetch_latin1_without_charset() {
    let (url, server) = serve_once("200 OK", Some("text/plain"), b"# caf\xe9\n");

    let text = fetcher().fetch_feed(&url).await.unwrap();
    server.join().unwrap();
    assert_eq!(text, "# café\n");
}

#[tokio::test]
async fn test_fetch_latin1_without_content_type() {
    let (url, server) = serve_once("200 OK", None, "é".as_bytes());

    let text = fetcher().fetch_feed(&url).await.unwrap();
    server.join().unwrap();
    assert_eq!(text, "Ã©");
}

#[tokio::test]
async fn test_fetch_not_found() {
    let (url, server) = serve_once("404 Not Found", Some("text/plain"), b"nope");

    let err = fetcher().fetch_feed(&url).await.unwrap_err();
    server.join().unwrap();
    assert!(matches!(err, FetchError::Status(404)));
    assert_eq!(err.to_string(), "HTTP status code: 404");
}

#[tokio::test]
async fn test_fetch_other_success_codes_rejected() {
    let (url, server) = serve_once("204 No Content", None, b"");

    let err = fetcher().fetch_feed(&url).await.unwrap_err();
    server.join().unwrap();
    assert!(matches!(err, FetchError::Status(204)));
}

#[tokio::test]
async fn test_fetch_connection_refused() {
    // Bind then drop to get a port nobody listens on
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();

    let err = fetcher()
        .fetch_feed(&format!("http://127.0.0.1:{}/hosts", port))
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::Transport(_)));
}

#[tokio::test]
async fn test_fetch_invalid_urls() {
    for url in ["not-a-url", "", "://missing.scheme"] {
        let err = fetcher().fetch_feed(url).await.unwrap_err();
        assert!(err.is_invalid_url(), "{} gave {:?}", url, err);
    }
}

#[tokio::test]
async fn test_fetch_unsupported_scheme() {
    let err = fetcher()
        .fetch_feed("ftp://invalid-scheme.example/hosts")
        .await
        .unwrap_err();
    assert!(!err.is_invalid_url());
}
