mod helpers;

use std::time::Duration;

use axum::http::StatusCode;

use tika_remote_reader::application::ports::{TextExtractor, TextExtractorError};
use tika_remote_reader::infrastructure::tika::TikaServerClient;
use tika_remote_reader::presentation::config::ServiceConfig;

#[test]
fn given_endpoint_with_trailing_slash_when_building_url_then_joins_tika_path_once() {
    let config = ServiceConfig::parse("http://localhost:9998/").unwrap();

    let client = TikaServerClient::new(&config).unwrap();

    assert_eq!(client.url(), "http://localhost:9998/tika");
}

#[test]
fn given_endpoint_with_base_path_when_building_url_then_keeps_base_path() {
    let config = ServiceConfig::parse("https://tika.internal/extract").unwrap();

    let client = TikaServerClient::new(&config).unwrap();

    assert_eq!(client.url(), "https://tika.internal/extract/tika");
}

#[test]
fn given_timeout_when_constructing_client_then_builds_without_error() {
    let config = ServiceConfig::builder()
        .endpoint("http://localhost:9998")
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap();

    assert!(TikaServerClient::new(&config).is_ok());
}

#[tokio::test]
async fn given_text_plain_server_when_extracting_then_returns_body_text() {
    let endpoint = helpers::spawn_echo_tika().await;
    let client = TikaServerClient::new(&ServiceConfig::parse(&endpoint).unwrap()).unwrap();

    let text = client.extract_text(b"hello tika".to_vec()).await.unwrap();

    assert_eq!(text.as_deref(), Some("hello tika"));
}

#[tokio::test]
async fn given_no_content_status_when_extracting_then_returns_none() {
    let endpoint = helpers::spawn_tika_with_status(StatusCode::NO_CONTENT, "").await;
    let client = TikaServerClient::new(&ServiceConfig::parse(&endpoint).unwrap()).unwrap();

    let text = client.extract_text(Vec::new()).await.unwrap();

    assert!(text.is_none());
}

#[tokio::test]
async fn given_server_error_when_extracting_then_returns_unexpected_status() {
    let endpoint =
        helpers::spawn_tika_with_status(StatusCode::INTERNAL_SERVER_ERROR, "boom").await;
    let client = TikaServerClient::new(&ServiceConfig::parse(&endpoint).unwrap()).unwrap();

    let result = client.extract_text(b"data".to_vec()).await;

    assert!(matches!(
        result,
        Err(TextExtractorError::UnexpectedStatus { status: 500, .. })
    ));
}

#[tokio::test]
async fn given_server_without_tika_route_when_extracting_then_returns_not_found_status() {
    let endpoint = helpers::spawn_document_host().await;
    let client = TikaServerClient::new(&ServiceConfig::parse(&endpoint).unwrap()).unwrap();

    let result = client.extract_text(b"data".to_vec()).await;

    assert!(matches!(
        result,
        Err(TextExtractorError::UnexpectedStatus { status: 404, .. })
    ));
}

#[tokio::test]
async fn given_closed_port_when_extracting_then_returns_request_error() {
    let endpoint = helpers::unreachable_endpoint().await;
    let client = TikaServerClient::new(&ServiceConfig::parse(&endpoint).unwrap()).unwrap();

    let result = client.extract_text(b"data".to_vec()).await;

    assert!(matches!(result, Err(TextExtractorError::Request(_))));
}
