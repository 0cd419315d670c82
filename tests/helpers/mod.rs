#![allow(dead_code)]

use axum::Router;
use axum::body::Bytes;
use axum::http::header::ACCEPT;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, put};
use tokio::net::TcpListener;

pub const REMOTE_DOCUMENT_BODY: &str = "Remote document body served over HTTP";

/// Serves `router` on an ephemeral local port and returns its base URL.
pub async fn spawn_router(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// Fake Tika server whose `PUT /tika` echoes the request body back as text.
pub async fn spawn_echo_tika() -> String {
    spawn_router(Router::new().route("/tika", put(echo_text))).await
}

/// Fake Tika server answering every document with the given status and body.
pub async fn spawn_tika_with_status(status: StatusCode, body: &'static str) -> String {
    spawn_router(Router::new().route("/tika", put(move || async move { (status, body) }))).await
}

/// Fake Tika server answering with the number of bytes it received.
pub async fn spawn_byte_counting_tika() -> String {
    spawn_router(Router::new().route(
        "/tika",
        put(|body: Bytes| async move { body.len().to_string() }),
    ))
    .await
}

/// Plain HTTP server exposing a document at `/doc/` and a 404 elsewhere.
pub async fn spawn_document_host() -> String {
    spawn_router(Router::new().route("/doc/", get(|| async { REMOTE_DOCUMENT_BODY }))).await
}

/// Base URL of a port nothing is listening on.
pub async fn unreachable_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

async fn echo_text(headers: HeaderMap, body: Bytes) -> (StatusCode, String) {
    let accepts_text = headers
        .get(ACCEPT)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value == "text/plain");

    if !accepts_text {
        return (StatusCode::NOT_ACCEPTABLE, String::new());
    }

    (StatusCode::OK, String::from_utf8_lossy(&body).into_owned())
}
