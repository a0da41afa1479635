//! Request logging middleware
//!
//! Two verbosity tiers: every request gets one compact line with method,
//! path, status, response size and timing; create (POST) requests
//! additionally carry a serialized copy of the request body. The POST body
//! is buffered and the request reconstructed so extractors downstream
//! still see it.

use std::time::Instant;

use axum::body::Body;
use axum::extract::Request;
use axum::http::header::CONTENT_LENGTH;
use axum::http::Method;
use axum::middleware::Next;
use axum::response::Response;

pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    let (request, request_body) = if method == Method::POST {
        let (parts, body) = request.into_parts();
        let bytes = axum::body::to_bytes(body, usize::MAX)
            .await
            .unwrap_or_default();
        let text = String::from_utf8_lossy(&bytes).into_owned();
        (Request::from_parts(parts, Body::from(bytes)), Some(text))
    } else {
        (request, None)
    };

    let response = next.run(request).await;

    let status = response.status().as_u16();
    let content_length = response
        .headers()
        .get(CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("-")
        .to_string();
    let elapsed_ms = start.elapsed().as_millis();

    match request_body {
        Some(body) => tracing::info!(
            method = %method,
            uri = %uri,
            status = status,
            content_length = %content_length,
            elapsed_ms = elapsed_ms,
            body = %body,
            "request"
        ),
        None => tracing::info!(
            method = %method,
            uri = %uri,
            status = status,
            content_length = %content_length,
            elapsed_ms = elapsed_ms,
            "request"
        ),
    }

    response
}
