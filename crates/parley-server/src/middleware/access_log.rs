use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Logs every request the relay serves, API calls and static assets alike.
///
/// Chat latency is dominated by the Bedrock round trip, so `elapsed_ms` on
/// `/api/chat` lines is effectively model latency.
pub async fn access_log(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().path().to_string();
    let started = std::time::Instant::now();

    let response = next.run(req).await;

    let status = response.status().as_u16();
    tracing::info!(
        method = %method,
        path = %uri,
        status = status,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "http_request"
    );

    response
}
