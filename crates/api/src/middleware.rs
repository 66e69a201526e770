use std::time::Instant;

use axum::middleware::Next;
use axum::response::Response;
use uuid::Uuid;

/// Request id attached to every request's extensions.
#[derive(Debug, Copy, Clone)]
pub struct RequestId(pub Uuid);

/// Assign a request id and log one line per handled request.
pub async fn trace_requests(
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let request_id = Uuid::now_v7();
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    req.extensions_mut().insert(RequestId(request_id));

    let started = Instant::now();
    let response = next.run(req).await;

    tracing::info!(
        %request_id,
        %method,
        path,
        status = response.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "request handled"
    );

    response
}
