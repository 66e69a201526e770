use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use lupin_store::StoreError;

/// Map a store failure to a 500 response.
///
/// No handler path terminates the process; every store failure becomes a
/// structured response.
pub fn store_error_to_response(err: StoreError) -> axum::response::Response {
    tracing::error!(error = %err, "store operation failed");
    json_error(
        StatusCode::INTERNAL_SERVER_ERROR,
        "store_error",
        err.to_string(),
    )
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
