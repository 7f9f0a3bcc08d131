use crate::interface_adapters::protocol::ErrorResponse;
use axum::{Json, http::StatusCode};

// Keep unknown routes on the same JSON error schema as the rest of the API.
pub async fn not_found() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "route not found".to_string(),
        }),
    )
}
