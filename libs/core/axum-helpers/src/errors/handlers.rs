use axum::response::{IntoResponse, Response};

use super::{AppError, messages};

/// Fallback handler for unknown routes
pub async fn not_found() -> Response {
    AppError::NotFound(messages::ROUTE_NOT_FOUND.to_string()).into_response()
}
