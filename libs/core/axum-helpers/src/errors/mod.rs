pub mod codes;
pub mod handlers;
pub mod messages;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Error envelope returned for every failed request.
///
/// ```json
/// {
///   "error": {
///     "message": "Field wajib: customer_name, brand, service_type",
///     "details": { "brand": [{ "code": "required", "message": null, "params": {} }] }
///   }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable message
    pub message: String,
    /// Optional structured context (field errors, underlying error text)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>, details: Option<Value>) -> Self {
        Self {
            error: ErrorBody {
                message: message.into(),
                details,
            },
        }
    }
}

/// Application error type that can be converted to HTTP responses.
///
/// Domain errors convert into this type; it owns the status mapping and the
/// JSON envelope.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Path extraction error: {0}")]
    PathExtractorRejection(#[from] PathRejection),

    #[error("Validation error: {message}")]
    Validation {
        message: String,
        errors: ValidationErrors,
    },

    #[error("Invalid UUID: {0}")]
    InvalidUuid(String),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            // Syntax, data and content-type rejections all surface as 400
            AppError::JsonExtractorRejection(_)
            | AppError::Validation { .. }
            | AppError::InvalidUuid(_)
            | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::PathExtractorRejection(e) => e.status(),
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::JsonExtractorRejection(_) => ErrorCode::InvalidJson,
            AppError::PathExtractorRejection(_) => ErrorCode::BadRequest,
            AppError::Validation { .. } => ErrorCode::ValidationError,
            AppError::InvalidUuid(_) => ErrorCode::InvalidUuid,
            AppError::BadRequest(_) => ErrorCode::BadRequest,
            AppError::NotFound(_) => ErrorCode::NotFound,
            AppError::InternalServerError(_) => ErrorCode::InternalError,
        }
    }

    fn into_error_response(self) -> ErrorResponse {
        match self {
            AppError::JsonExtractorRejection(e) => {
                ErrorResponse::new(messages::INVALID_JSON, Some(Value::String(e.body_text())))
            }
            AppError::PathExtractorRejection(e) => {
                ErrorResponse::new(e.body_text(), None)
            }
            AppError::Validation { message, errors } => {
                let details = serde_json::to_value(&errors).unwrap_or(Value::Null);
                ErrorResponse::new(message, Some(details))
            }
            AppError::InvalidUuid(raw) => {
                ErrorResponse::new(messages::INVALID_UUID, Some(Value::String(raw)))
            }
            AppError::BadRequest(msg) | AppError::NotFound(msg) => ErrorResponse::new(msg, None),
            AppError::InternalServerError(cause) => {
                ErrorResponse::new(messages::INTERNAL_ERROR, Some(Value::String(cause)))
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();

        if status.is_server_error() {
            tracing::error!(error_code = code.code(), error = %self, "Request failed");
        } else {
            tracing::info!(error_code = code.code(), error = %self, "Request rejected");
        }

        (status, Json(self.into_error_response())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use serde_json::json;
    use validator::ValidationError;

    async fn body_json(error: AppError) -> (StatusCode, Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_not_found_envelope_has_no_details() {
        let (status, body) = body_json(AppError::NotFound(messages::NOT_FOUND_RESOURCE.into())).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": { "message": "Data tidak ditemukan" } }));
    }

    #[tokio::test]
    async fn test_internal_error_carries_cause_in_details() {
        let (status, body) =
            body_json(AppError::InternalServerError("connection reset".into())).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["message"], "Terjadi kesalahan pada server");
        assert_eq!(body["error"]["details"], "connection reset");
    }

    #[tokio::test]
    async fn test_validation_error_lists_fields() {
        let mut errors = ValidationErrors::new();
        errors.add("brand", ValidationError::new("required"));

        let (status, body) = body_json(AppError::Validation {
            message: "Field wajib: customer_name, brand, service_type".into(),
            errors,
        })
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["error"]["message"],
            "Field wajib: customer_name, brand, service_type"
        );
        assert_eq!(body["error"]["details"]["brand"][0]["code"], "required");
    }

    #[tokio::test]
    async fn test_invalid_uuid_is_bad_request() {
        let (status, body) = body_json(AppError::InvalidUuid("abc".into())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], messages::INVALID_UUID);
        assert_eq!(body["error"]["details"], "abc");
    }

    #[test]
    fn test_status_and_code_mapping() {
        let error = AppError::InternalServerError("pool timed out".into());
        assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.code(), ErrorCode::InternalError);

        let error = AppError::BadRequest("Tidak ada field yang ingin diperbarui".into());
        assert_eq!(error.status(), StatusCode::BAD_REQUEST);
    }
}
