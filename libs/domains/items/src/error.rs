use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::DbErr;
use thiserror::Error;
use uuid::Uuid;
use validator::ValidationErrors;

use crate::models::ItemStatus;

pub const REQUIRED_FIELDS_MESSAGE: &str = "Field wajib: customer_name, brand, service_type";
pub const NO_FIELDS_TO_UPDATE_MESSAGE: &str = "Tidak ada field yang ingin diperbarui";

const REQUIRED_FIELDS: [&str; 3] = ["customer_name", "brand", "service_type"];

#[derive(Debug, Error)]
pub enum ItemError {
    #[error("Item not found: {0}")]
    NotFound(Uuid),

    #[error("Invalid input: {0}")]
    Validation(ValidationErrors),

    #[error("No fields to update")]
    EmptyUpdate,

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ItemResult<T> = Result<T, ItemError>;

/// Message for an invalid status, listing every accepted label
pub fn invalid_status_message() -> String {
    format!(
        "Status tidak valid. Gunakan salah satu: {}",
        ItemStatus::labels()
    )
}

/// Picks the user-facing message for a set of field errors.
///
/// Missing required fields take precedence over an invalid status.
fn validation_message(errors: &ValidationErrors) -> String {
    let fields = errors.field_errors();
    if REQUIRED_FIELDS.iter().any(|field| fields.contains_key(*field)) {
        REQUIRED_FIELDS_MESSAGE.to_string()
    } else if fields.contains_key("status") {
        invalid_status_message()
    } else {
        axum_helpers::errors::messages::VALIDATION_FAILED.to_string()
    }
}

/// Convert ItemError to AppError for standardized error responses
impl From<ItemError> for AppError {
    fn from(err: ItemError) -> Self {
        match err {
            ItemError::NotFound(id) => {
                tracing::debug!(item_id = %id, "Item not found");
                AppError::NotFound(axum_helpers::errors::messages::NOT_FOUND_RESOURCE.to_string())
            }
            ItemError::Validation(errors) => AppError::Validation {
                message: validation_message(&errors),
                errors,
            },
            ItemError::EmptyUpdate => AppError::BadRequest(NO_FIELDS_TO_UPDATE_MESSAGE.to_string()),
            ItemError::Database(msg) => AppError::InternalServerError(msg),
            ItemError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for ItemError {
    fn into_response(self) -> Response {
        // Convert to AppError for the standardized error response format
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<DbErr> for ItemError {
    fn from(err: DbErr) -> Self {
        ItemError::Database(err.to_string())
    }
}
