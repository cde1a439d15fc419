//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "error": {
            "message": "Terjadi kesalahan pada server",
            "details": "connection reset by peer"
        }
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Validation Error",
    content_type = "application/json",
    example = json!({
        "error": {
            "message": "Field wajib: customer_name, brand, service_type",
            "details": {
                "customer_name": [{
                    "code": "required",
                    "message": null,
                    "params": {"value": null}
                }]
            }
        }
    })
)]
pub struct BadRequestValidationResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Invalid UUID",
    content_type = "application/json",
    example = json!({
        "error": {
            "message": "Format ID tidak valid",
            "details": "not-a-uuid"
        }
    })
)]
pub struct BadRequestUuidResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "error": {
            "message": "Data tidak ditemukan"
        }
    })
)]
pub struct NotFoundResponse(pub ErrorResponse);
