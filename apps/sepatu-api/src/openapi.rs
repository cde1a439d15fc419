//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for all APIs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Sepatu Wash API",
        version = "1.0.0",
        description = "REST API for tracking shoes checked in at the Sepatu Wash shop"
    ),
    servers(
        (url = "http://localhost:3001", description = "Local development server")
    ),
    components(
        schemas(axum_helpers::ErrorResponse, axum_helpers::HealthResponse)
    ),
    nest(
        (path = "/items", api = domain_items::ApiDoc)
    ),
    tags(
        (name = "Items", description = "Shoe wash intake records")
    )
)]
pub struct ApiDoc;
