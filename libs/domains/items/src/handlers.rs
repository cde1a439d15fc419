use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    JsonBody, UuidPath,
    errors::responses::{
        BadRequestUuidResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
};
use serde::Serialize;
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};

use crate::error::ItemResult;
use crate::models::{CreateItem, Item, ItemFilter, ItemStatus, UpdateItem};
use crate::repository::ItemRepository;
use crate::service::ItemService;

/// Single item envelope: `{"data": Item}`
#[derive(Debug, Serialize, ToSchema)]
pub struct ItemResponse {
    pub data: Item,
}

/// Item list envelope: `{"data": [Item]}`
#[derive(Debug, Serialize, ToSchema)]
pub struct ItemListResponse {
    pub data: Vec<Item>,
}

/// Delete envelope carrying the removed row
#[derive(Debug, Serialize, ToSchema)]
pub struct DeletedItemResponse {
    pub data: Item,
    pub deleted: bool,
}

/// OpenAPI documentation for Items API
#[derive(OpenApi)]
#[openapi(
    paths(list_items, create_item, get_item, update_item, delete_item),
    components(
        schemas(
            Item,
            ItemStatus,
            CreateItem,
            UpdateItem,
            ItemFilter,
            ItemResponse,
            ItemListResponse,
            DeletedItemResponse
        ),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Items", description = "Shoe wash intake records")
    )
)]
pub struct ApiDoc;

/// Create the items router with all HTTP endpoints
pub fn router<R: ItemRepository + 'static>(service: ItemService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_items).post(create_item))
        .route(
            "/{id}",
            get(get_item).patch(update_item).delete(delete_item),
        )
        .with_state(shared_service)
}

/// List items, newest first
#[utoipa::path(
    get,
    path = "",
    tag = "Items",
    params(ItemFilter),
    responses(
        (status = 200, description = "Items ordered by created_at descending", body = ItemListResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_items<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    Query(filter): Query<ItemFilter>,
) -> ItemResult<Json<ItemListResponse>> {
    let data = service.list_items(filter).await?;
    Ok(Json(ItemListResponse { data }))
}

/// Register a new item
#[utoipa::path(
    post,
    path = "",
    tag = "Items",
    request_body = CreateItem,
    responses(
        (status = 201, description = "Item created", body = ItemResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    JsonBody(input): JsonBody<CreateItem>,
) -> ItemResult<impl IntoResponse> {
    let data = service.create_item(input).await?;
    Ok((StatusCode::CREATED, Json(ItemResponse { data })))
}

/// Fetch a single item
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Items",
    params(
        ("id" = Uuid, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item found", body = ItemResponse),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    UuidPath(id): UuidPath,
) -> ItemResult<Json<ItemResponse>> {
    let data = service.get_item(id).await?;
    Ok(Json(ItemResponse { data }))
}

/// Partially update an item
#[utoipa::path(
    patch,
    path = "/{id}",
    tag = "Items",
    params(
        ("id" = Uuid, Path, description = "Item ID")
    ),
    request_body = UpdateItem,
    responses(
        (status = 200, description = "Item updated", body = ItemResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    UuidPath(id): UuidPath,
    JsonBody(input): JsonBody<UpdateItem>,
) -> ItemResult<Json<ItemResponse>> {
    let data = service.update_item(id, input).await?;
    Ok(Json(ItemResponse { data }))
}

/// Delete an item and return it
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Items",
    params(
        ("id" = Uuid, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item deleted", body = DeletedItemResponse),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    UuidPath(id): UuidPath,
) -> ItemResult<Json<DeletedItemResponse>> {
    let data = service.delete_item(id).await?;
    Ok(Json(DeletedItemResponse {
        data,
        deleted: true,
    }))
}
