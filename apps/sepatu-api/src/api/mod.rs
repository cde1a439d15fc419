//! API routes module
//!
//! This module defines all HTTP API routes for the Sepatu Wash API.

pub mod health;
pub mod items;

use axum::Router;
use axum_helpers::server::health_router;

use crate::state::AppState;

/// Create all API routes
/// Note: docs, fallback and middleware are added by axum_helpers::create_router
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/items", items::router(state))
        .merge(health_router(state.config.app))
        .merge(health::router(state.clone()))
}
