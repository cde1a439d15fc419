//! Items API routes
//!
//! This module wires up the items domain to HTTP routes.

use axum::Router;
use domain_items::{ItemService, PgItemRepository, handlers};

use crate::state::AppState;

/// Create items router backed by PostgreSQL
pub fn router(state: &AppState) -> Router {
    let repository = PgItemRepository::new(state.db.clone());
    let service = ItemService::new(repository);

    handlers::router(service)
}
