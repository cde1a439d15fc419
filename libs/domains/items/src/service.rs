//! Item Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{ItemError, ItemResult};
use crate::models::{CreateItem, Item, ItemChanges, ItemFilter, NewItem, UpdateItem};
use crate::repository::ItemRepository;

/// Item service providing business logic operations
///
/// Validates request bodies and turns them into repository inputs. Each
/// operation makes exactly one repository call.
pub struct ItemService<R: ItemRepository> {
    repository: Arc<R>,
}

impl<R: ItemRepository> ItemService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List items, newest first, optionally filtered by status label
    #[instrument(skip(self))]
    pub async fn list_items(&self, filter: ItemFilter) -> ItemResult<Vec<Item>> {
        self.repository.list(filter).await
    }

    #[instrument(skip(self))]
    pub async fn get_item(&self, id: Uuid) -> ItemResult<Item> {
        self.repository.get_by_id(id).await
    }

    /// Create an item; status defaults to `Masuk`
    #[instrument(skip(self, input))]
    pub async fn create_item(&self, input: CreateItem) -> ItemResult<Item> {
        input.validate_fields().map_err(ItemError::Validation)?;

        let new_item = NewItem::try_from(input)?;
        self.repository.create(new_item).await
    }

    /// Apply a partial update; only supplied fields change
    #[instrument(skip(self, input))]
    pub async fn update_item(&self, id: Uuid, input: UpdateItem) -> ItemResult<Item> {
        if input.is_empty() {
            return Err(ItemError::EmptyUpdate);
        }

        input.validate_fields().map_err(ItemError::Validation)?;

        let changes = ItemChanges::try_from(input)?;
        self.repository.update(id, changes).await
    }

    /// Delete an item, returning it as it was before deletion
    #[instrument(skip(self))]
    pub async fn delete_item(&self, id: Uuid) -> ItemResult<Item> {
        self.repository.delete(id).await
    }
}

impl<R: ItemRepository> Clone for ItemService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
