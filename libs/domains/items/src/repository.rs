use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{ItemError, ItemResult};
use crate::models::{Item, ItemChanges, ItemFilter, NewItem};

/// Repository trait for Item persistence
///
/// Every single-row operation reports a missing row as
/// [`ItemError::NotFound`]; any other storage failure is
/// [`ItemError::Database`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// List items, newest first, optionally restricted to one status label
    async fn list(&self, filter: ItemFilter) -> ItemResult<Vec<Item>>;

    /// Get an item by ID
    async fn get_by_id(&self, id: Uuid) -> ItemResult<Item>;

    /// Insert a new item and return the stored row
    async fn create(&self, input: NewItem) -> ItemResult<Item>;

    /// Apply the given changes and return the updated row
    async fn update(&self, id: Uuid, changes: ItemChanges) -> ItemResult<Item>;

    /// Delete an item and return the row as it was before deletion
    async fn delete(&self, id: Uuid) -> ItemResult<Item>;
}

/// In-memory implementation of ItemRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryItemRepository {
    items: Arc<RwLock<HashMap<Uuid, Item>>>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self {
            items: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn list(&self, filter: ItemFilter) -> ItemResult<Vec<Item>> {
        let items = self.items.read().await;

        let mut result: Vec<Item> = items
            .values()
            .filter(|item| match filter.status() {
                Some(status) => item.status.to_string() == status,
                None => true,
            })
            .cloned()
            .collect();

        // Sort by created_at descending (newest first)
        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(result)
    }

    async fn get_by_id(&self, id: Uuid) -> ItemResult<Item> {
        let items = self.items.read().await;
        items.get(&id).cloned().ok_or(ItemError::NotFound(id))
    }

    async fn create(&self, input: NewItem) -> ItemResult<Item> {
        let mut items = self.items.write().await;

        let item = Item::new(input);
        items.insert(item.id, item.clone());

        tracing::info!(item_id = %item.id, "Created item");
        Ok(item)
    }

    async fn update(&self, id: Uuid, changes: ItemChanges) -> ItemResult<Item> {
        let mut items = self.items.write().await;

        let item = items.get_mut(&id).ok_or(ItemError::NotFound(id))?;
        item.apply_changes(changes);

        tracing::info!(item_id = %id, "Updated item");
        Ok(item.clone())
    }

    async fn delete(&self, id: Uuid) -> ItemResult<Item> {
        let mut items = self.items.write().await;

        let item = items.remove(&id).ok_or(ItemError::NotFound(id))?;

        tracing::info!(item_id = %id, "Deleted item");
        Ok(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ItemStatus;

    fn new_item(customer_name: &str, status: ItemStatus) -> NewItem {
        NewItem {
            customer_name: customer_name.to_string(),
            brand: "Nike".to_string(),
            color: None,
            size: None,
            service_type: "Cuci Sepatu".to_string(),
            status,
            notes: None,
        }
    }

    #[tokio::test]
    async fn test_create_and_get_item() {
        let repo = InMemoryItemRepository::new();

        let item = repo.create(new_item("Budi", ItemStatus::Masuk)).await.unwrap();
        assert_eq!(item.customer_name, "Budi");

        let fetched = repo.get_by_id(item.id).await.unwrap();
        assert_eq!(fetched, item);
    }

    #[tokio::test]
    async fn test_get_missing_item_is_not_found() {
        let repo = InMemoryItemRepository::new();
        let id = Uuid::now_v7();

        let result = repo.get_by_id(id).await;
        assert!(matches!(result, Err(ItemError::NotFound(missing)) if missing == id));
    }

    #[tokio::test]
    async fn test_list_filters_by_status_newest_first() {
        let repo = InMemoryItemRepository::new();
        let first = repo.create(new_item("Budi", ItemStatus::Selesai)).await.unwrap();
        repo.create(new_item("Sari", ItemStatus::Proses)).await.unwrap();
        let third = repo.create(new_item("Andi", ItemStatus::Selesai)).await.unwrap();

        let done = repo.list(ItemFilter::with_status("Selesai")).await.unwrap();
        assert_eq!(done.len(), 2);
        assert!(done.iter().all(|item| item.status == ItemStatus::Selesai));
        assert!(done[0].created_at >= done[1].created_at);
        assert!([first.id, third.id].contains(&done[0].id));

        let all = repo.list(ItemFilter::default()).await.unwrap();
        assert_eq!(all.len(), 3);
        assert!(all.windows(2).all(|w| w[0].created_at >= w[1].created_at));
    }

    #[tokio::test]
    async fn test_list_with_unknown_status_is_empty() {
        let repo = InMemoryItemRepository::new();
        repo.create(new_item("Budi", ItemStatus::Masuk)).await.unwrap();

        let items = repo.list(ItemFilter::with_status("Hilang")).await.unwrap();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_delete_returns_prior_row_once() {
        let repo = InMemoryItemRepository::new();
        let item = repo.create(new_item("Budi", ItemStatus::Masuk)).await.unwrap();

        let deleted = repo.delete(item.id).await.unwrap();
        assert_eq!(deleted, item);

        let again = repo.delete(item.id).await;
        assert!(matches!(again, Err(ItemError::NotFound(_))));
    }
}
