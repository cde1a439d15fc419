use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    TransactionTrait,
};
use tracing::instrument;
use uuid::Uuid;

use crate::{
    entity,
    error::{ItemError, ItemResult},
    models::{Item, ItemChanges, ItemFilter, NewItem},
    repository::ItemRepository,
};

/// PostgreSQL implementation of [`ItemRepository`]
#[derive(Clone)]
pub struct PgItemRepository {
    db: DatabaseConnection,
}

impl PgItemRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ItemRepository for PgItemRepository {
    #[instrument(skip(self))]
    async fn list(&self, filter: ItemFilter) -> ItemResult<Vec<Item>> {
        let mut query = entity::Entity::find();

        if let Some(status) = filter.status() {
            query = query.filter(entity::Column::Status.eq(status));
        }

        let models = query
            .order_by_desc(entity::Column::CreatedAt)
            .all(&self.db)
            .await?;

        models.into_iter().map(Item::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: Uuid) -> ItemResult<Item> {
        entity::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(ItemError::NotFound(id))?
            .try_into()
    }

    #[instrument(skip(self, input))]
    async fn create(&self, input: NewItem) -> ItemResult<Item> {
        let active_model: entity::ActiveModel = input.into();
        let model = active_model.insert(&self.db).await?;

        tracing::info!(item_id = %model.id, "Created item");
        model.try_into()
    }

    #[instrument(skip(self, changes))]
    async fn update(&self, id: Uuid, changes: ItemChanges) -> ItemResult<Item> {
        let model = changes
            .into_active_model(id)
            .update(&self.db)
            .await
            .map_err(|err| match err {
                DbErr::RecordNotUpdated => ItemError::NotFound(id),
                other => other.into(),
            })?;

        tracing::info!(item_id = %id, "Updated item");
        model.try_into()
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> ItemResult<Item> {
        let txn = self.db.begin().await?;

        let model = entity::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(ItemError::NotFound(id))?;
        entity::Entity::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        tracing::info!(item_id = %id, "Deleted item");
        model.try_into()
    }
}
