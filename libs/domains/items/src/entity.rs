use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::ItemError;
use crate::models::{Item, ItemChanges, NewItem};

/// Sea-ORM Entity for the items table
///
/// `status` is stored as plain text guarded by a CHECK constraint, so the
/// list filter can compare raw labels.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub customer_name: String,
    #[sea_orm(column_type = "Text")]
    pub brand: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub color: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub size: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub service_type: String,
    #[sea_orm(column_type = "Text")]
    pub status: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// Conversion from Sea-ORM Model to domain Item
impl TryFrom<Model> for Item {
    type Error = ItemError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let status = model.status.parse().map_err(|_| {
            ItemError::Internal(format!(
                "Unknown status '{}' stored for item {}",
                model.status, model.id
            ))
        })?;

        Ok(Self {
            id: model.id,
            customer_name: model.customer_name,
            brand: model.brand,
            color: model.color,
            size: model.size,
            service_type: model.service_type,
            status,
            notes: model.notes,
            created_at: model.created_at.into(),
        })
    }
}

// Conversion from a validated create request to Sea-ORM ActiveModel
impl From<NewItem> for ActiveModel {
    fn from(input: NewItem) -> Self {
        ActiveModel {
            id: Set(Uuid::now_v7()),
            customer_name: Set(input.customer_name),
            brand: Set(input.brand),
            color: Set(input.color),
            size: Set(input.size),
            service_type: Set(input.service_type),
            status: Set(input.status.to_string()),
            notes: Set(input.notes),
            created_at: Set(chrono::Utc::now().into()),
        }
    }
}

impl ItemChanges {
    /// ActiveModel for `id` with only the supplied columns marked as set
    pub fn into_active_model(self, id: Uuid) -> ActiveModel {
        let mut model = ActiveModel {
            id: Set(id),
            ..Default::default()
        };

        if let Some(customer_name) = self.customer_name {
            model.customer_name = Set(customer_name);
        }
        if let Some(brand) = self.brand {
            model.brand = Set(brand);
        }
        if let Some(color) = self.color {
            model.color = Set(color);
        }
        if let Some(size) = self.size {
            model.size = Set(size);
        }
        if let Some(service_type) = self.service_type {
            model.service_type = Set(service_type);
        }
        if let Some(status) = self.status {
            model.status = Set(status.to_string());
        }
        if let Some(notes) = self.notes {
            model.notes = Set(notes);
        }

        model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ItemStatus;
    use sea_orm::ActiveValue::NotSet;

    fn model(status: &str) -> Model {
        Model {
            id: Uuid::now_v7(),
            customer_name: "Budi".to_string(),
            brand: "Nike".to_string(),
            color: None,
            size: Some("42".to_string()),
            service_type: "Cuci Sepatu".to_string(),
            status: status.to_string(),
            notes: None,
            created_at: chrono::Utc::now().into(),
        }
    }

    #[test]
    fn test_model_converts_to_item() {
        let item = Item::try_from(model("Proses")).unwrap();
        assert_eq!(item.status, ItemStatus::Proses);
        assert_eq!(item.size.as_deref(), Some("42"));
    }

    #[test]
    fn test_unknown_stored_status_is_internal_error() {
        let result = Item::try_from(model("Hilang"));
        assert!(matches!(result, Err(ItemError::Internal(_))));
    }

    #[test]
    fn test_changes_set_only_supplied_columns() {
        let id = Uuid::now_v7();
        let active = ItemChanges {
            status: Some(ItemStatus::Selesai),
            notes: Some(None),
            ..Default::default()
        }
        .into_active_model(id);

        assert_eq!(active.id, Set(id));
        assert_eq!(active.status, Set("Selesai".to_string()));
        assert_eq!(active.notes, Set(None));
        assert_eq!(active.brand, NotSet);
        assert_eq!(active.created_at, NotSet);
    }
}
