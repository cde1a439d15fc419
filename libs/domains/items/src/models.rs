use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::borrow::Cow;
use strum::{Display, EnumString};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::{ItemError, ItemResult};

/// Intake status of an item. Any status may follow any other.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    Default,
    ToSchema,
)]
pub enum ItemStatus {
    /// Shoes received at the counter
    #[default]
    Masuk,
    /// Being washed
    Proses,
    /// Washed, waiting for pickup
    Selesai,
    /// Picked up by the customer
    Diambil,
}

impl ItemStatus {
    pub const ALL: [ItemStatus; 4] = [
        ItemStatus::Masuk,
        ItemStatus::Proses,
        ItemStatus::Selesai,
        ItemStatus::Diambil,
    ];

    /// Comma-separated list of every status label, in lifecycle order
    pub fn labels() -> String {
        Self::ALL
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Custom validator for status labels; an explicit `null` is not a label
fn validate_status(status: Option<&str>) -> Result<(), ValidationError> {
    if status.and_then(|s| s.parse::<ItemStatus>().ok()).is_none() {
        let mut error = ValidationError::new("invalid_status").with_message(Cow::Owned(format!(
            "status must be one of: {}",
            ItemStatus::labels()
        )));
        error.add_param(Cow::Borrowed("allowed"), &ItemStatus::ALL);
        return Err(error);
    }
    Ok(())
}

/// Adds the status check to the derived field rules, keeping every field error.
///
/// Runs outside `#[validate]` because the derive skips `Some(None)`.
fn with_status_check(
    rules: Result<(), ValidationErrors>,
    status: Option<&Option<String>>,
) -> Result<(), ValidationErrors> {
    let mut errors = rules.err().unwrap_or_default();
    if let Some(status) = status {
        if let Err(error) = validate_status(status.as_deref()) {
            errors.add("status", error);
        }
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Distinguishes an explicit `null` (`Some(None)`) from an absent field (`None`)
fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Item entity - one pair of shoes checked in at the shop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    /// Unique identifier, assigned on insert
    pub id: Uuid,
    pub customer_name: String,
    pub brand: String,
    pub color: Option<String>,
    pub size: Option<String>,
    /// Requested service, e.g. "Cuci Sepatu"
    pub service_type: String,
    pub status: ItemStatus,
    pub notes: Option<String>,
    /// Insert timestamp, used for the default newest-first ordering
    pub created_at: DateTime<Utc>,
}

/// Request body for creating an item
///
/// Every field is optional at the serde level so that a missing field shows up
/// as a validation error naming it, not as a JSON rejection.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct CreateItem {
    #[validate(required, length(min = 1))]
    pub customer_name: Option<String>,
    #[validate(required, length(min = 1))]
    pub brand: Option<String>,
    pub color: Option<String>,
    pub size: Option<String>,
    #[validate(required, length(min = 1))]
    pub service_type: Option<String>,
    /// Defaults to `Masuk`; `null` is rejected
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<String>, example = "Masuk")]
    pub status: Option<Option<String>>,
    pub notes: Option<String>,
}

impl CreateItem {
    /// Required fields and the status label, all field errors collected
    pub fn validate_fields(&self) -> Result<(), ValidationErrors> {
        with_status_check(self.validate(), self.status.as_ref())
    }
}

/// Request body for a partial update. Unknown fields are ignored.
///
/// For `color`, `size` and `notes` an explicit `null` clears the value. Text
/// fields accept any string, including an empty one; only `status` is checked.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateItem {
    pub customer_name: Option<String>,
    pub brand: Option<String>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<String>)]
    pub color: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<String>)]
    pub size: Option<Option<String>>,
    pub service_type: Option<String>,
    /// `null` is rejected like any other unknown label
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<String>, example = "Proses")]
    pub status: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<String>)]
    pub notes: Option<Option<String>>,
}

impl UpdateItem {
    /// True when the body carries none of the mutable fields
    pub fn is_empty(&self) -> bool {
        self.customer_name.is_none()
            && self.brand.is_none()
            && self.color.is_none()
            && self.size.is_none()
            && self.service_type.is_none()
            && self.status.is_none()
            && self.notes.is_none()
    }

    /// The status label, if one was sent
    pub fn validate_fields(&self) -> Result<(), ValidationErrors> {
        with_status_check(Ok(()), self.status.as_ref())
    }
}

/// Query filters for listing items
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
pub struct ItemFilter {
    /// Exact status label to match. Not checked against the known statuses:
    /// an unknown label simply matches nothing.
    pub status: Option<String>,
}

impl ItemFilter {
    pub fn with_status(status: impl Into<String>) -> Self {
        Self {
            status: Some(status.into()),
        }
    }

    /// The status to filter on; an empty value means no filter
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref().filter(|s| !s.is_empty())
    }
}

/// A validated create request, ready for insertion
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub customer_name: String,
    pub brand: String,
    pub color: Option<String>,
    pub size: Option<String>,
    pub service_type: String,
    pub status: ItemStatus,
    pub notes: Option<String>,
}

/// A validated, non-empty set of column changes
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemChanges {
    pub customer_name: Option<String>,
    pub brand: Option<String>,
    pub color: Option<Option<String>>,
    pub size: Option<Option<String>>,
    pub service_type: Option<String>,
    pub status: Option<ItemStatus>,
    pub notes: Option<Option<String>>,
}

fn parse_status(field: &'static str, status: Option<&str>) -> ItemResult<ItemStatus> {
    status.and_then(|s| s.parse().ok()).ok_or_else(|| {
        let mut errors = ValidationErrors::new();
        if let Err(error) = validate_status(status) {
            errors.add(field, error);
        }
        ItemError::Validation(errors)
    })
}

impl TryFrom<CreateItem> for NewItem {
    type Error = ItemError;

    fn try_from(input: CreateItem) -> ItemResult<Self> {
        let status = match input.status {
            Some(status) => parse_status("status", status.as_deref())?,
            None => ItemStatus::default(),
        };

        Ok(Self {
            customer_name: input.customer_name.unwrap_or_default(),
            brand: input.brand.unwrap_or_default(),
            color: input.color,
            size: input.size,
            service_type: input.service_type.unwrap_or_default(),
            status,
            notes: input.notes,
        })
    }
}

impl TryFrom<UpdateItem> for ItemChanges {
    type Error = ItemError;

    fn try_from(input: UpdateItem) -> ItemResult<Self> {
        let status = input
            .status
            .map(|status| parse_status("status", status.as_deref()))
            .transpose()?;

        Ok(Self {
            customer_name: input.customer_name,
            brand: input.brand,
            color: input.color,
            size: input.size,
            service_type: input.service_type,
            status,
            notes: input.notes,
        })
    }
}

impl Item {
    /// Build a freshly inserted item from a validated create request
    pub fn new(input: NewItem) -> Self {
        Self {
            id: Uuid::now_v7(),
            customer_name: input.customer_name,
            brand: input.brand,
            color: input.color,
            size: input.size,
            service_type: input.service_type,
            status: input.status,
            notes: input.notes,
            created_at: Utc::now(),
        }
    }

    /// Apply only the supplied changes; `id` and `created_at` never change
    pub fn apply_changes(&mut self, changes: ItemChanges) {
        if let Some(customer_name) = changes.customer_name {
            self.customer_name = customer_name;
        }
        if let Some(brand) = changes.brand {
            self.brand = brand;
        }
        if let Some(color) = changes.color {
            self.color = color;
        }
        if let Some(size) = changes.size {
            self.size = size;
        }
        if let Some(service_type) = changes.service_type {
            self.service_type = service_type;
        }
        if let Some(status) = changes.status {
            self.status = status;
        }
        if let Some(notes) = changes.notes {
            self.notes = notes;
        }
    }
}
