use std::sync::Arc;

use poem_openapi::payload::Json;
use serde_json::Value;

use crate::AppData;
use crate::providers::ItemSchemaProvider;
use crate::stores::ItemStore;
use crate::types::dto::{CreateItemApiResponse, Envelope, Item, ListItemsApiResponse};
use crate::types::internal::{ItemRecord, ValidationFailurePolicy};

pub const ITEM_CREATED_MESSAGE: &str = "Item created successfully";
pub const ITEMS_RETRIEVED_MESSAGE: &str = "Items retrieved successfully";

/// Item coordinator that orchestrates the create and list workflows
pub struct ItemCoordinator {
    item_store: Arc<ItemStore>,
    item_schema: ItemSchemaProvider,
    validation_failure_policy: ValidationFailurePolicy,
}

impl ItemCoordinator {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            item_store: Arc::clone(&app_data.item_store),
            item_schema: ItemSchemaProvider::new(),
            validation_failure_policy: app_data.settings.validation_failure_policy,
        }
    }

    /// Validate a raw payload and append it to the store
    ///
    /// The store is only touched once validation has passed. A rejected payload
    /// is answered with the first validation message cut at its first comma;
    /// the envelope shape and status follow the configured
    /// `ValidationFailurePolicy`.
    pub async fn create(&self, payload: &Value) -> CreateItemApiResponse {
        let item = match self.item_schema.validate_payload(payload) {
            Ok(item) => item,
            Err(e) => {
                tracing::info!(
                    field = e.field().unwrap_or("<body>"),
                    error = %e,
                    "Item payload rejected"
                );
                return self.rejected(e.summary());
            }
        };

        let store_len = self.item_store.append(ItemRecord::from(&item)).await;
        tracing::info!(uuid = %item.uuid, store_len, "Item created");

        CreateItemApiResponse::Ok(Json(Envelope::success(ITEM_CREATED_MESSAGE, Some(item))))
    }

    /// Return every stored record that passes the read schema
    ///
    /// Records failing re-validation are dropped and the rest keep store
    /// order. Dropped records are logged at debug level only.
    pub async fn list_all(&self) -> ListItemsApiResponse {
        let records = self.item_store.snapshot().await;
        let total = records.len();

        let items: Vec<Item> = records
            .iter()
            .filter_map(|record| match self.item_schema.validate_record(record) {
                Ok(item) => Some(item),
                Err(e) => {
                    tracing::debug!(uuid = %record.uuid, error = %e, "Skipping stored item");
                    None
                }
            })
            .collect();

        tracing::debug!(total, returned = items.len(), "Items listed");

        ListItemsApiResponse::Ok(Json(Envelope::success(ITEMS_RETRIEVED_MESSAGE, Some(items))))
    }

    fn rejected(&self, message: String) -> CreateItemApiResponse {
        match self.validation_failure_policy {
            ValidationFailurePolicy::Legacy => {
                CreateItemApiResponse::Ok(Json(Envelope::success(message, None)))
            }
            ValidationFailurePolicy::Strict => {
                CreateItemApiResponse::UnprocessableEntity(Json(Envelope::error(message)))
            }
        }
    }
}
