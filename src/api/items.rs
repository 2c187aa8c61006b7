use std::sync::Arc;

use poem_openapi::{payload::Json, OpenApi, Tags};
use serde_json::Value;

use crate::AppData;
use crate::coordinators::ItemCoordinator;
use crate::types::dto::{CreateItemApiResponse, ListItemsApiResponse};

/// Items API
pub struct ItemsApi {
    item_coordinator: ItemCoordinator,
}

impl ItemsApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            item_coordinator: ItemCoordinator::new(app_data),
        }
    }
}

/// API tags for item endpoints
#[derive(Tags)]
enum ApiTags {
    /// Item management endpoints
    Items,
}

#[OpenApi]
impl ItemsApi {
    /// Create a new item
    ///
    /// Accepts `{uuid, message}` where `message` is 10-255 characters. The body
    /// is taken as untyped JSON so schema violations come back inside the
    /// response envelope.
    #[oai(path = "/items", method = "post", tag = "ApiTags::Items")]
    async fn create_item(&self, body: Json<Value>) -> CreateItemApiResponse {
        self.item_coordinator.create(&body.0).await
    }

    /// List all items
    #[oai(path = "/items", method = "get", tag = "ApiTags::Items")]
    async fn list_items(&self) -> ListItemsApiResponse {
        self.item_coordinator.list_all().await
    }
}
