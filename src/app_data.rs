use std::sync::Arc;

use crate::config::ServerSettings;
use crate::stores::ItemStore;

/// Centralized application data following the main-owned stores pattern
///
/// Created once in main.rs, wrapped in `Arc` and handed to coordinators.
///
/// ```text
/// main.rs
///   ↓
/// AppData::init(settings)
///   ├─ settings (ServerSettings)
///   └─ item_store (Arc<ItemStore>)
///   ↓ wrapped in Arc<AppData>
///   └─ ItemsApi::new(app_data) → ItemCoordinator::new(app_data)
/// ```
pub struct AppData {
    pub settings: ServerSettings,
    pub item_store: Arc<ItemStore>,
}

impl AppData {
    /// Initialize application data with an empty item store
    pub fn init(settings: ServerSettings) -> Self {
        tracing::info!("Initializing AppData...");
        Self::with_store(settings, Arc::new(ItemStore::new()))
    }

    /// Initialize application data around an existing item store
    pub fn with_store(settings: ServerSettings, item_store: Arc<ItemStore>) -> Self {
        tracing::debug!(
            policy = %settings.validation_failure_policy,
            "AppData initialization complete"
        );
        Self {
            settings,
            item_store,
        }
    }
}
