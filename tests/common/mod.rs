// Common test utilities for integration tests

use std::sync::Arc;

use itemstash_backend::config::ServerSettings;
use itemstash_backend::server::build_app;
use itemstash_backend::stores::ItemStore;
use itemstash_backend::types::internal::ValidationFailurePolicy;
use itemstash_backend::AppData;
use poem::test::TestClient;
use poem::Endpoint;

pub const VALID_UUID: &str = "aca49925-9ac5-4109-8125-5ff9caa37552";
pub const OTHER_UUID: &str = "2f1c7f6e-0a55-4a7e-9d3f-4f0e1c2b3a41";

/// Creates a test client over the full application and returns the store
/// backing it, so tests can inspect or seed it directly
pub fn setup_test_client_with_store(
    policy: ValidationFailurePolicy,
    store: Arc<ItemStore>,
) -> TestClient<impl Endpoint> {
    let settings = ServerSettings {
        validation_failure_policy: policy,
        ..ServerSettings::default()
    };
    let app_data = Arc::new(AppData::with_store(settings, store));
    TestClient::new(build_app(app_data))
}

/// Creates a test client with an empty store
pub fn setup_test_client(
    policy: ValidationFailurePolicy,
) -> (TestClient<impl Endpoint>, Arc<ItemStore>) {
    let store = Arc::new(ItemStore::new());
    let client = setup_test_client_with_store(policy, store.clone());
    (client, store)
}
