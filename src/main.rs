use std::sync::Arc;

use itemstash_backend::config::{init_logging, LoggingConfig, ServerSettings, SystemEnvironment};
use itemstash_backend::errors::StartupError;
use itemstash_backend::{server, AppData};

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    let env = SystemEnvironment;
    init_logging(&LoggingConfig::from_provider(&env))?;

    let settings = ServerSettings::from_provider(&env)?;
    let app_data = Arc::new(AppData::init(settings));

    server::run(app_data).await
}
