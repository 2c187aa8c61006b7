mod env_provider;
mod errors;
mod logging;
mod server_settings;

pub use env_provider::{EnvironmentProvider, MockEnvironment, SystemEnvironment};
pub use errors::SettingsError;
pub use logging::{init_logging, LoggingConfig, LoggingError};
pub use server_settings::ServerSettings;
