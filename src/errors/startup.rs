use thiserror::Error;

use crate::config::{LoggingError, SettingsError};

/// Errors that abort process startup or terminate the server
#[derive(Error, Debug)]
pub enum StartupError {
    /// Configuration could not be loaded from the environment
    #[error(transparent)]
    Settings(#[from] SettingsError),

    /// Tracing subscriber could not be installed
    #[error(transparent)]
    Logging(#[from] LoggingError),

    /// Listener bind or serve loop failed
    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),
}
