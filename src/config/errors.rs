use thiserror::Error;

/// Errors raised while reading server settings from the environment
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SettingsError {
    /// A setting is present but cannot be parsed
    #[error("Setting '{setting_name}' has invalid format. Expected: {expected}, got: {actual}")]
    InvalidFormat {
        setting_name: String,
        expected: String,
        actual: String,
    },
}

impl SettingsError {
    pub fn invalid_format(
        setting_name: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::InvalidFormat {
            setting_name: setting_name.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}
