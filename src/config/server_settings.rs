use std::net::SocketAddr;

use crate::config::{EnvironmentProvider, SettingsError};
use crate::types::internal::ValidationFailurePolicy;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

/// Runtime settings for the HTTP server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub validation_failure_policy: ValidationFailurePolicy,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            validation_failure_policy: ValidationFailurePolicy::default(),
        }
    }
}

impl ServerSettings {
    /// Load settings from the given environment provider
    ///
    /// Reads `HOST`, `PORT` and `VALIDATION_FAILURE_POLICY`, falling back to
    /// defaults for unset variables.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::InvalidFormat` when `PORT` is not a valid u16 or
    /// the policy is neither `legacy` nor `strict`.
    pub fn from_provider(env: &dyn EnvironmentProvider) -> Result<Self, SettingsError> {
        let host = env
            .get_var("HOST")
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match env.get_var("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| SettingsError::invalid_format("PORT", "integer in 0-65535", raw))?,
            None => DEFAULT_PORT,
        };

        let validation_failure_policy = match env.get_var("VALIDATION_FAILURE_POLICY") {
            Some(raw) => raw.parse().map_err(|_| {
                SettingsError::invalid_format("VALIDATION_FAILURE_POLICY", "legacy or strict", raw)
            })?,
            None => ValidationFailurePolicy::default(),
        };

        Ok(Self {
            host,
            port,
            validation_failure_policy,
        })
    }

    /// Address string suitable for `TcpListener::bind`
    pub fn bind_address(&self) -> String {
        match self.host.parse::<std::net::IpAddr>() {
            Ok(ip) => SocketAddr::new(ip, self.port).to_string(),
            Err(_) => format!("{}:{}", self.host, self.port),
        }
    }
}
