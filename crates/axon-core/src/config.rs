//! Identity provider connection configuration.
//!
//! A fixed set of named values supplied by the environment. The values are
//! opaque to the client; the only validation is completeness at startup so a
//! misconfigured deployment fails immediately with every missing key named,
//! not one at a time.

use thiserror::Error;

/// Environment variable for the provider API key.
pub const ENV_API_KEY: &str = "AXON_AUTH_API_KEY";
/// Environment variable for the provider auth domain.
pub const ENV_AUTH_DOMAIN: &str = "AXON_AUTH_DOMAIN";
/// Environment variable for the provider project identifier.
pub const ENV_PROJECT_ID: &str = "AXON_AUTH_PROJECT_ID";
/// Environment variable for the provider app identifier.
pub const ENV_APP_ID: &str = "AXON_AUTH_APP_ID";

/// Configuration error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// One or more required keys were absent or empty.
    #[error("missing provider configuration: {}", .keys.join(", "))]
    Missing {
        /// Every key that was absent or empty.
        keys: Vec<&'static str>,
    },
}

/// Connection parameters for the identity provider.
///
/// Opaque to the client; passed through to the provider adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    /// Provider API key.
    pub api_key: String,
    /// Provider auth domain.
    pub auth_domain: String,
    /// Provider project identifier.
    pub project_id: String,
    /// Provider app identifier.
    pub app_id: String,
}

impl ProviderConfig {
    /// Read the configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] naming every absent or empty key.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through an arbitrary lookup function.
    ///
    /// Split out from [`Self::from_env`] so completeness checking is
    /// testable without touching process state.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] naming every absent or empty key.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut missing = Vec::new();
        let mut fetch = |key: &'static str| match lookup(key) {
            Some(value) if !value.is_empty() => Some(value),
            _ => {
                missing.push(key);
                None
            },
        };

        let api_key = fetch(ENV_API_KEY);
        let auth_domain = fetch(ENV_AUTH_DOMAIN);
        let project_id = fetch(ENV_PROJECT_ID);
        let app_id = fetch(ENV_APP_ID);

        match (api_key, auth_domain, project_id, app_id) {
            (Some(api_key), Some(auth_domain), Some(project_id), Some(app_id)) => {
                Ok(Self { api_key, auth_domain, project_id, app_id })
            },
            _ => Err(ConfigError::Missing { keys: missing }),
        }
    }
}
