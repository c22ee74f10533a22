use crate::constants::DEFAULT_API_BASE_URL;
use crate::model::refresh::RefreshPolicy;
use crate::utils::config::{get_env_or_default, get_env_or_none};
use crate::utils::url::normalize_base_url;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default)]
/// Optional login credentials, used by tools that log in non-interactively
pub struct Credentials {
    /// Username of the Face Log account
    pub username: Option<String>,
    /// Password of the Face Log account, never serialized
    #[serde(skip_serializing, default)]
    pub password: Option<String>,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL of the Face Log REST API, without trailing slash
    pub base_url: String,
    /// Request timeout in seconds; `None` lets a hung request wait forever
    pub timeout: Option<u64>,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the Face Log client
pub struct Config {
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Login credentials
    pub credentials: Credentials,
    /// Path of the JSON token file; `None` keeps tokens in memory
    pub token_file: Option<String>,
    /// Coordination of concurrent token refreshes
    pub refresh_policy: RefreshPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Builds the configuration from the environment
    ///
    /// A `.env` file is loaded first if present. Recognized variables:
    /// `FACELOG_API_URL`, `FACELOG_API_TIMEOUT`, `FACELOG_TOKEN_FILE`,
    /// `FACELOG_REFRESH_POLICY`, `FACELOG_USERNAME`, `FACELOG_PASSWORD`.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let base_url =
            get_env_or_default("FACELOG_API_URL", String::from(DEFAULT_API_BASE_URL));

        Config {
            rest_api: RestApiConfig {
                base_url: normalize_base_url(&base_url),
                timeout: get_env_or_none("FACELOG_API_TIMEOUT"),
            },
            credentials: Credentials {
                username: get_env_or_none("FACELOG_USERNAME"),
                password: get_env_or_none("FACELOG_PASSWORD"),
            },
            token_file: get_env_or_none("FACELOG_TOKEN_FILE"),
            refresh_policy: get_env_or_default("FACELOG_REFRESH_POLICY", RefreshPolicy::default()),
        }
    }

    /// Builds a configuration for the given base URL without touching the environment
    ///
    /// # Arguments
    /// * `base_url` - Base URL of the API; a trailing slash is dropped
    pub fn with_base_url(base_url: &str) -> Self {
        Config {
            rest_api: RestApiConfig {
                base_url: normalize_base_url(base_url),
                timeout: None,
            },
            credentials: Credentials::default(),
            token_file: None,
            refresh_policy: RefreshPolicy::default(),
        }
    }

    /// Returns a copy using the given refresh policy
    #[must_use]
    pub fn with_refresh_policy(mut self, refresh_policy: RefreshPolicy) -> Self {
        self.refresh_policy = refresh_policy;
        self
    }
}
