//! Configuration types
//!
//! `ZoomConfig` is loaded from a YAML or JSON file, from the environment, or
//! both (environment values override the file).
//!
//! ```yaml
//! base_url: "https://api.zoom.us/v2"
//! auth:
//!   type: account_credentials
//!   account_id: "..."
//!   client_id: "..."
//!   client_secret: "..."
//! http:
//!   timeout_seconds: 30
//!   max_retries: 3
//!   rate_limit:
//!     requests_per_second: 10
//! default_max: 300
//! page_size: 300
//! ```

use crate::auth::{AuthConfig, DEFAULT_TOKEN_URL};
use crate::error::{Error, Result};
use crate::fetch::DEFAULT_PAGE_SIZE;
use crate::http::{HttpClient, HttpClientConfig, RateLimiterConfig};
use crate::types::{BackoffType, OptionStringExt};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Zoom REST API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.zoom.us/v2";

/// Records returned by an action when the caller gives no maximum
pub const DEFAULT_MAX: usize = 300;

// ============================================================================
// Top-Level Config
// ============================================================================

/// Complete client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoomConfig {
    /// Base URL for API requests
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Authentication configuration
    #[serde(default)]
    pub auth: AuthConfigDef,

    /// HTTP client configuration
    #[serde(default)]
    pub http: HttpConfig,

    /// Default cap on records per action
    #[serde(default = "default_max")]
    pub default_max: usize,

    /// Records requested per page
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_max() -> usize {
    DEFAULT_MAX
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            auth: AuthConfigDef::default(),
            http: HttpConfig::default(),
            default_max: default_max(),
            page_size: default_page_size(),
        }
    }
}

impl ZoomConfig {
    /// Load a config file; `.json` files are parsed as JSON, anything else as YAML
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::FileNotFound {
                    path: path.display().to_string(),
                }
            } else {
                Error::Io(e)
            }
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Ok(serde_json::from_str(&content)?)
        } else {
            Self::from_yaml(&content)
        }
    }

    /// Parse a YAML document
    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Build a config purely from the environment
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env(|key| std::env::var(key).ok());
        config
    }

    /// Override fields from environment-style lookups
    ///
    /// `ZOOM_ACCESS_TOKEN` selects bearer auth. Otherwise, if all of
    /// `ZOOM_ACCOUNT_ID`, `ZOOM_CLIENT_ID` and `ZOOM_CLIENT_SECRET` are set,
    /// account credentials are used. `ZOOM_BASE_URL` overrides the base URL.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).none_if_empty();

        if let Some(base_url) = var("ZOOM_BASE_URL") {
            self.base_url = base_url;
        }

        if let Some(token) = var("ZOOM_ACCESS_TOKEN") {
            self.auth = AuthConfigDef::Bearer { token };
        } else if let (Some(account_id), Some(client_id), Some(client_secret)) = (
            var("ZOOM_ACCOUNT_ID"),
            var("ZOOM_CLIENT_ID"),
            var("ZOOM_CLIENT_SECRET"),
        ) {
            self.auth = AuthConfigDef::AccountCredentials {
                token_url: var("ZOOM_TOKEN_URL").unwrap_or_else(default_token_url),
                account_id,
                client_id,
                client_secret,
            };
        }
    }

    /// Check the config for values that would fail at request time
    pub fn validate(&self) -> Result<()> {
        url::Url::parse(&self.base_url)?;

        if self.page_size == 0 || self.page_size > DEFAULT_PAGE_SIZE {
            return Err(Error::invalid_value(
                "page_size",
                format!("must be between 1 and {DEFAULT_PAGE_SIZE}"),
            ));
        }

        match &self.auth {
            AuthConfigDef::None => {}
            AuthConfigDef::Bearer { token } => require("auth.token", token)?,
            AuthConfigDef::AccountCredentials {
                token_url,
                account_id,
                client_id,
                client_secret,
            } => {
                url::Url::parse(token_url)?;
                require("auth.account_id", account_id)?;
                require("auth.client_id", client_id)?;
                require("auth.client_secret", client_secret)?;
            }
        }

        Ok(())
    }

    /// Build the HTTP client this config describes
    pub fn build_client(&self) -> Result<HttpClient> {
        self.validate()?;
        HttpClient::with_auth(self.http.to_client_config(&self.base_url), self.auth.to_runtime())
    }
}

fn require(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        Err(Error::missing_field(field))
    } else {
        Ok(())
    }
}

// ============================================================================
// Auth Config Definition
// ============================================================================

/// Authentication configuration as written in a config file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AuthConfigDef {
    /// No authentication
    #[default]
    None,

    /// Pre-issued bearer token
    Bearer {
        /// The access token
        token: String,
    },

    /// Zoom Server-to-Server OAuth
    AccountCredentials {
        /// Token endpoint URL
        #[serde(default = "default_token_url")]
        token_url: String,
        /// Zoom account ID
        account_id: String,
        /// OAuth client ID
        client_id: String,
        /// OAuth client secret
        client_secret: String,
    },
}

fn default_token_url() -> String {
    DEFAULT_TOKEN_URL.to_string()
}

impl AuthConfigDef {
    /// Convert to the runtime auth config
    pub fn to_runtime(&self) -> AuthConfig {
        match self {
            Self::None => AuthConfig::None,
            Self::Bearer { token } => AuthConfig::bearer(token.clone()),
            Self::AccountCredentials {
                token_url,
                account_id,
                client_id,
                client_secret,
            } => AuthConfig::AccountCredentials {
                token_url: token_url.clone(),
                account_id: account_id.clone(),
                client_id: client_id.clone(),
                client_secret: client_secret.clone(),
            },
        }
    }
}

// ============================================================================
// HTTP Config
// ============================================================================

/// HTTP client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// Maximum number of retries per request
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Retry backoff configuration
    #[serde(default)]
    pub retry_backoff: BackoffConfig,

    /// Rate limiting configuration; `null` disables it
    #[serde(default = "default_rate_limit")]
    pub rate_limit: Option<RateLimiterConfig>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout(),
            max_retries: default_max_retries(),
            retry_backoff: BackoffConfig::default(),
            rate_limit: default_rate_limit(),
        }
    }
}

fn default_timeout() -> u64 {
    30
}

fn default_max_retries() -> u32 {
    3
}

fn default_rate_limit() -> Option<RateLimiterConfig> {
    Some(RateLimiterConfig::default())
}

impl HttpConfig {
    /// Convert to the HTTP client config for `base_url`
    pub fn to_client_config(&self, base_url: &str) -> HttpClientConfig {
        let builder = HttpClientConfig::builder()
            .base_url(base_url)
            .timeout(Duration::from_secs(self.timeout_seconds))
            .max_retries(self.max_retries)
            .backoff(
                self.retry_backoff.backoff_type,
                Duration::from_millis(self.retry_backoff.initial_ms),
                Duration::from_millis(self.retry_backoff.max_ms),
            );

        match &self.rate_limit {
            Some(limit) => builder.rate_limit(limit.clone()).build(),
            None => builder.no_rate_limit().build(),
        }
    }
}

/// Backoff configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackoffConfig {
    /// Type of backoff
    #[serde(rename = "type", default)]
    pub backoff_type: BackoffType,

    /// Initial delay in milliseconds
    #[serde(default = "default_initial_ms")]
    pub initial_ms: u64,

    /// Maximum delay in milliseconds
    #[serde(default = "default_max_ms")]
    pub max_ms: u64,
}

impl Default for BackoffConfig {
    fn default() -> Self {
        Self {
            backoff_type: BackoffType::Exponential,
            initial_ms: default_initial_ms(),
            max_ms: default_max_ms(),
        }
    }
}

fn default_initial_ms() -> u64 {
    100
}

fn default_max_ms() -> u64 {
    60000
}
