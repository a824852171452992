//! Auth configuration types
//!
//! These types represent the runtime auth configuration after the config
//! file and environment have been resolved.

use chrono::{DateTime, Utc};

/// Zoom OAuth token endpoint
pub const DEFAULT_TOKEN_URL: &str = "https://zoom.us/oauth/token";

/// Authentication configuration
#[derive(Clone, Default)]
pub enum AuthConfig {
    /// No authentication (useful against local mocks)
    #[default]
    None,

    /// Pre-issued bearer token
    Bearer {
        /// The access token
        token: String,
    },

    /// Zoom Server-to-Server OAuth (`grant_type=account_credentials`)
    AccountCredentials {
        /// Token endpoint URL
        token_url: String,
        /// Zoom account ID
        account_id: String,
        /// OAuth client ID
        client_id: String,
        /// OAuth client secret
        client_secret: String,
    },
}

impl AuthConfig {
    /// Create a bearer token config
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::Bearer {
            token: token.into(),
        }
    }

    /// Create an account credentials config against the default Zoom endpoint
    pub fn account_credentials(
        account_id: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        Self::AccountCredentials {
            token_url: DEFAULT_TOKEN_URL.to_string(),
            account_id: account_id.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// Short name of the auth type, safe to log
    pub fn kind(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Bearer { .. } => "bearer",
            Self::AccountCredentials { .. } => "account_credentials",
        }
    }
}

// Secrets stay out of logs and panic messages
impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Bearer { .. } => f.debug_struct("Bearer").finish_non_exhaustive(),
            Self::AccountCredentials {
                token_url,
                account_id,
                client_id,
                ..
            } => f
                .debug_struct("AccountCredentials")
                .field("token_url", token_url)
                .field("account_id", account_id)
                .field("client_id", client_id)
                .finish_non_exhaustive(),
        }
    }
}

/// Cached token with expiration
#[derive(Debug, Clone)]
pub struct CachedToken {
    /// The access token
    pub token: String,
    /// When the token expires
    pub expires_at: Option<DateTime<Utc>>,
}

impl CachedToken {
    /// Create a new cached token
    pub fn new(token: String, expires_at: Option<DateTime<Utc>>) -> Self {
        Self { token, expires_at }
    }

    /// Create a token that expires in N seconds from now
    pub fn expires_in(token: String, seconds: i64) -> Self {
        let expires_at = Utc::now() + chrono::Duration::seconds(seconds);
        Self {
            token,
            expires_at: Some(expires_at),
        }
    }

    /// Check if the token is expired (with 30 second buffer)
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(expires_at) => {
                let buffer = chrono::Duration::seconds(30);
                Utc::now() + buffer >= expires_at
            }
            None => false,
        }
    }
}
