//! Authentication module
//!
//! Supports: static Bearer tokens and Zoom Server-to-Server OAuth
//! (account credentials grant).
//!
//! The `Authenticator` applies credentials to outgoing requests and caches
//! OAuth access tokens until shortly before they expire.

mod authenticator;
mod types;

pub use authenticator::Authenticator;
pub use types::{AuthConfig, CachedToken, DEFAULT_TOKEN_URL};
