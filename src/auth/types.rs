//! Auth configuration types
//!
//! Runtime auth configuration, usually produced by
//! [`ClientConfig::auth`](crate::config::ClientConfig::auth).

use super::authenticator::{Authenticator, BasicAuth, BearerAuth, NoAuth};
use crate::error::Result;
use std::sync::Arc;

/// Authentication configuration
#[derive(Clone, Default)]
pub enum AuthConfig {
    /// No authentication required
    #[default]
    None,

    /// HTTP Basic authentication
    Basic {
        /// Username
        username: String,
        /// Password
        password: String,
    },

    /// Bearer token authentication (personal access tokens)
    Bearer {
        /// The bearer token
        token: String,
    },
}

impl AuthConfig {
    /// Build the authenticator for this configuration
    pub fn build(&self) -> Result<Arc<dyn Authenticator>> {
        Ok(match self {
            AuthConfig::None => Arc::new(NoAuth),
            AuthConfig::Basic { username, password } => {
                Arc::new(BasicAuth::new(username, password)?)
            }
            AuthConfig::Bearer { token } => Arc::new(BearerAuth::new(token)?),
        })
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthConfig::None => f.write_str("None"),
            AuthConfig::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"<redacted>")
                .finish(),
            AuthConfig::Bearer { .. } => f
                .debug_struct("Bearer")
                .field("token", &"<redacted>")
                .finish(),
        }
    }
}
