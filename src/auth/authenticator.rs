//! Authenticator implementations
//!
//! Each variant decorates a request builder with credentials. Header values are
//! computed once at construction; `decorate` only attaches them.

use crate::error::{Error, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::RequestBuilder;

/// Attaches credentials to an outgoing request
pub trait Authenticator: Send + Sync {
    /// Return the request carrying this authenticator's credentials
    fn decorate(&self, req: RequestBuilder) -> RequestBuilder;
}

impl<F> Authenticator for F
where
    F: Fn(RequestBuilder) -> RequestBuilder + Send + Sync,
{
    fn decorate(&self, req: RequestBuilder) -> RequestBuilder {
        self(req)
    }
}

fn sensitive_header(field: &str, value: String) -> Result<HeaderValue> {
    let mut header = HeaderValue::try_from(value)
        .map_err(|_| Error::invalid_value(field, "contains characters not allowed in an HTTP header"))?;
    header.set_sensitive(true);
    Ok(header)
}

// ============================================================================
// No-op
// ============================================================================

/// Pass-through authenticator for pre-authenticated transports and tests
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAuth;

impl Authenticator for NoAuth {
    fn decorate(&self, req: RequestBuilder) -> RequestBuilder {
        req
    }
}

// ============================================================================
// Basic
// ============================================================================

/// HTTP Basic authentication: `Authorization: Basic base64(username:password)`
#[derive(Clone)]
pub struct BasicAuth {
    username: String,
    header: HeaderValue,
}

impl BasicAuth {
    /// Create a Basic authenticator
    pub fn new(username: impl Into<String>, password: impl AsRef<str>) -> Result<Self> {
        let username = username.into();
        let encoded = STANDARD.encode(format!("{username}:{}", password.as_ref()));
        let header = sensitive_header("password", format!("Basic {encoded}"))?;
        Ok(Self { username, header })
    }

    /// The username credentials are sent for
    pub fn username(&self) -> &str {
        &self.username
    }
}

impl Authenticator for BasicAuth {
    fn decorate(&self, req: RequestBuilder) -> RequestBuilder {
        req.header(AUTHORIZATION, self.header.clone())
    }
}

impl std::fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicAuth")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Bearer
// ============================================================================

/// Bearer token authentication (HTTP access tokens)
#[derive(Clone)]
pub struct BearerAuth {
    header: HeaderValue,
}

impl BearerAuth {
    /// Create a Bearer authenticator
    ///
    /// Fails if the token holds characters a header cannot carry, such as a
    /// trailing newline left over from reading it from a file.
    pub fn new(token: impl AsRef<str>) -> Result<Self> {
        let header = sensitive_header("token", format!("Bearer {}", token.as_ref()))?;
        Ok(Self { header })
    }
}

impl Authenticator for BearerAuth {
    fn decorate(&self, req: RequestBuilder) -> RequestBuilder {
        req.header(AUTHORIZATION, self.header.clone())
    }
}

impl std::fmt::Debug for BearerAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BearerAuth").finish_non_exhaustive()
    }
}
