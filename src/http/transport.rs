//! Transport abstraction
//!
//! A transport executes one fully built request and reports the status and
//! body. It never interprets the status; that is the completion handler's job.

use crate::error::Result;
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{Client, Request};

/// Status and body of a completed exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,
    /// Raw response body
    pub body: Bytes,
}

impl RawResponse {
    /// Create a response from status and body
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Status in `[200, 300)`
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body as text, replacing invalid UTF-8
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Non-blocking request executor
///
/// Implementations must be safe to share across tasks; one instance serves
/// every sequence created by a client.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute the request, failing only on network-level errors
    async fn execute(&self, request: Request) -> Result<RawResponse>;
}

/// Transport backed by a pooled `reqwest` client
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Create a transport over an existing client (shares its pool)
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: Request) -> Result<RawResponse> {
        let response = self.client.execute(request).await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;
        Ok(RawResponse { status, body })
    }
}
