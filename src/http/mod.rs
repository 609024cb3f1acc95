//! HTTP module
//!
//! Builds authenticated requests against the REST API root and hands them to
//! a [`Transport`].
//!
//! # Features
//!
//! - **Pluggable transport**: `reqwest` by default, anything implementing
//!   [`Transport`] in tests
//! - **Authentication**: every request passes through the configured
//!   [`Authenticator`](crate::auth::Authenticator) before dispatch
//! - **Shared connection pool**: one client serves any number of concurrent
//!   sequences

mod client;
mod transport;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, API_ROOT};
pub use transport::{RawResponse, ReqwestTransport, Transport};

#[cfg(test)]
mod tests;
