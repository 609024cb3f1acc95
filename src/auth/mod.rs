//! Authentication module
//!
//! Supports: None, Basic, Bearer, and any closure over a request builder
//!
//! Authentication is a single capability, [`Authenticator::decorate`], which
//! takes an outgoing request and returns it carrying credentials. Variants are
//! interchangeable and hold no mutable state, so one instance is shared by
//! every in-flight request.

mod authenticator;
mod types;

pub use authenticator::{Authenticator, BasicAuth, BearerAuth, NoAuth};
pub use types::AuthConfig;
