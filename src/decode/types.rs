//! Decoder types and traits

use crate::error::Result;

/// Turns the body of a successful response into a value
pub trait ResponseConsumer: Send + Sync {
    /// Decoded value
    type Output;

    /// Decode the body of a response with a `2xx` status
    fn consume(&self, body: &[u8]) -> Result<Self::Output>;
}
