//! Completion handler and consumers

use super::types::ResponseConsumer;
use crate::error::{Error, Result};
use crate::http::RawResponse;
use crate::pagination::Page;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use tracing::warn;

/// Decode a JSON body, ignoring fields the target type does not declare
pub fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    serde_json::from_slice(body)
        .map_err(|e| Error::decode(std::any::type_name::<T>(), e.to_string()))
}

/// Consumer for endpoints returning one entity
pub struct SingleValue<T>(PhantomData<fn() -> T>);

impl<T> SingleValue<T> {
    /// Create a single-value consumer
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for SingleValue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: DeserializeOwned> ResponseConsumer for SingleValue<T> {
    type Output = T;

    fn consume(&self, body: &[u8]) -> Result<T> {
        decode_json(body)
    }
}

/// Consumer for endpoints returning a paged envelope
pub struct PagedValues<T>(PhantomData<fn() -> T>);

impl<T> PagedValues<T> {
    /// Create a paged consumer
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for PagedValues<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: DeserializeOwned> ResponseConsumer for PagedValues<T> {
    type Output = Page<T>;

    fn consume(&self, body: &[u8]) -> Result<Page<T>> {
        decode_json(body)
    }
}

/// Maps transport outcomes onto decoded values or errors
///
/// The failure and status checks are shared; what happens to a successful
/// body is decided by the consumer.
pub struct CompletionHandler<C> {
    consumer: C,
}

impl<C: ResponseConsumer> CompletionHandler<C> {
    /// Create a handler around a consumer
    pub fn new(consumer: C) -> Self {
        Self { consumer }
    }

    /// Handle the outcome of one exchange
    pub fn handle(&self, outcome: Result<RawResponse>) -> Result<C::Output> {
        let response = match outcome {
            Ok(response) => response,
            Err(e) => {
                warn!("Request failed: {e}");
                return Err(e);
            }
        };

        if !response.is_success() {
            warn!("Request returned HTTP {}", response.status);
            return Err(Error::http_status(response.status, response.text()));
        }

        self.consumer.consume(&response.body)
    }
}
