//! Response decoding and completion handling
//!
//! # Overview
//!
//! A [`CompletionHandler`] maps the outcome of one exchange onto a value or a
//! terminal error:
//! - transport failure: the error is passed through unchanged
//! - status outside `[200, 300)`: [`Error::HttpStatus`](crate::Error::HttpStatus)
//!   carrying the status and raw body
//! - otherwise the body goes to the handler's [`ResponseConsumer`]
//!
//! Two consumers exist: [`SingleValue`] decodes one entity, [`PagedValues`]
//! decodes a [`Page`](crate::pagination::Page) envelope. Decoding tolerates
//! unknown fields.

mod handler;
mod types;

pub use handler::{decode_json, CompletionHandler, PagedValues, SingleValue};
pub use types::ResponseConsumer;
