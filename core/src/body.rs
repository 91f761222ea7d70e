//! Request payloads and their conversion to bytes.
//!
//! # Design
//! The payload is a closed set of shapes. Raw bytes go out untouched and
//! anything else goes out as its JSON serialization; the encoder dispatches
//! on the variant, so there is no runtime type inspection.

use serde::Serialize;

use crate::error::{Error, Result};

/// Body of a `Request`.
#[derive(Debug, Clone, PartialEq)]
pub enum Data<T = serde_json::Value> {
    /// No body is sent.
    None,
    /// Sent exactly as given.
    Raw(Vec<u8>),
    /// Sent as JSON.
    Structured(T),
}

impl<T> Default for Data<T> {
    fn default() -> Self {
        Data::None
    }
}

impl<T> Data<T> {
    pub fn is_none(&self) -> bool {
        matches!(self, Data::None)
    }
}

/// Turn a payload into the bytes that go on the wire.
///
/// Returns `Ok(None)` when there is no body.
pub fn encode<T: Serialize>(data: &Data<T>) -> Result<Option<Vec<u8>>> {
    match data {
        Data::None => Ok(None),
        Data::Raw(bytes) => Ok(Some(bytes.clone())),
        Data::Structured(value) => serde_json::to_vec(value).map(Some).map_err(Error::BodyEncoding),
    }
}
