//! Error types for the hermes client.
//!
//! # Design
//! Every failure is terminal for the call that produced it: nothing is
//! retried and no partial `Response` accompanies an error. Transport and
//! body-read failures keep the underlying `ureq::Error` as their source so
//! callers can inspect it unchanged and pick their own retry policy.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by `Client::build`, `Client::send` and the merge helpers.
#[derive(Debug, Error)]
pub enum Error {
    /// No base URL was configured and the request carried no URL either.
    #[error("missing base URL or request URL")]
    MissingUrl,

    /// The base URL or the per-request URL could not be parsed.
    #[error("invalid URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// A header name or value is not valid on the wire.
    #[error("invalid header {name:?}: {reason}")]
    InvalidHeader { name: String, reason: String },

    /// The structured payload could not be serialized to JSON.
    #[error("could not encode request body: {0}")]
    BodyEncoding(#[source] serde_json::Error),

    /// The outgoing request could not be assembled.
    #[error("invalid request: {0}")]
    InvalidRequest(#[from] ureq::http::Error),

    /// DNS, connect, TLS, timeout or protocol failure from the transport.
    #[error("transport error: {0}")]
    Transport(#[source] ureq::Error),

    /// The response head arrived but the body could not be read in full.
    #[error("could not read response body: {0}")]
    BodyRead(#[source] ureq::Error),

    /// The buffered response body is not the JSON the caller asked for.
    #[error("could not decode response body: {0}")]
    Decode(#[source] serde_json::Error),
}
