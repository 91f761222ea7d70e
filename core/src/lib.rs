//! Blocking HTTP client that layers per-client defaults over each request.
//!
//! # Overview
//! A `Client` is built once from a `ClientConfig` (base URL, default headers,
//! default query parameters, timeout) and then sends any number of
//! `Request`s. For each call it resolves the request URL against the base,
//! merges query parameters and headers with the defaults, encodes the body,
//! hands the result to `ureq`, and returns a `Response` with the body fully
//! buffered.
//!
//! # Design
//! - Merge rules live in small pure functions (`resolve`, `merge_params`,
//!   `apply_headers`, `encode`) so each can be tested without a network.
//! - `Client::build` produces the outgoing request without I/O;
//!   `Client::send` adds the round trip.
//! - Per-request headers are *added* next to defaults of the same name,
//!   never substituted for them. Query parameters are additive too.
//! - There is no global client; callers construct and share their own.

pub mod body;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod merge;
pub mod resolve;

pub use body::{encode, Data};
pub use client::{Client, OutgoingRequest};
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use http::{Headers, Method, Params, Request, Response, UnknownMethod};
pub use merge::{apply_headers, merge_params};
pub use resolve::{append_query, resolve};
