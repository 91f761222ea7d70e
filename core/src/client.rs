//! The client that shapes requests and sends them.
//!
//! # Design
//! `Client` holds the parsed base URL, default headers and parameters, and a
//! `ureq::Agent` configured with the fixed timeout. None of it changes after
//! construction, so one client can be shared by many threads at once; the
//! agent owns the connection pool.
//!
//! Shaping is split from I/O: `build` turns a `Request` into the exact
//! outgoing request without touching the network, and `send` dispatches that
//! and buffers the reply. A failure at any step returns before anything is
//! sent.

use std::time::Duration;

use serde::Serialize;
use tracing::{debug, instrument, warn};
use ureq::http;
use ureq::Agent;
use url::Url;

use crate::body::encode;
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::http::{Headers, Params, Request, Response};
use crate::merge::{apply_headers, merge_params};
use crate::resolve::{append_query, resolve};

/// Outgoing request as produced by `Client::build`; `None` means no body.
pub type OutgoingRequest = http::Request<Option<Vec<u8>>>;

/// Blocking HTTP client that layers its defaults over each request.
#[derive(Debug, Clone)]
pub struct Client {
    base_url: Option<Url>,
    headers: Headers,
    params: Params,
    timeout: Option<Duration>,
    agent: Agent,
}

impl Client {
    /// Build a client from `config`.
    ///
    /// Fails with `Error::InvalidUrl` if a non-empty base URL does not parse.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let base_url = config.parsed_base_url()?;
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(config.timeout)
            .build()
            .new_agent();
        Ok(Self {
            base_url,
            headers: config.headers,
            params: config.params,
            timeout: config.timeout,
            agent,
        })
    }

    pub fn base_url(&self) -> Option<&Url> {
        self.base_url.as_ref()
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Shape `request` into the request that `send` would put on the wire.
    pub fn build<T: Serialize>(&self, request: &Request<T>) -> Result<OutgoingRequest> {
        let url = resolve(self.base_url.as_ref(), &request.url)?;
        let url = append_query(&url, &merge_params(&self.params, &request.params));
        let body = encode(&request.data)?;

        let mut outgoing = http::Request::builder()
            .method(http::Method::from(request.effective_method()))
            .uri(url)
            .body(body)?;
        apply_headers(outgoing.headers_mut(), &self.headers, &request.headers)?;
        Ok(outgoing)
    }

    /// Send `request` and read the whole response body into memory.
    ///
    /// Error statuses are returned as responses; only transport failures
    /// (`Error::Transport`) and broken body reads (`Error::BodyRead`) fail
    /// after the request has left.
    #[instrument(skip_all, fields(method = %request.effective_method(), url = %request.url))]
    pub fn send<T: Serialize>(&self, request: &Request<T>) -> Result<Response> {
        let outgoing = self.build(request)?;
        debug!(uri = %outgoing.uri(), "dispatching request");

        let response = self.dispatch(outgoing).map_err(|e| {
            warn!(error = %e, "transport failed");
            Error::Transport(e)
        })?;

        let (head, mut body) = response.into_parts();
        let data = body
            .with_config()
            .limit(u64::MAX)
            .read_to_vec()
            .map_err(|e| {
                warn!(status = head.status.as_u16(), error = %e, "response body read failed");
                Error::BodyRead(e)
            })?;

        debug!(status = head.status.as_u16(), bytes = data.len(), "response buffered");
        Ok(Response { head, data })
    }

    fn dispatch(&self, request: OutgoingRequest) -> std::result::Result<http::Response<ureq::Body>, ureq::Error> {
        let (parts, body) = request.into_parts();
        match body {
            Some(bytes) => self.agent.run(http::Request::from_parts(parts, bytes)),
            None => self.agent.run(http::Request::from_parts(parts, ())),
        }
    }
}
