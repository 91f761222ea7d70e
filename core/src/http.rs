//! Request and response types handed across the client boundary.
//!
//! # Design
//! A `Request` is plain data built fresh for every call; the client merges
//! its own defaults into it while shaping the outgoing request and never
//! mutates it. A `Response` owns the response head as returned by the
//! transport together with the fully buffered body, so nothing has to be
//! closed or drained by the caller.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use ureq::http::{self, HeaderMap, StatusCode, Version};

use crate::body::Data;
use crate::error::{Error, Result};

/// Header name to value mapping. Names are matched case-insensitively once
/// applied to an outgoing request.
pub type Headers = HashMap<String, String>;

/// Query parameter name to value mapping.
pub type Params = HashMap<String, String>;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    #[default]
    Get,
    Head,
    Post,
    Put,
    Delete,
    Connect,
    Options,
    Trace,
    Patch,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Head => "HEAD",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Connect => "CONNECT",
            Method::Options => "OPTIONS",
            Method::Trace => "TRACE",
            Method::Patch => "PATCH",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names none of the supported methods.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown HTTP method: {0}")]
pub struct UnknownMethod(pub String);

impl FromStr for Method {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Method::Get),
            "HEAD" => Ok(Method::Head),
            "POST" => Ok(Method::Post),
            "PUT" => Ok(Method::Put),
            "DELETE" => Ok(Method::Delete),
            "CONNECT" => Ok(Method::Connect),
            "OPTIONS" => Ok(Method::Options),
            "TRACE" => Ok(Method::Trace),
            "PATCH" => Ok(Method::Patch),
            _ => Err(UnknownMethod(s.to_string())),
        }
    }
}

impl From<Method> for http::Method {
    fn from(m: Method) -> Self {
        match m {
            Method::Get => http::Method::GET,
            Method::Head => http::Method::HEAD,
            Method::Post => http::Method::POST,
            Method::Put => http::Method::PUT,
            Method::Delete => http::Method::DELETE,
            Method::Connect => http::Method::CONNECT,
            Method::Options => http::Method::OPTIONS,
            Method::Trace => http::Method::TRACE,
            Method::Patch => http::Method::PATCH,
        }
    }
}

/// A single call against a `Client`.
///
/// `url` is resolved against the client's base URL; `headers` and `params`
/// extend the client defaults rather than replacing them. An unset `method`
/// means `GET`.
#[derive(Debug, Clone)]
pub struct Request<T = serde_json::Value> {
    pub method: Option<Method>,
    pub headers: Headers,
    pub params: Params,
    pub url: String,
    pub data: Data<T>,
}

impl<T> Default for Request<T> {
    fn default() -> Self {
        Self {
            method: None,
            headers: Headers::new(),
            params: Params::new(),
            url: String::new(),
            data: Data::None,
        }
    }
}

impl<T> Request<T> {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method: Some(method),
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::Get, url)
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    pub fn with_data(mut self, data: Data<T>) -> Self {
        self.data = data;
        self
    }

    /// Send `payload` as its JSON serialization.
    pub fn with_json(self, payload: T) -> Self {
        self.with_data(Data::Structured(payload))
    }

    /// Send `bytes` unmodified.
    pub fn with_bytes(self, bytes: impl Into<Vec<u8>>) -> Self {
        self.with_data(Data::Raw(bytes.into()))
    }

    /// The method that will go on the wire.
    pub fn effective_method(&self) -> Method {
        self.method.unwrap_or_default()
    }
}

/// A response whose body has been read into memory.
#[derive(Debug)]
pub struct Response {
    pub head: http::response::Parts,
    pub data: Vec<u8>,
}

impl Response {
    pub fn status(&self) -> StatusCode {
        self.head.status
    }

    pub fn version(&self) -> Version {
        self.head.version
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.head.headers
    }

    /// First value of `name`, if present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.head.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Body as text, replacing invalid UTF-8 sequences.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.data).into_owned()
    }

    /// Deserialize the buffered body as JSON.
    pub fn json<D: DeserializeOwned>(&self) -> Result<D> {
        serde_json::from_slice(&self.data).map_err(Error::Decode)
    }
}
