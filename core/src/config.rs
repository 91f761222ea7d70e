//! Client configuration.
//!
//! `ClientConfig` is consumed once by `Client::new`. It deserializes from
//! JSON with the timeout given as whole seconds:
//!
//! ```json
//! {
//!   "base_url": "https://api.example.com/v1/",
//!   "headers": { "Authorization": "Bearer token" },
//!   "params": { "api_key": "k" },
//!   "timeout_seconds": 30
//! }
//! ```
//!
//! `timeout_seconds` of `-1` or `0`, or leaving it out, means no timeout.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::http::{Headers, Params};

/// Defaults applied to every request sent through a `Client`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    #[serde(default)]
    pub headers: Headers,

    #[serde(default)]
    pub params: Params,

    /// Overall deadline for one call, connect through body read.
    #[serde(default, rename = "timeout_seconds", with = "timeout_seconds")]
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Interpret an integer timeout: `-1` and `0` mean none. Other negative
    /// values also map to `None` here; deserialization rejects them.
    pub fn timeout_from_seconds(seconds: i64) -> Option<Duration> {
        u64::try_from(seconds)
            .ok()
            .filter(|&s| s > 0)
            .map(Duration::from_secs)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Parse `base_url` if one is set and non-empty.
    pub(crate) fn parsed_base_url(&self) -> Result<Option<url::Url>> {
        match self.base_url.as_deref() {
            None | Some("") => Ok(None),
            Some(raw) => url::Url::parse(raw).map(Some).map_err(|source| Error::InvalidUrl {
                url: raw.to_string(),
                source,
            }),
        }
    }
}

mod timeout_seconds {
    use std::time::Duration;

    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::ClientConfig;

    pub fn serialize<S: Serializer>(timeout: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error> {
        match timeout {
            Some(d) => serializer.serialize_u64(d.as_secs()),
            None => serializer.serialize_i64(-1),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Duration>, D::Error> {
        let seconds = Option::<i64>::deserialize(deserializer)?;
        match seconds {
            None => Ok(None),
            Some(s) if s < -1 => Err(D::Error::custom(format!(
                "timeout_seconds must be -1, 0 or positive, got {s}"
            ))),
            Some(s) => Ok(ClientConfig::timeout_from_seconds(s)),
        }
    }
}
