//! Echo server used to observe what the hermes client puts on the wire.
//!
//! - `/echo` answers any method with the request body, byte for byte.
//! - `/status/{code}` answers with that status code.
//! - `/slow/{ms}` waits before answering 200.
//! - Every other path answers with an `Inspection` of the request.

use std::time::Duration;

use axum::{
    body::Bytes,
    extract::{Path, Request},
    http::StatusCode,
    routing::any,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

/// What the server saw of a request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inspection {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    /// One entry per header value; a repeated name appears once per value.
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl Inspection {
    /// All values received for `name`, compared case-insensitively.
    pub fn header_values(&self, name: &str) -> Vec<&str> {
        self.headers
            .iter()
            .filter(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
            .collect()
    }
}

pub fn app() -> Router {
    Router::new()
        .route("/echo", any(echo))
        .route("/status/{code}", any(status))
        .route("/slow/{ms}", any(slow))
        .fallback(inspect)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn echo(body: Bytes) -> Bytes {
    body
}

async fn status(Path(code): Path<u16>) -> StatusCode {
    StatusCode::from_u16(code).unwrap_or(StatusCode::BAD_REQUEST)
}

async fn slow(Path(ms): Path<u64>) -> StatusCode {
    tokio::time::sleep(Duration::from_millis(ms)).await;
    StatusCode::OK
}

async fn inspect(request: Request) -> Result<Json<Inspection>, StatusCode> {
    let (parts, body) = request.into_parts();
    let body = axum::body::to_bytes(body, usize::MAX)
        .await
        .map_err(|_| StatusCode::BAD_REQUEST)?;
    let headers = parts
        .headers
        .iter()
        .map(|(k, v)| (k.as_str().to_string(), String::from_utf8_lossy(v.as_bytes()).into_owned()))
        .collect();
    Ok(Json(Inspection {
        method: parts.method.as_str().to_string(),
        path: parts.uri.path().to_string(),
        query: parts.uri.query().map(str::to_string),
        headers,
        body: String::from_utf8_lossy(&body).into_owned(),
    }))
}
