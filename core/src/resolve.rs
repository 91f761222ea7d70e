//! Target URL resolution.
//!
//! # Design
//! The client base URL is parsed once at construction; every request URL is
//! a reference resolved against it with the usual RFC 3986 rules, so an
//! absolute request URL replaces the base entirely and a relative one is
//! joined onto the base path.

use url::Url;

use crate::error::{Error, Result};

/// Resolve `given` against `base` and return the absolute URL.
///
/// Without a base, `given` must already be absolute. It is returned in its
/// normalized serialization.
pub fn resolve(base: Option<&Url>, given: &str) -> Result<String> {
    let resolved = match base {
        None if given.is_empty() => return Err(Error::MissingUrl),
        None => Url::parse(given),
        Some(base) => base.join(given),
    };
    resolved.map(String::from).map_err(|source| Error::InvalidUrl {
        url: given.to_string(),
        source,
    })
}

/// Concatenate a merged query string (`"?a=1"` or `""`) onto `url`.
///
/// A URL that already carries a query gets the new pairs after an `&`, and
/// a fragment stays last.
pub fn append_query(url: &str, query: &str) -> String {
    let Some(pairs) = query.strip_prefix('?') else {
        return url.to_string();
    };
    if pairs.is_empty() {
        return url.to_string();
    }
    let (head, fragment) = match url.find('#') {
        Some(i) => url.split_at(i),
        None => (url, ""),
    };
    let sep = match head.find('?') {
        None => "?",
        Some(i) if i + 1 == head.len() || head.ends_with('&') => "",
        Some(_) => "&",
    };
    format!("{head}{sep}{pairs}{fragment}")
}
