//! Merging client defaults with per-request headers and query parameters.
//!
//! # Design
//! Query parameters are additive: a name present in both the defaults and
//! the request is sent twice, default first. Headers are asymmetric: each
//! default is *set* on the outgoing request and each per-request header is
//! then *added*, so a per-request header extends a default of the same name
//! instead of replacing it.

use std::collections::BTreeMap;

use ureq::http::header::{HeaderMap, HeaderName, HeaderValue};
use url::form_urlencoded;

use crate::error::{Error, Result};
use crate::http::{Headers, Params};

/// Encode `base` then `given` into a query string.
///
/// Returns `"?"` followed by the form-encoded pairs, or `""` when both
/// mappings are empty. Names are emitted in ascending order; the values of a
/// name keep base-then-given order.
pub fn merge_params(base: &Params, given: &Params) -> String {
    let mut merged: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for (name, value) in base.iter().chain(given.iter()) {
        merged.entry(name.as_str()).or_default().push(value.as_str());
    }
    if merged.is_empty() {
        return String::new();
    }

    let mut query = form_urlencoded::Serializer::new(String::new());
    for (name, values) in &merged {
        for value in values {
            query.append_pair(name, value);
        }
    }
    format!("?{}", query.finish())
}

/// Set every default header, then add every per-request header.
pub fn apply_headers(headers: &mut HeaderMap, base: &Headers, given: &Headers) -> Result<()> {
    for (name, value) in base {
        let (name, value) = header_pair(name, value)?;
        headers.insert(name, value);
    }
    for (name, value) in given {
        let (name, value) = header_pair(name, value)?;
        headers.append(name, value);
    }
    Ok(())
}

fn header_pair(name: &str, value: &str) -> Result<(HeaderName, HeaderValue)> {
    let invalid = |reason: String| Error::InvalidHeader {
        name: name.to_string(),
        reason,
    };
    let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| invalid(e.to_string()))?;
    let header_value = HeaderValue::from_str(value).map_err(|e| invalid(e.to_string()))?;
    Ok((header_name, header_value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> Params {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    fn values<'a>(headers: &'a HeaderMap, name: &str) -> Vec<&'a str> {
        headers.get_all(name).iter().map(|v| v.to_str().unwrap()).collect()
    }

    #[test]
    fn same_param_in_both_is_sent_twice() {
        assert_eq!(merge_params(&map(&[("a", "1")]), &map(&[("a", "2")])), "?a=1&a=2");
    }

    #[test]
    fn empty_params_give_empty_string() {
        assert_eq!(merge_params(&Params::new(), &Params::new()), "");
    }

    #[test]
    fn params_are_sorted_by_name() {
        let base = map(&[("zeta", "1"), ("alpha", "2")]);
        let given = map(&[("mid", "3")]);
        assert_eq!(merge_params(&base, &given), "?alpha=2&mid=3&zeta=1");
    }

    #[test]
    fn only_given_params() {
        assert_eq!(merge_params(&Params::new(), &map(&[("q", "x")])), "?q=x");
    }

    #[test]
    fn params_are_form_encoded() {
        let given = map(&[("q", "a b&c=d"), ("é", "/")]);
        assert_eq!(merge_params(&Params::new(), &given), "?q=a+b%26c%3Dd&%C3%A9=%2F");
    }

    #[test]
    fn empty_param_value_keeps_name() {
        assert_eq!(merge_params(&map(&[("flag", "")]), &Params::new()), "?flag=");
    }

    #[test]
    fn request_header_is_added_next_to_default() {
        let mut headers = HeaderMap::new();
        apply_headers(
            &mut headers,
            &map(&[("X-Default", "1")]),
            &map(&[("X-Default", "2")]),
        )
        .unwrap();
        assert_eq!(values(&headers, "x-default"), vec!["1", "2"]);
    }

    #[test]
    fn header_names_merge_case_insensitively() {
        let mut headers = HeaderMap::new();
        apply_headers(
            &mut headers,
            &map(&[("Accept", "text/plain")]),
            &map(&[("accept", "application/json")]),
        )
        .unwrap();
        assert_eq!(values(&headers, "ACCEPT"), vec!["text/plain", "application/json"]);
    }

    #[test]
    fn default_header_replaces_existing_value() {
        let mut headers = HeaderMap::new();
        headers.append("x-env", HeaderValue::from_static("old"));
        headers.append("x-env", HeaderValue::from_static("older"));
        apply_headers(&mut headers, &map(&[("X-Env", "prod")]), &Headers::new()).unwrap();
        assert_eq!(values(&headers, "x-env"), vec!["prod"]);
    }

    #[test]
    fn distinct_headers_are_all_present() {
        let mut headers = HeaderMap::new();
        apply_headers(
            &mut headers,
            &map(&[("Authorization", "Bearer t")]),
            &map(&[("X-Request", "abc")]),
        )
        .unwrap();
        assert_eq!(headers.len(), 2);
        assert_eq!(values(&headers, "authorization"), vec!["Bearer t"]);
        assert_eq!(values(&headers, "x-request"), vec!["abc"]);
    }

    #[test]
    fn invalid_header_name_is_rejected() {
        let mut headers = HeaderMap::new();
        let err = apply_headers(&mut headers, &map(&[("bad name", "v")]), &Headers::new()).unwrap_err();
        assert!(matches!(err, Error::InvalidHeader { ref name, .. } if name == "bad name"));
    }

    #[test]
    fn invalid_header_value_is_rejected() {
        let mut headers = HeaderMap::new();
        let err = apply_headers(&mut headers, &Headers::new(), &map(&[("X-Bad", "a\r\nb")])).unwrap_err();
        assert!(matches!(err, Error::InvalidHeader { .. }));
    }
}
