//! Check URL resolution and parameter merging against JSON test vectors in
//! `test-vectors/`.
//!
//! Each vector names its case so a failing assertion points straight at the
//! offending entry.

use hermes_core::{merge_params, resolve, Error, Params};
use url::Url;

fn base_of(case: &serde_json::Value) -> Option<Url> {
    case["base"].as_str().map(|b| Url::parse(b).unwrap())
}

fn params_of(value: &serde_json::Value) -> Params {
    serde_json::from_value(value.clone()).unwrap()
}

// ---------------------------------------------------------------------------
// Resolve
// ---------------------------------------------------------------------------

#[test]
fn resolve_test_vectors() {
    let raw = include_str!("../../test-vectors/resolve.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let base = base_of(case);
        let given = case["given"].as_str().unwrap();

        let resolved = resolve(base.as_ref(), given).unwrap_or_else(|e| panic!("{name}: {e}"));
        assert_eq!(resolved, case["expected"].as_str().unwrap(), "{name}");
    }
}

#[test]
fn resolve_error_vectors() {
    let raw = include_str!("../../test-vectors/resolve.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["errors"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let base = base_of(case);
        let given = case["given"].as_str().unwrap();

        let err = resolve(base.as_ref(), given).unwrap_err();
        match case["kind"].as_str().unwrap() {
            "MissingUrl" => assert!(matches!(err, Error::MissingUrl), "{name}: {err:?}"),
            "InvalidUrl" => assert!(matches!(err, Error::InvalidUrl { .. }), "{name}: {err:?}"),
            other => panic!("unknown error kind: {other}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Params
// ---------------------------------------------------------------------------

#[test]
fn params_test_vectors() {
    let raw = include_str!("../../test-vectors/params.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let base = params_of(&case["base"]);
        let given = params_of(&case["given"]);

        assert_eq!(
            merge_params(&base, &given),
            case["expected"].as_str().unwrap(),
            "{name}"
        );
    }
}
