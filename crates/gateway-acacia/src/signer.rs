//! # Canonical Request Signer
//!
//! Deterministic parameter canonicalization and keyed-hash signing for the
//! Acacia unified-order gateway. The output format is a byte-exact contract
//! with the remote verifier:
//!
//! ```text
//! key1=value1&key2=value2&...&key=<secret>  →  MD5  →  uppercase hex
//! ```
//!
//! Keys are sorted by byte order, values are rendered raw (no URL encoding),
//! and empty/null values are omitted entirely rather than signed as empty.
//! The secret is appended as a plain `key=` suffix, not used as an HMAC key;
//! this matches the remote counterpart and must not be "upgraded".
//!
//! All functions here are pure and safe under unlimited concurrent use.

use serde_json::Value;
use std::collections::BTreeMap;

/// Flat key/value parameter set, byte-ordered by construction.
pub type ParamMap = BTreeMap<String, Value>;

/// Reserved key carrying the signature itself. Never participates in signing.
pub const SIGN_FIELD: &str = "sign";

/// Render a parameter value in its natural string form, or `None` when the
/// value must be omitted from canonicalization (null, empty string, or a
/// non-scalar that has no place in a flat parameter set).
fn render_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// Build the canonical `k=v&k=v` string over all eligible parameters.
///
/// Excludes the reserved `sign` key and any key whose value renders to
/// nothing. The `BTreeMap` guarantees byte-ordered keys, so the result is
/// invariant under the caller's insertion order.
pub fn canonicalize(params: &ParamMap) -> String {
    params
        .iter()
        .filter(|(key, _)| key.as_str() != SIGN_FIELD)
        .filter_map(|(key, value)| render_value(value).map(|v| format!("{}={}", key, v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Sign a parameter set: canonicalize, append `key=<secret>`, MD5, uppercase hex.
///
/// A parameter set with zero eligible keys still signs consistently over the
/// degenerate string `key=<secret>`.
pub fn sign(params: &ParamMap, secret: &str) -> String {
    let canonical = canonicalize(params);
    let signed_input = if canonical.is_empty() {
        format!("key={}", secret)
    } else {
        format!("{}&key={}", canonical, secret)
    };
    let digest = md5::compute(signed_input.as_bytes());
    format!("{:X}", digest)
}

/// Verify the `sign` field of a parameter set against a recomputed digest.
///
/// Returns `false` (never errors) when the signature field is missing or is
/// not a string. Comparison is exact byte equality of uppercase digests.
pub fn verify(params: &ParamMap, secret: &str) -> bool {
    let supplied = match params.get(SIGN_FIELD) {
        Some(Value::String(s)) => s,
        _ => return false,
    };
    // canonicalize() already skips the sign field, so recomputing over the
    // full map is recomputing over "everything but the signature".
    let expected = sign(params, secret);
    supplied == &expected
}
