//! Request signing for privileged provider operations.
//!
//! The provider authorizes uploads and deletions with a SHA-1 digest over
//! the request parameters and the account's secret key, so the secret
//! never leaves the server. SHA-1 is mandated by the provider's scheme;
//! it is an interop requirement, not a security boundary of this crate.

use std::collections::BTreeMap;
use std::time::{SystemTime, UNIX_EPOCH};

use sha1::{Digest, Sha1};

/// Compute the provider signature over a parameter set.
///
/// Parameters are serialized as `key=value` pairs joined by `&`, with keys
/// in lexicographic (byte) order, followed by the raw secret with no
/// separator. The result is the lowercase hex SHA-1 digest.
///
/// Deterministic: identical parameter sets always yield identical
/// signatures. The returned digest must never be logged together with the
/// parameters it covers.
pub fn sign(params: &BTreeMap<&str, String>, api_secret: &str) -> String {
    let mut to_sign = params
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("&");
    to_sign.push_str(api_secret);

    let digest = Sha1::digest(to_sign.as_bytes());
    hex::encode(digest)
}

/// Current Unix timestamp in seconds, generated at call time.
///
/// Staleness is the provider's to reject; no local expiry check is done.
pub fn unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
