//! Time-bound request signatures.
//!
//! Every authenticated API request carries a `bereal-signature` header
//! binding the device identifier to the wall-clock second it was issued:
//!
//! ```text
//! base64("1:" + ts + ":" + HMAC-SHA256(key, base64(utf8(device_id + tz + ts))))
//! ```
//!
//! The server rejects tokens outside its validity window, so signatures
//! are computed fresh per request and never cached.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::Utc;
use hmac::{Hmac, Mac};
use http::header::{HeaderName, HeaderValue};
use log::trace;
use sha2::Sha256;
use thiserror::Error;

use crate::constants::{HMAC_KEY, TIMEZONE};

type HmacSha256 = Hmac<Sha256>;

/// Header name the signature travels under on signed requests.
pub const SIGNATURE_HEADER: &str = "bereal-signature";

/// Errors surfaced by the signing layer.
#[derive(Debug, Error)]
pub enum SignatureError {
    #[error("device identifier must not be empty")]
    EmptyDeviceId,
    #[error("token is not valid base64: {0}")]
    TokenEncoding(#[from] base64::DecodeError),
    #[error("token prefix is malformed")]
    MalformedToken,
    #[error("header conversion failed: {0}")]
    InvalidHeader(String),
}

/// Sign `device_id` at the current wall-clock second.
pub fn sign(device_id: &str) -> Result<String, SignatureError> {
    sign_at(device_id, Utc::now().timestamp())
}

/// Sign `device_id` at an explicit whole-second Unix timestamp.
///
/// Deterministic: identical `(device_id, timestamp)` pairs always produce
/// byte-identical tokens. No bounds are enforced on `timestamp`; validity
/// windows are the server's concern.
pub fn sign_at(device_id: &str, timestamp: i64) -> Result<String, SignatureError> {
    if device_id.is_empty() {
        return Err(SignatureError::EmptyDeviceId);
    }

    // The keyed hash covers the base64 text of the message, not the raw
    // message bytes.
    let message = format!("{device_id}{TIMEZONE}{timestamp}");
    let mut mac =
        HmacSha256::new_from_slice(HMAC_KEY).expect("HMAC accepts keys of any length");
    mac.update(BASE64.encode(message.as_bytes()).as_bytes());

    let mut token = format!("1:{timestamp}:").into_bytes();
    token.extend_from_slice(&mac.finalize().into_bytes());

    trace!("signed request at timestamp {timestamp}");
    Ok(BASE64.encode(token))
}

/// Ready-to-attach header pair for a request signed at the current second.
pub fn sign_header(device_id: &str) -> Result<(HeaderName, HeaderValue), SignatureError> {
    let token = sign(device_id)?;
    let value = HeaderValue::from_str(&token)
        .map_err(|err| SignatureError::InvalidHeader(err.to_string()))?;
    Ok((HeaderName::from_static(SIGNATURE_HEADER), value))
}

/// Recover the timestamp a token was issued at from its `1:{ts}:` prefix.
pub fn extract_timestamp(token: &str) -> Result<i64, SignatureError> {
    let raw = BASE64.decode(token)?;
    let rest = raw
        .strip_prefix(b"1:")
        .ok_or(SignatureError::MalformedToken)?;
    let colon = rest
        .iter()
        .position(|&byte| byte == b':')
        .ok_or(SignatureError::MalformedToken)?;

    std::str::from_utf8(&rest[..colon])
        .ok()
        .and_then(|digits| digits.parse().ok())
        .ok_or(SignatureError::MalformedToken)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEVICE_ID: &str = "abc123";

    #[test]
    fn signing_is_deterministic() {
        assert_eq!(
            sign_at(DEVICE_ID, 1700000000).unwrap(),
            sign_at(DEVICE_ID, 1700000000).unwrap(),
        );
    }

    #[test]
    fn timestamps_change_the_token() {
        assert_ne!(
            sign_at(DEVICE_ID, 1700000000).unwrap(),
            sign_at(DEVICE_ID, 1700000001).unwrap(),
        );
    }

    // Locks the wire format; recomputed from the recovered client.
    #[test]
    fn matches_the_reference_token() {
        assert_eq!(
            sign_at(DEVICE_ID, 1700000000).unwrap(),
            "MToxNzAwMDAwMDAwOpIpUVscWl5/mszRvrpiG99dJDMOvz5mHL3yIpxx5fvP",
        );
    }

    #[test]
    fn empty_device_id_is_rejected() {
        assert!(matches!(
            sign_at("", 1700000000),
            Err(SignatureError::EmptyDeviceId)
        ));
    }

    #[test]
    fn prefix_recovers_the_exact_timestamp() {
        let token = sign_at(DEVICE_ID, 1700000000).unwrap();
        assert_eq!(extract_timestamp(&token).unwrap(), 1700000000);

        let negative = sign_at(DEVICE_ID, -5).unwrap();
        assert_eq!(extract_timestamp(&negative).unwrap(), -5);
    }

    #[test]
    fn malformed_tokens_are_rejected() {
        assert!(matches!(
            extract_timestamp("not base64!"),
            Err(SignatureError::TokenEncoding(_))
        ));

        let unversioned = BASE64.encode("2:1700000000:junk");
        assert!(matches!(
            extract_timestamp(&unversioned),
            Err(SignatureError::MalformedToken)
        ));

        let truncated = BASE64.encode("1:1700000000");
        assert!(matches!(
            extract_timestamp(&truncated),
            Err(SignatureError::MalformedToken)
        ));
    }

    #[test]
    fn header_pair_is_attachable() {
        let (name, value) = sign_header(DEVICE_ID).unwrap();
        assert_eq!(name.as_str(), SIGNATURE_HEADER);
        assert!(!value.to_str().unwrap().is_empty());
    }
}
