//! Client-side bearer token decoding.
//!
//! The token is a compact `header.payload.signature` string. Only the payload
//! is decoded, without verifying the signature: the result is advisory and
//! drives UX (hide private routes once the token has expired), never access
//! control. The backend verifies every request.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use serde::{Deserialize, Serialize};

/// base64url, tolerant of present or missing padding.
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Why a token could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("token has no payload segment")]
    Malformed,
    #[error("token payload is not base64: {0}")]
    Encoding(String),
    #[error("token claims are not a JSON object: {0}")]
    Claims(String),
}

/// The subset of claims the client reads.
///
/// Only `exp` is typed. Issuers disagree on the shape of `sub` and `iat`
/// (numeric ids, string timestamps), so those are carried as raw JSON and
/// never make a token undecodable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Expiry, seconds since the Unix epoch.
    pub exp: Option<f64>,
    /// Issued-at, as sent by the issuer.
    #[serde(default)]
    pub iat: Option<serde_json::Value>,
    /// Subject, usually the user's email or id.
    #[serde(default)]
    pub sub: Option<serde_json::Value>,
}

impl TokenClaims {
    /// Whether `exp` lies strictly after `now_millis`. A token without an
    /// expiry claim never counts as live.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn is_live_at(&self, now_millis: i64) -> bool {
        self.exp.is_some_and(|exp| exp * 1000.0 > now_millis as f64)
    }
}

/// Decode the payload segment of `token`.
///
/// # Errors
///
/// Returns [`TokenError`] when the token has no payload segment, the payload
/// is not base64, or it does not hold a JSON claims object.
pub fn decode_claims(token: &str) -> Result<TokenClaims, TokenError> {
    let payload = token
        .split('.')
        .nth(1)
        .filter(|segment| !segment.is_empty())
        .ok_or(TokenError::Malformed)?;

    // Accept the standard alphabet too; some issuers emit it.
    let payload = payload.replace('+', "-").replace('/', "_");
    let bytes = PAYLOAD_ENGINE
        .decode(payload.as_bytes())
        .map_err(|e| TokenError::Encoding(e.to_string()))?;

    serde_json::from_slice(&bytes).map_err(|e| TokenError::Claims(e.to_string()))
}

/// Whether `token` decodes and has not expired at `now_millis`.
#[must_use]
pub fn is_live(token: &str, now_millis: i64) -> bool {
    decode_claims(token).is_ok_and(|claims| claims.is_live_at(now_millis))
}

/// Build an unsigned token around `claims`, for tests.
#[cfg(test)]
pub(crate) fn unsigned_token(claims: &serde_json::Value) -> String {
    let engine = base64::engine::general_purpose::URL_SAFE_NO_PAD;
    let header = engine.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = engine.encode(claims.to_string().as_bytes());
    format!("{header}.{payload}.signature")
}
