use base64::Engine as _;
use serde_json::json;

use super::*;

const NOW_MS: i64 = 1_700_000_000_000;
const NOW_S: i64 = NOW_MS / 1000;

// =============================================================
// decode_claims
// =============================================================

#[test]
fn decode_claims_reads_exp_and_sub() {
    let token = unsigned_token(&json!({ "exp": NOW_S + 60, "sub": "ana@example.com" }));
    let claims = decode_claims(&token).unwrap();
    assert_eq!(claims.exp, Some((NOW_S + 60) as f64));
    assert_eq!(claims.sub, Some(json!("ana@example.com")));
    assert_eq!(claims.iat, None);
}

#[test]
fn numeric_subject_does_not_block_live_token() {
    let token = unsigned_token(&json!({ "sub": 42, "exp": NOW_S + 3600 }));
    let claims = decode_claims(&token).unwrap();
    assert_eq!(claims.sub, Some(json!(42)));
    assert!(is_live(&token, NOW_MS));
}

#[test]
fn string_issued_at_does_not_block_live_token() {
    let token = unsigned_token(&json!({ "iat": "x", "exp": NOW_S + 3600 }));
    assert!(is_live(&token, NOW_MS));
}

#[test]
fn decode_claims_ignores_unknown_claims() {
    let token = unsigned_token(&json!({ "exp": 1, "role": "admin", "nested": { "a": 1 } }));
    assert!(decode_claims(&token).is_ok());
}

#[test]
fn decode_claims_accepts_padded_payload() {
    let engine = base64::engine::general_purpose::URL_SAFE;
    let payload = engine.encode(br#"{"exp":10}"#);
    assert!(payload.ends_with('='));
    let claims = decode_claims(&format!("h.{payload}.s")).unwrap();
    assert_eq!(claims.exp, Some(10.0));
}

#[test]
fn decode_claims_accepts_standard_alphabet() {
    // `?>` encodes to a payload containing `/` or `+` in the standard alphabet.
    let raw = br#"{"exp":1,"sub":"??>>"}"#;
    let payload = base64::engine::general_purpose::STANDARD_NO_PAD.encode(raw);
    assert!(payload.contains('/') || payload.contains('+'));
    assert!(decode_claims(&format!("h.{payload}.s")).is_ok());
}

#[test]
fn decode_claims_rejects_single_segment() {
    assert_eq!(decode_claims("not-a-token"), Err(TokenError::Malformed));
}

#[test]
fn decode_claims_rejects_empty_payload() {
    assert_eq!(decode_claims("header..sig"), Err(TokenError::Malformed));
}

#[test]
fn decode_claims_rejects_non_base64_payload() {
    assert!(matches!(decode_claims("h.!!!.s"), Err(TokenError::Encoding(_))));
}

#[test]
fn decode_claims_rejects_non_json_payload() {
    let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(b"hello");
    assert!(matches!(decode_claims(&format!("h.{payload}.s")), Err(TokenError::Claims(_))));
}

#[test]
fn decode_claims_rejects_non_object_payload() {
    let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(b"42");
    assert!(matches!(decode_claims(&format!("h.{payload}.s")), Err(TokenError::Claims(_))));
}

// =============================================================
// Expiry
// =============================================================

#[test]
fn token_expired_one_second_ago_is_not_live() {
    let token = unsigned_token(&json!({ "exp": NOW_S - 1 }));
    assert!(!is_live(&token, NOW_MS));
}

#[test]
fn token_expiring_in_an_hour_is_live() {
    let token = unsigned_token(&json!({ "exp": NOW_S + 3600 }));
    assert!(is_live(&token, NOW_MS));
}

#[test]
fn token_expiring_exactly_now_is_not_live() {
    let token = unsigned_token(&json!({ "exp": NOW_S }));
    assert!(!is_live(&token, NOW_MS));
}

#[test]
fn fractional_expiry_compares_in_milliseconds() {
    let claims = TokenClaims { exp: Some(NOW_S as f64 + 0.5), iat: None, sub: None };
    assert!(claims.is_live_at(NOW_MS + 499));
    assert!(!claims.is_live_at(NOW_MS + 500));
}

#[test]
fn token_without_exp_is_not_live() {
    let token = unsigned_token(&json!({ "sub": "x" }));
    assert!(!is_live(&token, NOW_MS));
}

#[test]
fn undecodable_token_is_not_live() {
    assert!(!is_live("garbage", NOW_MS));
    assert!(!is_live("a.b.c", NOW_MS));
}
